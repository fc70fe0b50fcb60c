/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Well known unit-of-measure tokens.
//!
//! The builder does not validate unit strings against this list, any token is
//! accepted. These constants only fix the spelling of the common ones.

/// Sentinel meaning "no unit".
pub const NONE: &str = "none";

pub const BITS: &str = "bits";
pub const KILOBITS: &str = "kilobits";
pub const MEGABITS: &str = "megabits";
pub const GIGABITS: &str = "gigabits";
pub const KIBIBITS: &str = "kibibits";
pub const MEBIBITS: &str = "mebibits";
pub const GIBIBITS: &str = "gibibits";

pub const BYTES: &str = "bytes";
pub const KILOBYTES: &str = "kilobytes";
pub const MEGABYTES: &str = "megabytes";
pub const GIGABYTES: &str = "gigabytes";

pub const NANOSECONDS: &str = "nanoseconds";
pub const MICROSECONDS: &str = "microseconds";
pub const MILLISECONDS: &str = "milliseconds";
pub const SECONDS: &str = "seconds";
pub const MINUTES: &str = "minutes";
pub const HOURS: &str = "hours";
pub const DAYS: &str = "days";

pub const PERCENT: &str = "percent";
pub const PER_SECOND: &str = "per_second";
