/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod types;
pub use types::MetricType;

pub mod units;

mod tag;
pub use tag::MetricTagMap;

mod metadata;
pub use metadata::{GLOBAL_TAGS_VAR, Metadata, MetadataBuildError, MetadataBuilder};
