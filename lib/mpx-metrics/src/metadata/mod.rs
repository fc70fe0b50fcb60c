/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use thiserror::Error;

use crate::{MetricTagMap, MetricType, units};

mod builder;
pub use builder::{GLOBAL_TAGS_VAR, MetadataBuilder};

#[derive(Debug, Error)]
pub enum MetadataBuildError {
    #[error("no name has been set")]
    NoName,
}

/// Immutable descriptor of a metric, keyed by its name in a registry.
///
/// Values are created through [`MetadataBuilder`] and never change after
/// build, so they can be read concurrently without restriction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    name: String,
    display_name: Option<String>,
    description: Option<String>,
    r#type: MetricType,
    unit: String,
    reusable: bool,
    tags: MetricTagMap,
}

impl Metadata {
    /// Create a new builder, seeded with any global tags found in the
    /// process environment.
    pub fn builder() -> MetadataBuilder {
        MetadataBuilder::new()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human readable label, falling back to the name when none was set.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn metric_type(&self) -> MetricType {
        self.r#type
    }

    #[inline]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Whether multiple registrations under the same name are permitted.
    #[inline]
    pub fn is_reusable(&self) -> bool {
        self.reusable
    }

    #[inline]
    pub fn tags(&self) -> &MetricTagMap {
        &self.tags
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.r#type)?;
        if self.unit != units::NONE {
            write!(f, " unit={}", self.unit)?;
        }
        if !self.tags.is_empty() {
            write!(f, " tags={}", self.tags)?;
        }
        Ok(())
    }
}
