/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::env;

use log::warn;

use crate::{MetricTagMap, MetricType, units};

use super::{Metadata, MetadataBuildError};

/// Process wide environment variable holding operator supplied baseline tags,
/// in the same format as accepted by [`MetadataBuilder::add_tags`].
pub const GLOBAL_TAGS_VAR: &str = "MP_METRICS_TAGS";

/// Fluent builder for [`Metadata`].
///
/// A fresh builder starts with type [`MetricType::Invalid`], unit
/// [`units::NONE`], reusable off, and the tags found in [`GLOBAL_TAGS_VAR`].
/// Only the name is required at build time. Setters consume and return the
/// builder, clone it first if more than one build is needed.
#[derive(Clone)]
pub struct MetadataBuilder {
    name: Option<String>,
    display_name: Option<String>,
    description: Option<String>,
    r#type: MetricType,
    unit: String,
    reusable: bool,
    tags: MetricTagMap,
}

impl Default for MetadataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataBuilder {
    pub fn new() -> Self {
        Self::with_global_tags(env::var(GLOBAL_TAGS_VAR).ok().as_deref())
    }

    /// Seeding entry behind [`MetadataBuilder::new`]. Tests seed through
    /// here without touching the process environment.
    pub(crate) fn with_global_tags(global_tags: Option<&str>) -> Self {
        let mut tags = MetricTagMap::default();
        if let Some(s) = global_tags {
            tags.parse_tags(s);
            if tags.is_empty() && !s.is_empty() {
                warn!("no valid tags found in environment variable {GLOBAL_TAGS_VAR}");
            }
        }
        MetadataBuilder {
            name: None,
            display_name: None,
            description: None,
            r#type: MetricType::Invalid,
            unit: units::NONE.to_string(),
            reusable: false,
            tags,
        }
    }

    /// Seed a builder from an existing metadata value for copy and modify
    /// use. The tag map is a full copy, and the environment is not read
    /// again.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        MetadataBuilder {
            name: Some(metadata.name.clone()),
            display_name: metadata.display_name.clone(),
            description: metadata.description.clone(),
            r#type: metadata.r#type,
            unit: metadata.unit.clone(),
            reusable: metadata.reusable,
            tags: metadata.tags.clone(),
        }
    }

    pub fn with_name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_display_name<T: Into<String>>(mut self, display_name: T) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_description<T: Into<String>>(mut self, description: T) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_type(mut self, r#type: MetricType) -> Self {
        self.r#type = r#type;
        self
    }

    /// Set the unit token. Not checked against [`units`], any string is
    /// accepted.
    pub fn with_unit<T: Into<String>>(mut self, unit: T) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn reusable(mut self) -> Self {
        self.reusable = true;
        self
    }

    pub fn not_reusable(mut self) -> Self {
        self.reusable = false;
        self
    }

    /// Add one `key=value` tag. Input without a `=` is dropped without
    /// error, see [`MetricTagMap::parse_tag`].
    pub fn add_tag(mut self, kv_string: &str) -> Self {
        self.tags.parse_tag(kv_string);
        self
    }

    /// Add comma separated tags in the form `k1=v1, k2=v2`, see
    /// [`MetricTagMap::parse_tags`].
    pub fn add_tags(mut self, tags_string: &str) -> Self {
        self.tags.parse_tags(tags_string);
        self
    }

    /// Finalize into an immutable [`Metadata`].
    ///
    /// Only the name is checked. An empty name string, `Invalid` type and
    /// `none` unit all build successfully.
    pub fn build(self) -> Result<Metadata, MetadataBuildError> {
        let Some(name) = self.name else {
            return Err(MetadataBuildError::NoName);
        };
        Ok(Metadata {
            name,
            display_name: self.display_name,
            description: self.description,
            r#type: self.r#type,
            unit: self.unit,
            reusable: self.reusable,
            tags: self.tags,
        })
    }
}
