/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::ops::{Deref, DerefMut};

use mpx_metrics::{Metadata, MetadataBuildError, MetricType, units};

/// Zero argument numeric read point a conforming discovery harness must
/// locate and register as a gauge.
pub trait GaugeMethod {
    fn gauge(&self) -> i64;
}

/// Plain data holder whose accessor is the gauge read point.
#[derive(Default)]
pub struct ParentGaugeMethodFixture {
    gauge: i64,
}

impl ParentGaugeMethodFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Harness only mutation of the stored value.
    pub fn set_gauge(&mut self, gauge: i64) {
        self.gauge = gauge;
    }
}

impl GaugeMethod for ParentGaugeMethodFixture {
    fn gauge(&self) -> i64 {
        self.gauge
    }
}

/// Derived fixture. The gauge read point lives on the parent type and must
/// still be discovered when reached through this one.
#[derive(Default)]
pub struct InheritedGaugeMethodFixture {
    parent: ParentGaugeMethodFixture,
}

impl InheritedGaugeMethodFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata a conforming implementation registers for the read point.
    pub fn metadata() -> Result<Metadata, MetadataBuildError> {
        Metadata::builder()
            .with_name("inherited_parent_gauge_method")
            .with_type(MetricType::Gauge)
            .with_unit(units::NONE)
            .build()
    }
}

impl Deref for InheritedGaugeMethodFixture {
    type Target = ParentGaugeMethodFixture;

    fn deref(&self) -> &Self::Target {
        &self.parent
    }
}

impl DerefMut for InheritedGaugeMethodFixture {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.parent
    }
}
