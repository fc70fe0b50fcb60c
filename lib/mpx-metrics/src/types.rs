/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

/// Kind of a metric as seen by a registry.
///
/// `Invalid` is the unset sentinel, it is the initial value in a fresh
/// [`MetadataBuilder`](crate::MetadataBuilder) and is accepted at build time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MetricType {
    Counter,
    ConcurrentGauge,
    Gauge,
    Metered,
    Histogram,
    Timer,
    #[default]
    Invalid,
}

impl MetricType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Counter => "counter",
            MetricType::ConcurrentGauge => "concurrent gauge",
            MetricType::Gauge => "gauge",
            MetricType::Metered => "meter",
            MetricType::Histogram => "histogram",
            MetricType::Timer => "timer",
            MetricType::Invalid => "invalid",
        }
    }
}

impl FromStr for MetricType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "counter" => Ok(MetricType::Counter),
            "concurrent gauge" | "concurrent_gauge" => Ok(MetricType::ConcurrentGauge),
            "gauge" => Ok(MetricType::Gauge),
            "meter" | "metered" => Ok(MetricType::Metered),
            "histogram" => Ok(MetricType::Histogram),
            "timer" => Ok(MetricType::Timer),
            "invalid" => Ok(MetricType::Invalid),
            _ => Err(()),
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_from_str() {
        assert_eq!(MetricType::from_str("counter"), Ok(MetricType::Counter));
        assert_eq!(MetricType::from_str("Gauge"), Ok(MetricType::Gauge));
        assert_eq!(MetricType::from_str("metered"), Ok(MetricType::Metered));
        assert_eq!(
            MetricType::from_str("concurrent_gauge"),
            Ok(MetricType::ConcurrentGauge)
        );

        assert!(MetricType::from_str("ratio").is_err());
    }

    #[test]
    fn t_as_str() {
        for t in [
            MetricType::Counter,
            MetricType::ConcurrentGauge,
            MetricType::Gauge,
            MetricType::Metered,
            MetricType::Histogram,
            MetricType::Timer,
            MetricType::Invalid,
        ] {
            assert_eq!(MetricType::from_str(t.as_str()), Ok(t));
        }
    }

    #[test]
    fn t_default() {
        assert_eq!(MetricType::default(), MetricType::Invalid);
    }
}
