/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use memchr::memchr;
use smol_str::SmolStr;

/// Tag name/value map attached to metric metadata.
///
/// Keys are unique, inserting an existing key replaces the earlier value.
/// Iteration follows key order, insertion order is not kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetricTagMap {
    inner: BTreeMap<SmolStr, SmolStr>,
}

impl MetricTagMap {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn insert(&mut self, name: &str, value: &str) -> Option<SmolStr> {
        self.inner.insert(name.into(), value.into())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(|v| v.as_str())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn drop(&mut self, name: &str) {
        self.inner.remove(name);
    }

    #[inline]
    pub fn extend(&mut self, other: Self) {
        self.inner.extend(other.inner)
    }

    /// Parse one `key=value` entry.
    ///
    /// Input that is empty or has no `=` is dropped without error. The key is
    /// everything before the first `=`, the value everything after it, so
    /// values may themselves contain `=`. Both are stored verbatim.
    pub fn parse_tag(&mut self, kv: &str) {
        if kv.is_empty() {
            return;
        }
        let Some(p) = memchr(b'=', kv.as_bytes()) else {
            return;
        };
        self.inner.insert(kv[..p].into(), kv[p + 1..].into());
    }

    /// Parse comma separated `key=value` entries, e.g. `k1=v1, k2=v2`.
    ///
    /// Each segment is trimmed of surrounding whitespace before parsing.
    /// Segments apply left to right, a later duplicate key overwrites the
    /// earlier value.
    pub fn parse_tags(&mut self, s: &str) {
        for part in s.split(',') {
            self.parse_tag(part.trim());
        }
    }
}

impl fmt::Display for MetricTagMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.inner.iter();
        let Some((name, value)) = iter.next() else {
            return Ok(());
        };
        f.write_str(name)?;
        f.write_char('=')?;
        f.write_str(value)?;

        for (name, value) in iter {
            f.write_char(',')?;
            f.write_str(name)?;
            f.write_char('=')?;
            f.write_str(value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single() {
        let mut map = MetricTagMap::default();
        map.parse_tag("app=edge");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("app"), Some("edge"));
    }

    #[test]
    fn parse_split_at_first_assign() {
        let mut map = MetricTagMap::default();
        map.parse_tag("a=b=c");
        assert_eq!(map.get("a"), Some("b=c"));
    }

    #[test]
    fn parse_empty_value() {
        let mut map = MetricTagMap::default();
        map.parse_tag("k=");
        assert_eq!(map.get("k"), Some(""));
    }

    #[test]
    fn parse_invalid_dropped() {
        let mut map = MetricTagMap::default();
        map.parse_tag("");
        map.parse_tag("noequalsign");
        assert!(map.is_empty());
    }

    #[test]
    fn parse_verbatim() {
        // parse_tag does not trim, only parse_tags does per segment
        let mut map = MetricTagMap::default();
        map.parse_tag(" k =v");
        assert_eq!(map.get(" k "), Some("v"));
        assert_eq!(map.get("k"), None);
    }

    #[test]
    fn parse_multi() {
        let mut map = MetricTagMap::default();
        map.parse_tags("k1=v1, k2=v2");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("k1"), Some("v1"));
        assert_eq!(map.get("k2"), Some("v2"));
    }

    #[test]
    fn parse_duplicate_last_wins() {
        let mut map = MetricTagMap::default();
        map.parse_tags("k=1,k=2");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k"), Some("2"));
    }

    #[test]
    fn parse_skips_empty_segments() {
        let mut map = MetricTagMap::default();
        map.parse_tags("a=1,,junk,b=2,");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some("1"));
        assert_eq!(map.get("b"), Some("2"));
    }

    #[test]
    fn parse_empty_input() {
        let mut map = MetricTagMap::default();
        map.parse_tags("");
        assert!(map.is_empty());
    }

    #[test]
    fn insert_and_drop() {
        let mut map = MetricTagMap::default();
        assert!(map.insert("a", "1").is_none());
        let old = map.insert("a", "2");
        assert_eq!(old.as_deref(), Some("1"));
        assert!(map.contains("a"));
        map.drop("a");
        assert!(map.is_empty());
    }

    #[test]
    fn fmt() {
        let mut map = MetricTagMap::default();
        map.parse_tags("zone=b1,app=edge");
        assert_eq!(map.to_string(), "app=edge,zone=b1");

        assert_eq!(MetricTagMap::default().to_string(), "");
    }
}
