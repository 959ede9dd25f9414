//! Opaque launch-options bundle handed to the shell by the host.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// String-keyed bundle of host-supplied launch data.
///
/// The coordinator never inspects the contents; it only passes the bundle
/// through to the launch continuation. Hosts that forward launch data across
/// a process boundary rely on the serde impls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaunchOptions(Map<String, Value>);

impl LaunchOptions {
    /// Empty bundle, the common case on a plain start.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_bundle_is_empty() {
        let options = LaunchOptions::new();
        assert!(options.is_empty());
        assert_eq!(options.len(), 0);
    }

    #[test]
    fn insert_and_get() {
        let mut options = LaunchOptions::new();
        options.insert("url", json!("beacon://inbox"));

        assert!(!options.is_empty());
        assert_eq!(options.get("url"), Some(&json!("beacon://inbox")));
        assert_eq!(options.get("missing"), None);
    }

    #[test]
    fn serializes_transparently() {
        let mut options = LaunchOptions::new();
        options.insert("source", json!("cold-start"));

        let encoded = serde_json::to_value(&options).unwrap();
        assert_eq!(encoded, json!({ "source": "cold-start" }));
    }
}
