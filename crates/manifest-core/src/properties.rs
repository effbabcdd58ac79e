//! Declared analysis properties
//!
//! Properties are multi-valued: a raw value such as `"a.json, b.json"` is
//! stored as `["a.json", "b.json"]`. Items are trimmed and empty items are
//! dropped, so `"a.json,,"` has one value.

use crate::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Read-only key → values lookup passed to strategies through the context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, RawValue>")]
pub struct Properties {
    values: BTreeMap<String, Vec<String>>,
}

/// A TOML property value: `key = "a, b"` or `key = ["a", "b"]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    One(String),
    Many(Vec<String>),
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` from a comma-separated raw value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, raw: &str) -> &mut Self {
        self.values.insert(key.into(), split_values(raw));
        self
    }

    /// Set `key` to an explicit list; items are trimmed but not split.
    pub fn set_values<I, S>(&mut self, key: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();
        self.values.insert(key.into(), values);
        self
    }

    /// Apply a `KEY=VALUE` override.
    pub fn apply_override(&mut self, input: &str) -> Result<()> {
        let (key, raw) = input
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| Error::InvalidProperty {
                input: input.to_string(),
            })?;
        self.set(key.trim(), raw);
        Ok(())
    }

    /// Overlay `other` on top of `self`; keys present in `other` win.
    pub fn merge(&mut self, other: &Properties) {
        for (key, values) in &other.values {
            self.values.insert(key.clone(), values.clone());
        }
    }

    /// Whether `key` was declared at all, even with an empty value.
    pub fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The values of `key`, or `None` when it was never declared.
    pub fn get_string_array(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<BTreeMap<String, RawValue>> for Properties {
    fn from(raw: BTreeMap<String, RawValue>) -> Self {
        let mut properties = Properties::new();
        for (key, value) in raw {
            match value {
                RawValue::One(s) => properties.set(key, &s),
                RawValue::Many(items) => properties.set_values(key, items),
            };
        }
        properties
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for Properties {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut properties = Properties::new();
        for (key, raw) in iter {
            properties.set(key, raw.as_ref());
        }
        properties
    }
}

fn split_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_are_split_and_trimmed() {
        let mut props = Properties::new();
        props.set("paths", " a.json ,b.json,, ");
        assert_eq!(
            props.get_string_array("paths"),
            Some(&["a.json".to_string(), "b.json".to_string()][..])
        );
    }

    #[test]
    fn empty_value_is_still_declared() {
        let props: Properties = [("paths", "")].into_iter().collect();
        assert!(props.has_key("paths"));
        assert_eq!(props.get_string_array("paths"), Some(&[][..]));
        assert_eq!(props.get_string_array("other"), None);
    }

    #[test]
    fn override_requires_key_and_equals() {
        let mut props = Properties::new();
        props.apply_override("paths=a.json,b.json").unwrap();
        assert_eq!(props.get_string_array("paths").unwrap().len(), 2);

        assert!(matches!(
            props.apply_override("no-equals"),
            Err(Error::InvalidProperty { .. })
        ));
        assert!(matches!(
            props.apply_override("=value"),
            Err(Error::InvalidProperty { .. })
        ));
    }

    #[test]
    fn deserializes_strings_and_arrays_from_toml() {
        let props: Properties = toml::from_str(
            r#"
"sonar.typescript.tsconfigPaths" = "a.json, b.json"
"other.paths" = ["x, y.json", " z.json "]
"#,
        )
        .unwrap();

        assert_eq!(
            props.get_string_array("sonar.typescript.tsconfigPaths").unwrap(),
            ["a.json", "b.json"]
        );
        // array items are never split on commas
        assert_eq!(
            props.get_string_array("other.paths").unwrap(),
            ["x, y.json", "z.json"]
        );
    }

    #[test]
    fn merge_replaces_whole_keys() {
        let mut base: Properties = [("a", "1,2"), ("b", "3")].into_iter().collect();
        let overlay: Properties = [("a", "9")].into_iter().collect();
        base.merge(&overlay);

        assert_eq!(base.get_string_array("a").unwrap(), ["9"]);
        assert_eq!(base.get_string_array("b").unwrap(), ["3"]);
    }
}
