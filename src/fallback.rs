//! Static-fallback tier: preloaded default translation bundles.
//!
//! Bundles are YAML documents whose root maps a locale code to a nested
//! translation tree, the same shape the import utility consumes:
//!
//! ```yaml
//! en:
//!   greeting: "Hello, %{name}"
//!   inbox:
//!     messages:
//!       one: "1 message"
//!       other: "%{count} messages"
//! ```
//!
//! Lookup walks scope segments, then the dotted key path. A terminal
//! mapping whose keys are all plural categories is surfaced as a plural
//! value; any other terminal mapping is not a value.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde_yaml::Value;

use crate::error::{Error, Result};

/// CLDR plural category names recognized in bundle leaves.
const PLURAL_CATEGORIES: &[&str] = &["zero", "one", "two", "few", "many", "other"];

/// A value resolved from a bundle: either a plain string or a
/// plural-branch mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackValue {
    /// A plain translation string.
    Text(String),
    /// Plural branches keyed by category (`one`, `other`, ...).
    Plural(BTreeMap<String, String>),
}

impl FallbackValue {
    /// Collapse to the single string the store tiers persist.
    ///
    /// Plural mappings collapse to the `other` branch, keeping the
    /// `%{count}` template rather than one expanded branch.
    pub fn collapse(&self) -> Option<String> {
        match self {
            FallbackValue::Text(s) => Some(s.clone()),
            FallbackValue::Plural(branches) => branches.get("other").cloned(),
        }
    }
}

/// Read-only nested key-path lookup over default translation bundles.
#[derive(Debug, Clone, Default)]
pub struct StaticFallback {
    bundles: HashMap<String, Value>,
}

impl StaticFallback {
    /// An empty fallback with no bundles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bundle document and merge it in.
    ///
    /// The document root must map locale codes to translation trees.
    /// Locales already present are deep-merged, later documents winning
    /// on leaf conflicts.
    pub fn add_document(&mut self, yaml: &str) -> Result<()> {
        let root: Value = serde_yaml::from_str(yaml)?;
        let Value::Mapping(entries) = root else {
            return Err(Error::bundle("bundle root must map locale codes to trees"));
        };

        for (code, tree) in entries {
            let Value::String(code) = code else {
                return Err(Error::bundle("bundle locale codes must be strings"));
            };
            if !matches!(tree, Value::Mapping(_)) {
                return Err(Error::bundle(format!(
                    "bundle for locale '{}' must be a mapping",
                    code
                )));
            }
            match self.bundles.entry(code) {
                Entry::Occupied(mut slot) => deep_merge(slot.get_mut(), tree),
                Entry::Vacant(slot) => {
                    slot.insert(tree);
                }
            }
        }
        Ok(())
    }

    /// Load every `.yml`/`.yaml` file in a directory.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut fallback = Self::new();
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                matches!(
                    path.extension().and_then(|ext| ext.to_str()),
                    Some("yml" | "yaml")
                )
            })
            .collect();
        paths.sort();

        for path in paths {
            let contents = std::fs::read_to_string(&path)?;
            fallback.add_document(&contents).map_err(|e| {
                Error::bundle(format!("{}: {}", path.display(), e))
            })?;
        }
        Ok(fallback)
    }

    /// Look up a key under a locale, scope segments first.
    ///
    /// Returns `None` when the path is absent or lands on a non-value
    /// node (a nested tree that is not a plural mapping).
    pub fn lookup(&self, locale: &str, key: &str, scope: &[String]) -> Option<FallbackValue> {
        let mut node = self.bundles.get(locale)?;
        for segment in scope.iter().map(String::as_str).chain(key.split('.')) {
            node = node.get(segment)?;
        }
        value_at(node)
    }

    /// Locale codes with a loaded bundle.
    pub fn locales(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.bundles.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// All dotted value keys under a locale, sorted.
    ///
    /// Plural mappings count as one key (their parent path), matching how
    /// the resolution path addresses them.
    pub fn keys(&self, locale: &str) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(tree) = self.bundles.get(locale) {
            collect_keys(tree, &mut Vec::new(), &mut keys);
        }
        keys.sort();
        keys
    }
}

/// Interpret a terminal node as a value, if it is one.
fn value_at(node: &Value) -> Option<FallbackValue> {
    match node {
        Value::Mapping(entries) => {
            let mut branches = BTreeMap::new();
            for (category, leaf) in entries {
                let category = category.as_str()?;
                if !PLURAL_CATEGORIES.contains(&category) {
                    return None;
                }
                branches.insert(category.to_string(), scalar_text(leaf)?);
            }
            if branches.is_empty() {
                None
            } else {
                Some(FallbackValue::Plural(branches))
            }
        }
        other => scalar_text(other).map(FallbackValue::Text),
    }
}

/// Stringify a scalar leaf; non-scalars are not values.
fn scalar_text(node: &Value) -> Option<String> {
    match node {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn collect_keys(node: &Value, path: &mut Vec<String>, keys: &mut Vec<String>) {
    if value_at(node).is_some() {
        if !path.is_empty() {
            keys.push(path.join("."));
        }
        return;
    }
    if let Value::Mapping(entries) = node {
        for (segment, child) in entries {
            let Some(segment) = segment.as_str() else {
                continue;
            };
            path.push(segment.to_string());
            collect_keys(child, path, keys);
            path.pop();
        }
    }
}

/// Merge `incoming` into `existing`; mappings merge recursively, any other
/// conflict is won by `incoming`.
fn deep_merge(existing: &mut Value, incoming: Value) {
    match (existing, incoming) {
        (Value::Mapping(existing), Value::Mapping(incoming)) => {
            for (key, value) in incoming {
                if let Some(slot) = existing.get_mut(&key) {
                    deep_merge(slot, value);
                    continue;
                }
                existing.insert(key, value);
            }
        }
        (existing, incoming) => *existing = incoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUNDLE: &str = r#"
en:
  greeting: "Hello, %{name}"
  nav:
    menu:
      home: "Home"
  inbox:
    messages:
      one: "1 message"
      other: "%{count} messages"
  answer: 42
es:
  greeting: "Hola, %{name}"
"#;

    fn fallback() -> StaticFallback {
        let mut fallback = StaticFallback::new();
        fallback.add_document(BUNDLE).expect("bundle parses");
        fallback
    }

    #[test]
    fn test_simple_lookup() {
        assert_eq!(
            fallback().lookup("en", "greeting", &[]),
            Some(FallbackValue::Text("Hello, %{name}".to_string()))
        );
    }

    #[test]
    fn test_dotted_key_lookup() {
        assert_eq!(
            fallback().lookup("en", "nav.menu.home", &[]),
            Some(FallbackValue::Text("Home".to_string()))
        );
    }

    #[test]
    fn test_scope_prefixes_key() {
        let scope = vec!["nav".to_string(), "menu".to_string()];
        assert_eq!(
            fallback().lookup("en", "home", &scope),
            Some(FallbackValue::Text("Home".to_string()))
        );
    }

    #[test]
    fn test_plural_mapping() {
        let Some(FallbackValue::Plural(branches)) = fallback().lookup("en", "inbox.messages", &[])
        else {
            panic!("expected plural value");
        };
        assert_eq!(branches.get("one").map(String::as_str), Some("1 message"));
        assert_eq!(branches.get("other").map(String::as_str), Some("%{count} messages"));
    }

    #[test]
    fn test_non_plural_subtree_is_not_a_value() {
        assert_eq!(fallback().lookup("en", "nav.menu", &[]), None);
        assert_eq!(fallback().lookup("en", "nav", &[]), None);
    }

    #[test]
    fn test_scalar_leaves_stringify() {
        assert_eq!(
            fallback().lookup("en", "answer", &[]),
            Some(FallbackValue::Text("42".to_string()))
        );
    }

    #[test]
    fn test_missing_key_and_locale() {
        assert_eq!(fallback().lookup("en", "absent", &[]), None);
        assert_eq!(fallback().lookup("de", "greeting", &[]), None);
    }

    #[test]
    fn test_documents_merge_per_locale() {
        let mut fallback = fallback();
        fallback
            .add_document("en:\n  nav:\n    menu:\n      about: About\n")
            .expect("second document parses");
        assert_eq!(
            fallback.lookup("en", "nav.menu.about", &[]),
            Some(FallbackValue::Text("About".to_string()))
        );
        // earlier content survives the merge
        assert_eq!(
            fallback.lookup("en", "nav.menu.home", &[]),
            Some(FallbackValue::Text("Home".to_string()))
        );
    }

    #[test]
    fn test_keys_flatten_plurals_to_parent() {
        let keys = fallback().keys("en");
        assert!(keys.contains(&"greeting".to_string()));
        assert!(keys.contains(&"nav.menu.home".to_string()));
        assert!(keys.contains(&"inbox.messages".to_string()));
        assert!(!keys.contains(&"inbox.messages.other".to_string()));
    }

    #[test]
    fn test_locales() {
        assert_eq!(fallback().locales(), vec!["en", "es"]);
    }

    #[test]
    fn test_collapse() {
        let text = FallbackValue::Text("plain".to_string());
        assert_eq!(text.collapse(), Some("plain".to_string()));

        let mut branches = BTreeMap::new();
        branches.insert("one".to_string(), "1 item".to_string());
        branches.insert("other".to_string(), "%{count} items".to_string());
        assert_eq!(
            FallbackValue::Plural(branches).collapse(),
            Some("%{count} items".to_string())
        );
    }

    #[test]
    fn test_rejects_non_mapping_root() {
        let mut fallback = StaticFallback::new();
        assert!(fallback.add_document("- a\n- b\n").is_err());
        assert!(fallback.add_document("en: just a string\n").is_err());
    }
}
