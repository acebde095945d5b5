//! Per-call resolution options.

use std::collections::BTreeMap;

/// Option names with lookup semantics, never usable as interpolation
/// variables.
const RESERVED: &[&str] = &["scope", "default", "count"];

/// One candidate in a default chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultEntry {
    /// A literal replacement value, used as-is.
    Literal(String),
    /// An alternative key, resolved with the same options minus the
    /// default chain.
    Key(String),
}

/// Transient per-call configuration for [`Resolver::translate`].
///
/// [`Resolver::translate`]: crate::resolver::Resolver::translate
///
/// # Example
///
/// ```
/// use cascade_i18n::options::ResolveOptions;
///
/// let options = ResolveOptions::new()
///     .count(5)
///     .scope(["inbox"])
///     .var("name", "Ada");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveOptions {
    /// Numeric count selecting the pluralization branch.
    pub count: Option<i64>,
    /// Ordered scope segments prefixed onto the key.
    pub scope: Vec<String>,
    /// Candidates consulted in order when the primary lookup misses.
    pub default: Vec<DefaultEntry>,
    /// Named interpolation substitutions.
    pub vars: BTreeMap<String, String>,
}

impl ResolveOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pluralization count.
    #[must_use]
    pub fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the scope segments.
    #[must_use]
    pub fn scope<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Append a literal default value to the default chain.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default.push(DefaultEntry::Literal(value.into()));
        self
    }

    /// Append an alternative key to the default chain.
    #[must_use]
    pub fn default_key(mut self, key: impl Into<String>) -> Self {
        self.default.push(DefaultEntry::Key(key.into()));
        self
    }

    /// Add a named interpolation variable.
    #[must_use]
    pub fn var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// These options with the default chain stripped, as used when a
    /// default-chain key is resolved recursively.
    pub fn without_default(&self) -> Self {
        let mut stripped = self.clone();
        stripped.default.clear();
        stripped
    }

    /// The substitution map handed to interpolation.
    ///
    /// Reserved names are dropped; `count`, when set, is injected so plural
    /// templates like `"%{count} items"` interpolate.
    pub fn interpolation_vars(&self) -> BTreeMap<String, String> {
        let mut vars: BTreeMap<String, String> = self
            .vars
            .iter()
            .filter(|(name, _)| !RESERVED.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        if let Some(count) = self.count {
            vars.insert("count".to_string(), count.to_string());
        }
        vars
    }
}
