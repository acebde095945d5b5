//! Locale identity and the ambient current-locale capability.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// A language/region identity with a stable string code (`"en"`, `"fr-CA"`).
///
/// Locales are owned by the persistent store: the resolver looks them up
/// (or has them created) by code and treats the identity as immutable for
/// the rest of the call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    code: String,
}

impl Locale {
    /// Create a locale from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// The locale code, e.g. `"en"` or `"fr-CA"`.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

/// Capability exposing the surrounding environment's current locale.
///
/// The resolver re-syncs its locale context against this between calls
/// instead of reaching into process-global state; each embedding decides
/// what "current" means (a request header, a user setting, a fixed code).
pub trait LocaleSource: Send + Sync {
    /// Code of the locale the environment currently runs under.
    fn current(&self) -> String;
}

/// A [`LocaleSource`] pinned to one code.
#[derive(Debug, Clone)]
pub struct FixedLocale(String);

impl FixedLocale {
    /// Create a source that always reports `code`.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl LocaleSource for FixedLocale {
    fn current(&self) -> String {
        self.0.clone()
    }
}

/// A [`LocaleSource`] that can be switched at runtime.
///
/// Useful for request-scoped embeddings and for exercising the resolver's
/// ambient re-sync behavior in tests.
#[derive(Debug)]
pub struct SwitchableLocale(RwLock<String>);

impl SwitchableLocale {
    /// Create a switchable source starting at `code`.
    pub fn new(code: impl Into<String>) -> Self {
        Self(RwLock::new(code.into()))
    }

    /// Change the reported current locale.
    pub fn set(&self, code: impl Into<String>) {
        if let Ok(mut slot) = self.0.write() {
            *slot = code.into();
        }
    }
}

impl LocaleSource for SwitchableLocale {
    fn current(&self) -> String {
        self.0.read().map(|s| s.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_locale() {
        let source = FixedLocale::new("fr-CA");
        assert_eq!(source.current(), "fr-CA");
    }

    #[test]
    fn test_switchable_locale() {
        let source = SwitchableLocale::new("en");
        assert_eq!(source.current(), "en");
        source.set("es");
        assert_eq!(source.current(), "es");
    }

    #[test]
    fn test_locale_display() {
        assert_eq!(Locale::new("fr-CA").to_string(), "fr-CA");
    }
}
