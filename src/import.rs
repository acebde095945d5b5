//! Bulk import: seed the persistent store from default bundles.
//!
//! One-time ETL, not part of the resolution path. Every bundle key
//! becomes a record under its derived key; plural mappings collapse to
//! the `other` branch, matching what resolution persists. Locales that
//! lack a key the default locale has get a record with an absent value,
//! the known-untranslated marker the resolution path echoes as the key.

use std::path::PathBuf;

use crate::error::Result;
use crate::fallback::{FallbackValue, StaticFallback};
use crate::key;
use crate::store::TranslationStore;

/// Counts reported by an import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Locales seen in the bundles.
    pub locales: usize,
    /// Records created with a value.
    pub created: usize,
    /// Known-untranslated markers created.
    pub markers: usize,
    /// Keys skipped because a record already existed.
    pub skipped: usize,
}

/// Seed `store` with every key of every locale in `fallback`.
///
/// Existing records are left untouched (the store contract has no update
/// operation); re-running an import only fills gaps.
pub fn seed(
    store: &dyn TranslationStore,
    fallback: &StaticFallback,
    default_locale: &str,
) -> Result<ImportReport> {
    let mut report = ImportReport::default();

    for code in fallback.locales() {
        report.locales += 1;
        let locale = store.locale(code)?;
        for logical_key in fallback.keys(code) {
            let value = fallback
                .lookup(code, &logical_key, &[])
                .as_ref()
                .and_then(FallbackValue::collapse);
            let derived = key::cache_key(code, &logical_key);
            if store.find(&locale, &derived)?.is_some() {
                report.skipped += 1;
                continue;
            }
            store.create(&locale, &derived, value.as_deref())?;
            report.created += 1;
        }
    }

    // mark keys the default locale has but this locale does not
    let default_keys = fallback.keys(default_locale);
    for code in fallback.locales() {
        if code == default_locale {
            continue;
        }
        let locale = store.locale(code)?;
        for logical_key in &default_keys {
            if fallback.lookup(code, logical_key, &[]).is_some() {
                continue;
            }
            let derived = key::cache_key(code, logical_key);
            if store.find(&locale, &derived)?.is_some() {
                continue;
            }
            store.create(&locale, &derived, None)?;
            report.markers += 1;
        }
    }

    tracing::info!(
        locales = report.locales,
        created = report.created,
        markers = report.markers,
        skipped = report.skipped,
        "import finished"
    );
    Ok(report)
}

/// Load bundle files and seed `store` from them.
pub fn import_files(
    store: &dyn TranslationStore,
    paths: &[PathBuf],
    default_locale: &str,
) -> Result<ImportReport> {
    let mut fallback = StaticFallback::new();
    for path in paths {
        let contents = std::fs::read_to_string(path)?;
        fallback.add_document(&contents)?;
    }
    seed(store, &fallback, default_locale)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const BUNDLE: &str = r#"
en:
  greeting: "Hello"
  inbox:
    messages:
      one: "1 message"
      other: "%{count} messages"
es:
  greeting: "Hola"
"#;

    fn fallback() -> StaticFallback {
        let mut fallback = StaticFallback::new();
        fallback.add_document(BUNDLE).unwrap();
        fallback
    }

    #[test]
    fn test_seed_creates_records_under_derived_keys() {
        let store = MemoryStore::new();
        let report = seed(&store, &fallback(), "en").unwrap();
        assert_eq!(report.locales, 2);
        assert_eq!(report.created, 3);

        let en = store.locale("en").unwrap();
        let record = store
            .find(&en, &key::cache_key("en", "greeting"))
            .unwrap()
            .unwrap();
        assert_eq!(record.value.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_seed_collapses_plurals_to_other() {
        let store = MemoryStore::new();
        seed(&store, &fallback(), "en").unwrap();

        let en = store.locale("en").unwrap();
        let record = store
            .find(&en, &key::cache_key("en", "inbox.messages"))
            .unwrap()
            .unwrap();
        assert_eq!(record.value.as_deref(), Some("%{count} messages"));
    }

    #[test]
    fn test_seed_marks_untranslated_keys() {
        let store = MemoryStore::new();
        let report = seed(&store, &fallback(), "en").unwrap();
        // es lacks inbox.messages
        assert_eq!(report.markers, 1);

        let es = store.locale("es").unwrap();
        let record = store
            .find(&es, &key::cache_key("es", "inbox.messages"))
            .unwrap()
            .unwrap();
        assert_eq!(record.value, None);
    }

    #[test]
    fn test_reimport_skips_existing() {
        let store = MemoryStore::new();
        seed(&store, &fallback(), "en").unwrap();
        let second = seed(&store, &fallback(), "en").unwrap();
        assert_eq!(second.created, 0);
        assert_eq!(second.markers, 0);
        assert_eq!(second.skipped, 3);
    }

    #[test]
    fn test_import_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("app.yml");
        std::fs::write(&path, BUNDLE).unwrap();

        let store = MemoryStore::new();
        let report = import_files(&store, &[path], "en").unwrap();
        assert_eq!(report.created, 3);
    }
}
