//! Single-file JSON persistent store.
//!
//! Gives the CLI a durable tier without a database server: the whole
//! store lives in one JSON document, rewritten on every mutation. Fine
//! for import-then-serve workflows; not meant for concurrent processes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::store::{TranslationRecord, TranslationStore};

type LocaleEntries = BTreeMap<String, Option<String>>;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    locales: BTreeMap<String, LocaleEntries>,
}

/// Durable [`TranslationStore`] backed by one JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: RwLock<StoreData>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading existing contents if the file
    /// exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                Error::store(format!("failed to read store file {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                Error::store(format!("failed to parse store file {}: {}", path.display(), e))
            })?
        } else {
            StoreData::default()
        };
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, data: &StoreData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl TranslationStore for JsonFileStore {
    fn locale(&self, code: &str) -> Result<Locale> {
        let mut data = self
            .data
            .write()
            .map_err(|_| Error::store("store lock poisoned"))?;
        if !data.locales.contains_key(code) {
            data.locales.insert(code.to_string(), LocaleEntries::new());
            self.flush(&data)?;
        }
        Ok(Locale::new(code))
    }

    fn find(&self, locale: &Locale, key: &str) -> Result<Option<TranslationRecord>> {
        let data = self
            .data
            .read()
            .map_err(|_| Error::store("store lock poisoned"))?;
        Ok(data.locales.get(locale.code()).and_then(|entries| {
            entries.get(key).map(|value| TranslationRecord {
                locale: locale.clone(),
                key: key.to_string(),
                value: value.clone(),
            })
        }))
    }

    fn create(
        &self,
        locale: &Locale,
        key: &str,
        value: Option<&str>,
    ) -> Result<TranslationRecord> {
        let mut data = self
            .data
            .write()
            .map_err(|_| Error::store("store lock poisoned"))?;
        let entries = data.locales.entry(locale.code().to_string()).or_default();
        // duplicate create resolves to the existing record
        let existing = entries.get(key).cloned();
        let stored = match existing {
            Some(existing) => existing,
            None => {
                let stored = value.map(str::to_string);
                entries.insert(key.to_string(), stored.clone());
                self.flush(&data)?;
                stored
            }
        };
        Ok(TranslationRecord {
            locale: locale.clone(),
            key: key.to_string(),
            value: stored,
        })
    }

    fn locales(&self) -> Result<Vec<Locale>> {
        let data = self
            .data
            .read()
            .map_err(|_| Error::store("store lock poisoned"))?;
        Ok(data.locales.keys().map(Locale::new).collect())
    }
}
