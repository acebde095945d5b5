//! In-process store implementations.
//!
//! [`MemoryCache`] is an LRU with optional TTL, suitable as the fast tier
//! for a single process; a process-wide instance behind [`shared`] serves
//! as the ambient default. [`MemoryStore`] is a map-backed persistent
//! tier for tests and short-lived embeddings.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use std::time::{Duration, Instant};

use lru::LruCache;

use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::store::{CacheStore, TranslationRecord, TranslationStore};

/// Default capacity for the shared cache instance.
const SHARED_CAPACITY: usize = 1024;

struct Entry {
    value: String,
    inserted_at: Instant,
}

/// LRU cache tier with optional TTL.
pub struct MemoryCache {
    entries: Mutex<LruCache<String, Entry>>,
    ttl: Option<Duration>,
}

impl MemoryCache {
    /// Create a cache holding up to `capacity` entries.
    ///
    /// A `ttl` of `None` means entries only leave by LRU eviction.
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        let capacity =
            NonZeroUsize::new(capacity.max(1)).expect("capacity clamped to at least 1");
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }
}

impl CacheStore for MemoryCache {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::store("cache lock poisoned"))?;
        if let Some(entry) = entries.get(key) {
            let expired = self
                .ttl
                .is_some_and(|ttl| entry.inserted_at.elapsed() >= ttl);
            if !expired {
                return Ok(Some(entry.value.clone()));
            }
            // expired, drop it
            entries.pop(key);
        }
        Ok(None)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::store("cache lock poisoned"))?;
        entries.put(
            key.to_string(),
            Entry {
                value: value.to_string(),
                inserted_at: Instant::now(),
            },
        );
        Ok(())
    }
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache").field("ttl", &self.ttl).finish()
    }
}

/// The process-wide shared cache instance.
///
/// Sized at [`SHARED_CAPACITY`] with no TTL, created on first use. This is
/// the default fast tier when no store is named.
pub fn shared() -> Arc<MemoryCache> {
    static SHARED: OnceLock<Arc<MemoryCache>> = OnceLock::new();
    SHARED
        .get_or_init(|| Arc::new(MemoryCache::new(SHARED_CAPACITY, None)))
        .clone()
}

type LocaleEntries = HashMap<String, Option<String>>;

/// Map-backed persistent tier.
#[derive(Debug, Default)]
pub struct MemoryStore {
    locales: RwLock<HashMap<String, LocaleEntries>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TranslationStore for MemoryStore {
    fn locale(&self, code: &str) -> Result<Locale> {
        let mut locales = self
            .locales
            .write()
            .map_err(|_| Error::store("store lock poisoned"))?;
        locales.entry(code.to_string()).or_default();
        Ok(Locale::new(code))
    }

    fn find(&self, locale: &Locale, key: &str) -> Result<Option<TranslationRecord>> {
        let locales = self
            .locales
            .read()
            .map_err(|_| Error::store("store lock poisoned"))?;
        Ok(locales.get(locale.code()).and_then(|entries| {
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
        let mut locales = self
            .locales
            .write()
            .map_err(|_| Error::store("store lock poisoned"))?;
        let entries = locales.entry(locale.code().to_string()).or_default();
        // duplicate create resolves to the existing record
        let stored = entries
            .entry(key.to_string())
            .or_insert_with(|| value.map(str::to_string));
        Ok(TranslationRecord {
            locale: locale.clone(),
            key: key.to_string(),
            value: stored.clone(),
        })
    }

    fn locales(&self) -> Result<Vec<Locale>> {
        let locales = self
            .locales
            .read()
            .map_err(|_| Error::store("store lock poisoned"))?;
        let mut codes: Vec<&String> = locales.keys().collect();
        codes.sort();
        Ok(codes.into_iter().map(Locale::new).collect())
    }
}
