//! Tier-store contracts and the bundled implementations.
//!
//! The resolver depends only on the two traits here. [`CacheStore`] is the
//! fast ephemeral tier; [`TranslationStore`] is the durable per-locale
//! tier that also owns locale identities.

pub mod json;
pub mod memory;

use std::sync::Arc;
use std::time::Duration;

pub use json::JsonFileStore;
pub use memory::{MemoryCache, MemoryStore};

use crate::error::{Error, Result};
use crate::locale::Locale;

/// A (locale, derived-key) pair mapped to a value.
///
/// An absent value marks a key as known-untranslated for the locale (the
/// import utility writes these); the resolution path never creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    /// The owning locale.
    pub locale: Locale,
    /// The derived key (`"<code>:<digest>"`).
    pub key: String,
    /// The stored value, absent for known-untranslated markers.
    pub value: Option<String>,
}

/// Fast key-value tier with raw string semantics.
///
/// `write` stores the exact string with no re-encoding; eviction and TTL
/// are the store's business. No cross-writer ordering is guaranteed,
/// last-write-wins is acceptable.
pub trait CacheStore: Send + Sync {
    /// Read a raw value, `None` on miss (including expiry).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write a raw value.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Durable per-locale key-value tier.
pub trait TranslationStore: Send + Sync {
    /// Look up a locale by code, creating it if absent.
    fn locale(&self, code: &str) -> Result<Locale>;

    /// Find a record by derived key under a locale.
    fn find(&self, locale: &Locale, key: &str) -> Result<Option<TranslationRecord>>;

    /// Create a record, or return the existing one for the same key.
    ///
    /// Safe under concurrent same-key creation: duplicate inserts resolve
    /// to a single effective record.
    fn create(&self, locale: &Locale, key: &str, value: Option<&str>)
        -> Result<TranslationRecord>;

    /// All locales known to the store, sorted by code.
    fn locales(&self) -> Result<Vec<Locale>>;
}

/// Always-miss cache, for diagnostics and one-shot runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

impl CacheStore for NullCache {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}

/// Resolve a named cache store.
///
/// Known names: `shared` (the process-wide instance, the default),
/// `memory` (a private instance with the given capacity/TTL), `none`
/// (always-miss pass-through). `capacity` and `ttl` only apply to
/// `memory`; the shared instance is sized once at first use.
pub fn cache_store_by_name(
    name: &str,
    capacity: usize,
    ttl: Option<Duration>,
) -> Result<Arc<dyn CacheStore>> {
    match name {
        "shared" => Ok(memory::shared()),
        "memory" => Ok(Arc::new(MemoryCache::new(capacity, ttl))),
        "none" => Ok(Arc::new(NullCache)),
        other => Err(Error::config(format!("unknown cache store '{}'", other))),
    }
}
