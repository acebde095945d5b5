//! The tiered resolution engine.
//!
//! `translate` tries successively slower, more authoritative sources:
//! the fast cache, the persistent store, then the static default bundles.
//! A hit in a lower tier populates the tiers above it, so the next call
//! for the same key stops earlier:
//!
//! ```text
//! hit:  cache -> store -> bundles
//! miss: cache -> store -> bundles -> store.create -> cache.write
//! ```
//!
//! The resolver is stateless apart from the locale context it keeps
//! between calls. One resolution context (a request, a worker) owns one
//! `Resolver`; tier stores may be shared across resolvers.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::fallback::{FallbackValue, StaticFallback};
use crate::format;
use crate::key;
use crate::locale::{Locale, LocaleSource};
use crate::options::{DefaultEntry, ResolveOptions};
use crate::store::{memory, CacheStore, TranslationStore};

/// Tiered translation resolver.
pub struct Resolver {
    cache: Arc<dyn CacheStore>,
    store: Arc<dyn TranslationStore>,
    fallback: StaticFallback,
    ambient: Arc<dyn LocaleSource>,
    current: Option<Locale>,
}

impl Resolver {
    /// Create a resolver over a persistent store, default bundles, and an
    /// ambient current-locale source.
    ///
    /// The fast tier defaults to the process-wide shared cache; use
    /// [`Resolver::with_cache`] to back it differently.
    pub fn new(
        store: Arc<dyn TranslationStore>,
        fallback: StaticFallback,
        ambient: Arc<dyn LocaleSource>,
    ) -> Self {
        Self {
            cache: memory::shared(),
            store,
            fallback,
            ambient,
            current: None,
        }
    }

    /// Replace the fast-cache tier.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn CacheStore>) -> Self {
        self.cache = cache;
        self
    }

    /// Resolve one key to its final display string.
    ///
    /// `locale` is an explicit locale code; pass `None` to follow the
    /// ambient current locale. Fails only with
    /// [`Error::MissingTranslation`], and only when `options.scope` was
    /// given and nothing resolved; unscoped misses echo the key.
    /// Store failures propagate as the stores report them.
    pub fn translate(
        &mut self,
        locale: Option<&str>,
        key: &str,
        options: &ResolveOptions,
    ) -> Result<String> {
        let locale = self.locale_in_context(locale)?;
        let qualified = key::qualify(key, &options.scope);
        let cache_key = key::cache_key(locale.code(), &qualified);

        // tier 1: fast cache
        if let Some(raw) = self.cache.read(&cache_key)? {
            tracing::debug!(key = %cache_key, "cache hit");
            return Ok(finish(
                locale.code(),
                Some(FallbackValue::Text(raw)),
                key,
                options,
            ));
        }

        // tier 2: persistent store
        if let Some(record) = self.store.find(&locale, &cache_key)? {
            tracing::debug!(key = %cache_key, untranslated = record.value.is_none(), "store hit");
            if let Some(value) = record.value.as_deref() {
                // populate the fast tier so the next call stops there
                self.cache.write(&cache_key, value)?;
            }
            return Ok(finish(
                locale.code(),
                record.value.map(FallbackValue::Text),
                key,
                options,
            ));
        }

        // tier 3: static bundles, then the default chain
        let mut value = self.fallback.lookup(locale.code(), key, &options.scope);
        if value.is_none() {
            value = self.resolve_default(&locale, options)?;
        }
        if value.is_none() && !options.scope.is_empty() {
            // scoped lookups are strict; this also stops recursive
            // default chasing
            return Err(Error::missing_translation(locale.code(), qualified, options));
        }

        // populate the store and cache tiers; an unresolved unscoped key
        // is persisted as itself
        let stored = value
            .as_ref()
            .and_then(FallbackValue::collapse)
            .unwrap_or_else(|| qualified.clone());
        let record = self.store.create(&locale, &cache_key, Some(stored.as_str()))?;
        let raw = record.value.unwrap_or(stored);
        self.cache.write(&cache_key, &raw)?;
        tracing::debug!(key = %cache_key, "populated from fallback");

        let value = value.unwrap_or(FallbackValue::Text(raw));
        Ok(finish(locale.code(), Some(value), key, options))
    }

    /// Resolve an ordered sequence of keys.
    ///
    /// Results preserve the input order. The first failing key aborts the
    /// call; there is no partial-result aggregation.
    pub fn translate_all(
        &mut self,
        locale: Option<&str>,
        keys: &[&str],
        options: &ResolveOptions,
    ) -> Result<Vec<String>> {
        let mut results = Vec::with_capacity(keys.len());
        for key in keys {
            results.push(self.translate(locale, key, options)?);
        }
        Ok(results)
    }

    /// Locales known to the persistent store.
    pub fn available_locales(&self) -> Result<Vec<Locale>> {
        self.store.locales()
    }

    /// Resolve the locale this call runs under and remember it.
    ///
    /// An explicit locale wins when it differs from the remembered one;
    /// otherwise the context re-syncs against the ambient current locale.
    /// The first call of a context always resolves from the ambient
    /// source, matching the long-standing backend behavior.
    fn locale_in_context(&mut self, explicit: Option<&str>) -> Result<Locale> {
        let resolved = match (&self.current, explicit) {
            (Some(current), Some(code)) => {
                if current.code() == code {
                    current.clone()
                } else {
                    self.store.locale(code)?
                }
            }
            (Some(current), None) => {
                let ambient = self.ambient.current();
                if current.code() == ambient {
                    current.clone()
                } else {
                    self.store.locale(&ambient)?
                }
            }
            (None, _) => self.store.locale(&self.ambient.current())?,
        };
        self.current = Some(resolved.clone());
        Ok(resolved)
    }

    /// Walk the default chain: literals win immediately, key entries are
    /// resolved recursively with the chain stripped. A key entry that
    /// misses is skipped; store failures propagate.
    fn resolve_default(
        &mut self,
        locale: &Locale,
        options: &ResolveOptions,
    ) -> Result<Option<FallbackValue>> {
        if options.default.is_empty() {
            return Ok(None);
        }
        let stripped = options.without_default();
        for entry in options.default.clone() {
            match entry {
                DefaultEntry::Literal(value) => {
                    return Ok(Some(FallbackValue::Text(value)));
                }
                DefaultEntry::Key(key) => {
                    match self.translate(Some(locale.code()), &key, &stripped) {
                        Ok(value) => return Ok(Some(FallbackValue::Text(value))),
                        Err(Error::MissingTranslation { .. }) => {}
                        Err(e) => return Err(e),
                    }
                }
            }
        }
        Ok(None)
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("current", &self.current)
            .finish()
    }
}

/// Post-process a resolved value: plural branch selection, then
/// interpolation. An absent value degrades to echoing the original key.
fn finish(
    locale_code: &str,
    value: Option<FallbackValue>,
    original_key: &str,
    options: &ResolveOptions,
) -> String {
    let processed = value.and_then(|v| format::pluralize(locale_code, &v, options.count));
    match processed {
        Some(s) => format::interpolate(&s, &options.interpolation_vars()),
        None => original_key.to_string(),
    }
}
