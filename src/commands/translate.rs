//! `cascade translate` - one-shot key resolution.

use std::sync::Arc;

use crate::cli;
use crate::config::Settings;
use crate::error::Result;
use crate::fallback::StaticFallback;
use crate::locale::FixedLocale;
use crate::options::ResolveOptions;
use crate::resolver::Resolver;
use crate::store::JsonFileStore;

/// Resolve keys against the configured tiers and print one result per line.
#[allow(clippy::too_many_arguments)]
pub fn translate(
    settings: &Settings,
    keys: &[String],
    locale: Option<&str>,
    count: Option<i64>,
    scope: Option<&str>,
    vars: &[String],
    default: Option<&str>,
    default_keys: &[String],
) -> Result<()> {
    let store = JsonFileStore::open(settings.effective_store_path()?)?;
    let fallback = match &settings.bundle_dir {
        Some(dir) => StaticFallback::load_dir(dir)?,
        None => StaticFallback::new(),
    };

    // the CLI is a one-call context, so the requested locale is simply
    // the ambient one
    let ambient = FixedLocale::new(locale.unwrap_or(&settings.default_locale));

    let mut options = ResolveOptions::new();
    if let Some(count) = count {
        options = options.count(count);
    }
    if let Some(scope) = scope {
        options = options.scope(scope.split('.'));
    }
    for var in vars {
        let (name, value) = cli::parse_var(var)?;
        options = options.var(name, value);
    }
    for key in default_keys {
        options = options.default_key(key);
    }
    if let Some(value) = default {
        options = options.default_value(value);
    }

    let mut resolver = Resolver::new(Arc::new(store), fallback, Arc::new(ambient))
        .with_cache(settings.cache_store()?);

    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    for result in resolver.translate_all(None, &keys, &options)? {
        println!("{}", result);
    }
    Ok(())
}
