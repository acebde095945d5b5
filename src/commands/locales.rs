//! `cascade locales` - list the locales known to the persistent store.

use crate::config::Settings;
use crate::error::Result;
use crate::store::{JsonFileStore, TranslationStore};

/// Print one locale code per line.
pub fn locales(settings: &Settings) -> Result<()> {
    let store = JsonFileStore::open(settings.effective_store_path()?)?;
    let locales = store.locales()?;
    if locales.is_empty() {
        println!("No locales in store {}", store.path().display());
        return Ok(());
    }
    for locale in locales {
        println!("{}", locale.code());
    }
    Ok(())
}
