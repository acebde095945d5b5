//! `cascade import` - seed the persistent store from bundle files.

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;
use crate::import;
use crate::store::JsonFileStore;

/// Import bundle files into the persistent store.
pub fn import(
    settings: &Settings,
    files: &[PathBuf],
    default_locale: Option<&str>,
) -> Result<()> {
    let store = JsonFileStore::open(settings.effective_store_path()?)?;
    let default_locale = default_locale.unwrap_or(&settings.default_locale);

    let report = import::import_files(&store, files, default_locale)?;

    println!(
        "Imported {} locale(s): {} record(s) created, {} untranslated marker(s), {} skipped",
        report.locales, report.created, report.markers, report.skipped
    );
    println!("Store: {}", store.path().display());
    Ok(())
}
