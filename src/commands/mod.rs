//! Command implementations for the Cascade CLI.
//!
//! Each submodule implements one command.

mod import;
mod locales;
mod translate;

pub use import::import;
pub use locales::locales;
pub use translate::translate;

use crate::cli::Commands;
use crate::config::Settings;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute(settings: &Settings, command: &Commands) -> Result<()> {
    match command {
        Commands::Import { files, default_locale } => {
            import(settings, files, default_locale.as_deref())
        }

        Commands::Translate {
            keys,
            locale,
            count,
            scope,
            vars,
            default,
            default_keys,
        } => translate(
            settings,
            keys,
            locale.as_deref(),
            *count,
            scope.as_deref(),
            vars,
            default.as_deref(),
            default_keys,
        ),

        Commands::Locales => locales(settings),
    }
}
