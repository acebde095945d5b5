//! Cascade - Tiered Translation Backend
//!
//! Resolves a translation key for a locale by trying successively slower
//! and more authoritative sources, populating the faster tiers when a
//! lookup succeeds in a lower one: fast cache, persistent store, static
//! default bundles.
//!
//! ## Library usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use cascade_i18n::fallback::StaticFallback;
//! use cascade_i18n::locale::FixedLocale;
//! use cascade_i18n::options::ResolveOptions;
//! use cascade_i18n::resolver::Resolver;
//! use cascade_i18n::store::MemoryStore;
//!
//! let mut bundles = StaticFallback::new();
//! bundles
//!     .add_document("en:\n  greeting: \"Hello, %{name}\"\n")
//!     .expect("bundle parses");
//!
//! let mut resolver = Resolver::new(
//!     Arc::new(MemoryStore::new()),
//!     bundles,
//!     Arc::new(FixedLocale::new("en")),
//! );
//!
//! let greeting = resolver
//!     .translate(None, "greeting", &ResolveOptions::new().var("name", "Ada"))
//!     .expect("resolves");
//! assert_eq!(greeting, "Hello, Ada");
//! ```
//!
//! ## CLI usage
//!
//! ```bash
//! cascade import config/locales/*.yml     # Seed the persistent store
//! cascade translate greeting --locale en  # Resolve a key
//! cascade locales                         # List stored locales
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fallback;
pub mod format;
pub mod import;
pub mod key;
pub mod locale;
pub mod options;
pub mod resolver;
pub mod store;

pub use cli::Cli;
pub use error::{Error, Result};
pub use locale::{FixedLocale, Locale, LocaleSource};
pub use options::ResolveOptions;
pub use resolver::Resolver;

/// CLI version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI with the given arguments.
///
/// This is the main entry point for the CLI, parsing arguments and
/// dispatching to the appropriate command handler.
pub fn run(args: Vec<String>) -> Result<()> {
    use clap::Parser;

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // Print clap error (includes help/version)
            e.print().ok();
            // Exit successfully for help/version, otherwise return error
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Ok(()),
                _ => return Err(Error::other("")),
            }
        }
    };

    // Initialize logging if debug mode
    if cli.debug {
        init_logging();
    }

    // Load settings, then apply CLI overrides
    let mut settings = match &cli.config {
        Some(path) => config::Settings::load_from_file(path)?,
        None => config::Settings::load()?,
    };
    if let Some(store) = cli.store {
        settings.store_path = Some(store);
    }
    if let Some(bundles) = cli.bundles {
        settings.bundle_dir = Some(bundles);
    }
    if let Some(cache) = cli.cache {
        settings.cache.store = cache;
    }

    // Execute command
    commands::execute(&settings, &cli.command)
}

/// Initialize tracing/logging for debug mode.
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cascade_i18n=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
