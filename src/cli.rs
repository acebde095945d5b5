//! Command-line argument parsing and command definitions.
//!
//! Uses clap with derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{Error, Result};

/// Cascade - Tiered Translation Backend
#[derive(Parser, Debug)]
#[command(name = "cascade")]
#[command(version, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Settings file to use instead of the discovered configuration
    #[arg(long, global = true, env = "CASCADE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Persistent store file
    #[arg(long, global = true, env = "CASCADE_STORE")]
    pub store: Option<PathBuf>,

    /// Directory holding default translation bundles
    #[arg(long, global = true, env = "CASCADE_BUNDLES")]
    pub bundles: Option<PathBuf>,

    /// Named cache store backing the fast tier
    #[arg(long, global = true, value_parser = ["shared", "memory", "none"])]
    pub cache: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed the persistent store from YAML bundle files
    Import {
        /// Bundle files (root maps locale code to translation tree)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Locale whose keys define the untranslated markers
        #[arg(long)]
        default_locale: Option<String>,
    },

    /// Resolve one or more keys to display strings
    Translate {
        /// Logical translation keys, resolved in order
        #[arg(required = true)]
        keys: Vec<String>,

        /// Locale to resolve under
        #[arg(short, long)]
        locale: Option<String>,

        /// Pluralization count
        #[arg(long)]
        count: Option<i64>,

        /// Dotted scope prefixed onto every key
        #[arg(long)]
        scope: Option<String>,

        /// Interpolation variable, repeatable
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,

        /// Literal fallback value when the lookup misses
        #[arg(long)]
        default: Option<String>,

        /// Fallback key tried before the literal default, repeatable
        #[arg(long = "default-key", value_name = "KEY")]
        default_keys: Vec<String>,
    },

    /// List the locales known to the persistent store
    Locales,
}

/// Split a `NAME=VALUE` variable argument.
pub fn parse_var(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(Error::invalid_arg(format!(
            "variable '{}' is not NAME=VALUE",
            arg
        ))),
    }
}
