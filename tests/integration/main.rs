//! Integration tests for the `cascade` CLI.

#![allow(clippy::unwrap_used)] // Tests can use unwrap for cleaner assertions

mod common;

use assert_cmd::Command;
use common::{sandbox, Sandbox};
use predicates::prelude::*;

/// Helper to create a command for the cascade binary, isolated from any
/// real user configuration.
fn cascade_cmd(sandbox: &Sandbox) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cascade"));
    cmd.env("XDG_CONFIG_HOME", sandbox.dir.path().join("config"))
        .env("XDG_DATA_HOME", sandbox.dir.path().join("data"))
        .env_remove("CASCADE_CONFIG")
        .env_remove("CASCADE_LOCALE")
        .env_remove("CASCADE_STORE")
        .env_remove("CASCADE_BUNDLES")
        .env_remove("CASCADE_CACHE")
        .current_dir(sandbox.dir.path());
    cmd
}

/// Import the sandbox bundle into the sandbox store.
fn import(sandbox: &Sandbox) {
    cascade_cmd(sandbox)
        .arg("import")
        .arg(&sandbox.bundle)
        .arg("--store")
        .arg(&sandbox.store)
        .assert()
        .success()
        .stdout(predicate::str::contains("record(s) created"));
}

/// Test that the CLI shows help.
#[test]
fn test_help() {
    let sb = sandbox();
    cascade_cmd(&sb)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tiered Translation Backend"));
}

/// Test that the CLI shows version.
#[test]
fn test_version() {
    let sb = sandbox();
    cascade_cmd(&sb)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that unrecognized commands fail.
#[test]
fn test_unknown_command() {
    let sb = sandbox();
    cascade_cmd(&sb).arg("unknown-command").assert().failure();
}

/// Import reports created records and markers.
#[test]
fn test_import_reports_counts() {
    let sb = sandbox();
    cascade_cmd(&sb)
        .arg("import")
        .arg(&sb.bundle)
        .arg("--store")
        .arg(&sb.store)
        .assert()
        .success()
        // en: greeting, farewell, inbox.messages; es: farewell
        .stdout(predicate::str::contains("4 record(s) created"))
        // es is missing greeting and inbox.messages
        .stdout(predicate::str::contains("2 untranslated marker(s)"));
}

/// Imported values resolve from the persistent store.
#[test]
fn test_translate_after_import() {
    let sb = sandbox();
    import(&sb);
    cascade_cmd(&sb)
        .arg("translate")
        .arg("farewell")
        .arg("--locale")
        .arg("en")
        .arg("--store")
        .arg(&sb.store)
        .assert()
        .success()
        .stdout(predicate::str::diff("Goodbye\n"));
}

/// Interpolation variables substitute into the stored template.
#[test]
fn test_translate_with_vars() {
    let sb = sandbox();
    import(&sb);
    cascade_cmd(&sb)
        .arg("translate")
        .arg("greeting")
        .arg("--locale")
        .arg("en")
        .arg("--var")
        .arg("name=Ada")
        .arg("--store")
        .arg(&sb.store)
        .assert()
        .success()
        .stdout(predicate::str::diff("Hello, Ada\n"));
}

/// The stored plural collapse keeps the count template.
#[test]
fn test_translate_with_count() {
    let sb = sandbox();
    import(&sb);
    cascade_cmd(&sb)
        .arg("translate")
        .arg("inbox.messages")
        .arg("--locale")
        .arg("en")
        .arg("--count")
        .arg("5")
        .arg("--store")
        .arg(&sb.store)
        .assert()
        .success()
        .stdout(predicate::str::diff("5 messages\n"));
}

/// Resolution straight from bundles populates the store file.
#[test]
fn test_translate_from_bundles_populates_store() {
    let sb = sandbox();
    cascade_cmd(&sb)
        .arg("translate")
        .arg("greeting")
        .arg("--locale")
        .arg("en")
        .arg("--bundles")
        .arg(sb.dir.path())
        .arg("--store")
        .arg(&sb.store)
        .assert()
        .success()
        .stdout(predicate::str::diff("Hello, %{name}\n"));

    // the store file now holds the populated record; a second run
    // without bundles still resolves
    cascade_cmd(&sb)
        .arg("translate")
        .arg("greeting")
        .arg("--locale")
        .arg("en")
        .arg("--store")
        .arg(&sb.store)
        .assert()
        .success()
        .stdout(predicate::str::diff("Hello, %{name}\n"));
}

/// An unscoped miss echoes the key and exits successfully.
#[test]
fn test_translate_missing_key_echoes() {
    let sb = sandbox();
    cascade_cmd(&sb)
        .arg("translate")
        .arg("nothing.here")
        .arg("--locale")
        .arg("en")
        .arg("--store")
        .arg(&sb.store)
        .assert()
        .success()
        .stdout(predicate::str::diff("nothing.here\n"));
}

/// A scoped miss is a hard failure with the not-found exit code.
#[test]
fn test_translate_scoped_miss_fails() {
    let sb = sandbox();
    cascade_cmd(&sb)
        .arg("translate")
        .arg("missing")
        .arg("--scope")
        .arg("nav.menu")
        .arg("--locale")
        .arg("en")
        .arg("--store")
        .arg(&sb.store)
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("translation missing: en.nav.menu.missing"));
}

/// A scoped miss with a literal default resolves instead of failing.
#[test]
fn test_translate_scoped_miss_with_default() {
    let sb = sandbox();
    cascade_cmd(&sb)
        .arg("translate")
        .arg("missing")
        .arg("--scope")
        .arg("nav.menu")
        .arg("--default")
        .arg("fallback text")
        .arg("--locale")
        .arg("en")
        .arg("--store")
        .arg(&sb.store)
        .assert()
        .success()
        .stdout(predicate::str::diff("fallback text\n"));
}

/// Bulk resolution prints results in key order.
#[test]
fn test_translate_bulk_preserves_order() {
    let sb = sandbox();
    import(&sb);
    cascade_cmd(&sb)
        .arg("translate")
        .arg("farewell")
        .arg("greeting")
        .arg("--locale")
        .arg("en")
        .arg("--store")
        .arg(&sb.store)
        .assert()
        .success()
        .stdout(predicate::str::diff("Goodbye\nHello, %{name}\n"));
}

/// Locales are listed after an import.
#[test]
fn test_locales_after_import() {
    let sb = sandbox();
    import(&sb);
    cascade_cmd(&sb)
        .arg("locales")
        .arg("--store")
        .arg(&sb.store)
        .assert()
        .success()
        .stdout(predicate::str::diff("en\nes\n"));
}

/// An empty store reports that it is empty.
#[test]
fn test_locales_empty_store() {
    let sb = sandbox();
    cascade_cmd(&sb)
        .arg("locales")
        .arg("--store")
        .arg(&sb.store)
        .assert()
        .success()
        .stdout(predicate::str::contains("No locales in store"));
}
