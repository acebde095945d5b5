//! Common test utilities.

use std::path::PathBuf;

use tempfile::TempDir;

/// A minimal bundle with plain, interpolated, and plural values.
pub const BUNDLE: &str = r#"
en:
  greeting: "Hello, %{name}"
  farewell: "Goodbye"
  inbox:
    messages:
      one: "1 message"
      other: "%{count} messages"
es:
  farewell: "Adios"
"#;

/// A sandbox holding a bundle file and paths for store/config state.
pub struct Sandbox {
    pub dir: TempDir,
    pub bundle: PathBuf,
    pub store: PathBuf,
}

/// Create a temp directory seeded with the default bundle file.
pub fn sandbox() -> Sandbox {
    let dir = TempDir::new().expect("create tempdir");
    let bundle = dir.path().join("app.yml");
    std::fs::write(&bundle, BUNDLE).expect("write bundle");
    let store = dir.path().join("translations.json");
    Sandbox { dir, bundle, store }
}
