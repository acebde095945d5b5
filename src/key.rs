//! Derived-key codec.
//!
//! Cache and persistent-store entries share one identity: the derived key,
//! a `"<locale-code>:<digest>"` string built from the locale code and a
//! digest of the scope-qualified logical key. The digest must be stable
//! across processes and versions—persisted store contents are keyed by it.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Prefix a logical key with its scope segments.
///
/// `qualify("missing", &["nav", "menu"])` is `"nav.menu.missing"`; an empty
/// scope returns the key unchanged.
pub fn qualify(key: &str, scope: &[String]) -> String {
    if scope.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", scope.join("."), key)
    }
}

/// Digest a qualified key into a printable token.
///
/// BLAKE3 over the key bytes, base64 URL-safe no-pad encoded. Deterministic
/// and safe for embedding in store keys; collision resistance well beyond
/// what any translation corpus needs.
pub fn hash_key(key: &str) -> String {
    URL_SAFE_NO_PAD.encode(blake3::hash(key.as_bytes()).as_bytes())
}

/// Build the derived key for a (locale, qualified key) pair.
///
/// Format: `"<locale-code>:<digest(qualified-key)>"`.
pub fn cache_key(locale_code: &str, qualified_key: &str) -> String {
    format!("{}:{}", locale_code, hash_key(qualified_key))
}
