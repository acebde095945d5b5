//! Post-processing: pluralization and `%{name}` interpolation.
//!
//! Both are pure functions over already-resolved values; the resolver
//! applies pluralization first, then interpolation.

use std::collections::BTreeMap;

use crate::fallback::FallbackValue;

/// Select the plural category for a count under a locale's rule.
///
/// Covers the one/other split used by bundle leaves. French-family locales
/// treat 0 and 1 as singular; everything else is singular only at exactly 1.
pub fn plural_category(locale: &str, count: i64) -> &'static str {
    let language = locale.split(['-', '_']).next().unwrap_or(locale);
    let one = match language {
        "fr" | "pt" => (0..=1).contains(&count),
        _ => count == 1,
    };
    if one { "one" } else { "other" }
}

/// Reduce a resolved value to a single string by plural branch selection.
///
/// Plain text passes through untouched. For plural mappings the branch is
/// chosen by `count` and the locale rule, falling back to `other` when the
/// chosen branch is absent; without a count the `other` branch is used.
/// `None` means the mapping had no usable branch.
pub fn pluralize(locale: &str, value: &FallbackValue, count: Option<i64>) -> Option<String> {
    match value {
        FallbackValue::Text(s) => Some(s.clone()),
        FallbackValue::Plural(branches) => {
            let category = count.map_or("other", |n| plural_category(locale, n));
            branches
                .get(category)
                .or_else(|| branches.get("other"))
                .cloned()
        }
    }
}

/// Substitute `%{name}` tokens from the variable map.
///
/// Single pass; substituted values are not re-scanned. Tokens with no
/// matching variable are left in place.
pub fn interpolate(template: &str, vars: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match vars.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("%{");
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                // unterminated token, emit verbatim
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
