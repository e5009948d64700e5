//! Key derivation from component display names.
//!
//! `HeroSection` becomes `hero`, `ProductCard` becomes `productCard`.

use lazy_static::lazy_static;
use regex::Regex;

/// Suffix stripped from display names unless configured otherwise.
pub const DEFAULT_KEY_SUFFIX: &str = "Section";

lazy_static! {
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap();
}

/// Derive the lookup key for a display name.
///
/// Strips `suffix` once when the name ends with it, then lower-cases the first
/// character only. Never fails; non-conforming names pass through mostly as-is.
pub fn derive_key(display_name: &str, suffix: &str) -> String {
    let base = if suffix.is_empty() {
        display_name
    } else {
        display_name.strip_suffix(suffix).unwrap_or(display_name)
    };
    lower_first(base)
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `name` can be bound as a JavaScript identifier in the artifact.
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name)
}
