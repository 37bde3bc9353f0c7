#![deny(missing_docs)]

//! # Name Resolution
//!
//! Derives class names, accessor suffixes, and route segments from JSON keys.
//!
//! Singularization strips a single trailing `s`. This is a heuristic, not a
//! dictionary lookup: irregular plurals ("people", "criteria") pass through
//! untouched.

/// Uppercases the first character, leaving the rest of the name unchanged.
///
/// Keys with separators, digits, or existing mixed case are passed through
/// after the first-letter rule (`userName` -> `UserName`).
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strips one trailing `s` if present, otherwise returns the name unchanged.
pub fn singularize(name: &str) -> &str {
    name.strip_suffix('s').unwrap_or(name)
}

/// Getter/setter suffix for a field name (`count` -> `Count`).
///
/// No escaping of Java reserved words is attempted.
pub fn accessor_suffix(name: &str) -> String {
    capitalize_first(name)
}

/// Lowercased, pluralized URL segment for an entity (`Order` -> `orders`).
pub fn plural_path_segment(entity: &str) -> String {
    format!("{}s", entity.to_lowercase())
}
