//! English inflection helpers shared by every framework profile.
//!
//! `pluralize` is a deliberately simplified heuristic: it handles the
//! regular `s` suffix, the consonant-`y` to `ies` shift, and treats words
//! already ending in `s` as invariant ("business"). Irregular plurals and
//! the `-ch`/`-sh`/`-ss` sibilant endings are not handled.

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pluralize a lowercase singular noun. Idempotent for every supported
/// ending class: `pluralize(pluralize(x)) == pluralize(x)`.
pub fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        format!("{stem}ies")
    } else if word.ends_with('s') {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
