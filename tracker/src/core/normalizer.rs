//! Attendee name canonicalization
//!
//! Names are compared for duplicates and displayed in their normalized form,
//! so both sides of every comparison pass through [`normalize`].

/// Trim, collapse whitespace runs to a single space and title-case each word.
///
/// Whitespace-only input yields an empty string; callers treat that as a
/// missing name.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(word.len());
    let mut upper = first.to_uppercase();
    // Multi-char expansions (e.g. 'ß' -> "SS") would not survive a second
    // pass unchanged, so those keep their lowercase form.
    match (upper.next(), upper.next()) {
        (Some(single), None) => out.push(single),
        _ => out.extend(first.to_lowercase()),
    }
    out.push_str(&chars.as_str().to_lowercase());
    out
}
