//! Title normalization shared by every named entity.

/// Trim and title-case `raw`, falling back to `default` when nothing is left.
///
/// Every run of letters starts upper-case and continues lower-case, so
/// `"  intro to RUST "` becomes `"Intro To Rust"`.
pub fn normalize_title(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default.to_string();
    }

    let mut title = String::with_capacity(trimmed.len());
    let mut in_word = false;
    for ch in trimmed.chars() {
        if ch.is_alphabetic() {
            if in_word {
                title.extend(ch.to_lowercase());
            } else {
                title.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(ch);
            in_word = false;
        }
    }
    title
}
