//! String utilities for the domain layer.

/// Cut `s` down to at most `max_chars` characters.
///
/// Returns a sub-slice, so the cut never lands inside a UTF-8 sequence.
pub fn clip_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Single-line preview of a message for logs and status lines.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let clipped = clip_chars(&flat, max_chars);
    if clipped.len() < flat.len() {
        format!("{}...", clipped)
    } else {
        flat
    }
}
