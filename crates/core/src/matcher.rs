//! Fuzzy subsequence matching used to filter the script list.
//!
//! A pattern matches when all of its characters appear in the text in the
//! same order, ignoring case. There is no scoring: the visible list keeps the
//! manifest order and only membership is decided here.

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Returns true when every character of `pattern` appears in `text` in order.
///
/// An empty pattern matches any text.
///
/// # Examples
///
/// ```
/// use run_picker_core::matcher::matches;
///
/// assert!(matches("bd", "build"));
/// assert!(matches("BW", "build:watch"));
/// assert!(!matches("dlib", "build"));
/// ```
#[must_use]
pub fn matches(pattern: &str, text: &str) -> bool {
    match_positions(pattern, text).is_some()
}

/// Char indices of `text` consumed by a greedy left-to-right match of `pattern`.
///
/// Returns `None` when the pattern does not match.
#[must_use]
pub fn match_positions(pattern: &str, text: &str) -> Option<Vec<usize>> {
    let mut pattern_chars = pattern.chars().map(fold_case).peekable();
    let mut positions = Vec::new();

    for (index, c) in text.chars().enumerate() {
        let Some(&wanted) = pattern_chars.peek() else {
            break;
        };

        if wanted == fold_case(c) {
            positions.push(index);
            pattern_chars.next();
        }
    }

    pattern_chars.peek().is_none().then_some(positions)
}
