// src/util/text.rs

/// Shorten note content to its first non-empty line, at most `max_chars` long.
///
/// Truncated lines end with an ellipsis, which counts toward the limit.
///
/// # Examples
///
/// ```
/// use notehub::util::text::preview;
///
/// assert_eq!(preview("\nBuy milk\nand eggs", 40), "Buy milk");
/// assert_eq!(preview("abcdefghij", 5), "abcd…");
/// ```
pub fn preview(content: &str, max_chars: usize) -> String {
    let line = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    if line.chars().count() <= max_chars {
        return line.to_string();
    }

    let mut shortened: String = line.chars().take(max_chars.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
