//! Text helpers shared by the extractors and analyzers.

use scraper::ElementRef;

/// Concatenated text content of an element, trimmed.
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Length in characters (not bytes), so thresholds behave the same for
/// non-ASCII text.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncates to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if char_len(text) <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}
