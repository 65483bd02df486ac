use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::scan::sel;

/// Instructional phrases that mark a block as a section header rather
/// than an answerable question (English and Ukrainian forms).
pub const HEADER_PHRASES: &[&str] = &[
    "choose the correct word or form to complete the sentence",
    "виберіть правильне слово або форму для завершення речення",
    "choose the correct",
    "виберіть правильне",
];

/// Substrings that identify form chrome spans, not question text.
/// Matching is substring-based, so "Required" also covers
/// "Required question" and "бал" covers "балів".
const CHROME_PHRASES: &[&str] = &[
    "*",
    "Your answer",
    "Ваша відповідь",
    "Required",
    "Обов'язкове",
    "Choose",
    "Виберіть",
    "point",
    "бал",
];

static HEADING_SPAN: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"[role="heading"] span"#));
static HEADING_LEVEL3_SPAN: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"[role="heading"][aria-level="3"] span"#));
static ANY_SPAN: LazyLock<Selector> = LazyLock::new(|| sel("span"));
static LISTBOX: LazyLock<Selector> = LazyLock::new(|| sel(r#"[role="listbox"]"#));

/// Full text content of an element, concatenated and trimmed.
pub fn block_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// A block is header-only when it matches a known instructional phrase
/// and carries no listbox, or when it has almost no text at all.
pub fn is_header_only(block: &ElementRef) -> bool {
    let text = block_text(block).to_lowercase();
    let matches_header = HEADER_PHRASES.iter().any(|p| text.contains(p));
    let has_listbox = block.select(&LISTBOX).next().is_some();

    (matches_header && !has_listbox) || text.chars().count() < 10
}

/// Extract the question label from a block.
///
/// Priority: heading span with substantial text, then a level-3 heading
/// span, then the first span that is not recognizable form chrome.
/// Returns an empty string when nothing plausible is found.
pub fn extract_question_text(block: &ElementRef) -> String {
    if let Some(span) = block.select(&HEADING_SPAN).next() {
        let text = block_text(&span);
        if text.chars().count() > 10 {
            return text;
        }
    }

    if let Some(span) = block.select(&HEADING_LEVEL3_SPAN).next() {
        let text = block_text(&span);
        if !text.is_empty() {
            return text;
        }
    }

    for span in block.select(&ANY_SPAN) {
        let text = block_text(&span);
        if !text.is_empty() && !is_chrome_text(&text) {
            return text;
        }
    }

    String::new()
}

fn is_chrome_text(text: &str) -> bool {
    CHROME_PHRASES.iter().any(|p| text.contains(p))
}
