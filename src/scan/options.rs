use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::scan::sel;
use crate::scan::text::block_text;

/// Placeholder entries Google injects into choice widgets. These are
/// never real options, in either supported language.
const PLACEHOLDER_OPTIONS: &[&str] = &[
    "Choose",
    "Select",
    "Виберіть",
    "Обрати",
    "Choose...",
    "Select...",
    "Виберіть...",
    "Обрати...",
];

static LISTBOX_OPTION: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"[role="listbox"] [role="option"]"#));
static RADIO_LABEL: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"[role="radiogroup"] label"#));
static CHECKBOX: LazyLock<Selector> = LazyLock::new(|| sel(r#"[role="checkbox"]"#));
static SELECT_OPTION: LazyLock<Selector> = LazyLock::new(|| sel("select option"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| sel("span"));
static SPAN_DIR_AUTO: LazyLock<Selector> = LazyLock::new(|| sel(r#"span[dir="auto"]"#));

/// Extract choice labels by role-specific traversal, filtering
/// placeholders and de-duplicating while preserving first-seen order.
pub fn extract_options(block: &ElementRef) -> Vec<String> {
    let mut options = Vec::new();

    // Dropdown rendered as a listbox
    for option in block.select(&LISTBOX_OPTION) {
        if let Some(span) = option.select(&SPAN).next() {
            push_option(&mut options, block_text(&span));
        }
    }

    // Radio group: each option sits in a label
    for label in block.select(&RADIO_LABEL) {
        if let Some(span) = label.select(&SPAN).next() {
            push_option(&mut options, block_text(&span));
        }
    }

    // Checkboxes: the label text lives next to the checkbox role node
    for checkbox in block.select(&CHECKBOX) {
        if let Some(label) = enclosing_label(&checkbox) {
            if let Some(span) = label.select(&SPAN_DIR_AUTO).next() {
                push_option(&mut options, block_text(&span));
            }
        }
    }

    // Native select fallback
    for option in block.select(&SELECT_OPTION) {
        push_option(&mut options, block_text(&option));
    }

    dedup_preserving_order(options)
}

fn push_option(options: &mut Vec<String>, text: String) {
    if !text.is_empty() && !PLACEHOLDER_OPTIONS.contains(&text.as_str()) {
        options.push(text);
    }
}

fn enclosing_label<'a>(el: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == "label")
}

fn dedup_preserving_order(options: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    options
        .into_iter()
        .filter(|o| seen.insert(o.clone()))
        .collect()
}
