use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::scan::question::QuestionType;
use crate::scan::sel;
use crate::scan::text::block_text;

/// Ordered classifier chain: the first matching probe wins, and the
/// fallthrough default is explicit. Google renders its dropdowns as
/// listboxes, which the original tool treated as radio questions.
static TYPE_CHAIN: LazyLock<Vec<(Selector, QuestionType)>> = LazyLock::new(|| {
    vec![
        (sel(r#"[role="listbox"]"#), QuestionType::Radio),
        (sel(r#"[role="radiogroup"]"#), QuestionType::Radio),
        (sel(r#"[role="checkbox"]"#), QuestionType::Checkbox),
        (sel("select"), QuestionType::Select),
        (sel(r#"input[type="text"]"#), QuestionType::Text),
        (sel("textarea"), QuestionType::Textarea),
    ]
});

static REQUIRED_ARIA: LazyLock<Selector> = LazyLock::new(|| {
    sel(
        r#"[aria-label*="Required"], [aria-label*="required"], [aria-label*="Обов'язкове"], [aria-label*="обов'язкове"]"#,
    )
});
static REQUIRED_NATIVE: LazyLock<Selector> =
    LazyLock::new(|| sel("textarea[required], input[required]"));

pub fn detect_question_type(block: &ElementRef) -> QuestionType {
    TYPE_CHAIN
        .iter()
        .find(|(probe, _)| block.select(probe).next().is_some())
        .map(|(_, kind)| *kind)
        .unwrap_or(QuestionType::Unknown)
}

/// Required-ness comes from an accessibility label, a literal asterisk
/// marker anywhere in the block, or a native required attribute.
pub fn is_required(block: &ElementRef) -> bool {
    block.select(&REQUIRED_ARIA).next().is_some()
        || block_text(block).contains('*')
        || block.select(&REQUIRED_NATIVE).next().is_some()
}
