use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::i18n::catalog::Catalog;
use crate::scan::detect::{detect_question_type, is_required};
use crate::scan::images::extract_images;
use crate::scan::options::extract_options;
use crate::scan::question::{
    Question, QuestionImage, ScanOutcome, ScanStats, question_fingerprint,
};
use crate::scan::sel;
use crate::scan::text::{HEADER_PHRASES, extract_question_text, is_header_only};

static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| sel(r#"[role="listitem"]"#));

/// Single-pass scan over a rendered form document.
///
/// Walks every accessibility list item, skips header-only blocks,
/// de-duplicates by question identity, and degrades element-level
/// misses to empty values rather than failing the scan.
pub fn parse_form(doc: &Html, catalog: &Catalog) -> ScanOutcome {
    let mut questions = Vec::new();
    let mut question_keys = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut stats = ScanStats::default();

    for block in doc.select(&LIST_ITEM) {
        stats.blocks_seen += 1;

        if is_header_only(&block) {
            stats.header_only_skipped += 1;
            continue;
        }

        let question_text = extract_question_text(&block);
        let images = extract_images(&block);

        let Some(identity) = dedup_identity(&question_text, &images) else {
            stats.empty_skipped += 1;
            continue;
        };

        if seen.contains(&identity) {
            stats.duplicate_skipped += 1;
            continue;
        }

        // A heading can still carry the instructional sentence even when
        // the block holds a listbox; those never become questions.
        let lower = question_text.to_lowercase();
        if HEADER_PHRASES[..2].iter().any(|p| lower.contains(p)) {
            stats.header_only_skipped += 1;
            continue;
        }

        question_keys.push(question_fingerprint(&identity));
        seen.insert(identity);

        let question = if question_text.is_empty() {
            catalog.format("image_placeholder", &[("count", &images.len().to_string())])
        } else {
            question_text
        };

        questions.push(Question {
            question,
            question_type: detect_question_type(&block),
            options: extract_options(&block),
            required: is_required(&block),
            answer: None,
            images,
        });
    }

    ScanOutcome {
        questions,
        question_keys,
        stats,
    }
}

/// Dedup identity: the extracted text, or a synthetic key from the
/// first image's address. A block with neither is dropped.
pub fn dedup_identity(text: &str, images: &[QuestionImage]) -> Option<String> {
    if !text.is_empty() {
        return Some(text.to_string());
    }
    images.first().map(|img| format!("image_{}", img.src))
}
