use scraper::Html;

use crate::i18n::catalog::{Catalog, Lang};
use crate::scan::parser::parse_form;
use crate::scan::question::ScanOutcome;

pub mod cli;
pub mod error;
pub mod gemini;
pub mod i18n;
pub mod output;
pub mod page;
pub mod scan;
pub mod store;
pub mod trace;

/// Scan a rendered form document: parse the HTML and walk its
/// accessibility list items into question records.
pub fn scan_html(html: &str, lang: Lang) -> ScanOutcome {
    let doc = Html::parse_document(html);
    parse_form(&doc, &Catalog::new(lang))
}
