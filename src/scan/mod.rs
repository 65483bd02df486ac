pub mod detect;
pub mod images;
pub mod options;
pub mod parser;
pub mod question;
pub mod text;

use scraper::Selector;

/// Parse a selector known at compile time. Panics only on a typo in a
/// literal, never on page content.
pub(crate) fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad static selector {:?}: {:?}", css, e))
}
