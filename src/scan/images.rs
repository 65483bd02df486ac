use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::scan::question::QuestionImage;
use crate::scan::sel;

static IMG: LazyLock<Selector> = LazyLock::new(|| sel("img"));

/// Collect embedded images from a question block, skipping inline SVG
/// placeholders the page uses for decorative icons.
pub fn extract_images(block: &ElementRef) -> Vec<QuestionImage> {
    let mut images = Vec::new();

    for (i, img) in block.select(&IMG).enumerate() {
        let src = match img.value().attr("src") {
            Some(s) if !s.is_empty() => s,
            _ => continue,
        };

        if src.contains("data:image/svg+xml") {
            continue;
        }

        let alt = img
            .value()
            .attr("alt")
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Image {}", i + 1));
        let title = img.value().attr("title").unwrap_or("").to_string();

        images.push(QuestionImage {
            src: src.to_string(),
            alt,
            title,
            index: i + 1,
        });
    }

    images
}
