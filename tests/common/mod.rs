#![allow(dead_code)] // not every test binary uses every fixture

//! HTML fixtures modelled on the markup Google Forms actually renders:
//! one `[role="listitem"]` per question block, headings for labels,
//! ARIA roles for the choice widgets.

/// Radio question with three options, marked required both ways the
/// page does it (aria-label and the asterisk glyph).
pub fn radio_block_required() -> String {
    r#"
    <div role="listitem">
      <div role="heading" aria-level="3"><span>What is the capital of France?</span></div>
      <span aria-label="Required question">*</span>
      <div role="radiogroup" aria-label="What is the capital of France? Required question">
        <label><div role="radio"></div><span dir="auto">Paris</span></label>
        <label><div role="radio"></div><span dir="auto">Lyon</span></label>
        <label><div role="radio"></div><span dir="auto">Marseille</span></label>
      </div>
    </div>
    "#
    .to_string()
}

/// Checkbox question, not required.
pub fn checkbox_block() -> String {
    r#"
    <div role="listitem">
      <div role="heading"><span>Select every prime number shown</span></div>
      <div role="list">
        <label><div role="checkbox" aria-checked="false"></div><span dir="auto">Two</span></label>
        <label><div role="checkbox" aria-checked="false"></div><span dir="auto">Three</span></label>
        <label><div role="checkbox" aria-checked="false"></div><span dir="auto">Four</span></label>
      </div>
    </div>
    "#
    .to_string()
}

/// Dropdown rendered as a listbox; the detector reports these as radio.
/// Includes the placeholder entry the page always injects.
pub fn listbox_block() -> String {
    r#"
    <div role="listitem">
      <div role="heading"><span>Pick the right verb form here</span></div>
      <div role="listbox">
        <div role="option"><span>Choose</span></div>
        <div role="option"><span>goes</span></div>
        <div role="option"><span>go</span></div>
        <div role="option"><span>gone</span></div>
      </div>
    </div>
    "#
    .to_string()
}

/// Native select fallback with a localized placeholder and a duplicated
/// option.
pub fn select_block() -> String {
    r#"
    <div role="listitem">
      <div role="heading"><span>Where do you currently live?</span></div>
      <select>
        <option>Виберіть...</option>
        <option>Ukraine</option>
        <option>France</option>
        <option>Ukraine</option>
      </select>
    </div>
    "#
    .to_string()
}

/// Short-answer text input.
pub fn text_block() -> String {
    r#"
    <div role="listitem">
      <div role="heading"><span>Write your favourite colour below</span></div>
      <span>Your answer</span>
      <input type="text">
    </div>
    "#
    .to_string()
}

/// Paragraph answer with a native required attribute.
pub fn textarea_block_required() -> String {
    r#"
    <div role="listitem">
      <div role="heading"><span>Describe your last holiday trip</span></div>
      <textarea required></textarea>
    </div>
    "#
    .to_string()
}

/// Block whose only identity is an embedded image: every span is form
/// chrome, so the question text comes out empty.
pub fn image_only_block() -> String {
    r#"
    <div role="listitem">
      <img src="https://lh3.googleusercontent.com/diagram1" alt="circuit diagram">
      <span>Ваша відповідь</span>
      <input type="text">
    </div>
    "#
    .to_string()
}

/// Image block that also carries an inline SVG icon the scraper must skip.
pub fn image_block_with_svg_icon() -> String {
    r#"
    <div role="listitem">
      <img src="data:image/svg+xml;base64,PHN2Zz48L3N2Zz4=" alt="icon">
      <img src="https://lh3.googleusercontent.com/photo42" alt="">
      <span>Ваша відповідь</span>
      <input type="text">
    </div>
    "#
    .to_string()
}

/// Header-only instructional block: matches a known phrase and has no
/// listbox, so it never becomes a question.
pub fn header_block() -> String {
    r#"
    <div role="listitem">
      <div role="heading"><span>Choose the correct word or form to complete the sentence</span></div>
    </div>
    "#
    .to_string()
}

/// Instructional block that nevertheless carries a listbox: the
/// listbox exempts it from the header-only check, but its heading
/// matches the full instructional phrase so it is dropped later
/// anyway, after text extraction.
pub fn header_block_with_listbox() -> String {
    r#"
    <div role="listitem">
      <div role="heading"><span>Choose the correct word or form to complete the sentence</span></div>
      <div role="listbox">
        <div role="option"><span>goes</span></div>
        <div role="option"><span>go</span></div>
      </div>
    </div>
    "#
    .to_string()
}

/// Block with almost no text; dropped by the length heuristic.
pub fn short_block() -> String {
    r#"<div role="listitem"><span>Hi</span></div>"#.to_string()
}

/// Block with neither question text nor an image; dropped entirely.
pub fn empty_identity_block() -> String {
    r#"
    <div role="listitem">
      <span>Your answer</span>
      <span>Required question</span>
    </div>
    "#
    .to_string()
}

/// No recognizable field at all: classifier falls through to unknown.
pub fn unknown_block() -> String {
    r#"
    <div role="listitem">
      <div role="heading"><span>Read the passage before you continue working</span></div>
    </div>
    "#
    .to_string()
}

/// Wrap blocks in the surrounding page the way the form renders them.
pub fn page(blocks: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>Quiz</title></head><body>
        <div role="list">{}</div>
        </body></html>"#,
        blocks.concat()
    )
}
