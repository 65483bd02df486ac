mod common;

use forms_scanner::i18n::catalog::Lang;
use forms_scanner::scan::question::QuestionType;
use forms_scanner::scan_html;

fn block(inner: &str) -> String {
    format!(
        r#"
        <div role="listitem">
          <div role="heading"><span>Answer the question shown below</span></div>
          {}
        </div>
        "#,
        inner
    )
}

fn type_of(inner: &str) -> QuestionType {
    let html = common::page(&[block(inner)]);
    let outcome = scan_html(&html, Lang::Uk);
    assert_eq!(outcome.questions.len(), 1, "fixture must yield one record");
    outcome.questions[0].question_type
}

// =========================================================================
// Classifier chain priority
// =========================================================================

#[test]
fn listbox_wins_over_everything_else() {
    let q = type_of(
        r#"<div role="listbox"><div role="option"><span>A1</span></div></div>
           <select><option>B</option></select>
           <textarea></textarea>"#,
    );
    assert_eq!(q, QuestionType::Radio);
}

#[test]
fn radiogroup_maps_to_radio() {
    let q = type_of(
        r#"<div role="radiogroup"><label><span dir="auto">Yes</span></label></div>"#,
    );
    assert_eq!(q, QuestionType::Radio);
}

#[test]
fn checkbox_beats_native_select() {
    let q = type_of(
        r#"<label><div role="checkbox"></div><span dir="auto">One</span></label>
           <select><option>Two</option></select>"#,
    );
    assert_eq!(q, QuestionType::Checkbox);
}

#[test]
fn text_input_beats_textarea() {
    let q = type_of(r#"<input type="text"><textarea></textarea>"#);
    assert_eq!(q, QuestionType::Text);
}

#[test]
fn textarea_alone_is_textarea() {
    let q = type_of("<textarea></textarea>");
    assert_eq!(q, QuestionType::Textarea);
}

#[test]
fn no_recognizable_field_defaults_to_unknown() {
    let q = type_of(r#"<p><span>Just some prose to read</span></p>"#);
    assert_eq!(q, QuestionType::Unknown);
}

// =========================================================================
// Required-ness inference
// =========================================================================

fn required_of(inner: &str) -> bool {
    let html = common::page(&[block(inner)]);
    let outcome = scan_html(&html, Lang::Uk);
    assert_eq!(outcome.questions.len(), 1, "fixture must yield one record");
    outcome.questions[0].required
}

#[test]
fn asterisk_in_block_text_marks_required() {
    assert!(required_of(r#"<input type="text"><span> * </span>"#));
}

#[test]
fn aria_label_marks_required_in_both_languages() {
    assert!(required_of(
        r#"<div role="radiogroup" aria-label="Required question"><label><span dir="auto">Yes</span></label></div>"#
    ));
    assert!(required_of(
        r#"<div role="radiogroup" aria-label="Обов'язкове питання"><label><span dir="auto">Так</span></label></div>"#
    ));
}

#[test]
fn native_required_attribute_marks_required() {
    assert!(required_of("<textarea required></textarea>"));
    assert!(required_of(r#"<input type="text" required>"#));
}

#[test]
fn plain_blocks_are_not_required() {
    assert!(!required_of(r#"<input type="text">"#));
    assert!(!required_of("<textarea></textarea>"));
}
