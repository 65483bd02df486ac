use crate::i18n::catalog::Catalog;
use crate::scan::question::{Question, QuestionType};

/// Serialize the question list into the human-readable instructional
/// block the copy action puts on the clipboard.
pub fn format_questions_for_copy(questions: &[Question], catalog: &Catalog) -> String {
    let instruction = catalog.text("copy_instruction");

    let body = questions
        .iter()
        .enumerate()
        .map(|(i, q)| format_one(i + 1, q, catalog))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}{}", instruction, body)
}

fn format_one(number: usize, q: &Question, catalog: &Catalog) -> String {
    let mut out = catalog.format(
        "question_prefix",
        &[("number", &number.to_string()), ("question", &q.question)],
    );

    for (i, img) in q.images.iter().enumerate() {
        out.push_str(&format!("🖼️ Image {}: {}\n", i + 1, img.src));
        if !img.alt.is_empty() {
            out.push_str(&format!("   Description: {}\n", img.alt));
        }
    }

    match q.question_type {
        QuestionType::Radio | QuestionType::Checkbox | QuestionType::Select => {
            out.push_str(&catalog.format(
                "options_prefix",
                &[("options", &q.options.join("(next variant) "))],
            ));
        }
        QuestionType::Text => out.push_str(catalog.text("text_answer")),
        QuestionType::Textarea => out.push_str(catalog.text("textarea_answer")),
        // Grid never comes out of the detector; this arm only fires for
        // records loaded from an external dump.
        QuestionType::Grid => {
            out.push_str(&catalog.format(
                "grid_answer",
                &[("count", &q.options.len().to_string())],
            ));
        }
        QuestionType::Unknown => {}
    }

    if q.required {
        out.push_str(catalog.text("required_question"));
    }

    out
}
