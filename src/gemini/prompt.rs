use crate::i18n::catalog::Catalog;
use crate::scan::question::Question;

/// Build the single text prompt sent to Gemini: one labelled block per
/// question under a fixed instruction header.
pub fn build_prompt(questions: &[Question], catalog: &Catalog) -> String {
    let body = questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let mut text = catalog.format(
                "question_label",
                &[("number", &(i + 1).to_string()), ("question", &q.question)],
            );
            text.push_str(&catalog.format("type_label", &[("type", q.question_type.as_str())]));
            if !q.options.is_empty() {
                text.push_str(
                    &catalog.format("options_label", &[("options", &q.options.join(", "))]),
                );
            }
            if q.required {
                text.push_str(catalog.text("required_label"));
            }
            text
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    catalog.format("gemini_prompt", &[("questions", &body)])
}
