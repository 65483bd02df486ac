use serde::{Deserialize, Serialize};

/// Supported UI languages. Ukrainian is the historical default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Uk,
    En,
}

impl Lang {
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "uk" => Some(Lang::Uk),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lang::Uk => "uk",
            Lang::En => "en",
        }
    }
}

/// Message catalog bound to one language. Passed explicitly into every
/// formatting call instead of being read from shared state.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    lang: Lang,
}

impl Catalog {
    pub fn new(lang: Lang) -> Self {
        Catalog { lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Plain message lookup. Unknown keys fall back to Ukrainian, then
    /// to the key itself.
    pub fn text(&self, key: &'static str) -> &'static str {
        lookup(self.lang, key)
            .or_else(|| lookup(Lang::Uk, key))
            .unwrap_or(key)
    }

    /// Lookup plus `{name}` placeholder substitution.
    pub fn format(&self, key: &'static str, params: &[(&str, &str)]) -> String {
        let mut out = self.text(key).to_string();
        for (name, value) in params {
            out = out.replace(&format!("{{{}}}", name), value);
        }
        out
    }
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    let msg = match (lang, key) {
        // ---- status line ----
        (Lang::Uk, "ready") => "Готовий до роботи",
        (Lang::En, "ready") => "Ready to work",
        (Lang::Uk, "scanning") => "Сканування форми...",
        (Lang::En, "scanning") => "Scanning form...",
        (Lang::Uk, "not_a_form") => "❌ Відкрийте Google Forms для сканування",
        (Lang::En, "not_a_form") => "❌ Open Google Forms to scan",
        (Lang::Uk, "questions_found") => "✅ Знайдено {count} питань",
        (Lang::En, "questions_found") => "✅ Found {count} questions",
        (Lang::Uk, "no_questions") => "❌ Не вдалося знайти питання у формі",
        (Lang::En, "no_questions") => "❌ Could not find questions in the form",
        (Lang::Uk, "scan_error") => "❌ Помилка сканування форми",
        (Lang::En, "scan_error") => "❌ Form scanning error",
        (Lang::Uk, "scan_first") => "❌ Спочатку проскануйте форму",
        (Lang::En, "scan_first") => "❌ Scan the form first",
        (Lang::Uk, "data_copied") => "✅ Дані скопійовано в буфер обміну",
        (Lang::En, "data_copied") => "✅ Data copied to clipboard",
        (Lang::Uk, "copy_error") => "❌ Помилка копіювання",
        (Lang::En, "copy_error") => "❌ Copy error",
        (Lang::Uk, "enter_api_key") => "❌ Введіть API ключ Gemini",
        (Lang::En, "enter_api_key") => "❌ Enter Gemini API key",
        (Lang::Uk, "sending_to_gemini") => "🤖 Відправка в Gemini...",
        (Lang::En, "sending_to_gemini") => "🤖 Sending to Gemini...",
        (Lang::Uk, "response_received") => "✅ Відповідь отримано",
        (Lang::En, "response_received") => "✅ Response received",
        (Lang::Uk, "gemini_error") => "❌ Помилка відправки в Gemini",
        (Lang::En, "gemini_error") => "❌ Gemini sending error",

        // ---- scanner placeholders ----
        (Lang::Uk, "image_placeholder") => "[Зображення {count}]",
        (Lang::En, "image_placeholder") => "[Image {count}]",

        // ---- copy format ----
        (Lang::Uk, "copy_instruction") => {
            "Виріши ці завдання та дай коротку відповідь по кожному питанню у відповіді пиши номер питання само питання повністю та відповідь:\n\n"
        }
        (Lang::En, "copy_instruction") => {
            "Solve these tasks and give a short answer for each question. In your answer write the question number, the full question and the answer:\n\n"
        }
        (Lang::Uk, "question_prefix") => "❓ Питання {number}: {question}\n",
        (Lang::En, "question_prefix") => "❓ Question {number}: {question}\n",
        (Lang::Uk, "options_prefix") => "🔘 Варіанти: {options}\n",
        (Lang::En, "options_prefix") => "🔘 Options: {options}\n",
        (Lang::Uk, "text_answer") => "✏️ Відповідь: [короткий текст]\n",
        (Lang::En, "text_answer") => "✏️ Answer: [short text]\n",
        (Lang::Uk, "textarea_answer") => "✏️ Відповідь: [розгорнута відповідь]\n",
        (Lang::En, "textarea_answer") => "✏️ Answer: [detailed answer]\n",
        (Lang::Uk, "grid_answer") => "📊 Сітка: {count} колонок\n",
        (Lang::En, "grid_answer") => "📊 Grid: {count} columns\n",
        (Lang::Uk, "required_question") => "⚠️ Обов'язкове питання\n",
        (Lang::En, "required_question") => "⚠️ Required question\n",

        // ---- Gemini prompt ----
        (Lang::Uk, "gemini_prompt") => {
            "Аналізуючи питання ти маєш обрати лише варіант або варіанти як надані в питаннях\n{questions}"
        }
        (Lang::En, "gemini_prompt") => {
            "When analyzing questions you must choose only the option or options as provided in the questions\n{questions}"
        }
        (Lang::Uk, "question_label") => "Питання {number}: {question}\n",
        (Lang::En, "question_label") => "Question {number}: {question}\n",
        (Lang::Uk, "type_label") => "Тип: {type}\n",
        (Lang::En, "type_label") => "Type: {type}\n",
        (Lang::Uk, "options_label") => "Варіанти: {options}\n",
        (Lang::En, "options_label") => "Options: {options}\n",
        (Lang::Uk, "required_label") => "Обов'язкове питання\n",
        (Lang::En, "required_label") => "Required question\n",

        _ => return None,
    };
    Some(msg)
}
