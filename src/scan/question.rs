use serde::{Deserialize, Serialize};

/// One extracted form question. Produced fresh on every scan; never
/// persisted beyond the JSON dump the user asks for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question: String,

    #[serde(rename = "type")]
    pub question_type: QuestionType,

    /// Ordered, de-duplicated choice labels. Empty for free-text types.
    pub options: Vec<String>,

    pub required: bool,

    /// Reserved; never filled in by the scanner.
    pub answer: Option<String>,

    pub images: Vec<QuestionImage>,
}

/// Field type, decided by an ordered classifier chain.
///
/// `Grid` is never produced by the detector; it exists so the copy
/// formatter can render grid records carried in from external dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Radio,
    Checkbox,
    Select,
    Text,
    Textarea,
    Grid,
    Unknown,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Radio => "radio",
            QuestionType::Checkbox => "checkbox",
            QuestionType::Select => "select",
            QuestionType::Text => "text",
            QuestionType::Textarea => "textarea",
            QuestionType::Grid => "grid",
            QuestionType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image embedded in a question block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionImage {
    pub src: String,
    pub alt: String,
    pub title: String,
    /// 1-based position within the block.
    pub index: usize,
}

/// Per-scan counters, reported in trace events and verbose output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub blocks_seen: usize,
    pub header_only_skipped: usize,
    pub duplicate_skipped: usize,
    pub empty_skipped: usize,
}

/// Result of one scan pass.
#[derive(Debug)]
pub struct ScanOutcome {
    pub questions: Vec<Question>,

    /// SHA-1 fingerprint of each record's dedup identity, in record
    /// order. Stable across languages, unlike the rendered question
    /// text (image placeholders localize).
    pub question_keys: Vec<String>,

    pub stats: ScanStats,
}

/// Stable fingerprint of a question's dedup identity, for trace events.
pub fn question_fingerprint(identity: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(identity.as_bytes());
    format!("{:x}", hasher.finalize())
}
