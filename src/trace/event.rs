use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::scan::question::ScanStats;

/// One JSONL trace record. Scan passes and Gemini round-trips share the
/// same shape; unused fields stay empty.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub event: String,

    pub origin: Option<String>,

    pub blocks_seen: Option<usize>,
    pub header_only_skipped: Option<usize>,
    pub duplicate_skipped: Option<usize>,
    pub empty_skipped: Option<usize>,
    pub questions: Option<usize>,

    /// SHA-1 fingerprints of the dedup identities, one per record.
    pub question_keys: Vec<String>,

    pub status: Option<u16>,
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(event: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            event: event.to_string(),
            origin: None,
            blocks_seen: None,
            header_only_skipped: None,
            duplicate_skipped: None,
            empty_skipped: None,
            questions: None,
            question_keys: vec![],
            status: None,
            detail: None,
        }
    }

    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin = Some(origin.to_string());
        self
    }

    pub fn with_stats(mut self, stats: &ScanStats) -> Self {
        self.blocks_seen = Some(stats.blocks_seen);
        self.header_only_skipped = Some(stats.header_only_skipped);
        self.duplicate_skipped = Some(stats.duplicate_skipped);
        self.empty_skipped = Some(stats.empty_skipped);
        self
    }

    pub fn with_questions(mut self, count: usize) -> Self {
        self.questions = Some(count);
        self
    }

    pub fn with_question_keys(mut self, keys: Vec<String>) -> Self {
        self.question_keys = keys;
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
