use std::fmt;

#[derive(Debug)]
pub enum ScanError {
    /// Reading a saved page or prefs file failed
    Io { context: String, source: std::io::Error },

    /// HTTP transport failure (page fetch or Gemini call)
    Http { context: String, source: reqwest::Error },

    /// Gemini returned a non-success status
    Api { status: u16 },

    /// Page fetch returned a non-success status
    Fetch { url: String, status: u16 },

    /// Gemini returned 2xx but the candidate text is missing
    MalformedResponse { context: String },

    /// JSON encode/decode failed (question dumps, prefs)
    Json { context: String, source: serde_json::Error },

    /// The target URL is not a Google Forms page
    NotAForm { url: String },

    /// Clipboard access failed
    Clipboard(String),

    /// Bad command-line usage (e.g. no page source given)
    Usage(String),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io { context, source } => {
                write!(f, "I/O error ({}): {}", context, source)
            }
            ScanError::Http { context, source } => {
                write!(f, "HTTP error ({}): {}", context, source)
            }
            ScanError::Api { status } => {
                write!(f, "Gemini API error: {}", status)
            }
            ScanError::Fetch { url, status } => {
                write!(f, "Fetching {} failed with status {}", url, status)
            }
            ScanError::MalformedResponse { context } => {
                write!(f, "Malformed Gemini response: missing {}", context)
            }
            ScanError::Json { context, source } => {
                write!(f, "JSON error ({}): {}", context, source)
            }
            ScanError::NotAForm { url } => {
                write!(f, "Not a Google Forms page: {}", url)
            }
            ScanError::Clipboard(msg) => {
                write!(f, "Clipboard error: {}", msg)
            }
            ScanError::Usage(msg) => {
                write!(f, "Usage error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io { source, .. } => Some(source),
            ScanError::Http { source, .. } => Some(source),
            ScanError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
