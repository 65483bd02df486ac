use serde::{Deserialize, Serialize};

use crate::error::ScanError;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Client for the generateContent endpoint of the Gemini API.
///
/// One attempt per call; failures surface as `ScanError` and are never
/// retried.
pub struct GeminiClient {
    pub endpoint: String,
    pub model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> Self {
        GeminiClient {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }

    /// Send one prompt and return the first candidate's text.
    pub fn generate(&self, prompt: &str) -> Result<String, ScanError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig::default(),
        };

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(self.url())
            .json(&request)
            .send()
            .map_err(|e| ScanError::Http {
                context: "generateContent request".into(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| ScanError::Http {
            context: "generateContent response body".into(),
            source: e,
        })?;

        decode_response(&body)
    }
}

/// Decode a generateContent response body into its candidate text.
/// A 200 with an unexpected shape is a typed failure, not a panic.
pub fn decode_response(body: &str) -> Result<String, ScanError> {
    let parsed: GenerateResponse = serde_json::from_str(body).map_err(|e| ScanError::Json {
        context: "generateContent response".into(),
        source: e,
    })?;
    extract_candidate_text(parsed)
}

/// Walk the nested candidate structure with a typed failure at each
/// level instead of an unguarded field access.
fn extract_candidate_text(body: GenerateResponse) -> Result<String, ScanError> {
    let candidate = body
        .candidates
        .into_iter()
        .next()
        .ok_or(ScanError::MalformedResponse {
            context: "candidates[0]".into(),
        })?;

    let content = candidate.content.ok_or(ScanError::MalformedResponse {
        context: "candidates[0].content".into(),
    })?;

    let part = content
        .parts
        .into_iter()
        .next()
        .ok_or(ScanError::MalformedResponse {
            context: "candidates[0].content.parts[0]".into(),
        })?;

    Ok(part.text)
}
