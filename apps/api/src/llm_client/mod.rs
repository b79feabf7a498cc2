/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Google API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: gemini-1.5-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::pdf::InlinePayload;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Maps a non-success provider response to `LlmError::Api`, extracting the
/// message from the JSON error envelope when one is present.
fn api_error(status: u16, body: String) -> LlmError {
    let message = serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    LlmError::Api { status, message }
}

/// The single LLM client used by all handlers.
/// One request per call: no retry, no backoff, no fallback model. The call
/// is bounded only by the HTTP client's own defaults.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Sends one generateContent request carrying the instruction, the
    /// rasterized resume page, and the job description — in that order.
    /// Returns the remote text verbatim; any provider failure propagates
    /// to the caller unmodified.
    pub async fn generate(
        &self,
        instruction: &str,
        resume_image: &InlinePayload,
        job_text: &str,
    ) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: instruction },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: &resume_image.mime_type,
                            data: &resume_image.data,
                        },
                    },
                    Part::Text { text: job_text },
                ],
            }],
        };

        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), body));
        }

        let reply: GenerateContentResponse = response.json().await?;
        debug!("LLM call succeeded: {} candidate(s)", reply.candidates.len());

        reply.text().ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_keeps_instruction_image_text_order() {
        let payload = InlinePayload {
            mime_type: "image/jpeg".to_string(),
            data: "QUJD".to_string(),
        };
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: "instruction",
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: &payload.mime_type,
                            data: &payload.data,
                        },
                    },
                    Part::Text { text: "job text" },
                ],
            }],
        };

        let json = serde_json::to_value(&body).unwrap();
        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "instruction");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[1]["inlineData"]["data"], "QUJD");
        assert_eq!(parts[2]["text"], "job text");
    }

    #[test]
    fn test_response_text_joins_first_candidate_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Strong "}, {"text": "fit."}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}], "role": "model"}}
            ]
        }"#;
        let reply: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(reply.text().unwrap(), "Strong fit.");
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let reply: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(reply.text().is_none());
    }

    #[test]
    fn test_api_error_extracts_envelope_message() {
        let body = r#"{"error": {"code": 429, "message": "Resource has been exhausted (e.g. check quota).", "status": "RESOURCE_EXHAUSTED"}}"#;
        let err = api_error(429, body.to_string());
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Resource has been exhausted (e.g. check quota).");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_api_error_passes_raw_body_through() {
        let err = api_error(502, "upstream unavailable".to_string());
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream unavailable");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }
}
