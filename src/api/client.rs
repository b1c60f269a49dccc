//! Client for the Gemini `generateContent` REST endpoint.
//!
//! This module provides the `AiClient` used for goal suggestions and
//! reflection insights. The boundary is deliberately thin: one prompt in,
//! trimmed text out, no retry policy.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Dimension, Reflection};

use super::AiError;

// ============================================================================
// Constants
// ============================================================================

/// Base URL for the Gemini REST API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// HTTP request timeout in seconds.
/// Suggestion calls show a pending state in the UI; 30s fails fast enough
/// to keep that honest while allowing slow generations through.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API key. `.env` files are honored.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Gemini API client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AiClient {
    client: Client,
    model: String,
    api_key: Option<String>,
}

impl AiClient {
    /// Create a client for `model`. The key is read from the environment
    /// once here; a missing key only surfaces when a call is attempted.
    pub fn new(model: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            model: model.to_string(),
            api_key: std::env::var(API_KEY_ENV).ok(),
        })
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send one prompt and return the first candidate's concatenated parts,
    /// trimmed.
    pub async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let key = self.api_key.as_deref().ok_or(AiError::MissingKey)?;
        let url = format!("{}/models/{}:generateContent", API_BASE_URL, self.model);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::Http(status.as_u16()));
        }

        let body: GenerateResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(AiError::Empty);
        }
        Ok(text)
    }

    /// One short goal suggestion for a dimension's list.
    pub async fn suggest_goal(&self, dimension: Dimension) -> Result<String, AiError> {
        let prompt = format!(
            "Suggest one short, practical, actionable daily goal (at most 12 words) \
             for the {} area of personal well-being. Reply with only the goal text, \
             no quotes.",
            dimension
        );
        debug!(dimension = dimension.slug(), "Requesting goal suggestion");
        self.generate(&prompt).await
    }

    /// An insights pass over journal entries.
    pub async fn reflection_insights(&self, reflections: &[Reflection]) -> Result<String, AiError> {
        let combined = reflections
            .iter()
            .map(|r| {
                format!(
                    "Date: {}\nTitle: {}\nArea: {}\nEntry: {}",
                    r.date, r.title, r.category, r.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n---\n\n");
        let prompt = format!(
            "Act as a compassionate counselor and pattern analyst. Review the \
             journal entries below. Identify recurring themes, emotional patterns, \
             strengths, and potential growth areas. Answer as a concise, \
             encouraging bullet list using '*'. The entries:\n\n{}",
            combined
        );
        debug!(count = reflections.len(), "Requesting reflection insights");
        self.generate(&prompt).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing_concatenates_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Walk "}, {"text": "outside"}]}}
            ]
        }"#;
        let body: GenerateResponse = serde_json::from_str(json).unwrap();
        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();
        assert_eq!(text, "Walk outside");
    }

    #[test]
    fn test_response_without_candidates_parses_empty() {
        let body: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(body.candidates.is_empty());
    }
}
