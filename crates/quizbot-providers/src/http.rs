//! Remote quiz-generation service.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use quizbot_core::error::SourceError;
use quizbot_core::model::{Question, Quiz};
use quizbot_core::traits::{GenerateQuizRequest, QuizSource};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate_mcq";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Quiz source backed by a `POST {text, num_questions}` endpoint.
pub struct HttpQuizSource {
    endpoint: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpQuizSource {
    pub fn new(endpoint: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            timeout_secs,
            client,
        })
    }
}

/// Error body returned by the service on failure.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Message for a failed response: the `detail` string when the body has
/// one, else a generic status line.
fn error_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);

    match detail {
        Some(serde_json::Value::String(s)) if !s.is_empty() => s,
        Some(serde_json::Value::Null | serde_json::Value::String(_)) | None => {
            format!("Failed to fetch quiz: {status}")
        }
        Some(other) => other.to_string(),
    }
}

#[async_trait]
impl QuizSource for HttpQuizSource {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(
        skip(self, request),
        fields(endpoint = %self.endpoint, num_questions = request.num_questions)
    )]
    async fn generate(&self, request: &GenerateQuizRequest) -> anyhow::Result<Quiz> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::Timeout(self.timeout_secs)
                } else {
                    SourceError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), body = %body, "quiz service error");
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            }
            .into());
        }

        let questions: Vec<Question> = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        debug!(questions = questions.len(), "quiz received");
        Quiz::from_unchecked(questions)
            .map_err(|e| anyhow::Error::from(SourceError::InvalidResponse(e.to_string())))
    }
}
