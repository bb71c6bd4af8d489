//! Core trait definitions for quiz sources and host integrations.
//!
//! These async traits are implemented by the `quizbot-providers` crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::Quiz;

// ---------------------------------------------------------------------------
// Quiz source trait
// ---------------------------------------------------------------------------

/// Anything that can produce a quiz.
#[async_trait]
pub trait QuizSource: Send + Sync {
    /// Human-readable source name (e.g. "http").
    fn name(&self) -> &str;

    /// Produce a quiz for the given source material.
    async fn generate(&self, request: &GenerateQuizRequest) -> anyhow::Result<Quiz>;
}

/// Request body sent to the quiz-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateQuizRequest {
    /// Free-text source material the questions are drawn from.
    pub text: String,
    /// Desired number of questions.
    pub num_questions: u32,
}

// ---------------------------------------------------------------------------
// Host integration trait
// ---------------------------------------------------------------------------

/// The meeting application hosting quizbot.
///
/// `init` must be called before `get_context`; calling it again after the
/// host is ready has no further effect.
#[async_trait]
pub trait HostIntegration: Send + Sync {
    /// Human-readable host name (e.g. "mock").
    fn name(&self) -> &str;

    /// Resolve once the host is ready.
    async fn init(&self) -> anyhow::Result<()>;

    /// Fetch the current meeting context.
    async fn get_context(&self) -> anyhow::Result<MeetingContext>;
}

/// Context reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingContext {
    #[serde(default)]
    pub meeting_id: Option<String>,
}
