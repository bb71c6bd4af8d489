//! Error types shared across quizbot.
//!
//! Defined in `quizbot-core` so the session flow and the CLI can downcast
//! source failures without string matching.

use thiserror::Error;

/// Errors from quiz construction and answer-tracking transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The quiz failed structural validation.
    #[error("invalid quiz: {0}")]
    InvalidQuiz(String),

    /// The chosen option is not one of the current question's options.
    #[error("'{0}' is not an option for this question")]
    UnknownOption(String),

    /// No quiz has been loaded yet.
    #[error("no quiz loaded")]
    NoQuiz,

    /// Advance was requested before any option was selected.
    #[error("no answer selected")]
    NoSelection,

    /// Every question has already been answered.
    #[error("quiz is already complete")]
    QuizComplete,

    /// A question index outside the quiz.
    #[error("question index {index} out of range (quiz has {len} questions)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors from obtaining a meeting identifier from the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The host context carried no meeting identifier.
    #[error("Meeting ID not available.")]
    Unavailable,

    /// The host integration failed to initialize or answer.
    #[error("host integration failed: {0}")]
    HostFailed(String),
}

/// Errors that can occur when producing a quiz from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The service answered with a non-success status. The message is the
    /// server-provided `detail` when present, shown verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// A success response whose body is not a quiz.
    #[error("invalid quiz response: {0}")]
    InvalidResponse(String),
}

impl SourceError {
    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            SourceError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
