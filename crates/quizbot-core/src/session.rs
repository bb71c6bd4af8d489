//! Session flow orchestrator.
//!
//! Ties the host, the quiz source and the walker together: obtain a
//! meeting id, generate a quiz, walk it, show results, restart.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::error::{QuizError, SessionError};
use crate::traits::{GenerateQuizRequest, HostIntegration, QuizSource};
use crate::walker::Walker;

/// Opaque identifier of the active meeting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Initialize the host and read the meeting id from its context.
pub async fn initialize_session(host: &dyn HostIntegration) -> Result<SessionId, SessionError> {
    host.init()
        .await
        .map_err(|e| SessionError::HostFailed(format!("{e:#}")))?;
    let context = host
        .get_context()
        .await
        .map_err(|e| SessionError::HostFailed(format!("{e:#}")))?;

    match context.meeting_id {
        Some(id) if !id.is_empty() => {
            info!(host = host.name(), meeting_id = %id, "host ready");
            Ok(SessionId(id))
        }
        _ => Err(SessionError::Unavailable),
    }
}

/// Where the flow currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the host.
    Initializing,
    /// Session known, no quiz loaded.
    Ready,
    /// A quiz is being answered.
    Active(Walker),
    /// Every question answered.
    Results(Walker),
    /// Host or quiz generation failed.
    Failed { message: String },
}

/// The whole quiz session as seen by a front end.
#[derive(Debug, Clone)]
pub struct QuizFlow {
    session: Option<SessionId>,
    phase: Phase,
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizFlow {
    pub fn new() -> Self {
        Self {
            session: None,
            phase: Phase::Initializing,
        }
    }

    /// Start a flow by initializing the host.
    pub async fn start(host: &dyn HostIntegration) -> Self {
        let mut flow = Self::new();
        match initialize_session(host).await {
            Ok(session) => {
                flow.session = Some(session);
                flow.phase = Phase::Ready;
            }
            Err(e) => {
                warn!(host = host.name(), error = %e, "session unavailable");
                flow.phase = Phase::Failed {
                    message: e.to_string(),
                };
            }
        }
        flow
    }

    /// Generate a fresh quiz and start walking it.
    ///
    /// On failure the flow moves to `Failed` and no quiz is kept.
    pub async fn generate(
        &mut self,
        source: &dyn QuizSource,
        request: &GenerateQuizRequest,
    ) -> Result<()> {
        let Some(session) = self.session.clone() else {
            let err = SessionError::Unavailable;
            self.phase = Phase::Failed {
                message: err.to_string(),
            };
            return Err(err.into());
        };

        info!(
            source = source.name(),
            meeting_id = %session,
            num_questions = request.num_questions,
            "generating quiz"
        );

        match source.generate(request).await {
            Ok(quiz) => {
                info!(questions = quiz.len(), "quiz ready");
                self.phase = Phase::Active(Walker::new(Arc::new(quiz)));
                Ok(())
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "quiz generation failed");
                self.phase = Phase::Failed {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Select an option for the current question.
    pub fn select(&mut self, option: &str) -> Result<(), QuizError> {
        match &self.phase {
            Phase::Active(walker) => {
                self.phase = Phase::Active(walker.select(option)?);
                Ok(())
            }
            Phase::Results(_) => Err(QuizError::QuizComplete),
            _ => Err(QuizError::NoQuiz),
        }
    }

    /// Score the current selection and move on.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        match &self.phase {
            Phase::Active(walker) => {
                let next = walker.advance()?;
                self.phase = if next.is_complete() {
                    info!(score = %next.score(), "quiz complete");
                    Phase::Results(next)
                } else {
                    Phase::Active(next)
                };
                Ok(())
            }
            Phase::Results(_) => Err(QuizError::QuizComplete),
            _ => Err(QuizError::NoQuiz),
        }
    }

    /// Drop the quiz and return to the ready state.
    ///
    /// Without a session there is nothing to return to and the flow stays
    /// where it is.
    pub fn restart(&mut self) {
        if self.session.is_some() {
            self.phase = Phase::Ready;
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn session(&self) -> Option<&SessionId> {
        self.session.as_ref()
    }

    /// The walker of an active or finished quiz.
    pub fn walker(&self) -> Option<&Walker> {
        match &self.phase {
            Phase::Active(w) | Phase::Results(w) => Some(w),
            _ => None,
        }
    }

    /// The failure message, if the flow failed.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { message } => Some(message),
            _ => None,
        }
    }
}
