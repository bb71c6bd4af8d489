//! quizbot-core — quiz model, answer tracking, and scoring.
//!
//! This crate defines the data model, the two answer-tracking state
//! machines (the linear `Walker` and the bulk-scored `AnswerSheet`), the
//! traits for quiz sources and host integrations, and the session flow
//! that ties them together.

pub mod error;
pub mod model;
pub mod session;
pub mod sheet;
pub mod traits;
pub mod walker;

pub use error::{QuizError, SessionError, SourceError};
pub use model::{AnswerState, Question, Quiz, Score};
pub use session::{initialize_session, Phase, QuizFlow, SessionId};
pub use sheet::{AnswerSheet, QuestionOutcome};
pub use traits::{GenerateQuizRequest, HostIntegration, MeetingContext, QuizSource};
pub use walker::Walker;
