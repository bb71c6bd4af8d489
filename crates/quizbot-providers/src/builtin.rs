//! Built-in quiz for running without the generation service.

use async_trait::async_trait;
use tracing::debug;

use quizbot_core::error::QuizError;
use quizbot_core::model::{Question, Quiz};
use quizbot_core::traits::{GenerateQuizRequest, QuizSource};

/// Source material the built-in quiz and the default request are based on.
pub const DEFAULT_SOURCE_TEXT: &str = "Photosynthesis is the process by which green plants and some other organisms use sunlight to synthesize foods with the help of chlorophyll. During this process, light energy is converted into chemical energy, which is stored in the form of glucose. Carbon dioxide and water are used as raw materials, and oxygen is released as a byproduct. Photosynthesis typically occurs in the chloroplasts of plant cells.";

/// The constant quiz served by [`BuiltinQuizSource`].
pub fn builtin_quiz() -> Result<Quiz, QuizError> {
    Quiz::new(vec![
        Question::new(
            "Where in the plant cell does photosynthesis typically occur?",
            ["Mitochondria", "Chloroplasts", "Nucleus", "Ribosomes"],
            "Chloroplasts",
        ),
        Question::new(
            "Which gas is released as a byproduct of photosynthesis?",
            ["Carbon dioxide", "Nitrogen", "Oxygen", "Hydrogen"],
            "Oxygen",
        ),
        Question::new(
            "In what form is the chemical energy from photosynthesis stored?",
            ["Glucose", "Protein", "Cellulose", "Lipids"],
            "Glucose",
        ),
    ])
}

/// Quiz source that always returns [`builtin_quiz`].
#[derive(Debug, Default)]
pub struct BuiltinQuizSource;

impl BuiltinQuizSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QuizSource for BuiltinQuizSource {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn generate(&self, request: &GenerateQuizRequest) -> anyhow::Result<Quiz> {
        debug!(
            num_questions = request.num_questions,
            "built-in quiz ignores the request"
        );
        Ok(builtin_quiz()?)
    }
}
