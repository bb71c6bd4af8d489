//! Core data model types for quizbot.
//!
//! A `Quiz` is fixed once loaded and shared read-only between the
//! answer-tracking states that walk it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::QuizError;

/// A single multiple-choice question.
///
/// Field names match the quiz-generation service's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt shown to the user.
    pub question: String,
    /// Answer options, in display order.
    pub options: Vec<String>,
    /// The option that counts as correct.
    pub correct_answer: String,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Whether `option` is one of this question's options.
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Whether `option` is the correct answer.
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    fn validate(&self, index: usize) -> Result<(), QuizError> {
        if self.options.is_empty() {
            return Err(QuizError::InvalidQuiz(format!(
                "question {} has no options",
                index + 1
            )));
        }
        if !self.has_option(&self.correct_answer) {
            return Err(QuizError::InvalidQuiz(format!(
                "question {}: correct answer '{}' is not among its options",
                index + 1,
                self.correct_answer
            )));
        }
        Ok(())
    }
}

/// An ordered, non-empty list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    /// Build a quiz, checking that every correct answer is one of its options.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::InvalidQuiz("quiz has no questions".into()));
        }
        for (i, q) in questions.iter().enumerate() {
            q.validate(i)?;
        }
        Ok(Self { questions })
    }

    /// Build a quiz trusting the shape of each question.
    ///
    /// Used for service responses; only an empty list is refused.
    pub fn from_unchecked(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::InvalidQuiz("quiz has no questions".into()));
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_shared(self) -> Arc<Quiz> {
        Arc::new(self)
    }
}

impl TryFrom<Vec<Question>> for Quiz {
    type Error = QuizError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Quiz::from_unchecked(questions)
    }
}

impl From<Quiz> for Vec<Question> {
    fn from(quiz: Quiz) -> Self {
        quiz.questions
    }
}

/// Per-question record of the user's choice and its correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerState {
    /// The recorded option, if any.
    pub selected: Option<String>,
    /// Correctness; unset until scored.
    pub correct: Option<bool>,
}

impl AnswerState {
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }
}

/// Final tally for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.correct, self.total)
    }
}

/// Count of answers marked correct.
pub fn count_correct(answers: &[AnswerState]) -> usize {
    answers.iter().filter(|a| a.correct == Some(true)).count()
}
