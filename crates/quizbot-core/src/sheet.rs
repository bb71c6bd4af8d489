//! Answer sheet: record answers in any order, then score them in one pass.

use std::sync::Arc;

use serde::Serialize;

use crate::error::QuizError;
use crate::model::{count_correct, AnswerState, Quiz, Score};

/// Recorded answers for a quiz, frozen once submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    quiz: Arc<Quiz>,
    answers: Vec<AnswerState>,
    submitted: bool,
}

/// One row of a scored sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOutcome {
    pub number: usize,
    pub question: String,
    pub selected: Option<String>,
    pub correct_answer: String,
    pub correct: bool,
}

impl AnswerSheet {
    pub fn new(quiz: Arc<Quiz>) -> Self {
        let answers = vec![AnswerState::default(); quiz.len()];
        Self {
            quiz,
            answers,
            submitted: false,
        }
    }

    /// Record `option` for question `index`.
    ///
    /// Returns an unchanged sheet when that question is already answered or
    /// the sheet has been submitted. An option the question does not offer is
    /// rejected, as in [`Walker::select`](crate::walker::Walker::select).
    pub fn record_answer(&self, index: usize, option: &str) -> Result<AnswerSheet, QuizError> {
        let slot = self.answers.get(index).ok_or(QuizError::IndexOutOfRange {
            index,
            len: self.answers.len(),
        })?;
        let offered = self
            .quiz
            .question(index)
            .is_some_and(|q| q.has_option(option));
        if !offered {
            return Err(QuizError::UnknownOption(option.to_string()));
        }
        if self.submitted || slot.is_answered() {
            tracing::debug!(index, submitted = self.submitted, "answer ignored");
            return Ok(self.clone());
        }

        let mut next = self.clone();
        next.answers[index].selected = Some(option.to_string());
        Ok(next)
    }

    /// Score every question and freeze the sheet.
    pub fn submit(&self) -> AnswerSheet {
        if self.submitted {
            return self.clone();
        }

        let answers = self
            .answers
            .iter()
            .zip(self.quiz.questions())
            .map(|(answer, question)| AnswerState {
                selected: answer.selected.clone(),
                correct: Some(
                    answer
                        .selected
                        .as_deref()
                        .is_some_and(|s| question.is_correct(s)),
                ),
            })
            .collect();

        AnswerSheet {
            quiz: Arc::clone(&self.quiz),
            answers,
            submitted: true,
        }
    }

    /// Number of correct answers; zero before submission.
    pub fn score(&self) -> Score {
        Score {
            correct: count_correct(&self.answers),
            total: self.quiz.len(),
        }
    }

    /// Clear every recorded answer.
    pub fn restart(&self) -> AnswerSheet {
        AnswerSheet::new(Arc::clone(&self.quiz))
    }

    pub fn answers(&self) -> &[AnswerState] {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_answered()).count()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn quiz(&self) -> &Arc<Quiz> {
        &self.quiz
    }

    /// Per-question summary, available once submitted.
    pub fn outcomes(&self) -> Vec<QuestionOutcome> {
        if !self.submitted {
            return Vec::new();
        }
        self.quiz
            .questions()
            .iter()
            .zip(&self.answers)
            .enumerate()
            .map(|(i, (question, answer))| QuestionOutcome {
                number: i + 1,
                question: question.question.clone(),
                selected: answer.selected.clone(),
                correct_answer: question.correct_answer.clone(),
                correct: answer.correct == Some(true),
            })
            .collect()
    }
}
