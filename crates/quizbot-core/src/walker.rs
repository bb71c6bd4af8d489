//! Linear question walker.
//!
//! Each question is scored the moment the user advances past it. Every
//! transition returns a new `Walker`, leaving the previous one untouched.

use std::sync::Arc;

use crate::error::QuizError;
use crate::model::{count_correct, AnswerState, Question, Quiz, Score};

/// Walk state over a shared quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walker {
    quiz: Arc<Quiz>,
    index: usize,
    selected: Option<String>,
    answers: Vec<AnswerState>,
    complete: bool,
}

impl Walker {
    pub fn new(quiz: Arc<Quiz>) -> Self {
        let answers = vec![AnswerState::default(); quiz.len()];
        Self {
            quiz,
            index: 0,
            selected: None,
            answers,
            complete: false,
        }
    }

    /// Store a tentative choice for the current question.
    pub fn select(&self, option: &str) -> Result<Walker, QuizError> {
        let question = self.current_question().ok_or(QuizError::QuizComplete)?;
        if !question.has_option(option) {
            return Err(QuizError::UnknownOption(option.to_string()));
        }
        Ok(Walker {
            selected: Some(option.to_string()),
            ..self.clone()
        })
    }

    /// Score the tentative choice and move to the next question.
    pub fn advance(&self) -> Result<Walker, QuizError> {
        let question = self.current_question().ok_or(QuizError::QuizComplete)?;
        let choice = self.selected.clone().ok_or(QuizError::NoSelection)?;

        let correct = question.is_correct(&choice);
        let mut next = self.clone();
        next.answers[self.index] = AnswerState {
            selected: Some(choice),
            correct: Some(correct),
        };
        next.selected = None;
        next.index += 1;
        next.complete = self.index == self.quiz.len() - 1;

        tracing::debug!(
            question = self.index + 1,
            correct,
            score = count_correct(&next.answers),
            "advanced"
        );
        Ok(next)
    }

    /// Fresh walk over the same quiz.
    pub fn restart(&self) -> Walker {
        Walker::new(Arc::clone(&self.quiz))
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        if self.complete {
            return None;
        }
        self.quiz.question(self.index)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Correct answers so far, counted from the recorded answers.
    pub fn score(&self) -> Score {
        Score {
            correct: count_correct(&self.answers),
            total: self.quiz.len(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn answers(&self) -> &[AnswerState] {
        &self.answers
    }

    pub fn quiz(&self) -> &Arc<Quiz> {
        &self.quiz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_question_quiz() -> Arc<Quiz> {
        Quiz::new(vec![
            Question::new("Q1", ["A", "B"], "A"),
            Question::new("Q2", ["A", "B"], "B"),
        ])
        .unwrap()
        .into_shared()
    }

    fn answer(walker: &Walker, option: &str) -> Walker {
        walker.select(option).unwrap().advance().unwrap()
    }

    #[test]
    fn starts_at_first_question() {
        let walker = Walker::new(two_question_quiz());
        assert_eq!(walker.current_index(), 0);
        assert_eq!(walker.current_question().unwrap().question, "Q1");
        assert_eq!(walker.score().correct, 0);
        assert!(!walker.is_complete());
        assert_eq!(walker.answers().len(), 2);
    }

    #[test]
    fn all_correct_scores_two() {
        let walker = Walker::new(two_question_quiz());
        let done = answer(&answer(&walker, "A"), "B");
        assert!(done.is_complete());
        assert_eq!(done.score(), Score { correct: 2, total: 2 });
    }

    #[test]
    fn one_wrong_scores_one() {
        let walker = Walker::new(two_question_quiz());
        let done = answer(&answer(&walker, "B"), "B");
        assert!(done.is_complete());
        assert_eq!(done.score().correct, 1);
        assert_eq!(done.answers()[0].correct, Some(false));
        assert_eq!(done.answers()[1].correct, Some(true));
    }

    #[test]
    fn transitions_do_not_mutate_previous_state() {
        let walker = Walker::new(two_question_quiz());
        let selected = walker.select("A").unwrap();
        let advanced = selected.advance().unwrap();

        assert_eq!(walker.selected(), None);
        assert_eq!(selected.selected(), Some("A"));
        assert_eq!(selected.current_index(), 0);
        assert_eq!(advanced.current_index(), 1);
        assert_eq!(advanced.selected(), None);
    }

    #[test]
    fn reselect_replaces_choice() {
        let walker = Walker::new(two_question_quiz());
        let walker = walker.select("B").unwrap().select("A").unwrap();
        assert_eq!(walker.selected(), Some("A"));
        assert_eq!(walker.advance().unwrap().score().correct, 1);
    }

    #[test]
    fn advance_requires_selection() {
        let walker = Walker::new(two_question_quiz());
        assert_eq!(walker.advance(), Err(QuizError::NoSelection));
    }

    #[test]
    fn unknown_option_rejected() {
        let walker = Walker::new(two_question_quiz());
        assert_eq!(
            walker.select("Z"),
            Err(QuizError::UnknownOption("Z".into()))
        );
    }

    #[test]
    fn advance_past_end_is_rejected() {
        let walker = Walker::new(two_question_quiz());
        let done = answer(&answer(&walker, "A"), "B");
        assert_eq!(done.advance(), Err(QuizError::QuizComplete));
        assert_eq!(done.select("A"), Err(QuizError::QuizComplete));
        assert!(done.current_question().is_none());
    }

    #[test]
    fn restart_resets_everything() {
        let walker = Walker::new(two_question_quiz());
        let midway = answer(&walker, "A").select("B").unwrap();
        let fresh = midway.restart();
        assert_eq!(fresh, walker);
        assert_eq!(fresh.score().correct, 0);
        assert!(fresh.answers().iter().all(|a| !a.is_answered()));
    }

    #[test]
    fn score_matches_recorded_answers() {
        let quiz = Quiz::new(
            (0..10)
                .map(|i| {
                    let correct = if i % 3 == 0 { "x" } else { "y" };
                    Question::new(format!("Q{i}"), ["x", "y"], correct)
                })
                .collect(),
        )
        .unwrap()
        .into_shared();

        let mut walker = Walker::new(Arc::clone(&quiz));
        for _ in 0..quiz.len() {
            walker = answer(&walker, "x");
        }

        let expected = quiz
            .questions()
            .iter()
            .filter(|q| q.is_correct("x"))
            .count();
        assert!(walker.is_complete());
        assert_eq!(walker.score().correct, expected);
        assert_eq!(count_correct(walker.answers()), expected);
    }

    #[test]
    fn score_follows_answers_at_every_step() {
        let walker = Walker::new(two_question_quiz());
        let first = answer(&walker, "A");
        assert_eq!(first.score().correct, count_correct(first.answers()));
        assert_eq!(first.score(), Score { correct: 1, total: 2 });

        let done = answer(&first, "A");
        assert_eq!(done.score().correct, count_correct(done.answers()));
        assert_eq!(done.score(), Score { correct: 1, total: 2 });
    }

    #[test]
    fn single_question_completes_immediately() {
        let quiz = Quiz::new(vec![Question::new("Only", ["yes", "no"], "yes")])
            .unwrap()
            .into_shared();
        let done = answer(&Walker::new(quiz), "yes");
        assert!(done.is_complete());
        assert_eq!(done.score().to_string(), "1 / 1");
    }
}
