pub mod bank;
pub mod report;
pub mod timer;

use std::sync::Arc;

use crate::error::ExamError;
use timer::{Countdown, ExamClock};

/// What a user types to leave a question unanswered.
pub const NO_ANSWER: i64 = -1;

#[derive(Debug, Clone, Default)]
pub struct Exam {
    questions: Vec<Question>,
    answers: Vec<Option<usize>>,
    clock: Arc<ExamClock>,
}

impl Exam {
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            answers,
            clock: Arc::new(ExamClock::default()),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// One slot per question, `None` while unanswered.
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[cfg(test)]
    pub fn clock(&self) -> &Arc<ExamClock> {
        &self.clock
    }

    pub fn is_time_up(&self) -> bool {
        self.clock.is_expired()
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.clock.remaining_seconds()
    }

    /// Records the answer for question `index`.
    ///
    /// Out-of-range question or option indices are rejected and the slot is
    /// left as it was.
    pub fn set_answer(&mut self, index: usize, answer: Option<usize>) -> Result<(), ExamError> {
        let len = self.questions.len();
        let question = self
            .questions
            .get(index)
            .ok_or(ExamError::QuestionOutOfRange { index, len })?;

        if let Some(option) = answer {
            if option >= question.options.len() {
                return Err(ExamError::OptionOutOfRange {
                    question: index,
                    option,
                    len: question.options.len(),
                });
            }
        }

        log::debug!("Question {} answered with {:?}", index + 1, answer);
        self.answers[index] = answer;
        Ok(())
    }

    pub fn calculate_score(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| question.is_correct(**answer))
            .count()
    }

    pub fn percentage(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.calculate_score() as f64 * 100.0 / self.total() as f64
    }

    /// Starts the exam countdown on the current tokio runtime.
    pub fn start_timer(&self, minutes: u64) -> Countdown {
        Countdown::start(self.clock.clone(), minutes.saturating_mul(60))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    pub fn new<T, O>(text: T, options: O, correct_index: usize) -> Self
    where
        T: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_index,
        }
    }

    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.option(self.correct_index)
    }

    pub fn is_correct(&self, answer: Option<usize>) -> bool {
        answer == Some(self.correct_index)
    }
}
