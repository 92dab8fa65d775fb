use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    quiz::{Question, QuizVariant},
    recommendation::RecommendationResult,
    SessionStatus,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Option index {index} is out of range for question {question} ({options} options)")]
    InvalidOptionIndex {
        question: usize,
        index: usize,
        options: usize,
    },
    #[error("Quiz session is already completed")]
    AlreadyCompleted,
}

/// One pass through the quiz.
///
/// While in progress `answers.len() == current_question`. The N-th submission
/// moves the session to `Completed` instead of advancing the pointer, and only
/// `reset` leaves that state.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: Uuid,
    user_id: Option<String>,
    variant: QuizVariant,
    answers: Vec<usize>,
    current_question: usize,
    status: SessionStatus,
    started_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    ttl: Duration,
    result: Option<RecommendationResult>,
}

impl QuizSession {
    pub fn new(variant: QuizVariant, user_id: Option<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            variant,
            answers: Vec::with_capacity(variant.question_count()),
            current_question: 0,
            status: SessionStatus::InProgress,
            started_at: now,
            expires_at: now + ttl,
            ttl,
            result: None,
        }
    }

    pub fn submit_answer(&mut self, option_index: usize) -> Result<SessionStatus, QuizError> {
        if self.status == SessionStatus::Completed {
            return Err(QuizError::AlreadyCompleted);
        }

        let options = self.variant.options_per_question();
        if option_index >= options {
            return Err(QuizError::InvalidOptionIndex {
                question: self.current_question + 1,
                index: option_index,
                options,
            });
        }

        self.answers.push(option_index);

        if self.answers.len() == self.variant.question_count() {
            self.status = SessionStatus::Completed;
        } else {
            self.current_question += 1;
        }

        Ok(self.status)
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.current_question = 0;
        self.status = SessionStatus::InProgress;
        self.result = None;
        self.expires_at = Utc::now() + self.ttl;
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.status {
            SessionStatus::InProgress => self.variant.questions().get(self.current_question),
            SessionStatus::Completed => None,
        }
    }

    /// Answered count and total question count.
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), self.variant.question_count())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn record_result(&mut self, result: RecommendationResult) {
        self.result = Some(result);
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn variant(&self) -> QuizVariant {
        self.variant
    }

    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current_question
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn result(&self) -> Option<RecommendationResult> {
        self.result
    }
}
