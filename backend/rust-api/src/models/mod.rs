use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub mod career;
pub mod events;
pub mod quiz;
pub mod recommendation;

use quiz::{Question, QuizVariant};
use recommendation::{CareerProfile, RecommendationView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateSessionRequest {
    #[validate(length(
        min = 1,
        max = 128,
        message = "user_id must be between 1 and 128 characters"
    ))]
    pub user_id: Option<String>,
    #[serde(default)]
    pub variant: QuizVariant,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub option_index: usize,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub user_id: Option<String>,
    pub variant: QuizVariant,
    pub status: SessionStatus,
    pub current_question: Option<Question>,
    pub answered: usize,
    pub total_questions: usize,
    pub answers: Vec<usize>,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub recommendation: Option<RecommendationView>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuestionsQuery {
    #[serde(default)]
    pub variant: QuizVariant,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub variant: QuizVariant,
    pub options_per_question: usize,
    pub questions: &'static [Question],
}

#[derive(Debug, Serialize)]
pub struct CareersResponse {
    pub careers: Vec<CareerProfile>,
}
