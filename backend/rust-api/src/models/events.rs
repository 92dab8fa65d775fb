use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::career::CareerCategory;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuizEvent {
    CareerRecommended(CareerRecommended),
}

/// Emitted once when a session completes. Nobody acknowledges it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CareerRecommended {
    pub session_id: String,
    pub category: CareerCategory,
    pub timestamp: DateTime<Utc>,
}

impl QuizEvent {
    pub fn to_sse_data(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            QuizEvent::CareerRecommended(_) => "career-recommended",
        }
    }
}
