use serde::{Deserialize, Serialize};

use super::career::CareerCategory;

/// Outcome of scoring one completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub category: CareerCategory,
    pub confidence_percent: u8,
}

/// Display metadata attached to a career track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerProfile {
    pub category: CareerCategory,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Index of the related content section on the careers page.
    pub section_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationView {
    pub category: CareerCategory,
    pub label: &'static str,
    pub confidence_percent: u8,
    pub icon: &'static str,
    pub description: &'static str,
    pub section_index: usize,
}
