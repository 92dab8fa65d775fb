//! Career recommendation scoring.
//!
//! Answers are tallied by option position, the highest tally wins and the
//! confidence is the winner's share of all answers, as a rounded percentage.

use thiserror::Error;

use crate::models::{
    career::{category_for_option_index, CareerCategory},
    recommendation::RecommendationResult,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Cannot score an empty answer sequence")]
    EmptyAnswers,
}

/// Per-category answer counts, indexed by declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTally {
    counts: [u32; CareerCategory::COUNT],
}

impl CategoryTally {
    pub fn increment(&mut self, category: CareerCategory) {
        self.counts[category.ordinal()] += 1;
    }

    pub fn count(&self, category: CareerCategory) -> u32 {
        self.counts[category.ordinal()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Category with the greatest count. Ties go to the first-declared category.
    pub fn leader(&self) -> (CareerCategory, u32) {
        let mut best = (CareerCategory::ALL[0], self.counts[0]);
        for category in CareerCategory::ALL.iter().skip(1) {
            let count = self.count(*category);
            if count > best.1 {
                best = (*category, count);
            }
        }
        best
    }
}

pub fn score<F>(answers: &[usize], category_for: F) -> Result<RecommendationResult, ScoreError>
where
    F: Fn(usize) -> CareerCategory,
{
    if answers.is_empty() {
        return Err(ScoreError::EmptyAnswers);
    }

    let mut tally = CategoryTally::default();
    for &answer in answers {
        tally.increment(category_for(answer));
    }

    let (category, winning_count) = tally.leader();
    let confidence_percent = confidence_percent(winning_count, answers.len());

    Ok(RecommendationResult {
        category,
        confidence_percent,
    })
}

/// Scores with the fixed option-position table.
pub fn score_default(answers: &[usize]) -> Result<RecommendationResult, ScoreError> {
    score(answers, category_for_option_index)
}

// round(count / total * 100), half rounds up; integer math keeps it exact.
fn confidence_percent(count: u32, total: usize) -> u8 {
    let count = u64::from(count);
    let total = total as u64;
    let rounded = (count * 200 + total) / (total * 2);
    rounded.min(100) as u8
}
