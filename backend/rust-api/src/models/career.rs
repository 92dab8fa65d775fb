use serde::{Deserialize, Serialize};

/// Career tracks the quiz can recommend.
///
/// Declaration order matters: it is the option-position mapping used by the
/// scorer and the tie-break order (earlier variants win ties).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareerCategory {
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "Cybersecurity Specialist")]
    CybersecuritySpecialist,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Cloud Engineer")]
    CloudEngineer,
    #[serde(rename = "AI/ML Engineer")]
    AiMlEngineer,
    #[serde(rename = "Mobile Developer")]
    MobileDeveloper,
}

impl CareerCategory {
    pub const COUNT: usize = 6;

    pub const ALL: [CareerCategory; Self::COUNT] = [
        CareerCategory::SoftwareEngineer,
        CareerCategory::CybersecuritySpecialist,
        CareerCategory::DataScientist,
        CareerCategory::CloudEngineer,
        CareerCategory::AiMlEngineer,
        CareerCategory::MobileDeveloper,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CareerCategory::SoftwareEngineer => "Software Engineer",
            CareerCategory::CybersecuritySpecialist => "Cybersecurity Specialist",
            CareerCategory::DataScientist => "Data Scientist",
            CareerCategory::CloudEngineer => "Cloud Engineer",
            CareerCategory::AiMlEngineer => "AI/ML Engineer",
            CareerCategory::MobileDeveloper => "Mobile Developer",
        }
    }

    /// Position in declaration order, used to index tallies.
    pub fn ordinal(&self) -> usize {
        match self {
            CareerCategory::SoftwareEngineer => 0,
            CareerCategory::CybersecuritySpecialist => 1,
            CareerCategory::DataScientist => 2,
            CareerCategory::CloudEngineer => 3,
            CareerCategory::AiMlEngineer => 4,
            CareerCategory::MobileDeveloper => 5,
        }
    }

    /// Metric label value (lowercase, no spaces or slashes).
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerCategory::SoftwareEngineer => "software_engineer",
            CareerCategory::CybersecuritySpecialist => "cybersecurity_specialist",
            CareerCategory::DataScientist => "data_scientist",
            CareerCategory::CloudEngineer => "cloud_engineer",
            CareerCategory::AiMlEngineer => "ai_ml_engineer",
            CareerCategory::MobileDeveloper => "mobile_developer",
        }
    }
}

impl std::fmt::Display for CareerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps an option position to its category, independent of the question.
///
/// Positions past the last category wrap around so the mapping stays total.
pub fn category_for_option_index(index: usize) -> CareerCategory {
    CareerCategory::ALL[index % CareerCategory::COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_matches_declaration_order() {
        for (position, category) in CareerCategory::ALL.iter().enumerate() {
            assert_eq!(category.ordinal(), position);
            assert_eq!(category_for_option_index(position), *category);
        }
    }

    #[test]
    fn option_index_wraps_past_last_category() {
        assert_eq!(category_for_option_index(6), CareerCategory::SoftwareEngineer);
        assert_eq!(category_for_option_index(11), CareerCategory::MobileDeveloper);
    }

    #[test]
    fn serializes_with_display_label() {
        let json = serde_json::to_string(&CareerCategory::AiMlEngineer).unwrap();
        assert_eq!(json, "\"AI/ML Engineer\"");

        let parsed: CareerCategory = serde_json::from_str("\"Cloud Engineer\"").unwrap();
        assert_eq!(parsed, CareerCategory::CloudEngineer);
    }
}
