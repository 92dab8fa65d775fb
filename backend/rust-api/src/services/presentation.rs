use crate::models::{
    career::CareerCategory,
    recommendation::{CareerProfile, RecommendationResult, RecommendationView},
};

pub fn profile_for(category: CareerCategory) -> CareerProfile {
    let (icon, description) = match category {
        CareerCategory::SoftwareEngineer => (
            "code",
            "Design, build and maintain software products across the full stack.",
        ),
        CareerCategory::CybersecuritySpecialist => (
            "shield",
            "Protect organisations by finding and fixing weaknesses before attackers do.",
        ),
        CareerCategory::DataScientist => (
            "bar-chart",
            "Turn raw data into insight with statistics, analytics and visualisation.",
        ),
        CareerCategory::CloudEngineer => (
            "cloud",
            "Build and operate scalable infrastructure on public and private clouds.",
        ),
        CareerCategory::AiMlEngineer => (
            "cpu",
            "Train, evaluate and ship machine learning models into real products.",
        ),
        CareerCategory::MobileDeveloper => (
            "smartphone",
            "Create fast, intuitive apps for Android and iOS devices.",
        ),
    };

    CareerProfile {
        category,
        label: category.label(),
        icon,
        description,
        section_index: category.ordinal(),
    }
}

pub fn all_profiles() -> Vec<CareerProfile> {
    CareerCategory::ALL.iter().copied().map(profile_for).collect()
}

pub fn present(result: &RecommendationResult) -> RecommendationView {
    let profile = profile_for(result.category);
    RecommendationView {
        category: profile.category,
        label: profile.label,
        confidence_percent: result.confidence_percent,
        icon: profile.icon,
        description: profile.description,
        section_index: profile.section_index,
    }
}
