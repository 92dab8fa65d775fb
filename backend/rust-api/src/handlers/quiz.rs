use axum::Json;

use crate::{
    extractors::AppQuery,
    models::{CareersResponse, QuestionsQuery, QuestionsResponse},
    services::presentation,
};

/// GET /api/v1/quiz/questions?variant=extended|compact
pub async fn list_questions(AppQuery(query): AppQuery<QuestionsQuery>) -> Json<QuestionsResponse> {
    let variant = query.variant;
    Json(QuestionsResponse {
        variant,
        options_per_question: variant.options_per_question(),
        questions: variant.questions(),
    })
}

pub async fn list_careers() -> Json<CareersResponse> {
    Json(CareersResponse {
        careers: presentation::all_profiles(),
    })
}
