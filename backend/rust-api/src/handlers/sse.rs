use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
};
use futures::stream::{self, Stream};
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::{models::events::QuizEvent, services::AppState};

/// SSE endpoint for career recommendation events
/// GET /api/v1/quiz/events
pub async fn recommendation_stream(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::info!("Client connected to recommendation stream");

    let receiver = state.session_service().subscribe();
    Sse::new(create_event_stream(receiver)).keep_alive(KeepAlive::default())
}

fn create_event_stream(
    receiver: broadcast::Receiver<QuizEvent>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(quiz_event) => {
                    let event = Event::default()
                        .event(quiz_event.event_name())
                        .data(quiz_event.to_sse_data());
                    return Some((Ok(event), receiver));
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Recommendation stream lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => {
                    tracing::info!("Recommendation channel closed, ending stream");
                    return None;
                }
            }
        }
    })
}
