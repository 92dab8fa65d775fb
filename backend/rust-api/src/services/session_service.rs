use std::sync::Arc;

use chrono::{Duration, Utc};
use thiserror::Error;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::metrics::{
    record_answer, record_session_transition, CAREER_RECOMMENDATIONS_TOTAL, QUIZ_SESSIONS_ACTIVE,
};
use crate::models::{
    events::{CareerRecommended, QuizEvent},
    recommendation::{RecommendationResult, RecommendationView},
    CreateSessionRequest, SessionResponse, SessionStatus,
};

use super::{
    presentation,
    quiz_session::{QuizError, QuizSession},
    scoring::{self, ScoreError},
    session_store::SessionStore,
};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found")]
    NotFound,
    #[error("Quiz session is not completed yet")]
    NotCompleted,
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

pub struct SessionService {
    store: Arc<dyn SessionStore>,
    events: broadcast::Sender<QuizEvent>,
    ttl: Duration,
}

impl SessionService {
    pub fn new(
        store: Arc<dyn SessionStore>,
        events: broadcast::Sender<QuizEvent>,
        ttl: Duration,
    ) -> Self {
        Self { store, events, ttl }
    }

    pub async fn create_session(&self, req: CreateSessionRequest) -> SessionResponse {
        let session = QuizSession::new(req.variant, req.user_id, self.ttl);
        let response = session_response(&session);

        self.store.insert(session).await;

        record_session_transition("created");
        self.refresh_active_gauge().await;

        tracing::info!(
            "Quiz session created: {} (variant={}, user={:?})",
            response.session_id,
            response.variant.as_str(),
            response.user_id
        );

        response
    }

    pub async fn get_session(&self, session_id: &str) -> Result<SessionResponse, SessionError> {
        let id = parse_session_id(session_id)?;
        let session = self.store.get(id).await.ok_or(SessionError::NotFound)?;
        Ok(session_response(&session))
    }

    pub async fn submit_answer(
        &self,
        session_id: &str,
        option_index: usize,
    ) -> Result<SessionResponse, SessionError> {
        let id = parse_session_id(session_id)?;

        let mut outcome = None;
        let session = self
            .store
            .update(id, &mut |session| {
                outcome = Some(apply_answer(session, option_index));
            })
            .await
            .ok_or(SessionError::NotFound)?;

        let recommendation = match outcome {
            Some(Ok(recommendation)) => {
                record_answer(true);
                recommendation
            }
            Some(Err(e)) => {
                record_answer(false);
                tracing::warn!("Answer rejected for session {}: {}", session_id, e);
                return Err(e);
            }
            None => return Err(SessionError::NotFound),
        };

        if let Some(result) = recommendation {
            self.on_completed(&session, result);
        }

        Ok(session_response(&session))
    }

    pub async fn reset_session(&self, session_id: &str) -> Result<SessionResponse, SessionError> {
        let id = parse_session_id(session_id)?;
        let session = self
            .store
            .update(id, &mut |session| session.reset())
            .await
            .ok_or(SessionError::NotFound)?;

        record_session_transition("reset");
        tracing::info!("Quiz session reset: {}", session_id);

        Ok(session_response(&session))
    }

    pub async fn get_result(&self, session_id: &str) -> Result<RecommendationView, SessionError> {
        let id = parse_session_id(session_id)?;
        let session = self.store.get(id).await.ok_or(SessionError::NotFound)?;

        if session.status() != SessionStatus::Completed {
            return Err(SessionError::NotCompleted);
        }

        let result = match session.result() {
            Some(result) => result,
            None => scoring::score_default(session.answers())?,
        };

        Ok(presentation::present(&result))
    }

    pub async fn delete_session(&self, session_id: &str) -> Result<(), SessionError> {
        let id = parse_session_id(session_id)?;
        self.store.remove(id).await.ok_or(SessionError::NotFound)?;

        record_session_transition("deleted");
        self.refresh_active_gauge().await;
        tracing::info!("Quiz session deleted: {}", session_id);

        Ok(())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<QuizEvent> {
        self.events.subscribe()
    }

    fn on_completed(&self, session: &QuizSession, result: RecommendationResult) {
        record_session_transition("completed");
        CAREER_RECOMMENDATIONS_TOTAL
            .with_label_values(&[result.category.as_str()])
            .inc();

        tracing::info!(
            "Quiz session completed: {} -> {} ({}%)",
            session.id(),
            result.category,
            result.confidence_percent
        );

        let event = QuizEvent::CareerRecommended(CareerRecommended {
            session_id: session.id().to_string(),
            category: result.category,
            timestamp: Utc::now(),
        });

        // No subscribers is fine; the event is fire-and-forget
        if self.events.send(event).is_err() {
            tracing::debug!("No listeners for recommendation of session {}", session.id());
        }
    }

    async fn refresh_active_gauge(&self) {
        QUIZ_SESSIONS_ACTIVE.set(self.store.len().await as i64);
    }
}

fn apply_answer(
    session: &mut QuizSession,
    option_index: usize,
) -> Result<Option<RecommendationResult>, SessionError> {
    if session.submit_answer(option_index)? != SessionStatus::Completed {
        return Ok(None);
    }

    let result = scoring::score_default(session.answers())?;
    session.record_result(result);
    Ok(Some(result))
}

fn parse_session_id(session_id: &str) -> Result<Uuid, SessionError> {
    Uuid::parse_str(session_id).map_err(|_| SessionError::NotFound)
}

pub fn session_response(session: &QuizSession) -> SessionResponse {
    let (answered, total_questions) = session.progress();
    SessionResponse {
        session_id: session.id().to_string(),
        user_id: session.user_id().map(str::to_string),
        variant: session.variant(),
        status: session.status(),
        current_question: session.current_question().copied(),
        answered,
        total_questions,
        answers: session.answers().to_vec(),
        started_at: session.started_at(),
        expires_at: session.expires_at(),
        recommendation: session.result().as_ref().map(presentation::present),
    }
}
