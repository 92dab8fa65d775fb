use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::quiz_session::QuizSession;

/// Storage for in-flight quiz sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: QuizSession);

    /// Returns `None` for unknown or expired sessions.
    async fn get(&self, id: Uuid) -> Option<QuizSession>;

    /// Applies `f` to the live session under the store's write lock and
    /// returns the session as it is afterwards.
    async fn update(
        &self,
        id: Uuid,
        f: &mut (dyn for<'s> FnMut(&'s mut QuizSession) + Send),
    ) -> Option<QuizSession>;

    async fn remove(&self, id: Uuid) -> Option<QuizSession>;

    /// Drops sessions that expired at or before `now`, returning how many.
    async fn purge_expired(&self, now: DateTime<Utc>) -> usize;

    /// Counts sessions that have not expired, swept or not.
    async fn len(&self) -> usize;
}

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: QuizSession) {
        self.sessions.write().await.insert(session.id(), session);
    }

    async fn get(&self, id: Uuid) -> Option<QuizSession> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .filter(|session| !session.is_expired(Utc::now()))
            .cloned()
    }

    async fn update(
        &self,
        id: Uuid,
        f: &mut (dyn for<'s> FnMut(&'s mut QuizSession) + Send),
    ) -> Option<QuizSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .filter(|session| !session.is_expired(Utc::now()))?;
        f(session);
        Some(session.clone())
    }

    async fn remove(&self, id: Uuid) -> Option<QuizSession> {
        self.sessions.write().await.remove(&id)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        before - sessions.len()
    }

    async fn len(&self) -> usize {
        let now = Utc::now();
        self.sessions
            .read()
            .await
            .values()
            .filter(|session| !session.is_expired(now))
            .count()
    }
}
