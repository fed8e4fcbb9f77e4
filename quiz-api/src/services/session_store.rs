use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::QuizSession;

/// Process-wide session map. Cheap to clone; all clones share the same
/// underlying map. The single write lock serializes mutation, so two
/// concurrent submissions to the same session cannot both observe the same
/// `current_index`.
///
/// No eviction and no TTL: sessions live until process exit.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, QuizSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opaque collision-resistant session token.
    pub fn new_session_id() -> String {
        format!("quiz_{}", Uuid::new_v4().simple())
    }

    pub async fn insert(&self, session: QuizSession) {
        self.inner.write().await.insert(session.id.clone(), session);
    }

    /// Snapshot of a session, if it exists.
    pub async fn get(&self, id: &str) -> Option<QuizSession> {
        self.inner.read().await.get(id).cloned()
    }

    /// Runs `f` against the stored session under the write lock. Returns
    /// `None` when the id is unknown.
    pub async fn update<F, T>(&self, id: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut QuizSession) -> T,
    {
        let mut sessions = self.inner.write().await;
        sessions.get_mut(id).map(f)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GameType;
    use chrono::Utc;

    fn session(id: &str) -> QuizSession {
        QuizSession {
            id: id.to_string(),
            game_type: GameType::Quiz,
            player_name: "Anonymous".to_string(),
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            correct_count: 0,
            started_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn insert_and_get_round_trip() {
        let store = SessionStore::new();
        store.insert(session("quiz_a")).await;
        assert!(store.get("quiz_a").await.is_some());
        assert!(store.get("quiz_b").await.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_mutates_in_place() {
        let store = SessionStore::new();
        store.insert(session("quiz_a")).await;

        let new_score = store
            .update("quiz_a", |s| {
                s.score += 10;
                s.score
            })
            .await;
        assert_eq!(new_score, Some(10));
        assert_eq!(store.get("quiz_a").await.unwrap().score, 10);

        assert!(store.update("quiz_missing", |_| ()).await.is_none());
    }

    #[test]
    fn session_ids_are_unique_and_prefixed() {
        let a = SessionStore::new_session_id();
        let b = SessionStore::new_session_id();
        assert_ne!(a, b);
        assert!(a.starts_with("quiz_"));
    }
}
