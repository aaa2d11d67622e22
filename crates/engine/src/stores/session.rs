//! Per-session game state storage.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::infrastructure::ports::SessionError;
use geospy_domain::{Country, GameSession};

/// Everything one player session owns.
///
/// The country list is fetched once at creation and kept for the session's
/// lifetime; `attempts` and `correct_guesses` are the presentation-side
/// counters that mutate in the same turn as the game state.
pub struct Session {
    pub game: GameSession,
    pub countries: Vec<Country>,
    /// True when the data fetch failed and the list was degraded to empty.
    pub data_unavailable: bool,
    pub attempts: u32,
    pub correct_guesses: u32,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(countries: Vec<Country>, data_unavailable: bool, created_at: DateTime<Utc>) -> Self {
        Self {
            game: GameSession::new(),
            countries,
            data_unavailable,
            attempts: 0,
            correct_guesses: 0,
            created_at,
        }
    }
}

/// Concurrent map of live sessions keyed by session id.
///
/// Each entry is owned by exactly one user context; DashMap's per-entry
/// locking gives every session its one-atomic-turn-at-a-time semantics
/// without a global lock.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<Uuid, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn insert(&self, id: Uuid, session: Session) {
        self.sessions.insert(id, session);
    }

    /// Read access to one session.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&Session) -> T,
    ) -> Result<T, SessionError> {
        self.sessions
            .get(&id)
            .map(|entry| f(entry.value()))
            .ok_or(SessionError::NotFound)
    }

    /// Mutating access to one session, as a single atomic turn.
    pub fn with_session_mut<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, SessionError> {
        self.sessions
            .get_mut(&id)
            .map(|mut entry| f(entry.value_mut()))
            .ok_or(SessionError::NotFound)
    }

    pub fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        self.sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(SessionError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_session() -> Session {
        Session::new(Vec::new(), false, Utc::now())
    }

    #[test]
    fn unknown_session_surfaces_not_found() {
        let store = SessionStore::new();
        let result = store.with_session(Uuid::new_v4(), |_| ());
        assert_eq!(result, Err(SessionError::NotFound));
    }

    #[test]
    fn mutations_are_visible_to_later_reads() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        store.insert(id, empty_session());

        store
            .with_session_mut(id, |s| s.attempts += 1)
            .expect("session exists");
        let attempts = store
            .with_session(id, |s| s.attempts)
            .expect("session exists");
        assert_eq!(attempts, 1);
    }

    #[test]
    fn sessions_are_isolated_from_each_other() {
        let store = SessionStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store.insert(a, empty_session());
        store.insert(b, empty_session());

        store
            .with_session_mut(a, |s| s.game.update_score(10))
            .expect("session exists");

        let score_b = store
            .with_session(b, |s| s.game.score())
            .expect("session exists");
        assert_eq!(score_b, 0);
    }

    #[test]
    fn removed_sessions_are_gone() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        store.insert(id, empty_session());

        assert!(store.remove(id).is_ok());
        assert_eq!(store.remove(id), Err(SessionError::NotFound));
        assert!(store.is_empty());
    }
}
