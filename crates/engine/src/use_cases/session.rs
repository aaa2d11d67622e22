//! Session lifecycle use cases: create, inspect, reset, end.

use std::sync::Arc;

use uuid::Uuid;

use crate::infrastructure::ports::{ClockPort, CountryDataPort, SessionError};
use crate::stores::{Session, SessionStore};

/// Result of creating a session.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
    pub countries_loaded: usize,
    /// True when the country fetch failed and the session started with an
    /// empty list. The UI must surface a notice and disallow new rounds.
    pub data_unavailable: bool,
}

/// Read-only view of a session for the progress display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProgressSnapshot {
    pub score: i32,
    pub attempts: u32,
    pub correct_guesses: u32,
    pub countries_played: usize,
    pub countries_loaded: usize,
    pub round_active: bool,
    pub data_unavailable: bool,
}

impl ProgressSnapshot {
    fn from_session(session: &Session) -> Self {
        Self {
            score: session.game.score(),
            attempts: session.attempts,
            correct_guesses: session.correct_guesses,
            countries_played: session.game.played_names().len(),
            countries_loaded: session.countries.len(),
            round_active: session.game.current_country().is_some(),
            data_unavailable: session.data_unavailable,
        }
    }
}

/// Use case for starting a new session.
///
/// Fetches the country list exactly once. A fetch failure is not fatal: the
/// session starts with an empty list and the `data_unavailable` notice set.
pub struct CreateSession {
    countries: Arc<dyn CountryDataPort>,
    clock: Arc<dyn ClockPort>,
    store: Arc<SessionStore>,
}

impl CreateSession {
    pub fn new(
        countries: Arc<dyn CountryDataPort>,
        clock: Arc<dyn ClockPort>,
        store: Arc<SessionStore>,
    ) -> Self {
        Self {
            countries,
            clock,
            store,
        }
    }

    pub async fn execute(&self) -> SessionCreated {
        let (countries, data_unavailable) = match self.countries.fetch_all().await {
            Ok(list) => (list, false),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Country data fetch failed, starting session with an empty list"
                );
                (Vec::new(), true)
            }
        };

        let session_id = Uuid::new_v4();
        let countries_loaded = countries.len();
        self.store.insert(
            session_id,
            Session::new(countries, data_unavailable, self.clock.now()),
        );

        tracing::info!(
            session_id = %session_id,
            countries_loaded,
            data_unavailable,
            "Session created"
        );

        SessionCreated {
            session_id,
            countries_loaded,
            data_unavailable,
        }
    }
}

/// Use case for reading a session's progress.
pub struct SessionProgress {
    store: Arc<SessionStore>,
}

impl SessionProgress {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, session_id: Uuid) -> Result<ProgressSnapshot, SessionError> {
        self.store
            .with_session(session_id, ProgressSnapshot::from_session)
    }
}

/// Use case for resetting a session to its initial state.
///
/// Clears the game core and the boundary counters; the loaded country list
/// is kept (it is fetched once per session, never again). Idempotent.
pub struct ResetSession {
    store: Arc<SessionStore>,
}

impl ResetSession {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, session_id: Uuid) -> Result<ProgressSnapshot, SessionError> {
        let snapshot = self.store.with_session_mut(session_id, |session| {
            session.game.reset();
            session.attempts = 0;
            session.correct_guesses = 0;
            ProgressSnapshot::from_session(session)
        })?;

        tracing::info!(session_id = %session_id, "Session reset");
        Ok(snapshot)
    }
}

/// Use case for discarding a session entirely.
pub struct EndSession {
    store: Arc<SessionStore>,
}

impl EndSession {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, session_id: Uuid) -> Result<(), SessionError> {
        self.store.remove(session_id)?;
        tracing::info!(session_id = %session_id, "Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{CountryDataError, MockCountryDataPort};
    use geospy_domain::Country;

    fn named(name: &str) -> Country {
        serde_json::from_value(serde_json::json!({ "name": { "common": name } }))
            .expect("valid country json")
    }

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(Utc::now()))
    }

    #[tokio::test]
    async fn create_session_loads_countries_once() {
        let mut port = MockCountryDataPort::new();
        port.expect_fetch_all()
            .times(1)
            .returning(|| Ok(vec![named("Spain"), named("France")]));

        let store = Arc::new(SessionStore::new());
        let create = CreateSession::new(Arc::new(port), fixed_clock(), store.clone());

        let created = create.execute().await;
        assert_eq!(created.countries_loaded, 2);
        assert!(!created.data_unavailable);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_empty_list_with_notice() {
        let mut port = MockCountryDataPort::new();
        port.expect_fetch_all()
            .times(1)
            .returning(|| Err(CountryDataError::Request("connection refused".into())));

        let store = Arc::new(SessionStore::new());
        let create = CreateSession::new(Arc::new(port), fixed_clock(), store.clone());

        let created = create.execute().await;
        assert_eq!(created.countries_loaded, 0);
        assert!(created.data_unavailable);

        // The session still exists and is usable for everything but rounds.
        let progress = SessionProgress::new(store)
            .execute(created.session_id)
            .expect("session exists");
        assert!(progress.data_unavailable);
        assert_eq!(progress.countries_loaded, 0);
    }

    #[tokio::test]
    async fn reset_clears_game_state_and_counters_but_keeps_countries() {
        let mut port = MockCountryDataPort::new();
        port.expect_fetch_all().returning(|| Ok(vec![named("Spain")]));

        let store = Arc::new(SessionStore::new());
        let created = CreateSession::new(Arc::new(port), fixed_clock(), store.clone())
            .execute()
            .await;

        store
            .with_session_mut(created.session_id, |s| {
                s.game.update_score(10);
                s.attempts = 3;
                s.correct_guesses = 1;
            })
            .expect("session exists");

        let reset = ResetSession::new(store.clone());
        let snapshot = reset.execute(created.session_id).expect("session exists");
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.attempts, 0);
        assert_eq!(snapshot.correct_guesses, 0);
        assert_eq!(snapshot.countries_loaded, 1, "country list survives reset");

        // Idempotent: a second reset changes nothing.
        let again = reset.execute(created.session_id).expect("session exists");
        assert_eq!(again.score, 0);
        assert_eq!(again.countries_played, 0);
    }

    #[tokio::test]
    async fn end_session_discards_state() {
        let mut port = MockCountryDataPort::new();
        port.expect_fetch_all().returning(|| Ok(Vec::new()));

        let store = Arc::new(SessionStore::new());
        let created = CreateSession::new(Arc::new(port), fixed_clock(), store.clone())
            .execute()
            .await;

        EndSession::new(store.clone())
            .execute(created.session_id)
            .expect("session exists");
        let progress = SessionProgress::new(store).execute(created.session_id);
        assert!(matches!(progress, Err(SessionError::NotFound)));
    }
}
