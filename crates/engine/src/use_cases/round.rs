//! Starting a new round: pick an unplayed country and hand out its hints.

use std::sync::Arc;

use uuid::Uuid;

use crate::infrastructure::ports::SessionError;
use crate::stores::SessionStore;
use geospy_domain::RandomPort;

/// What the player sees when a round starts. The country's name never
/// appears here; that is the thing being guessed.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RoundStarted {
    pub hints: Vec<String>,
    pub countries_remaining: usize,
}

/// Use case for selecting the next country.
pub struct StartRound {
    store: Arc<SessionStore>,
    random: Arc<dyn RandomPort>,
}

impl StartRound {
    pub fn new(store: Arc<SessionStore>, random: Arc<dyn RandomPort>) -> Self {
        Self { store, random }
    }

    pub fn execute(&self, session_id: Uuid) -> Result<RoundStarted, SessionError> {
        let random = self.random.clone();
        let result = self.store.with_session_mut(session_id, move |session| {
            if session.countries.is_empty() {
                return Err(SessionError::NoCountryData);
            }

            let hints = session
                .game
                .select_next(&session.countries, random.as_ref())
                .map(geospy_domain::Country::hints)
                .ok_or(SessionError::Exhausted)?;

            // A fresh round starts with a clean attempt counter.
            session.attempts = 0;

            let remaining = session.countries.len() - session.game.played_names().len();
            Ok(RoundStarted {
                hints,
                countries_remaining: remaining,
            })
        })?;

        match &result {
            Ok(round) => tracing::info!(
                session_id = %session_id,
                hint_count = round.hints.len(),
                countries_remaining = round.countries_remaining,
                "Round started"
            ),
            Err(e) => tracing::debug!(session_id = %session_id, error = %e, "Round not started"),
        }
        result
    }
}
