//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, CountryDataPort};
use crate::stores::SessionStore;
use crate::use_cases;
use geospy_domain::RandomPort;

/// Main application state.
///
/// Holds the session store and use cases. Passed to HTTP handlers via Axum
/// state.
pub struct App {
    pub sessions: Arc<SessionStore>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub create_session: use_cases::CreateSession,
    pub progress: use_cases::SessionProgress,
    pub reset_session: use_cases::ResetSession,
    pub end_session: use_cases::EndSession,
    pub start_round: use_cases::StartRound,
    pub submit_guess: use_cases::SubmitGuess,
}

impl App {
    pub fn new(
        countries: Arc<dyn CountryDataPort>,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let sessions = Arc::new(SessionStore::new());

        let use_cases = UseCases {
            create_session: use_cases::CreateSession::new(countries, clock, sessions.clone()),
            progress: use_cases::SessionProgress::new(sessions.clone()),
            reset_session: use_cases::ResetSession::new(sessions.clone()),
            end_session: use_cases::EndSession::new(sessions.clone()),
            start_round: use_cases::StartRound::new(sessions.clone(), random),
            submit_guess: use_cases::SubmitGuess::new(sessions.clone()),
        };

        Self {
            sessions,
            use_cases,
        }
    }
}
