//! Evaluating a guess against the country in play.

use std::sync::Arc;

use uuid::Uuid;

use crate::infrastructure::ports::SessionError;
use crate::stores::SessionStore;
use geospy_domain::Country;

/// Points awarded for a correct guess.
pub const POINTS_CORRECT: i32 = 10;
/// Points deducted for an incorrect guess.
pub const POINTS_INCORRECT: i32 = -1;

/// Country details revealed after a correct guess.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CountryReveal {
    pub name: String,
    pub capital: Option<String>,
    pub population: Option<u64>,
    pub region: Option<String>,
    pub flag_png: Option<String>,
}

impl CountryReveal {
    fn from_country(country: &Country) -> Option<Self> {
        Some(Self {
            name: country.common_name()?.to_string(),
            capital: country.capital.first().cloned(),
            population: country.population,
            region: country.region.clone(),
            flag_png: country.flag_png().map(str::to_string),
        })
    }
}

/// Result of one guess evaluation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GuessOutcome {
    pub correct: bool,
    pub score: i32,
    pub attempts: u32,
    pub correct_guesses: u32,
    /// Present only when the guess was correct.
    pub country: Option<CountryReveal>,
}

/// Use case for submitting a guess.
///
/// The score changes exactly once per evaluation; the round stays active
/// either way, so the player can keep trying until the next round starts.
pub struct SubmitGuess {
    store: Arc<SessionStore>,
}

impl SubmitGuess {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, session_id: Uuid, guess: &str) -> Result<GuessOutcome, SessionError> {
        if guess.is_empty() {
            return Err(SessionError::EmptyGuess);
        }

        let result = self.store.with_session_mut(session_id, |session| {
            if session.game.current_country().is_none() {
                return Err(SessionError::NoActiveRound);
            }

            session.attempts += 1;
            let correct = session.game.check_guess(guess);
            let country = if correct {
                session.game.update_score(POINTS_CORRECT);
                session.correct_guesses += 1;
                session
                    .game
                    .current_country()
                    .and_then(CountryReveal::from_country)
            } else {
                session.game.update_score(POINTS_INCORRECT);
                None
            };

            Ok(GuessOutcome {
                correct,
                score: session.game.score(),
                attempts: session.attempts,
                correct_guesses: session.correct_guesses,
                country,
            })
        })?;

        if let Ok(outcome) = &result {
            tracing::info!(
                session_id = %session_id,
                correct = outcome.correct,
                score = outcome.score,
                attempts = outcome.attempts,
                "Guess evaluated"
            );
        }
        result
    }
}
