//! Use cases - User story orchestration.
//!
//! Each use case is one user action handled as a single atomic turn over the
//! session store.

pub mod guess;
pub mod round;
pub mod session;

pub use guess::{CountryReveal, GuessOutcome, SubmitGuess};
pub use round::{RoundStarted, StartRound};
pub use session::{
    CreateSession, EndSession, ProgressSnapshot, ResetSession, SessionCreated, SessionProgress,
};
