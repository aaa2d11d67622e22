//! Port traits for external dependencies and cross-layer errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use geospy_domain::Country;

/// Errors from the country data source.
#[derive(Debug, Error, Clone)]
pub enum CountryDataError {
    #[error("country data request failed: {0}")]
    Request(String),

    #[error("country data source returned HTTP {code}")]
    Status { code: u16 },

    #[error("country data response could not be decoded: {0}")]
    InvalidResponse(String),
}

/// Read-only access to the external country list.
///
/// One fetch per session; retry and caching policies are out of scope, so
/// implementations report failures truthfully and callers decide how to
/// degrade.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryDataPort: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Country>, CountryDataError>;
}

/// Injected time source, for session timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Errors from session-scoped operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session not found")]
    NotFound,

    #[error("no country data is available for this session")]
    NoCountryData,

    #[error("every country has been played; reset the session to continue")]
    Exhausted,

    #[error("no round is active; start a round before guessing")]
    NoActiveRound,

    #[error("guess must not be empty")]
    EmptyGuess,
}
