//! GeoSpy domain - country records and the guessing-game session core.
//!
//! This crate is pure: no IO, no async, no randomness of its own. The one
//! non-deterministic operation (picking the next country) takes its
//! randomness through [`RandomPort`] so callers and tests control it.

pub mod entities;
pub mod game;

pub use entities::{Country, CountryName, Flags};
pub use game::{GameSession, RandomPort};
