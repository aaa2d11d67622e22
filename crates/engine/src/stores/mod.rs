//! In-memory state storage modules.
//!
//! Stores manage runtime state that never touches a database:
//! - `SessionStore` - per-session game state and counters

pub mod session;

pub use session::{Session, SessionStore};
