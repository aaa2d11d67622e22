//! GeoSpy Engine library.
//!
//! This crate contains all server-side code for the GeoSpy country-guessing
//! game.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over the domain core
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `stores/` - In-memory per-session state
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
