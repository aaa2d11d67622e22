//! Domain entities - Core business objects

mod country;

pub use country::{Country, CountryName, Flags};
