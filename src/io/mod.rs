//! Output helpers.
//!
//! - profile exports (CSV/JSON) (`export`)

pub mod export;

pub use export::*;
