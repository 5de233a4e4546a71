//! Remote data access.
//!
//! - raw record shapes (`records`)
//! - HTTP fetcher + concurrent fan-out (`api`)

pub mod api;
pub mod records;

pub use api::*;
pub use records::*;
