//! Worker classification.
//!
//! Responsibilities:
//!
//! - resolve a specialty from the organization name (keyword table, then hash)
//! - derive availability from the certification count
//! - generate an hourly rate through an injectable rate source
//! - compute per-tag totals

pub mod hash;
pub mod keywords;
pub mod rate;
pub mod transform;

pub use hash::*;
pub use keywords::*;
pub use rate::*;
pub use transform::*;
