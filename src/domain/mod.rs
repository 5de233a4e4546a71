//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - closed classification tags (`Specialty`, `Availability`)
//! - derived worker profiles (`DerivedProfile`)
//! - the run configuration (`RunConfig`)

pub mod types;

pub use types::*;
