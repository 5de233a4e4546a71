//! `healthcare-scheduler` library crate.
//!
//! The binary (`hcs`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the fetcher can be swapped for an in-memory source in tests
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod classify;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod telemetry;
