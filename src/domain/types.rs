//! Shared domain types.
//!
//! Derived profiles are serializable so they can be:
//!
//! - rendered into the grouped text report
//! - exported to JSON/CSV

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Closed classification tag assigned to a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Specialty {
    Nurse,
    Doctor,
    Tech,
    Other,
}

impl Specialty {
    /// Report order.
    pub const ALL: [Specialty; 4] = [
        Specialty::Doctor,
        Specialty::Nurse,
        Specialty::Tech,
        Specialty::Other,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Specialty::Nurse => "Nurse",
            Specialty::Doctor => "Doctor",
            Specialty::Tech => "Tech",
            Specialty::Other => "Other",
        }
    }

    /// Half-open uniform range (USD/hour) the base rate is drawn from.
    pub fn base_rate_range(self) -> std::ops::Range<f64> {
        match self {
            Specialty::Doctor => 85.0..120.0,
            Specialty::Nurse => 35.0..45.0,
            Specialty::Tech => 25.0..35.0,
            Specialty::Other => 30.0..45.0,
        }
    }
}

/// Closed availability tag derived from the certification count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
    Unavailable,
}

impl Availability {
    /// Report order within a specialty.
    pub const ALL: [Availability; 3] = [
        Availability::Available,
        Availability::Busy,
        Availability::Unavailable,
    ];

    /// More than five certifications means busy, three to five available,
    /// fewer than three unavailable.
    pub fn from_certification_count(count: usize) -> Self {
        if count > 5 {
            Availability::Busy
        } else if count >= 3 {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
            Availability::Unavailable => "unavailable",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Availability::Available => "✅",
            Availability::Busy => "⏰",
            Availability::Unavailable => "❌",
        }
    }
}

/// A worker profile derived from one raw worker record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: Specialty,
    pub certification_count: usize,
    pub availability: Availability,
    /// USD/hour, rounded to two decimals.
    pub hourly_rate: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags, the environment, and defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Seed for the rate generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Number of detailed sample lines printed after the report.
    pub sample_count: usize,
    /// Restrict the rendered report to one specialty.
    pub specialty: Option<Specialty>,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}
