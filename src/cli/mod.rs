//! Command-line parsing for the healthcare staff report.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from fetching and classification.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Specialty;
use crate::telemetry::DEFAULT_LOG_LEVEL;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hcs", version, about = "Healthcare staff report built from a worker/certification API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch, classify, and print the grouped staff report (default).
    Report(RunArgs),
    /// Print per-specialty and per-availability totals only.
    Summary(RunArgs),
}

/// Options shared by every command.
#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    /// API base URL. Falls back to HCS_API_BASE_URL, then the public demo API.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds. Falls back to HCS_TIMEOUT_MS, then 10000.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Seed for hourly rate generation (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of detailed sample lines printed after the report.
    #[arg(short = 'n', long, default_value_t = 3)]
    pub samples: usize,

    /// Only render workers of this specialty.
    #[arg(short = 's', long, value_enum)]
    pub specialty: Option<Specialty>,

    /// Export all derived profiles to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export all derived profiles to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_report_flags() {
        let cli = Cli::parse_from([
            "hcs", "report", "--seed", "9", "-n", "5", "-s", "doctor", "--timeout-ms", "2500",
        ]);
        let Command::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.samples, 5);
        assert_eq!(args.specialty, Some(Specialty::Doctor));
        assert_eq!(args.timeout_ms, Some(2500));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn summary_defaults() {
        let cli = Cli::parse_from(["hcs", "summary"]);
        let Command::Summary(args) = cli.command else {
            panic!("expected summary");
        };
        assert_eq!(args.samples, 3);
        assert!(args.base_url.is_none());
        assert!(args.export.is_none());
    }
}
