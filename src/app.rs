//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and resolves configuration
//! - fetches workers and certifications
//! - derives profiles
//! - prints the report
//! - writes optional exports

use std::time::Duration;

use chrono::Local;
use clap::Parser;
use tracing::info;

use crate::classify::{KeywordTable, RandomRates};
use crate::cli::{Command, RunArgs};
use crate::data::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, HealthcareApi};
use crate::domain::{DerivedProfile, RunConfig};
use crate::error::AppError;

pub mod pipeline;

const ENV_BASE_URL: &str = "HCS_API_BASE_URL";
const ENV_TIMEOUT_MS: &str = "HCS_TIMEOUT_MS";

/// Entry point for the `hcs` binary.
pub fn run() -> Result<(), AppError> {
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_run(args, OutputMode::Full),
        Command::Summary(args) => handle_run(args, OutputMode::SummaryOnly),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    SummaryOnly,
}

/// Load `.env` into the process environment, then install logging so a
/// `RUST_LOG` set in the file applies.
fn init_environment(log_level: &str) -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    crate::telemetry::init(log_level)
}

fn handle_run(args: RunArgs, mode: OutputMode) -> Result<(), AppError> {
    init_environment(&args.log_level)?;

    let config = run_config_from_args(&args, |key| std::env::var(key).ok())?;
    info!(base_url = %config.base_url, timeout_ms = config.timeout.as_millis() as u64, "Starting run");

    let api = HealthcareApi::from_config(&config)?;
    let mut rates = RandomRates::from_seed(config.seed);
    let run = pipeline::run_pipeline(&api, &KeywordTable::default(), &mut rates)?;

    match mode {
        OutputMode::Full => {
            let shown = filter_specialty(&run.profiles, &config);
            println!("{}", crate::report::format_header(Local::now()));
            print!("{}", crate::report::format_report(&shown));
            print!("{}", crate::report::format_samples(&shown, config.sample_count));
        }
        OutputMode::SummaryOnly => {
            print!("{}", crate::report::format_summary(&run.summary));
        }
    }

    // Exports always carry every profile, regardless of the display filter.
    if let Some(path) = &config.export_csv {
        crate::io::write_profiles_csv(path, &run.profiles)?;
        info!(path = %path.display(), "Wrote CSV export");
    }
    if let Some(path) = &config.export_json {
        crate::io::write_profiles_json(path, &run.profiles)?;
        info!(path = %path.display(), "Wrote JSON export");
    }

    Ok(())
}

fn filter_specialty(profiles: &[DerivedProfile], config: &RunConfig) -> Vec<DerivedProfile> {
    match config.specialty {
        Some(specialty) => profiles
            .iter()
            .filter(|p| p.specialty == specialty)
            .cloned()
            .collect(),
        None => profiles.to_vec(),
    }
}

/// Resolve flags, then environment, then defaults into a validated config.
pub fn run_config_from_args<F>(args: &RunArgs, env: F) -> Result<RunConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let base_url = match &args.base_url {
        Some(url) => url.clone(),
        None => env(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    };
    let base_url = base_url.trim().to_string();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(AppError::config(format!(
            "Invalid base URL '{base_url}': expected an http:// or https:// URL."
        )));
    }

    let timeout_ms = match args.timeout_ms {
        Some(ms) => ms,
        None => match env(ENV_TIMEOUT_MS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::config(format!("Invalid {ENV_TIMEOUT_MS} '{raw}': {e}"))
            })?,
            None => DEFAULT_TIMEOUT_MS,
        },
    };
    if timeout_ms == 0 {
        return Err(AppError::config("Timeout must be > 0 ms."));
    }

    Ok(RunConfig {
        base_url,
        timeout: Duration::from_millis(timeout_ms),
        seed: args.seed,
        sample_count: args.samples,
        specialty: args.specialty,
        export_csv: args.export.clone(),
        export_json: args.export_json.clone(),
    })
}

/// Rewrite argv so `hcs` defaults to `hcs report`.
///
/// Rules:
/// - `hcs`                      -> `hcs report`
/// - `hcs --seed 1 ...`         -> `hcs report --seed 1 ...`
/// - `hcs --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "summary");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    argv
}
