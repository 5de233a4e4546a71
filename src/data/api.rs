//! HTTP integration for the worker and certification endpoints.
//!
//! Every fetch is converted into a `FetchResult` at this boundary: transport
//! errors, timeouts, non-2xx statuses and malformed bodies all become
//! `FetchError` values instead of propagating.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};

use crate::data::records::{RawCertificationRecord, RawWorkerRecord};
use crate::domain::RunConfig;
use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

const WORKERS_PATH: &str = "/users";
const CERTIFICATIONS_PATH: &str = "/posts";

/// Failure side of a fetch: a human-readable message only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {}

/// `Ok(None)` means the request succeeded but the body was JSON `null`.
pub type FetchResult<T> = Result<Option<Vec<T>>, FetchError>;

/// A source of raw records.
///
/// The orchestrator only talks to this trait so it can run against an
/// in-memory source in tests.
pub trait DataSource {
    fn fetch_workers(&self) -> FetchResult<RawWorkerRecord>;
    fn fetch_certifications(&self) -> FetchResult<RawCertificationRecord>;
}

/// Both fetch outcomes of one run.
#[derive(Debug, Clone)]
pub struct FetchedData {
    pub workers: FetchResult<RawWorkerRecord>,
    pub certifications: FetchResult<RawCertificationRecord>,
}

/// One thread per retrieval.
const FETCH_THREADS: usize = 2;

/// Run both retrievals concurrently and wait for both to finish.
///
/// The fetches block on I/O and run on a dedicated two-thread pool, never
/// the global one.
pub fn fetch_all<S>(source: &S) -> FetchedData
where
    S: DataSource + Sync + ?Sized,
{
    info!("Starting data fetch");
    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(FETCH_THREADS)
        .thread_name(|i| format!("hcs-fetch-{i}"))
        .build()
    {
        Ok(pool) => pool,
        Err(e) => {
            let err = FetchError::new(format!("Failed to start fetch threads: {e}"));
            error!(error = %err, "Cannot fetch data");
            return FetchedData {
                workers: Err(err.clone()),
                certifications: Err(err),
            };
        }
    };

    let (workers, certifications) = pool.join(
        || source.fetch_workers(),
        || source.fetch_certifications(),
    );
    FetchedData {
        workers,
        certifications,
    }
}

pub struct HealthcareApi {
    client: Client,
    base_url: String,
}

impl HealthcareApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &RunConfig) -> Result<Self, AppError> {
        Self::new(config.base_url.clone(), config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_collection<T: DeserializeOwned>(&self, path: &str, label: &str) -> FetchResult<T> {
        info!("Fetching {label}");
        let result = self.request(path);
        match &result {
            Ok(Some(items)) => info!(count = items.len(), "Fetched {label}"),
            Ok(None) => warn!("Fetched {label} but the response carried no data"),
            Err(e) => error!(error = %e, "Error fetching {label}"),
        }
        result
    }

    fn request<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let url = format!("{}{path}", self.base_url);

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchError::new(format!("Request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::new(format!(
                "Request to {url} failed with status {status}."
            )));
        }

        let body = resp
            .text()
            .map_err(|e| FetchError::new(format!("Failed to read response from {url}: {e}")))?;

        decode_payload(&body)
    }
}

impl DataSource for HealthcareApi {
    fn fetch_workers(&self) -> FetchResult<RawWorkerRecord> {
        self.get_collection(WORKERS_PATH, "healthcare workers")
    }

    fn fetch_certifications(&self) -> FetchResult<RawCertificationRecord> {
        self.get_collection(CERTIFICATIONS_PATH, "certifications")
    }
}

/// Decode a JSON array body; `null` decodes to `Ok(None)`.
pub fn decode_payload<T: DeserializeOwned>(body: &str) -> FetchResult<T> {
    serde_json::from_str::<Option<Vec<T>>>(body)
        .map_err(|e| FetchError::new(format!("Failed to parse response: {e}")))
}
