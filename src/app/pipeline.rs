//! Shared fetch -> classify pipeline used by every command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! concurrent fetch -> payload validation -> transform -> totals
//!
//! The commands can then focus on presentation.

use tracing::error;

use crate::classify::{KeywordTable, RateSource, Summary, process_workers, summarize};
use crate::data::{
    DataSource, FetchResult, FetchedData, RawCertificationRecord, RawWorkerRecord, fetch_all,
};
use crate::domain::DerivedProfile;
use crate::error::AppError;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub profiles: Vec<DerivedProfile>,
    pub summary: Summary,
}

/// Execute the full pipeline against `source`.
pub fn run_pipeline<S, R>(
    source: &S,
    keywords: &KeywordTable,
    rates: &mut R,
) -> Result<RunOutput, AppError>
where
    S: DataSource + Sync + ?Sized,
    R: RateSource + ?Sized,
{
    let fetched = fetch_all(source);
    let (workers, certifications) = validate_fetch(fetched)?;

    let profiles = process_workers(&workers, &certifications, keywords, rates);
    let summary = summarize(&profiles);

    Ok(RunOutput { profiles, summary })
}

/// Require both fetches to have succeeded and carried data.
///
/// A failure on either side reports both outcomes.
pub fn validate_fetch(
    fetched: FetchedData,
) -> Result<(Vec<RawWorkerRecord>, Vec<RawCertificationRecord>), AppError> {
    match (fetched.workers, fetched.certifications) {
        (Ok(workers), Ok(certifications)) => {
            let workers = workers.ok_or_else(|| AppError::missing_payload("worker"))?;
            let certifications =
                certifications.ok_or_else(|| AppError::missing_payload("certification"))?;
            Ok((workers, certifications))
        }
        (workers, certifications) => {
            let workers = outcome(&workers);
            let certifications = outcome(&certifications);
            error!(workers, certifications, "Failed to fetch data");
            Err(AppError::fetch_failed(workers, certifications))
        }
    }
}

/// Short status of one fetch for error reporting.
fn outcome<T>(result: &FetchResult<T>) -> &str {
    match result {
        Ok(Some(_)) => "ok",
        Ok(None) => "no data",
        Err(e) => e.message(),
    }
}
