//! Raw records -> derived profiles.

use tracing::info;

use crate::classify::keywords::KeywordTable;
use crate::classify::rate::{RateSource, hourly_rate};
use crate::data::{RawCertificationRecord, RawWorkerRecord};
use crate::domain::{Availability, DerivedProfile, Specialty};

/// Per-specialty and per-availability totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub nurses: usize,
    pub doctors: usize,
    pub techs: usize,
    pub other: usize,
    pub available: usize,
    pub busy: usize,
    pub unavailable: usize,
}

impl Summary {
    pub fn specialty_count(&self, specialty: Specialty) -> usize {
        match specialty {
            Specialty::Nurse => self.nurses,
            Specialty::Doctor => self.doctors,
            Specialty::Tech => self.techs,
            Specialty::Other => self.other,
        }
    }

    pub fn availability_count(&self, availability: Availability) -> usize {
        match availability {
            Availability::Available => self.available,
            Availability::Busy => self.busy,
            Availability::Unavailable => self.unavailable,
        }
    }
}

pub fn summarize(profiles: &[DerivedProfile]) -> Summary {
    let mut summary = Summary {
        total: profiles.len(),
        ..Summary::default()
    };
    for p in profiles {
        match p.specialty {
            Specialty::Nurse => summary.nurses += 1,
            Specialty::Doctor => summary.doctors += 1,
            Specialty::Tech => summary.techs += 1,
            Specialty::Other => summary.other += 1,
        }
        match p.availability {
            Availability::Available => summary.available += 1,
            Availability::Busy => summary.busy += 1,
            Availability::Unavailable => summary.unavailable += 1,
        }
    }
    summary
}

pub fn count_certifications(worker_id: i64, certifications: &[RawCertificationRecord]) -> usize {
    certifications
        .iter()
        .filter(|c| c.user_id == worker_id)
        .count()
}

pub fn transform_worker<S: RateSource + ?Sized>(
    worker: &RawWorkerRecord,
    certifications: &[RawCertificationRecord],
    keywords: &KeywordTable,
    rates: &mut S,
) -> DerivedProfile {
    let certification_count = count_certifications(worker.id, certifications);
    let specialty = keywords.determine_specialty(&worker.company.name);
    let availability = Availability::from_certification_count(certification_count);
    let hourly_rate = hourly_rate(specialty, certification_count, rates);

    DerivedProfile {
        id: worker.id,
        name: worker.name.clone(),
        email: worker.email.clone(),
        phone: worker.phone.clone(),
        specialty,
        certification_count,
        availability,
        hourly_rate,
    }
}

/// Derive one profile per worker, in input order, and log the totals.
pub fn process_workers<S: RateSource + ?Sized>(
    workers: &[RawWorkerRecord],
    certifications: &[RawCertificationRecord],
    keywords: &KeywordTable,
    rates: &mut S,
) -> Vec<DerivedProfile> {
    info!("Processing healthcare worker data");

    let profiles: Vec<DerivedProfile> = workers
        .iter()
        .map(|w| transform_worker(w, certifications, keywords, rates))
        .collect();

    let s = summarize(&profiles);
    info!(
        total = s.total,
        nurses = s.nurses,
        doctors = s.doctors,
        techs = s.techs,
        other = s.other,
        "Processed healthcare workers"
    );
    info!(
        available = s.available,
        busy = s.busy,
        unavailable = s.unavailable,
        "Availability totals"
    );

    profiles
}
