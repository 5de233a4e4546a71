//! Reporting utilities: bucketing and formatted terminal output.

use crate::domain::{Availability, DerivedProfile, Specialty};

pub mod format;

pub use format::*;

/// Profiles sharing one `(specialty, availability)` pair, in input order.
#[derive(Debug, Clone)]
pub struct Bucket<'a> {
    pub specialty: Specialty,
    pub availability: Availability,
    pub profiles: Vec<&'a DerivedProfile>,
}

/// Group profiles by specialty, then availability, in report order.
///
/// Empty buckets are dropped.
pub fn group_profiles(profiles: &[DerivedProfile]) -> Vec<Bucket<'_>> {
    let mut out = Vec::new();
    for specialty in Specialty::ALL {
        for availability in Availability::ALL {
            let members: Vec<&DerivedProfile> = profiles
                .iter()
                .filter(|p| p.specialty == specialty && p.availability == availability)
                .collect();
            if !members.is_empty() {
                out.push(Bucket {
                    specialty,
                    availability,
                    profiles: members,
                });
            }
        }
    }
    out
}
