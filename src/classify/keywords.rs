//! Organization-name keyword table and specialty resolution.

use crate::classify::hash::string_hash;
use crate::domain::Specialty;

/// Ordered `(keyword, specialty)` pairs.
///
/// Lookup walks the table in declaration order and the first keyword
/// contained in the name wins, regardless of where it occurs in the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<(String, Specialty)>,
}

impl KeywordTable {
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Specialty)>,
        K: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(keyword, specialty)| (keyword.into().to_lowercase(), specialty))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(String, Specialty)] {
        &self.entries
    }

    /// First table entry whose keyword appears in `lowered`.
    pub fn lookup(&self, lowered: &str) -> Option<Specialty> {
        self.entries
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword.as_str()))
            .map(|(_, specialty)| *specialty)
    }

    /// Resolve a specialty for an organization name, falling back to the
    /// name hash when no keyword matches.
    pub fn determine_specialty(&self, organization: &str) -> Specialty {
        let lowered = organization.to_lowercase();
        self.lookup(&lowered)
            .unwrap_or_else(|| fallback_specialty(&lowered))
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new([
            ("health", Specialty::Nurse),
            ("care", Specialty::Nurse),
            ("med", Specialty::Doctor),
            ("clinic", Specialty::Doctor),
            ("hospital", Specialty::Doctor),
            ("tech", Specialty::Tech),
            ("systems", Specialty::Tech),
            ("solutions", Specialty::Tech),
            ("group", Specialty::Other),
            ("inc", Specialty::Other),
            ("llc", Specialty::Other),
        ])
    }
}

/// Hash-based assignment for names with no keyword match.
///
/// The remainder is always in `0..3`, so `Other` is never produced here.
pub fn fallback_specialty(lowered: &str) -> Specialty {
    match string_hash(lowered) % 3 {
        0 => Specialty::Nurse,
        1 => Specialty::Doctor,
        2 => Specialty::Tech,
        _ => Specialty::Other,
    }
}
