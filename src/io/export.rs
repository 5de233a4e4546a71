//! Export derived profiles to CSV or JSON.
//!
//! The CSV is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::DerivedProfile;
use crate::error::AppError;

/// Write one CSV row per profile.
pub fn write_profiles_csv(path: &Path, profiles: &[DerivedProfile]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::config(format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    writeln!(
        file,
        "id,name,email,phone,specialty,certification_count,availability,hourly_rate"
    )
    .map_err(|e| AppError::config(format!("Failed to write export CSV header: {e}")))?;

    for p in profiles {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{:.2}",
            p.id,
            csv_field(&p.name),
            csv_field(&p.email),
            csv_field(&p.phone),
            p.specialty.display_name(),
            p.certification_count,
            p.availability.as_str(),
            p.hourly_rate,
        )
        .map_err(|e| AppError::config(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write all profiles as a pretty-printed JSON array.
pub fn write_profiles_json(path: &Path, profiles: &[DerivedProfile]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!("Failed to create export JSON '{}': {e}", path.display()))
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, profiles)
        .map_err(|e| AppError::config(format!("Failed to write export JSON: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::config(format!("Failed to write export JSON: {e}")))
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Availability, Specialty};

    fn sample() -> Vec<DerivedProfile> {
        vec![DerivedProfile {
            id: 1,
            name: "Lee, Ann".to_string(),
            email: "ann@example.com".to_string(),
            phone: "1-770-736-8031 x56442".to_string(),
            specialty: Specialty::Nurse,
            certification_count: 4,
            availability: Availability::Available,
            hourly_rate: 56.0,
        }]
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        write_profiles_csv(&path, &sample()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("id,name,email"));
        assert_eq!(
            lines[1],
            "1,\"Lee, Ann\",ann@example.com,1-770-736-8031 x56442,Nurse,4,available,56.00"
        );
    }

    #[test]
    fn json_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        let profiles = sample();
        write_profiles_json(&path, &profiles).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let back: Vec<DerivedProfile> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, profiles);
    }

    #[test]
    fn export_to_missing_dir_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("profiles.csv");
        let err = write_profiles_csv(&path, &sample()).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG);
    }
}
