//! Formatted terminal output.
//!
//! Formatting is kept in one place so the classifier stays free of
//! presentation concerns and output changes stay localized.

use chrono::{DateTime, Local};

use crate::classify::Summary;
use crate::domain::{Availability, DerivedProfile, Specialty};
use crate::report::group_profiles;

const TITLE: &str = "🏥 Healthcare Staff Report";

/// Title block with the generation time.
pub fn format_header(generated_at: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(TITLE.chars().count()));
    out.push('\n');
    out.push_str(&format!(
        "Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out
}

/// Grouped report body: one section per non-empty (specialty, availability).
pub fn format_report(profiles: &[DerivedProfile]) -> String {
    let buckets = group_profiles(profiles);
    if buckets.is_empty() {
        return "No healthcare workers to report.\n".to_string();
    }

    let mut out = String::new();
    for bucket in &buckets {
        out.push_str(&format!(
            "{} {} {}S ({}):\n",
            bucket.availability.marker(),
            bucket.availability.as_str().to_uppercase(),
            bucket.specialty.display_name().to_uppercase(),
            bucket.profiles.len()
        ));
        for p in &bucket.profiles {
            out.push_str(&format!(
                "   • {} ({}) - ${:.2}/hr - {} certs\n",
                p.name, p.email, p.hourly_rate, p.certification_count
            ));
        }
        out.push('\n');
    }
    out
}

/// Totals block.
pub fn format_summary(summary: &Summary) -> String {
    let specialties: Vec<String> = Specialty::ALL
        .iter()
        .map(|&s| format!("{}: {}", plural(s), summary.specialty_count(s)))
        .collect();
    let availabilities: Vec<String> = Availability::ALL
        .iter()
        .map(|&a| format!("{}: {}", capitalize(a.as_str()), summary.availability_count(a)))
        .collect();

    let mut out = String::new();
    out.push_str(&format!("📊 Summary ({} workers)\n", summary.total));
    out.push_str(&format!("   {}\n", specialties.join(" | ")));
    out.push_str(&format!("   {}\n", availabilities.join(" | ")));
    out
}

const NAME_WIDTH: usize = 24;

/// Detailed lines for the first `count` profiles.
pub fn format_samples(profiles: &[DerivedProfile], count: usize) -> String {
    if count == 0 || profiles.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("Sample worker details:\n");
    for p in profiles.iter().take(count) {
        out.push_str(&format!(
            "  #{:<4} {:<24} {:<7} {:<12} {:>3} certs  ${:>8.2}/hr  {}\n",
            p.id,
            clip_name(&p.name, NAME_WIDTH),
            p.specialty.display_name(),
            p.availability.as_str(),
            p.certification_count,
            p.hourly_rate,
            p.phone
        ));
    }
    out
}

fn plural(specialty: Specialty) -> &'static str {
    match specialty {
        Specialty::Nurse => "Nurses",
        Specialty::Doctor => "Doctors",
        Specialty::Tech => "Techs",
        Specialty::Other => "Other",
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Clip a worker name to `width` columns, marking the cut with `~`.
fn clip_name(name: &str, width: usize) -> String {
    match name.char_indices().nth(width) {
        None => name.to_string(),
        Some(_) => {
            let keep = width.saturating_sub(1);
            let end = name.char_indices().nth(keep).map_or(name.len(), |(i, _)| i);
            format!("{}~", &name[..end])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::summarize;
    use crate::report::fixtures::profile;
    use chrono::TimeZone;

    #[test]
    fn report_renders_non_empty_buckets_only() {
        let profiles = vec![
            profile(1, "Ann", Specialty::Nurse, 4, 56.0),
            profile(2, "Ben", Specialty::Tech, 0, 30.5),
            profile(3, "Cal", Specialty::Doctor, 6, 160.25),
        ];
        let report = format_report(&profiles);

        assert!(report.contains("⏰ BUSY DOCTORS (1):"));
        assert!(report.contains("✅ AVAILABLE NURSES (1):"));
        assert!(report.contains("❌ UNAVAILABLE TECHS (1):"));
        assert!(!report.contains("BUSY TECHS"));
        assert!(!report.contains("OTHERS"));
        assert!(report.contains("   • Ann (ann@example.com) - $56.00/hr - 4 certs\n"));

        let doctors = report.find("DOCTORS").unwrap();
        let nurses = report.find("NURSES").unwrap();
        let techs = report.find("TECHS").unwrap();
        assert!(doctors < nurses && nurses < techs);
    }

    #[test]
    fn bucket_lines_keep_input_order() {
        let profiles = vec![
            profile(1, "Zed", Specialty::Other, 1, 40.0),
            profile(2, "Amy", Specialty::Other, 0, 31.0),
        ];
        let report = format_report(&profiles);
        assert!(report.contains("❌ UNAVAILABLE OTHERS (2):"));
        assert!(report.find("Zed").unwrap() < report.find("Amy").unwrap());
    }

    #[test]
    fn empty_report() {
        assert_eq!(format_report(&[]), "No healthcare workers to report.\n");
    }

    #[test]
    fn summary_lists_all_tags() {
        let profiles = vec![
            profile(1, "Ann", Specialty::Nurse, 4, 56.0),
            profile(2, "Ben", Specialty::Nurse, 9, 70.0),
        ];
        let text = format_summary(&summarize(&profiles));
        assert!(text.contains("(2 workers)"));
        assert!(text.contains("Doctors: 0 | Nurses: 2 | Techs: 0 | Other: 0"));
        assert!(text.contains("Available: 1 | Busy: 1 | Unavailable: 0"));
    }

    #[test]
    fn samples_take_first_n() {
        let profiles = vec![
            profile(1, "Ann", Specialty::Nurse, 4, 56.0),
            profile(2, "Ben", Specialty::Tech, 0, 30.5),
            profile(3, "Cal", Specialty::Doctor, 6, 160.25),
        ];
        let text = format_samples(&profiles, 2);
        assert!(text.starts_with("Sample worker details:\n"));
        assert!(text.contains("Ann"));
        assert!(text.contains("Ben"));
        assert!(!text.contains("Cal"));
        assert_eq!(text.lines().count(), 3);
        assert!(format_samples(&profiles, 0).is_empty());
    }

    #[test]
    fn long_names_are_clipped_in_samples() {
        let name = "Maximiliana Featherstonehaugh-Smythe";
        let profiles = vec![profile(7, name, Specialty::Doctor, 2, 90.0)];
        let text = format_samples(&profiles, 1);
        assert!(text.contains("Maximiliana Featherston~"));
        assert!(!text.contains(name));
    }

    #[test]
    fn clip_name_counts_chars_not_bytes() {
        assert_eq!(clip_name("Zoë", 3), "Zoë");
        assert_eq!(clip_name("Zoë Ødegård", 5), "Zoë ~");
        assert_eq!(clip_name("", 4), "");
        assert_eq!(clip_name("Ann", 0), "~");
    }

    #[test]
    fn header_has_title_and_timestamp() {
        let at = Local.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        let header = format_header(at);
        assert!(header.starts_with(TITLE));
        assert!(header.contains("Generated: 2025-03-04 05:06:07"));
    }
}
