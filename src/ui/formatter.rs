//! Pure formatting functions for UI output.
//!
//! Everything here builds strings; printing lives in the parent module.

use crate::domain::Version;
use console::style;
use serde::Serialize;
use std::cmp::Ordering;

/// Field-by-field view of a version, as printed by `parse`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionReport {
    pub version: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: String,
    pub pre_identifiers: Vec<String>,
    pub meta: String,
    pub meta_identifiers: Vec<String>,
    pub release_kinds: Vec<String>,
}

impl VersionReport {
    pub fn new(version: &Version) -> Self {
        VersionReport {
            version: version.original().to_string(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre: version.pre().to_string(),
            pre_identifiers: version.pre_identifiers().to_vec(),
            meta: version.meta().to_string(),
            meta_identifiers: version.meta_identifiers().to_vec(),
            release_kinds: release_kinds(version)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Names of the release kinds `version` belongs to
pub fn release_kinds(version: &Version) -> Vec<&'static str> {
    let mut kinds = Vec::new();
    if version.is_major_release() {
        kinds.push("major");
    }
    if version.is_minor_release() {
        kinds.push("minor");
    }
    if version.is_patch_release() {
        kinds.push("patch");
    }
    if version.is_pre_release() {
        kinds.push("pre-release");
    }
    kinds
}

/// `<`, `=` or `>`
pub fn format_ordering(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// `[a, b, c]`, or `[]` for no identifiers
pub fn format_identifiers(identifiers: &[String]) -> String {
    format!("[{}]", identifiers.join(", "))
}

/// Aligned `label: value` lines for one version
pub fn format_report(report: &VersionReport) -> Vec<String> {
    let rows = [
        ("major", report.major.to_string()),
        ("minor", report.minor.to_string()),
        ("patch", report.patch.to_string()),
        ("pre", report.pre.clone()),
        ("pre identifiers", format_identifiers(&report.pre_identifiers)),
        ("meta", report.meta.clone()),
        ("meta identifiers", format_identifiers(&report.meta_identifiers)),
        ("release kinds", report.release_kinds.join(", ")),
    ];

    rows.iter()
        .map(|(label, value)| format!("  {:<17} {}", format!("{}:", label), value))
        .collect()
}

/// One `compare` verdict line, e.g. `1.0.0-alpha < 1.0.0`
pub fn format_comparison(left: &Version, right: &Version, ordering: Ordering) -> String {
    format!(
        "{} {} {}",
        left,
        style(format_ordering(ordering)).bold(),
        right
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_format_ordering() {
        assert_eq!(format_ordering(Ordering::Less), "<");
        assert_eq!(format_ordering(Ordering::Equal), "=");
        assert_eq!(format_ordering(Ordering::Greater), ">");
    }

    #[test]
    fn test_format_identifiers() {
        assert_eq!(format_identifiers(&[]), "[]");
        assert_eq!(
            format_identifiers(&["exp".to_string(), "sha".to_string()]),
            "[exp, sha]"
        );
    }

    #[test]
    fn test_release_kinds() {
        assert_eq!(release_kinds(&v("1.0.0")), vec!["major"]);
        assert_eq!(release_kinds(&v("0.1.0+meta")), vec!["minor"]);
        assert_eq!(release_kinds(&v("1.1.1")), vec!["patch"]);
        assert_eq!(release_kinds(&v("1.1.0-pre")), vec!["pre-release"]);
    }

    #[test]
    fn test_report_fields() {
        let report = VersionReport::new(&v("1.0.0-beta+exp.sha.5114f85"));
        assert_eq!(report.version, "1.0.0-beta+exp.sha.5114f85");
        assert_eq!(report.pre_identifiers, vec!["beta"]);
        assert_eq!(report.meta_identifiers, vec!["exp", "sha", "5114f85"]);
        assert_eq!(report.release_kinds, vec!["pre-release"]);
    }

    #[test]
    fn test_format_report_lines() {
        let lines = format_report(&VersionReport::new(&v("1.2.3-4+5")));
        assert_eq!(lines.len(), 8);
        assert!(lines[0].contains("major:") && lines[0].ends_with(" 1"));
        assert!(lines[4].contains("pre identifiers:") && lines[4].ends_with("[4]"));
        assert!(lines[6].ends_with("[5]"));
    }

    #[test]
    fn test_report_serializes_to_toml() {
        let text = toml::to_string(&VersionReport::new(&v("1.2.3-rc.1"))).unwrap();
        assert!(text.contains("major = 1"));
        assert!(text.contains("pre = \"rc.1\""));
        assert!(text.contains("pre_identifiers = [\"rc\", \"1\"]"));
    }
}
