//! Archive filename generation.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{Error, Result};

/// Matches the export part id in `...fileName=<id>.ZIP...`.
static FILE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*fileName=(.*)\.ZIP.*").unwrap());

/// Extract the export part id from an index URL, if it carries one.
pub fn extract_file_id(url: &str) -> Option<&str> {
    FILE_ID_PATTERN
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Local archive name for an index URL.
///
/// `salesforce-<YYYY-MM-DD>-<id>.ZIP` when the URL names a part,
/// `salesforce-<YYYY-MM-DD>.ZIP` otherwise. The same URL and date always
/// produce the same name, which is what lets re-runs skip finished files.
pub fn archive_file_name(url: &str, date: NaiveDate) -> Result<String> {
    let datestamp = date.format("%Y-%m-%d");

    match extract_file_id(url) {
        Some(id) => Ok(format!(
            "salesforce-{}-{}.ZIP",
            datestamp,
            sanitize_path_component(id)?
        )),
        None => Ok(format!("salesforce-{}.ZIP", datestamp)),
    }
}

/// Sanitize a path component taken from remote input.
///
/// Separators and reserved characters become `_`; traversal is rejected.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    // Reject null bytes
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_name_with_file_id() {
        let url = "/servlet/servlet.OrgExport?fileName=WE_00D3000000abcdEAA_1.ZIP&id=0923000000";
        assert_eq!(
            archive_file_name(url, day()).unwrap(),
            "salesforce-2024-03-09-WE_00D3000000abcdEAA_1.ZIP"
        );
    }

    #[test]
    fn test_name_without_file_id() {
        assert_eq!(
            archive_file_name("/servlet/servlet.OrgExport?id=0923000000", day()).unwrap(),
            "salesforce-2024-03-09.ZIP"
        );
        assert_eq!(
            archive_file_name("", day()).unwrap(),
            "salesforce-2024-03-09.ZIP"
        );
    }

    #[test]
    fn test_name_is_deterministic() {
        let url = "/servlet/servlet.OrgExport?fileName=WE_2.ZIP";
        assert_eq!(
            archive_file_name(url, day()).unwrap(),
            archive_file_name(url, day()).unwrap()
        );
    }

    #[test]
    fn test_lowercase_extension_is_not_matched() {
        assert_eq!(extract_file_id("/x?fileName=WE_1.zip"), None);
    }

    #[test]
    fn test_greedy_match_runs_to_last_zip() {
        assert_eq!(
            extract_file_id("/x?fileName=A.ZIP&next=B.ZIP"),
            Some("A.ZIP&next=B")
        );
    }

    #[test]
    fn test_id_with_separator_is_sanitized() {
        let url = "/x?fileName=part/1.ZIP";
        assert_eq!(
            archive_file_name(url, day()).unwrap(),
            "salesforce-2024-03-09-part_1.ZIP"
        );
    }

    #[test]
    fn test_id_with_traversal_is_rejected() {
        let url = "/x?fileName=../../etc/passwd.ZIP";
        assert!(matches!(
            archive_file_name(url, day()),
            Err(Error::InvalidFilename(_))
        ));
    }

    #[test]
    fn test_sanitize_path_component() {
        assert_eq!(sanitize_path_component("WE_1").unwrap(), "WE_1");
        assert_eq!(sanitize_path_component("a:b*c").unwrap(), "a_b_c");
        assert!(sanitize_path_component("   ").is_err());
        assert!(sanitize_path_component("a\0b").is_err());
    }
}
