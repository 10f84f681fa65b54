//! Content rules, grouped by the kind of file they inspect.
//!
//! Every rule is a plain function over a file's display name and text that
//! returns the issues it found. Rules never fail; unreadable input is turned
//! into an issue by `read_source` before any rule runs.

pub mod dashboard;
pub mod exec_summary;
pub mod platebook;

use crate::models::{Issue, Severity};
use std::fs;
use std::path::Path;

/// Read a file for inspection, or describe why it could not be read.
pub fn read_source(path: &Path, file: &str) -> Result<String, Issue> {
    fs::read_to_string(path)
        .map_err(|e| Issue::new(Severity::Critical, file, format!("Unreadable file: {}", e)))
}

/// Sort plate numbers captured as text in ascending numeric order.
pub(crate) fn sort_plate_numbers(plates: &mut [String]) {
    plates.sort_by(|a, b| {
        let na = a.parse::<u64>().unwrap_or(u64::MAX);
        let nb = b.parse::<u64>().unwrap_or(u64::MAX);
        na.cmp(&nb).then_with(|| a.cmp(b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_source_missing_file_becomes_critical() {
        let dir = tempdir().unwrap();
        let err = read_source(&dir.path().join("gone.html"), "gone.html").unwrap_err();
        assert_eq!(err.severity, Severity::Critical);
        assert!(err.message.starts_with("Unreadable file:"));
    }

    #[test]
    fn test_read_source_rejects_non_utf8() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("bad.html");
        std::fs::write(&p, [0xff, 0xfe, 0x00]).unwrap();
        assert!(read_source(&p, "bad.html").is_err());
    }

    #[test]
    fn test_plate_numbers_sort_numerically() {
        let mut v = vec!["10".to_string(), "2".to_string(), "1".to_string()];
        sort_plate_numbers(&mut v);
        assert_eq!(v, vec!["1", "2", "10"]);
    }
}
