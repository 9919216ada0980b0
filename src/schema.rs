//! mood.entry.v1 ingestion schema
//!
//! Parsing and validation for mood entries arriving as JSON. The analytics
//! layers assume in-domain values, so everything out of range is rejected
//! here at the boundary rather than clamped or silently absorbed.

use crate::error::AnalyticsError;
use crate::types::MoodEntry;

/// Current schema version
pub const SCHEMA_VERSION: &str = "mood.entry.v1";

/// Inclusive mood score domain
pub const MOOD_RANGE: (u8, u8) = (1, 10);
/// Inclusive energy and stress level domain
pub const LEVEL_RANGE: (u8, u8) = (1, 10);
/// Inclusive sleep hours domain
pub const SLEEP_RANGE: (f64, f64) = (0.0, 24.0);

/// Check one entry against the value domains.
pub fn validate(entry: &MoodEntry) -> Result<(), AnalyticsError> {
    if entry.mood_score < MOOD_RANGE.0 || entry.mood_score > MOOD_RANGE.1 {
        return Err(AnalyticsError::OutOfRange {
            field: "mood_score",
            value: f64::from(entry.mood_score),
            expected: "1..=10",
        });
    }
    if let Some(energy) = entry.energy_level {
        if energy < LEVEL_RANGE.0 || energy > LEVEL_RANGE.1 {
            return Err(AnalyticsError::OutOfRange {
                field: "energy_level",
                value: f64::from(energy),
                expected: "1..=10",
            });
        }
    }
    if let Some(stress) = entry.stress_level {
        if stress < LEVEL_RANGE.0 || stress > LEVEL_RANGE.1 {
            return Err(AnalyticsError::OutOfRange {
                field: "stress_level",
                value: f64::from(stress),
                expected: "1..=10",
            });
        }
    }
    if let Some(sleep) = entry.sleep_hours {
        if !(SLEEP_RANGE.0..=SLEEP_RANGE.1).contains(&sleep) {
            return Err(AnalyticsError::OutOfRange {
                field: "sleep_hours",
                value: sleep,
                expected: "0.0..=24.0",
            });
        }
    }
    Ok(())
}

/// Parse a single JSON object into a validated entry.
pub fn parse_entry(json: &str) -> Result<MoodEntry, AnalyticsError> {
    let entry: MoodEntry = serde_json::from_str(json)?;
    validate(&entry)?;
    Ok(entry)
}

/// Parse newline-delimited JSON, one entry per non-empty line.
///
/// Fails on the first bad line, reporting its 1-based line number.
pub fn parse_ndjson(input: &str) -> Result<Vec<MoodEntry>, AnalyticsError> {
    let mut entries = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry = parse_entry(line).map_err(|e| {
            AnalyticsError::ParseError(format!("line {}: {}", index + 1, e))
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Parse a JSON array of entries.
pub fn parse_array(input: &str) -> Result<Vec<MoodEntry>, AnalyticsError> {
    let entries: Vec<MoodEntry> = serde_json::from_str(input)?;
    for (index, entry) in entries.iter().enumerate() {
        validate(entry).map_err(|e| {
            AnalyticsError::ParseError(format!("entry {}: {}", index, e))
        })?;
    }
    Ok(entries)
}

/// Parse either an NDJSON stream or a single JSON array, sniffing the shape.
pub fn parse_input(input: &str) -> Result<Vec<MoodEntry>, AnalyticsError> {
    if input.trim_start().starts_with('[') {
        parse_array(input)
    } else {
        parse_ndjson(input)
    }
}

/// Per-line outcome of a batch validation run
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationIssue {
    pub line: usize,
    pub message: String,
}

/// Summary of a batch validation run
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationReport {
    pub total: usize,
    pub valid: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate every line of an NDJSON stream, collecting all failures instead
/// of stopping at the first.
pub fn validate_ndjson(input: &str) -> ValidationReport {
    let mut total = 0;
    let mut valid = 0;
    let mut issues = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        total += 1;
        match parse_entry(line) {
            Ok(_) => valid += 1,
            Err(e) => issues.push(ValidationIssue {
                line: index + 1,
                message: e.to_string(),
            }),
        }
    }

    ValidationReport { total, valid, issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};
    use pretty_assertions::assert_eq;

    fn make_entry(mood: u8) -> MoodEntry {
        let at: DateTime<FixedOffset> = "2024-03-04T09:00:00+00:00".parse().unwrap();
        MoodEntry::new(mood, at)
    }

    #[test]
    fn test_validate_in_domain_entry() {
        let mut entry = make_entry(7);
        entry.energy_level = Some(5);
        entry.stress_level = Some(3);
        entry.sleep_hours = Some(7.5);
        assert!(validate(&entry).is_ok());
    }

    #[test]
    fn test_validate_rejects_mood_out_of_range() {
        let entry = make_entry(11);
        let err = validate(&entry).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::OutOfRange { field: "mood_score", .. }
        ));
    }

    #[test]
    fn test_validate_rejects_zero_mood() {
        let entry = make_entry(0);
        assert!(validate(&entry).is_err());
    }

    #[test]
    fn test_validate_rejects_negative_sleep() {
        let mut entry = make_entry(6);
        entry.sleep_hours = Some(-1.0);
        let err = validate(&entry).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::OutOfRange { field: "sleep_hours", .. }
        ));
    }

    #[test]
    fn test_parse_entry_minimal_json() {
        let json = r#"{"mood_score": 7, "created_at": "2024-03-04T09:00:00+00:00"}"#;
        let entry = parse_entry(json).unwrap();
        assert_eq!(entry.mood_score, 7);
        assert_eq!(entry.energy_level, None);
    }

    #[test]
    fn test_parse_ndjson_skips_blank_lines() {
        let input = concat!(
            r#"{"mood_score": 7, "created_at": "2024-03-04T09:00:00+00:00"}"#,
            "\n\n",
            r#"{"mood_score": 4, "created_at": "2024-03-05T21:00:00+00:00"}"#,
            "\n",
        );
        let entries = parse_ndjson(input).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].mood_score, 4);
    }

    #[test]
    fn test_parse_ndjson_reports_line_number() {
        let input = concat!(
            r#"{"mood_score": 7, "created_at": "2024-03-04T09:00:00+00:00"}"#,
            "\n",
            r#"{"mood_score": 99, "created_at": "2024-03-05T09:00:00+00:00"}"#,
        );
        let err = parse_ndjson(input).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_array() {
        let input = r#"[
            {"mood_score": 8, "created_at": "2024-03-04T09:00:00+00:00", "sleep_hours": 7.5},
            {"mood_score": 3, "created_at": "2024-03-05T09:00:00+00:00"}
        ]"#;
        let entries = parse_array(input).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sleep_hours, Some(7.5));
    }

    #[test]
    fn test_parse_input_sniffs_shape() {
        let array = r#"[{"mood_score": 5, "created_at": "2024-03-04T09:00:00+00:00"}]"#;
        let ndjson = r#"{"mood_score": 5, "created_at": "2024-03-04T09:00:00+00:00"}"#;
        assert_eq!(parse_input(array).unwrap().len(), 1);
        assert_eq!(parse_input(ndjson).unwrap().len(), 1);
    }

    #[test]
    fn test_validate_ndjson_collects_all_issues() {
        let input = concat!(
            r#"{"mood_score": 7, "created_at": "2024-03-04T09:00:00+00:00"}"#,
            "\n",
            r#"not json"#,
            "\n",
            r#"{"mood_score": 0, "created_at": "2024-03-06T09:00:00+00:00"}"#,
        );
        let report = validate_ndjson(input);
        assert_eq!(report.total, 3);
        assert_eq!(report.valid, 1);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0].line, 2);
        assert_eq!(report.issues[1].line, 3);
        assert!(!report.is_clean());
    }
}
