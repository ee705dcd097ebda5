//! Savings dataset
//!
//! The built-in snapshot of reported savings, plus an optional loader that
//! replaces it with a JSON file authored by the operator.

use chrono::NaiveDate;
use std::path::Path;

use super::error::{SavingsError, SavingsResult};
use super::types::SavingsEntry;

/// (date, amount, description, source)
const BUILTIN: &[(&str, u64, &str, &str)] = &[
    (
        "2025-01-24",
        420_000_000,
        "In the first 80 hours, approx $420M of current/impending contracts have been cancelled. 2 leases have also been cancelled, focusing on DEI contracts and unoccupied buildings.",
        "https://x.com/DOGE/status/1882862487261114500",
    ),
    (
        "2025-01-25",
        145_000_000,
        "Another $145M in federal savings due to cancellations of 16 DEIA contracts by the Departments of Labor, Transportation, Agriculture, Commerce, HHS, and Treasury. Thanks to those departments for their pro-active and rapid work.",
        "https://x.com/DOGE/status/1883631632110014810",
    ),
    (
        "2025-01-28",
        1_600_000,
        "The GSA terminated three leases of mostly empty office space, with tenants relocating to nearby buildings in the GSA portfolio. With savings of $1.6M, these are the first steps to right size the Federal real estate portfolio of more than 7,500 leases",
        "https://x.com/DOGE/status/1884015256957296917",
    ),
    (
        "2025-01-29",
        45_000_000,
        "The $45 million in DEI scholarships in Burma has been cancelled.",
        "https://x.com/DOGE/status/1884612616347066536",
    ),
    (
        "2025-01-30",
        390_000_000,
        "Through 1/29/2025, 85 DEIA related contracts totaling ~$1B have been terminated within multiple agencies. After subtracting the previously reported $610M in DEI cancellations, the remaining new DEI savings is $390M.",
        "https://x.com/DOGE/status/1884762497850146857",
    ),
    (
        "2025-02-03",
        43_000_000,
        "The number of lease terminations increased from 3 to 22, raising total lease savings from $1.6M to $44.6M. Subtracting the previously reported $1.6M, the new savings is $43M.",
        "https://x.com/DOGE/status/1886273522214813785",
    ),
    (
        "2025-02-03",
        26_000_000,
        "This morning, 20 consulting contracts, mostly focused on \"strategic communication\" and \"executive coaching,\" were terminated for immediate savings of $26mm.",
        "https://x.com/DOGE/status/1886467781136158853",
    ),
    (
        "2025-02-04",
        139_000_000,
        "Today's number has increased to 22 consulting contract terminations for a total savings of ~$45mm. All in today, 36 contracts were terminated for a total savings of ~$165mm across 6 agencies. After subtracting the previously reported $26mm, the new net savings is $139mm.",
        "https://x.com/DOGE/status/1886578681805504608",
    ),
    (
        "2025-02-05",
        33_000_000,
        "12 consulting contract terminations (in GSA and Dept. of Education) totaling $30mm, plus 12 underutilized lease cancellations for an annual savings of $3mm.",
        "https://x.com/DOGE/status/1886982858369020330",
    ),
    (
        "2025-02-06",
        110_000_000,
        "Today, 78 contracts were terminated for convenience across DEI, Non-Performing, Media, and Consulting categories, including one for \"groundwater exploration and assessment in the Islamic Republic of Mauritania.\" Approximately $110mm of total savings.",
        "https://x.com/DOGE/status/1887390241797120317",
    ),
    (
        "2025-02-07",
        182_000_000,
        "In the past 48 hours, HHS canceled 62 contracts worth $182 million. These contracts were entirely for administrative expenses\u{2014}none affected any healthcare programs. This included terminating a $168,000 contract for an Anthony Fauci exhibit at the NIH Museum.",
        "https://x.com/DOGE/status/1887972340446683576",
    ),
    (
        "2025-02-08",
        15_000_000,
        "Today, the Department of Education terminated three DEI training grants totaling $15M. One of the institutions had previously hosted faculty workshops entitled \"Decolonizing the Curriculum\".",
        "https://x.com/DOGE/status/1888034494252192048",
    ),
    (
        "2025-02-08",
        250_000_000,
        "Great coordination across 35 agencies over the last two days to terminate 199 wasteful contracts saving ~$250mm, including:\n-Contract for \"Asia Pacific - Sri Lanka climate change mitigation adaption and resilience coordinator services for forest service\"\n-Workshop for \"Intercultural communication diversity dialogue circle communicating across differences\"",
        "https://x.com/DOGE/status/1888046273543979183",
    ),
];

/// The built-in dataset in authoring order
pub fn builtin_entries() -> Vec<SavingsEntry> {
    BUILTIN
        .iter()
        .filter_map(|(date, amount, description, source)| {
            match SavingsEntry::new(date, *amount, *description, *source) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::error!(error = %e, "Skipping malformed built-in entry");
                    None
                }
            }
        })
        .collect()
}

/// Load entries from a JSON file holding an array of entries
pub fn load_entries(path: &Path) -> SavingsResult<Vec<SavingsEntry>> {
    let content = std::fs::read_to_string(path).map_err(|e| SavingsError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    let entries: Vec<SavingsEntry> =
        serde_json::from_str(&content).map_err(|e| SavingsError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

    tracing::info!(path = ?path, entries = entries.len(), "Loaded savings entries");
    Ok(entries)
}

/// Load from `path` when given, otherwise use the built-in dataset
pub fn resolve_entries(path: Option<&Path>) -> SavingsResult<Vec<SavingsEntry>> {
    match path {
        Some(path) => load_entries(path),
        None => Ok(builtin_entries()),
    }
}

/// Earliest and latest dates in a dataset
pub fn date_span(entries: &[SavingsEntry]) -> Option<(NaiveDate, NaiveDate)> {
    let first = entries.iter().map(|e| e.date).min()?;
    let last = entries.iter().map(|e| e.date).max()?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_entries_all_parse() {
        let entries = builtin_entries();
        assert_eq!(entries.len(), BUILTIN.len());
        assert_eq!(entries.len(), 13);

        let (first, last) = date_span(&entries).unwrap();
        assert_eq!(first.to_string(), "2025-01-24");
        assert_eq!(last.to_string(), "2025-02-08");
    }

    #[test]
    fn test_load_entries_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"date":"2024-01-01","amount":50000,"description":"Process optimization in HR department","source":"https://example.com/report1"}},
               {{"date":"2024-02-01","amount":125000,"description":"Automated paperwork processing","source":"https://example.com/report3"}}]"#
        )
        .unwrap();

        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].amount, 125_000);
    }

    #[test]
    fn test_load_entries_bad_date() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"date":"01/02/2024","amount":1,"description":"","source":""}}]"#
        )
        .unwrap();

        let err = load_entries(file.path()).unwrap_err();
        assert!(matches!(err, SavingsError::Parse { .. }));
    }

    #[test]
    fn test_load_entries_fractional_amount() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"date":"2024-01-01","amount":1.5,"description":"","source":""}}]"#
        )
        .unwrap();

        let err = load_entries(file.path()).unwrap_err();
        assert!(matches!(err, SavingsError::Parse { .. }));
        assert!(err.to_string().contains("amount in whole dollars"));
    }

    #[test]
    fn test_load_entries_missing_file() {
        let err = load_entries(Path::new("/nonexistent/savings.json")).unwrap_err();
        assert!(matches!(err, SavingsError::Io { .. }));
    }

    #[test]
    fn test_resolve_defaults_to_builtin() {
        assert_eq!(resolve_entries(None).unwrap(), builtin_entries());
    }

    #[test]
    fn test_date_span_empty() {
        assert!(date_span(&[]).is_none());
    }
}
