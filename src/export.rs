//! Static site export
//!
//! Writes the dashboard as plain files so it can be hosted without the
//! server:
//!
//! ```text
//! <dir>/index.html          dashboard, every row rendered
//! <dir>/api/savings.json    entries, most recent first
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::render::{render_page, FixedSizeList, TableMode};
use crate::savings::SavingsSummary;

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Files written by an export
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub files: Vec<PathBuf>,
}

/// Write the static dashboard into `dir`, creating it if needed
pub fn export_site(summary: &SavingsSummary, dir: &Path) -> Result<ExportReport, ExportError> {
    let api_dir = dir.join("api");
    create_dir(&api_dir)?;

    let index = dir.join("index.html");
    let html = render_page(summary, &FixedSizeList::default(), &TableMode::Static);
    write_file(&index, html.as_bytes())?;

    let json_path = api_dir.join("savings.json");
    let json = serde_json::to_vec_pretty(&summary.entries)?;
    write_file(&json_path, &json)?;

    tracing::info!(dir = ?dir, entries = summary.entries.len(), "Exported static dashboard");

    Ok(ExportReport {
        files: vec![index, json_path],
    })
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
    std::fs::create_dir_all(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    std::fs::write(path, contents).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::savings::{builtin_entries, SavingsEntry};
    use tempfile::tempdir;

    #[test]
    fn test_export_site() {
        let dir = tempdir().unwrap();
        let summary = SavingsSummary::from_entries(&builtin_entries());

        let report = export_site(&summary, dir.path()).unwrap();
        assert_eq!(report.files.len(), 2);

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("Total Savings"));

        let json = std::fs::read_to_string(dir.path().join("api").join("savings.json")).unwrap();
        let entries: Vec<SavingsEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(entries, summary.entries);
    }

    #[test]
    fn test_export_into_nested_dir() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("out").join("site");
        let summary = SavingsSummary::from_entries(&[]);

        export_site(&summary, &target).unwrap();
        let json = std::fs::read_to_string(target.join("api").join("savings.json")).unwrap();
        assert_eq!(json.trim(), "[]");
    }
}
