//! Flat text report: one line per archive outcome.
//!
//! Line format: `<url> [<service>] archived=<true|false> error=<err>`, where a
//! missing error is written as `<nil>`.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::archive::ArchiveOutcome;

/// Token written when an outcome carries no error.
pub const NO_ERROR: &str = "<nil>";

/// Render one report line (without the trailing newline).
pub fn format_line(outcome: &ArchiveOutcome) -> String {
    let error = outcome
        .error
        .as_ref()
        .map(|e| e.to_string())
        .unwrap_or_else(|| NO_ERROR.to_string());
    format!(
        "{} [{}] archived={} error={}",
        outcome.url, outcome.service, outcome.archived, error
    )
}

/// Write the report to `path`, replacing any existing file.
pub fn write_report(path: &Path, outcomes: &[ArchiveOutcome]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create report {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for outcome in outcomes {
        writeln!(out, "{}", format_line(outcome))
            .with_context(|| format!("write report {}", path.display()))?;
    }
    out.flush()
        .with_context(|| format!("write report {}", path.display()))?;
    tracing::info!(lines = outcomes.len(), "report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ArchiveError;
    use std::fs;

    fn sample() -> Vec<ArchiveOutcome> {
        vec![
            ArchiveOutcome::from_status("https://a.example/x".into(), "archive.org".into(), 200),
            ArchiveOutcome::from_status("https://b.example/".into(), "archive.org".into(), 404),
            ArchiveOutcome::failed(
                "https://c.example/".into(),
                "archive.org".into(),
                ArchiveError::Worker("boom".into()),
            ),
        ]
    }

    #[test]
    fn format_line_success_and_rejection() {
        let outcomes = sample();
        assert_eq!(
            format_line(&outcomes[0]),
            "https://a.example/x [archive.org] archived=true error=<nil>"
        );
        assert_eq!(
            format_line(&outcomes[1]),
            "https://b.example/ [archive.org] archived=false error=<nil>"
        );
        assert_eq!(
            format_line(&outcomes[2]),
            "https://c.example/ [archive.org] archived=false error=archive worker: boom"
        );
    }

    #[test]
    fn write_report_one_line_per_outcome_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archives_report.txt");
        fs::write(&path, "stale line 1\nstale line 2\nstale line 3\nstale line 4\n").unwrap();

        let outcomes = sample();
        write_report(&path, &outcomes).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(!content.contains("stale"));
        for (line, outcome) in lines.iter().zip(&outcomes) {
            assert_eq!(*line, format_line(outcome));
        }
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn write_report_empty_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_report(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn write_report_uncreatable_path_err() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/report.txt");
        let err = write_report(&path, &sample()).unwrap_err();
        assert!(format!("{:#}", err).contains("create report"));
    }
}
