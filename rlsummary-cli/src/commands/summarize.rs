//! `rlsummary summarize` command handler

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use rlsummary_core::config::RlSummaryConfig;
use rlsummary_report::{ReportSummarizer, Summary, SummaryConfig};

use crate::cli::SummarizeArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `summarize` command.
///
/// The markdown is appended to `--output-file` and the outputs to
/// `--github-output` before anything is written to stdout. Both files are
/// opened before either is written, so an unopenable destination leaves the
/// other untouched. A report that cannot be read or parsed produces no output
/// at all.
pub async fn execute(
    args: SummarizeArgs,
    config: &RlSummaryConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let mut summary_config = SummaryConfig::from_core(&config.render);
    if args.plain {
        summary_config.collapsible = false;
    }
    summary_config.validate()?;

    let path = args.rl_json_file.display().to_string();
    info!(path = %path, collapsible = summary_config.collapsible, "summarizing report");

    let raw = tokio::fs::read(&args.rl_json_file)
        .await
        .map_err(|source| CliError::ReadInput {
            path: path.clone(),
            source,
        })?;

    let summary = ReportSummarizer::new(summary_config).summarize(&raw)?;
    debug!(
        name = %summary.identity.name,
        purl = %summary.identity.purl,
        "report identity"
    );

    let mut summary_sink = match &args.output_file {
        Some(path) => Some((open_append(path).await?, path)),
        None => None,
    };
    let mut outputs_sink = match &args.github_output {
        Some(path) => Some((open_append(path).await?, path)),
        None => None,
    };

    if let Some((file, path)) = summary_sink.as_mut() {
        append(file, path.as_path(), &summary.document.to_string()).await?;
        debug!(path = %path.display(), "summary appended");
    }

    if let Some((file, path)) = outputs_sink.as_mut() {
        let outputs = format_outputs(&summary, &chrono::Utc::now().to_rfc3339());
        append(file, path.as_path(), &outputs).await?;
        debug!(path = %path.display(), "outputs appended");
    }

    writer.render(&SummaryReport::from(&summary))?;

    info!(
        path = %path,
        violations = summary.violation_count(),
        "summary written"
    );
    Ok(())
}

/// `key=value` lines for the CI outputs file.
fn format_outputs(summary: &Summary, time: &str) -> String {
    format!("time={time}\nviolations={}\n", summary.violation_count())
}

fn write_output_error(path: &Path, source: std::io::Error) -> CliError {
    CliError::WriteOutput {
        path: path.display().to_string(),
        source,
    }
}

/// Open `path` for appending, creating it if needed.
async fn open_append(path: &Path) -> Result<tokio::fs::File, CliError> {
    tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| write_output_error(path, e))
}

async fn append(file: &mut tokio::fs::File, path: &Path, content: &str) -> Result<(), CliError> {
    file.write_all(content.as_bytes())
        .await
        .map_err(|e| write_output_error(path, e))?;
    file.flush().await.map_err(|e| write_output_error(path, e))
}

/// Rendered summary payload.
///
/// Text output is the raw markdown; JSON output wraps the lines with the file identity.
#[derive(Serialize)]
pub struct SummaryReport {
    /// Scanned file name
    pub name: String,
    /// Scanned file package URL
    pub purl: String,
    /// Referenced violation IDs, sorted
    pub violations: Vec<String>,
    /// Markdown lines
    pub lines: Vec<String>,
}

impl From<&Summary> for SummaryReport {
    fn from(summary: &Summary) -> Self {
        Self {
            name: summary.identity.name.clone(),
            purl: summary.identity.purl.clone(),
            violations: summary.violation_ids.clone(),
            lines: summary.lines().to_vec(),
        }
    }
}

impl Render for SummaryReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        for line in &self.lines {
            writeln!(w, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> Summary {
        let raw = br#"{
            "info": {"file": {"identity": {"name": "app.tgz", "purl": "pkg:npm/app@1.0.0"}}},
            "report": {"metadata": {"assessments": {
                "secrets": {"status": "fail", "count": 1, "violations": ["SQ34101"]}
            }}}
        }"#;
        ReportSummarizer::default()
            .summarize(raw)
            .expect("sample report should summarize")
    }

    #[test]
    fn test_format_outputs() {
        let outputs = format_outputs(&sample_summary(), "2026-01-01T00:00:00+00:00");
        assert_eq!(outputs, "time=2026-01-01T00:00:00+00:00\nviolations=1\n");
    }

    #[test]
    fn test_summary_report_text_is_markdown() {
        let summary = sample_summary();
        let report = SummaryReport::from(&summary);

        let mut buffer = Vec::new();
        report.render_text(&mut buffer).expect("render should succeed");
        assert_eq!(
            String::from_utf8(buffer).expect("valid UTF-8"),
            summary.document.to_string()
        );
    }

    #[test]
    fn test_summary_report_json_fields() {
        let report = SummaryReport::from(&sample_summary());
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["name"], "app.tgz");
        assert_eq!(json["purl"], "pkg:npm/app@1.0.0");
        assert_eq!(json["violations"][0], "SQ34101");
        assert_eq!(json["lines"][0], "# Assessments");
    }

    #[tokio::test]
    async fn test_append_appends() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("summary.md");
        std::fs::write(&path, "existing\n").expect("seed file");

        let mut file = open_append(&path).await.expect("open");
        append(&mut file, &path, "added\n").await.expect("append");
        append(&mut file, &path, "again\n").await.expect("append");
        drop(file);

        let content = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "existing\nadded\nagain\n");
    }

    #[tokio::test]
    async fn test_open_append_error_names_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("outputs");

        let err = open_append(&path).await.expect_err("parent does not exist");
        assert!(matches!(err, CliError::WriteOutput { .. }));
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains(&path.display().to_string()));
    }
}
