//! Output formatting abstraction for text vs JSON rendering
//!
//! All subcommand output flows through [`OutputWriter`] which handles format switching.
//! This keeps format-specific logic out of command handlers entirely.

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Abstraction for writing CLI output in different formats.
///
/// Subcommand handlers call `writer.render(&payload)` where `payload`
/// implements both `Serialize` (for JSON) and `Render` (for text).
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    /// Create a new output writer with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a payload to stdout.
    pub fn render<T: Render + Serialize>(&self, payload: &T) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.render_to(payload, &mut handle)
    }

    /// Render a payload to an arbitrary writer.
    ///
    /// For `Text` format, delegates to `Render::render_text()`.
    /// For `Json` format, serialises via `serde_json`.
    pub fn render_to<T: Render + Serialize>(
        &self,
        payload: &T,
        w: &mut dyn Write,
    ) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Text => {
                payload.render_text(w)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *w, payload)?;
                writeln!(w)?;
            }
        }
        Ok(())
    }
}

/// Trait for human-readable text rendering.
///
/// Implemented by every CLI output payload alongside `serde::Serialize`.
pub trait Render {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::summarize::SummaryReport;
    use rlsummary_report::ReportSummarizer;

    fn report() -> SummaryReport {
        let raw = br#"{
            "info": {"file": {"identity": {"name": "lib.jar", "purl": "pkg:maven/acme/lib@2.1"}}},
            "report": {"metadata": {
                "assessments": {"security": {"status": "warning", "violations": ["SQ31102"]}},
                "violations": {"0": {"rule_id": "SQ31102", "severity": "high"}}
            }}
        }"#;
        let summary = ReportSummarizer::default()
            .summarize(raw)
            .expect("sample report should summarize");
        SummaryReport::from(&summary)
    }

    fn render(format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        OutputWriter::new(format)
            .render_to(&report(), &mut buffer)
            .expect("rendering should succeed");
        String::from_utf8(buffer).expect("valid UTF-8")
    }

    #[test]
    fn test_text_format_is_markdown_only() {
        let output = render(OutputFormat::Text);
        assert!(output.starts_with("# Assessments\n"));
        assert!(output.contains("<summary><a name=\"SQ31102\"></a>SQ31102</summary>\n"));
        assert!(!output.contains("pkg:maven"), "identity is JSON-only");
    }

    #[test]
    fn test_json_format_wraps_identity_and_lines() {
        let output = render(OutputFormat::Json);
        assert!(output.ends_with("}\n"));

        let parsed: serde_json::Value =
            serde_json::from_str(&output).expect("should parse back to JSON");
        assert_eq!(parsed["name"], "lib.jar");
        assert_eq!(parsed["purl"], "pkg:maven/acme/lib@2.1");
        assert_eq!(parsed["violations"], serde_json::json!(["SQ31102"]));
        let lines = parsed["lines"].as_array().expect("lines array");
        assert_eq!(lines.len(), report().lines.len());
    }
}
