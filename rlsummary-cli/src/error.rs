//! CLI-specific error types and exit code mapping

use rlsummary_core::error::RlSummaryError;
use rlsummary_report::SummaryError;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to standard Unix exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A subcommand-specific operation failed.
    #[error("{0}")]
    Command(String),

    /// The report could not be read as a JSON object.
    #[error("invalid report: {0}")]
    InvalidReport(String),

    /// The report file could not be read.
    #[error("failed to read report {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// An output file could not be opened or appended to.
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error (stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped domain error from rlsummary-core.
    #[error("{0}")]
    Core(#[from] RlSummaryError),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                  |
    /// |------|--------------------------|
    /// | 0    | Success                  |
    /// | 1    | General / command error  |
    /// | 2    | Configuration error      |
    /// | 3    | Invalid report           |
    /// | 10   | IO error                 |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::InvalidReport(_) => 3,
            Self::ReadInput { .. } | Self::WriteOutput { .. } | Self::Io(_) => 10,
            Self::Core(RlSummaryError::Config(_)) => 2,
            Self::Core(RlSummaryError::Io(_)) => 10,
            Self::JsonSerialize(_) | Self::Command(_) => 1,
        }
    }
}

impl From<SummaryError> for CliError {
    fn from(e: SummaryError) -> Self {
        match e {
            SummaryError::Parse { .. }
            | SummaryError::NotAnObject
            | SummaryError::InputTooLarge { .. } => Self::InvalidReport(e.to_string()),
            SummaryError::Config { .. } => Self::Config(e.to_string()),
        }
    }
}
