#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`error`]: Domain error types (`SummaryError`)
//! - [`config`]: Summary configuration (`SummaryConfig`, builder)
//! - [`path`]: Dotted-path lookup over the parsed document (`PathResolver`)
//! - [`report`]: Parsed document and section views (`ReportDocument`, `Report`, `FileIdentity`)
//! - [`classify`]: Status/severity markers and CVSS score bands
//! - [`registry`]: Referenced violation IDs (`ViolationRegistry`)
//! - [`aggregate`]: Assessment and evaluation summary lines
//! - [`expand`]: Violation -> component -> CVE detail blocks (`ViolationExpander`)
//! - [`render`]: Ordered markdown line buffer (`MarkdownDocument`)
//! - [`summary`]: Main orchestrator (`ReportSummarizer`, `Summary`)
//!
//! # Architecture
//!
//! ```text
//! raw bytes --> ReportDocument --> Report (section views)
//!                                     |
//!                  +------------------+------------------+
//!                  |                                     |
//!          summarize_category                    ViolationExpander
//!                  |                                     ^
//!          ViolationRegistry  --- sorted ids ------------+
//!                  |                                     |
//!            # Assessments                         ## Violations
//!                  |                                     |
//!                  +---------> MarkdownDocument <--------+
//! ```

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod expand;
pub mod path;
pub mod registry;
pub mod render;
pub mod report;
pub mod summary;

// --- Public API Re-exports ---

// Summarizer (main orchestrator)
pub use summary::{ReportSummarizer, Summary};

// Configuration
pub use config::{SummaryConfig, SummaryConfigBuilder};

// Error
pub use error::SummaryError;

// Document
pub use path::PathResolver;
pub use report::{FileIdentity, Report, ReportDocument};

// Rendering
pub use expand::ViolationExpander;
pub use registry::ViolationRegistry;
pub use render::MarkdownDocument;
