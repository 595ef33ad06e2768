// Export modules for library usage
pub mod cli;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod observability;
pub mod output;
pub mod report;
pub mod summary;

// Re-export commonly used types
pub use crate::errors::SummaryError;
pub use crate::output::{render, render_error, OutputWriter, TerminalWriter};
pub use crate::report::{Audit, Category, KeyMetric, Report};
pub use crate::summary::{
    summarize, summarize_value, Summary, SummaryLine, DEFAULT_REPORT_PATH, PLACEHOLDER,
};
