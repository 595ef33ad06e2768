//! Text rendering of summaries and load failures.

pub mod terminal;

pub use terminal::TerminalWriter;

use crate::errors::SummaryError;
use crate::formatting::FormattingConfig;
use crate::summary::Summary;

pub const SCORES_HEADER: &str = "Lighthouse Scores:";
pub const METRICS_HEADER: &str = "Key Metrics:";
pub const ERROR_PREFIX: &str = "Error analyzing report:";

pub trait OutputWriter {
    fn write_summary(&mut self, summary: &Summary) -> anyhow::Result<()>;
    fn write_error(&mut self, error: &SummaryError) -> anyhow::Result<()>;
}

/// Renders a summary without color.
pub fn render(summary: &Summary) -> String {
    let mut buffer = Vec::new();
    let _ = TerminalWriter::new(&mut buffer, FormattingConfig::plain()).write_summary(summary);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Renders the single error line without color.
pub fn render_error(error: &SummaryError) -> String {
    let mut buffer = Vec::new();
    let _ = TerminalWriter::new(&mut buffer, FormattingConfig::plain()).write_error(error);
    String::from_utf8_lossy(&buffer).into_owned()
}
