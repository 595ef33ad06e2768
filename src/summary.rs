//! Load a report and project it into the lines of a summary.

use crate::errors::{Result, SummaryError};
use crate::report::{Audit, Category, Report};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Report location used when neither the command line nor the config names one.
pub const DEFAULT_REPORT_PATH: &str = "lighthouse-report.json";

/// Rendered in place of any absent title, score or display value.
pub const PLACEHOLDER: &str = "N/A";

/// One `- {label}: {value}` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

impl SummaryLine {
    fn new(label: Option<&str>, value: Option<String>) -> Self {
        Self {
            label: label.unwrap_or(PLACEHOLDER).to_string(),
            value: value.unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }
}

/// Everything needed to print a report summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub categories: Vec<Category>,
    pub metrics: Vec<Audit>,
}

impl Summary {
    pub fn category_lines(&self) -> Vec<SummaryLine> {
        self.categories
            .iter()
            .map(|category| {
                SummaryLine::new(
                    category.title.as_deref(),
                    category.percent().map(|percent| percent.to_string()),
                )
            })
            .collect()
    }

    pub fn metric_lines(&self) -> Vec<SummaryLine> {
        self.metrics
            .iter()
            .map(|audit| SummaryLine::new(audit.title.as_deref(), audit.display_value.clone()))
            .collect()
    }
}

/// Loads the report at `path` and summarizes it.
///
/// Fails only when the file cannot be read, is not JSON, or its root is not
/// an object. Missing fields inside the report never fail.
pub fn summarize(path: &Path) -> Result<Summary> {
    let document = load_document(path)?;
    let summary = summarize_value(&document).ok_or_else(|| SummaryError::not_an_object(path))?;
    info!(
        path = %path.display(),
        categories = summary.categories.len(),
        "summarized report"
    );
    Ok(summary)
}

/// Summarizes an already parsed document. `None` if the root is not an object.
pub fn summarize_value(document: &Value) -> Option<Summary> {
    let report = Report::from_value(document)?;
    Some(Summary {
        categories: report.categories(),
        metrics: report.key_metrics(),
    })
}

pub fn load_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|e| SummaryError::read(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "read report");
    serde_json::from_str(&contents).map_err(|e| SummaryError::parse(path, e))
}
