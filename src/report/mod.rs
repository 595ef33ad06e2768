//! Read-only views over a parsed Lighthouse report.
//!
//! The report is kept as an untyped `serde_json` tree. Nothing below the root
//! object is assumed to exist or to have the expected type: every accessor
//! returns an `Option` and callers choose the placeholder.

pub mod metrics;

pub use metrics::KeyMetric;

use serde_json::{Map, Value};
use tracing::{debug, warn};

/// A scored top-level dimension, e.g. Performance or Accessibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub key: String,
    pub title: Option<String>,
    /// Normalized 0..=1 score
    pub score: Option<f64>,
}

impl Category {
    /// Score on the 0-100 scale, truncated toward zero.
    pub fn percent(&self) -> Option<i64> {
        self.score.map(score_to_percent)
    }
}

/// A single audit result. Only the title and display value are projected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audit {
    pub key: String,
    pub title: Option<String>,
    pub display_value: Option<String>,
}

impl Audit {
    fn absent(key: &str) -> Self {
        Self {
            key: key.to_string(),
            title: None,
            display_value: None,
        }
    }
}

/// Borrowed view over the root object of a report document.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    root: &'a Map<String, Value>,
}

impl<'a> Report<'a> {
    /// Returns `None` when the document root is not a JSON object.
    pub fn from_value(document: &'a Value) -> Option<Self> {
        document.as_object().map(|root| Self { root })
    }

    /// Categories in document order. A missing `categories` field is empty.
    pub fn categories(&self) -> Vec<Category> {
        self.section("categories")
            .map(|categories| {
                categories
                    .iter()
                    .map(|(key, value)| project_category(key, value))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Looks up an audit by key; an absent audit has no title or value.
    pub fn audit(&self, key: &str) -> Audit {
        match self.section("audits").and_then(|audits| audits.get(key)) {
            Some(value) => project_audit(key, value),
            None => {
                debug!(audit = key, "audit missing from report");
                Audit::absent(key)
            }
        }
    }

    pub fn key_metrics(&self) -> Vec<Audit> {
        KeyMetric::ALL
            .iter()
            .map(|metric| self.audit(metric.key()))
            .collect()
    }

    fn section(&self, name: &str) -> Option<&'a Map<String, Value>> {
        match self.root.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                warn!(
                    section = name,
                    kind = value_kind(other),
                    "report section is not an object, treating as empty"
                );
                None
            }
        }
    }
}

/// Scales a 0..=1 fraction to 0..=100, truncating like an integer cast.
pub fn score_to_percent(score: f64) -> i64 {
    (score * 100.0).trunc() as i64
}

fn project_category(key: &str, value: &Value) -> Category {
    let fields = value.as_object();
    Category {
        key: key.to_string(),
        title: fields.and_then(|f| text_field(f, "title")),
        score: fields.and_then(|f| f.get("score")).and_then(score_value),
    }
}

// Booleans count as 1 and 0; strings and containers are not scores
fn score_value(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        other => other.as_f64(),
    }
}

fn project_audit(key: &str, value: &Value) -> Audit {
    let fields = value.as_object();
    Audit {
        key: key.to_string(),
        title: fields.and_then(|f| text_field(f, "title")),
        display_value: fields.and_then(|f| text_field(f, "displayValue")),
    }
}

/// Strings are taken verbatim, other non-null values as compact JSON.
fn text_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
