use crate::formatting::ColorMode;
use crate::summary::DEFAULT_REPORT_PATH;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure, read from `.lighthouse-summary.toml`
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct SummaryConfig {
    /// Report to summarize when none is given on the command line
    #[serde(default)]
    pub report_path: Option<PathBuf>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: Option<ColorMode>,
}

impl SummaryConfig {
    /// Command line first, then config, then `lighthouse-report.json`.
    pub fn resolve_report_path(&self, cli_path: Option<PathBuf>) -> PathBuf {
        cli_path
            .or_else(|| self.report_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH))
    }

    /// Configured color mode, `auto` when unset.
    pub fn color(&self) -> ColorMode {
        self.output
            .as_ref()
            .and_then(|o| o.color)
            .unwrap_or_default()
    }
}
