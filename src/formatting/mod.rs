use clap::ValueEnum;
use colored::*;
use serde::Deserialize;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// An explicit mode wins; otherwise the environment may override `fallback`.
    pub fn resolve(explicit: Option<ColorMode>, fallback: ColorMode) -> Self {
        match explicit {
            Some(mode) => Self::new(mode),
            None => Self::from_env(fallback),
        }
    }

    /// Start from `color` and let the conventional environment switches override it.
    pub fn from_env(color: ColorMode) -> Self {
        Self::new(env_color_override().unwrap_or(color))
    }

    /// No escape sequences at all
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        if self.color.should_use_color() {
            Box::new(ColoredFormatter::new())
        } else {
            Box::new(PlainFormatter)
        }
    }
}

pub trait OutputFormatter {
    fn error(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
}

/// Always styles; only built once coloring has been decided.
pub struct ColoredFormatter;

impl ColoredFormatter {
    pub fn new() -> Self {
        colored::control::set_override(true);
        Self
    }
}

impl Default for ColoredFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for ColoredFormatter {
    fn error(&self, text: &str) -> String {
        text.red().to_string()
    }

    fn header(&self, text: &str) -> String {
        text.blue().bold().to_string()
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }
}

// NO_COLOR (per no-color.org) and CLICOLOR=0 turn colors off, CLICOLOR_FORCE=1 on
fn env_color_override() -> Option<ColorMode> {
    let mut mode = None;
    if env::var_os("NO_COLOR").is_some() {
        mode = Some(ColorMode::Never);
    }
    if env::var("CLICOLOR").is_ok_and(|val| val == "0") {
        mode = Some(ColorMode::Never);
    }
    if env::var("CLICOLOR_FORCE").is_ok_and(|val| val == "1") {
        mode = Some(ColorMode::Always);
    }
    mode
}

fn detect_color_support() -> bool {
    color_supported(env::var("TERM").ok().as_deref(), std::io::stdout().is_terminal())
}

fn color_supported(term: Option<&str>, is_terminal: bool) -> bool {
    term != Some("dumb") && is_terminal
}
