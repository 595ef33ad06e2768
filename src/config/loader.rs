use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use super::core::SummaryConfig;
use crate::errors::{Result, SummaryError};

pub const CONFIG_FILE_NAME: &str = ".lighthouse-summary.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<SummaryConfig, String> {
    toml::from_str::<SummaryConfig>(contents).map_err(|e| e.to_string())
}

/// Load an explicitly requested config file. Missing or invalid is an error.
pub fn load_config_from_path(path: &Path) -> Result<SummaryConfig> {
    let contents =
        read_config_file(path).map_err(|e| SummaryError::config(path, e.to_string()))?;
    let config = parse_config(&contents).map_err(|message| SummaryError::config(path, message))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Try one candidate location. `Ok(None)` when there is nothing usable there.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Result<Option<SummaryConfig>> {
    match read_config_file(config_path) {
        Ok(contents) => parse_config(&contents)
            .map(Some)
            .map_err(|message| SummaryError::config(config_path, message)),
        Err(e) => {
            handle_read_error(config_path, &e);
            Ok(None)
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            path = %config_path.display(),
            %error,
            "failed to read config file"
        );
    }
}

/// Load `.lighthouse-summary.toml` from `dir` if it exists.
///
/// Only `dir` itself is checked. A file that exists but does not parse is an
/// error rather than being skipped.
pub fn discover_config(dir: &Path) -> Result<SummaryConfig> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    match try_load_config_from_path(&candidate)? {
        Some(config) => {
            tracing::debug!(path = %candidate.display(), "loaded config");
            Ok(config)
        }
        None => {
            tracing::debug!(path = %candidate.display(), "no config found, using defaults");
            Ok(SummaryConfig::default())
        }
    }
}

/// Explicit path if given, otherwise the working directory's config file.
pub fn load_config(explicit: Option<&Path>) -> Result<SummaryConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match std::env::current_dir() {
        Ok(dir) => discover_config(&dir),
        Err(e) => {
            tracing::warn!(error = %e, "failed to get current directory, using default config");
            Ok(SummaryConfig::default())
        }
    }
}
