use std::fs;
use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Parser)]
#[command(
    name = "linetally",
    about = "Terminal dashboard for the AI-vs-human line estimate document"
)]
pub struct Cli {
    /// Estimate document URL (e.g. https://example.org/data/estimate.json)
    #[arg(long)]
    pub url: Option<String>,
    /// Print a one-shot JSON report instead of the TUI
    #[arg(long)]
    pub json: bool,
    /// Write a static HTML snapshot to PATH (stdout when PATH is omitted)
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "-")]
    pub html: Option<String>,
    /// Show full grouped digits instead of K/M/B abbreviations
    #[arg(long)]
    pub plain: bool,
    /// Reset saved configuration
    #[arg(long)]
    pub reset: bool,
}

/// Settings remembered between runs. Only the launch configuration is saved;
/// the estimate document itself is re-fetched every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfig {
    pub url: String,
    #[serde(default)]
    pub json_mode: bool,
    #[serde(default)]
    pub plain_numbers: bool,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("linetally").join("config.json"))
}

pub fn load_config() -> Option<SavedConfig> {
    let path = config_path()?;
    let contents = fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

pub fn save_config(config: &SavedConfig) -> Result<(), AppError> {
    let path = config_path()
        .ok_or_else(|| AppError::Config("no configuration directory available".to_string()))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Delete the saved configuration. Returns whether anything was removed.
pub fn reset_config() -> Result<bool, AppError> {
    let path = config_path()
        .ok_or_else(|| AppError::Config("no configuration directory available".to_string()))?;
    if path.exists() {
        fs::remove_file(path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_config_round_trip() {
        let config = SavedConfig {
            url: "http://localhost:8080/data/estimate.json".to_string(),
            json_mode: false,
            plain_numbers: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SavedConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_saved_config_defaults() {
        // Older config files only stored the URL
        let back: SavedConfig =
            serde_json::from_str(r#"{"url": "http://localhost/estimate.json"}"#).unwrap();
        assert!(!back.json_mode);
        assert!(!back.plain_numbers);
    }
}
