use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use filedeck::TimestampMode;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    #[serde(default = "default_relative_timestamps")]
    pub relative_timestamps: bool,
    /// JSON seed list replacing the built-in rows
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
    /// Folders below Home shown in the breadcrumb trail
    #[serde(default = "default_folder_path")]
    pub folder_path: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            icon_mode: default_icon_mode(),
            relative_timestamps: default_relative_timestamps(),
            seed_file: None,
            folder_path: default_folder_path(),
        }
    }
}

impl Config {
    pub fn timestamp_mode(&self) -> TimestampMode {
        if self.relative_timestamps {
            TimestampMode::Relative
        } else {
            TimestampMode::Absolute
        }
    }
}

fn default_icon_mode() -> String {
    "emoji".to_string()
}

fn default_relative_timestamps() -> bool {
    true
}

fn default_folder_path() -> Vec<String> {
    (1..=5).map(|n| format!("Folder {}", n)).collect()
}

/// Load config from an explicit path, the user config dir, or ./config.yaml
///
/// An explicit path must exist. Without one, a missing config file just
/// means defaults.
pub fn load_config(cli_path: Option<String>) -> Result<Config> {
    let Some(path) = find_config_path(cli_path)? else {
        tracing::debug!("No config file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!("Loading config from: {:?}", path);
    let config_str = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&config_str)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub fn parse_config(config_str: &str) -> Result<Config> {
    // An empty YAML document deserializes as null
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

fn find_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/filedeck/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("filedeck").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(!config.vim_mode);
        assert_eq!(config.icon_mode, "emoji");
        assert_eq!(config.timestamp_mode(), TimestampMode::Relative);
        assert_eq!(config.folder_path.len(), 5);
        assert_eq!(config.folder_path[4], "Folder 5");
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config(
            "vim_mode: true\nrelative_timestamps: false\nfolder_path: [Projects, Reports]\n",
        )
        .unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.timestamp_mode(), TimestampMode::Absolute);
        assert_eq!(config.folder_path, vec!["Projects", "Reports"]);
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse_config("vim_mode: [not, a, bool]").is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = load_config(Some("/nonexistent/filedeck.yaml".to_string())).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
