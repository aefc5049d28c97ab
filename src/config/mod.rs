//! Configuration management module.
//!
//! Handles loading and saving application configuration from JSON file.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
    #[serde(default)]
    pub last_directory: Option<PathBuf>,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_window_size() -> [f32; 2] {
    [800.0, 600.0]
}

fn default_font_size() -> f32 {
    14.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            last_directory: None,
            font_size: default_font_size(),
        }
    }
}

/// Configuration manager for loading/saving config.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        let config_path = directories::ProjectDirs::from("com", "scratchpad", "scratchpad")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| Self::get_exe_directory().join(CONFIG_FILE_NAME));
        log::debug!("Config path: {}", config_path.display());
        Self { config_path }
    }

    #[cfg(test)]
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Get the directory containing the executable.
    fn get_exe_directory() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the config file path.
    pub fn get_config_file_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from file, falling back to defaults.
    pub fn load(&self) -> Config {
        if !self.config_path.exists() {
            return Config::default();
        }

        match self.try_load() {
            Ok(mut config) => {
                if config.window_size.iter().any(|v| !v.is_finite() || *v <= 0.0) {
                    config.window_size = default_window_size();
                }
                if !config.font_size.is_finite() || config.font_size <= 0.0 {
                    config.font_size = default_font_size();
                }
                config
            }
            Err(e) => {
                log::warn!("Ignoring unreadable config: {:#}", e);
                Config::default()
            }
        }
    }

    fn try_load(&self) -> anyhow::Result<Config> {
        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("reading {}", self.config_path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.config_path.display()))
    }

    /// Save configuration to file.
    pub fn save(&self, config: &Config) -> anyhow::Result<()> {
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, json)
            .with_context(|| format!("writing {}", self.config_path.display()))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
