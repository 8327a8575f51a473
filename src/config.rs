// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::client::Credentials;
use crate::client::core::DEFAULT_API_URL;
use crate::context::AppContext;
use crate::error::{Error, Result};
use crate::model::DEFAULT_ANCHOR_WEEKDAY;
use chrono::Weekday;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

pub const ENV_API_KEY: &str = "TICKLER_API_KEY";
pub const ENV_API_TOKEN: &str = "TICKLER_API_TOKEN";

fn default_target_sublist() -> String {
    "AQ".to_string()
}

fn default_anchor_weekday() -> Weekday {
    DEFAULT_ANCHOR_WEEKDAY
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Board receiving the promoted items.
    pub active_board_id: String,
    /// Board holding the Weekly/Monthly/Quarterly sub-lists.
    pub recurring_board_id: String,
    #[serde(default = "default_target_sublist")]
    pub target_sublist_name: String,
    #[serde(default = "default_anchor_weekday")]
    pub anchor_weekday: Weekday,
    #[serde(default)]
    pub allow_duplicates: bool,

    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_board_id: String::new(),
            recurring_board_id: String::new(),
            target_sublist_name: default_target_sublist(),
            anchor_weekday: DEFAULT_ANCHOR_WEEKDAY,
            allow_duplicates: false,
            api_key: String::new(),
            api_token: String::new(),
            api_url: default_api_url(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context, then apply
    /// credential overrides from the environment and validate the result.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx
            .get_config_file_path()
            .map_err(|e| Error::Configuration(e.to_string()))?;
        let mut config = Self::load_from_path(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file without overrides or validation.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Configuration(format!(
                "config file not found at '{}' (run `tickler init`)",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&contents).map_err(|e| {
            Error::Configuration(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Replace credentials with values found by `lookup` (non-empty only).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.api_key = key;
        }
        if let Some(token) = lookup(ENV_API_TOKEN).filter(|v| !v.trim().is_empty()) {
            self.api_token = token;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("active_board_id", &self.active_board_id),
            ("recurring_board_id", &self.recurring_board_id),
            ("target_sublist_name", &self.target_sublist_name),
            ("api_url", &self.api_url),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Configuration(format!("'{}' is not set", field)));
            }
        }
        if !self.credentials().is_complete() {
            return Err(Error::Configuration(format!(
                "'api_key' and 'api_token' must be set (or {} / {})",
                ENV_API_KEY, ENV_API_TOKEN
            )));
        }
        self.log_level_filter()?;
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.api_key.clone(), self.api_token.clone())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(self.log_level.trim()).map_err(|_| {
            Error::Configuration(format!("unknown log_level '{}'", self.log_level))
        })
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx
            .get_config_file_path()
            .map_err(|e| Error::Configuration(e.to_string()))?;
        let toml_str =
            toml::to_string_pretty(self).map_err(|e| Error::Configuration(e.to_string()))?;
        atomic_write(&path, &toml_str).map_err(|e| {
            Error::Configuration(format!(
                "failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write a template config unless one exists. Returns true if a file was written.
    pub fn init(ctx: &dyn AppContext) -> Result<bool> {
        let path = ctx
            .get_config_file_path()
            .map_err(|e| Error::Configuration(e.to_string()))?;
        if path.exists() {
            return Ok(false);
        }
        Self::default().save(ctx)?;
        Ok(true)
    }

    /// Get the path string using an explicit context.
    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx
            .get_config_file_path()
            .map_err(|e| Error::Configuration(e.to_string()))?;
        Ok(path.to_string_lossy().to_string())
    }
}

fn atomic_write(path: &Path, contents: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("toml.tmp");
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)
}
