//! Configuration management for cabbook
//!
//! Config stored at: ~/.config/cabbook/config.json

use cabbook_types::{ConfigError, OutputFormat, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What a booking session does once it has been submitted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResubmitPolicy {
    /// Further edits and submits are rejected
    #[default]
    Lock,
    /// Edits reopen the form with its previous values
    Allow,
    /// The form is cleared back to its defaults
    Reset,
}

impl std::fmt::Display for ResubmitPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResubmitPolicy::Lock => write!(f, "lock"),
            ResubmitPolicy::Allow => write!(f, "allow"),
            ResubmitPolicy::Reset => write!(f, "reset"),
        }
    }
}

/// How composed links are handed off
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Launch the desktop opener
    #[default]
    Launch,
    /// Print the links only
    Print,
}

impl std::fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchMode::Launch => write!(f, "launch"),
            DispatchMode::Print => write!(f, "print"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Behaviour after a booking has been submitted
    #[serde(default)]
    pub resubmit_policy: ResubmitPolicy,

    /// Launch or print the dispatch links
    #[serde(default)]
    pub dispatch_mode: DispatchMode,

    /// Opener command override (e.g. "firefox --new-tab")
    #[serde(default)]
    pub opener_command: Option<String>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resubmit_policy: ResubmitPolicy::default(),
            dispatch_mode: DispatchMode::default(),
            opener_command: None,
            output_format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("cabbook");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cabbook Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(f, "Resubmit policy: {}", self.resubmit_policy)?;
        writeln!(f, "Dispatch mode:   {}", self.dispatch_mode)?;
        writeln!(
            f,
            "Opener command:  {}",
            self.opener_command.as_deref().unwrap_or("(platform default)")
        )?;
        writeln!(f, "Output format:   {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}
