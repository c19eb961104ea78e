use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::builders::ranges::{SkipRange, SkipRanges};
use crate::builders::validator::{ConfigValidator, StandardValidator};

/// File rewritten when nothing else is configured.
pub const DEFAULT_TARGET: &str = "src/main.js";

/// Ranges removed when nothing else is configured: the commented cash view
/// block, then the cash button in the sidebar.
pub const DEFAULT_SKIP_RANGES: [SkipRange; 2] = [
    SkipRange { start: 246, end: 310 },
    SkipRange { start: 195, end: 198 },
];

/// What to strip and from where.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StripConfig {
    pub target: PathBuf,
    #[serde(default)]
    pub skip_ranges: Vec<SkipRange>,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            skip_ranges: DEFAULT_SKIP_RANGES.to_vec(),
        }
    }
}

impl StripConfig {
    pub fn ranges(&self) -> SkipRanges {
        SkipRanges::from(self.skip_ranges.as_slice())
    }

    /// Applies command-line overrides on top of this config.
    ///
    /// A target replaces the configured one; a non-empty list of ranges
    /// replaces the configured ranges wholesale.
    pub fn with_overrides(mut self, target: Option<PathBuf>, ranges: Vec<SkipRange>) -> Self {
        if let Some(target) = target {
            self.target = target;
        }
        if !ranges.is_empty() {
            self.skip_ranges = ranges;
        }
        self
    }
}

/// The `ConfigProvider` trait abstracts where a `StripConfig` comes from
/// and where it is written.
pub trait ConfigProvider {
    /// Loads the effective configuration.
    ///
    /// # Returns
    /// `Result<StripConfig>` holding the built-in defaults when no file is
    /// configured, or the parsed file. An error is returned if a configured
    /// file cannot be read or is not valid TOML.
    fn load_config(&self) -> Result<StripConfig>;

    /// Serializes `config` as TOML to the configured file, replacing it.
    ///
    /// # Arguments
    /// * `config`: The configuration to write.
    ///
    /// # Returns
    /// An error if no file path is configured or the write fails.
    fn save_config(&self, config: &StripConfig) -> Result<()>;

    /// The config file this provider reads, if any.
    fn get_config_path(&self) -> Option<&Path>;
}

/// Resolves the effective `StripConfig`.
///
/// Without a config path the built-in defaults are used. With one, the file
/// must exist and parse.
pub struct ConfigManager {
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Creates a manager with no config file; `load_config` yields the
    /// built-in target and ranges.
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Creates a manager bound to a TOML file.
    ///
    /// # Arguments
    /// * `config_path`: Path of the file to read in `load_config` and write
    ///   in `save_config`. It is not touched until one of those is called.
    pub fn new_at(config_path: PathBuf) -> Self {
        Self {
            config_path: Some(config_path),
        }
    }

    /// Writes `config` as a starter file unless the file already exists.
    ///
    /// An existing file is left alone so hand edits are never clobbered.
    ///
    /// # Arguments
    /// * `config`: The configuration to seed the file with.
    ///
    /// # Returns
    /// `Result<bool>`: `true` if the file was written, `false` if it was
    /// already present.
    pub fn initialize(&self, config: &StripConfig) -> Result<bool> {
        if self.get_config_path().is_some_and(Path::exists) {
            return Ok(false);
        }
        self.save_config(config)?;
        Ok(true)
    }

    /// Runs the `StandardValidator` over `config` and prints the outcome.
    ///
    /// # Arguments
    /// * `config`: The effective configuration, overrides already applied.
    ///
    /// # Returns
    /// `Ok(())` when there are no issues; otherwise the issues are printed
    /// and an error is returned so the process exits non-zero.
    pub fn validate_config(&self, config: &StripConfig) -> Result<()> {
        let validator = StandardValidator::new();
        let issues = validator.validate_config(config)?;

        if issues.is_empty() {
            println!("✓ Configuration is valid.");
            Ok(())
        } else {
            println!("⚠️  Found issues in configuration:");
            for issue in issues {
                println!("  - {issue}");
            }
            anyhow::bail!("Configuration validation failed.");
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for ConfigManager {
    fn load_config(&self) -> Result<StripConfig> {
        let Some(path) = &self.config_path else {
            return Ok(StripConfig::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn save_config(&self, config: &StripConfig) -> Result<()> {
        let Some(path) = &self.config_path else {
            anyhow::bail!("No config file path set");
        };
        let content = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    fn get_config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
