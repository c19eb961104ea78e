use crate::builders::ranges::SkipRange;
use crate::builders::reporter::{ConsoleReporter, StatusReporter, StripReport};
use crate::builders::validator::{ConfigValidator, StandardValidator};
use crate::core::config::{ConfigManager, ConfigProvider, StripConfig};
use crate::core::engine::LineStripper;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{Level, info, warn};

/// Installs the stderr log subscriber. Call once, from `main`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the effective config: defaults or `config_path`, then overrides.
pub fn resolve_config(
    config_path: Option<PathBuf>,
    target: Option<PathBuf>,
    ranges: Vec<SkipRange>,
) -> Result<StripConfig> {
    let manager = match config_path {
        Some(path) => ConfigManager::new_at(path),
        None => ConfigManager::new(),
    };
    let config = manager.load_config()?;
    match manager.get_config_path() {
        Some(path) => info!(config = %path.display(), "loaded config file"),
        None => info!("using built-in target and ranges"),
    }
    Ok(config.with_overrides(target, ranges))
}

/// Writes `config` to `path` as a starter TOML file.
///
/// An existing file is kept as is and reported, not overwritten.
pub fn write_config(path: PathBuf, config: &StripConfig) -> Result<()> {
    let manager = ConfigManager::new_at(path.clone());
    if manager.initialize(config)? {
        println!("✓ Wrote config to {}", path.display());
    } else {
        println!("{} already exists, leaving it unchanged", path.display());
    }
    Ok(())
}

/// Strips `config.target` and prints the status lines.
pub fn run_strip(config: &StripConfig, dry_run: bool) -> Result<StripReport> {
    for issue in StandardValidator::new().validate_config(config)? {
        warn!("{issue}");
    }

    let stripper = LineStripper::new(config)?;
    let report = stripper.run(dry_run)?;
    ConsoleReporter::new().report(&report)?;
    Ok(report)
}

/// Prints validation issues and fails if there are any.
pub fn validate_config(config: &StripConfig) -> Result<()> {
    ConfigManager::new().validate_config(config)
}
