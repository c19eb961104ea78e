use anyhow::Result;

use crate::builders::ranges::SkipRange;
use crate::core::config::StripConfig;
use crate::core::files::{DiskStore, TextStore};

/// The `ConfigValidator` trait defines the interface for checking a
/// `StripConfig` before it is applied.
///
/// Issues are advisory: a normal run logs them and carries on, while
/// `--validate` turns them into a failure.
pub trait ConfigValidator {
    /// Performs a full validation of a `StripConfig` and returns the issues
    /// found.
    ///
    /// # Arguments
    /// * `config`: The effective configuration to check.
    ///
    /// # Returns
    /// A `Result<Vec<String>>` with one human-readable message per issue.
    /// An empty vector means the config is clean.
    fn validate_config(&self, config: &StripConfig) -> Result<Vec<String>>;

    /// Validates a single `SkipRange` on its own.
    ///
    /// # Arguments
    /// * `range`: The range to check.
    ///
    /// # Returns
    /// Messages for a zero start line or an inverted range. A range past the
    /// end of the file is not an issue.
    fn validate_range(&self, range: &SkipRange) -> Vec<String>;
}

/// Checks ranges for mistakes and the target for existence.
pub struct StandardValidator {
    store: Box<dyn TextStore>,
}

impl StandardValidator {
    /// A validator that checks the target relative to the current directory.
    pub fn new() -> Self {
        Self::with_store(Box::new(DiskStore::new(".")))
    }

    /// Creates a validator that checks the target through `store`.
    ///
    /// # Arguments
    /// * `store`: The backend used for the file existence check.
    pub fn with_store(store: Box<dyn TextStore>) -> Self {
        Self { store }
    }

    /// Reports every pair of ranges that share a line.
    ///
    /// Overlaps are harmless, a shared line is still removed once, but they
    /// usually mean a range was typed wrong.
    ///
    /// # Arguments
    /// * `ranges`: The configured ranges in order.
    ///
    /// # Returns
    /// A `Vec<String>` with one warning per overlapping pair.
    fn check_range_overlaps(&self, ranges: &[SkipRange]) -> Vec<String> {
        let mut warnings = Vec::new();
        for (i, a) in ranges.iter().enumerate() {
            for b in &ranges[i + 1..] {
                if a.overlaps(b) {
                    warnings.push(format!("Ranges {a} and {b} overlap"));
                }
            }
        }
        warnings
    }
}

impl Default for StandardValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidator for StandardValidator {
    fn validate_config(&self, config: &StripConfig) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        if !self.store.file_exists(&config.target) {
            issues.push(format!("File not found: {}", config.target.display()));
        }

        if config.skip_ranges.is_empty() {
            issues.push("No skip ranges configured; nothing will be removed".to_string());
        }

        for range in &config.skip_ranges {
            issues.extend(self.validate_range(range));
        }

        issues.extend(self.check_range_overlaps(&config.skip_ranges));

        Ok(issues)
    }

    fn validate_range(&self, range: &SkipRange) -> Vec<String> {
        let mut issues = Vec::new();
        if range.start == 0 {
            issues.push(format!("Range {range}: line numbers start from 1, not 0"));
        }
        if range.start > range.end {
            issues.push(format!("Range {range}: start is after end, matches nothing"));
        }
        issues
    }
}
