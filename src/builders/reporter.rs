use anyhow::Result;
use std::path::PathBuf;

/// Line counts gathered by one strip run.
///
/// This is what the `LineStripper` hands to a `StatusReporter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripReport {
    /// The file that was (or would have been) rewritten.
    pub target: PathBuf,
    /// Number of lines before stripping.
    pub original_lines: usize,
    /// `original_lines - new_lines`.
    pub removed_lines: usize,
    /// Number of lines written back.
    pub new_lines: usize,
    /// Set when the write was skipped.
    pub dry_run: bool,
}

/// The `StatusReporter` trait defines how a finished run is shown to the user.
pub trait StatusReporter {
    /// Presents the counts of one strip run.
    ///
    /// # Arguments
    /// * `report`: The counts and target produced by `LineStripper::run`.
    ///
    /// # Returns
    /// An error only if the output itself cannot be produced.
    fn report(&self, report: &StripReport) -> Result<()>;
}

/// Prints the two status lines to standard output.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    /// Builds the status lines without printing them.
    ///
    /// The first line names the removed count (and, in a dry run, the
    /// target); the second gives the original and new totals.
    pub fn format_report(&self, report: &StripReport) -> [String; 2] {
        let headline = if report.dry_run {
            format!(
                "Dry run: would remove {} lines from {}",
                report.removed_lines,
                report.target.display()
            )
        } else {
            format!("Fixed! Removed {} lines", report.removed_lines)
        };
        let counts = format!(
            "Original: {} lines, New: {} lines",
            report.original_lines, report.new_lines
        );
        [headline, counts]
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter for ConsoleReporter {
    fn report(&self, report: &StripReport) -> Result<()> {
        for line in self.format_report(report) {
            println!("{line}");
        }
        Ok(())
    }
}
