use crate::builders::ranges::{LineMatcher, SkipRanges};
use crate::builders::reporter::StripReport;
use crate::core::config::StripConfig;
use crate::core::files::{DiskStore, TextStore};
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of stripping one buffer in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    /// Retained lines, concatenated with their original terminators.
    pub content: String,
    pub original_lines: usize,
    pub new_lines: usize,
    /// 1-based numbers of the dropped lines, ascending.
    pub removed: Vec<usize>,
}

impl StripOutcome {
    pub fn removed_lines(&self) -> usize {
        self.original_lines - self.new_lines
    }
}

/// Iterator over the lines of a buffer, each with its own terminator.
///
/// A line ends at `\n`, at `\r\n`, or at a bare `\r`; the unterminated
/// tail of the buffer is the last line. An empty buffer yields nothing.
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { rest: content }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        let end = match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') => i + 2,
            Some(i) => i + 1,
            None => bytes.len(),
        };
        // Terminators are ASCII, so `end` is always a char boundary.
        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

/// Removes configured line ranges from a single text file.
///
/// The whole file is read before it is reopened for writing. There is no
/// backup and no atomic replace: a failed write can leave the file truncated.
pub struct LineStripper {
    target: PathBuf,
    ranges: SkipRanges,
    store: Box<dyn TextStore>,
}

impl LineStripper {
    /// A stripper for `config` working against the current directory.
    pub fn new(config: &StripConfig) -> Result<Self> {
        Ok(Self::with_store(config, Box::new(DiskStore::current_dir()?)))
    }

    /// Creates a stripper that reads and writes through `store`.
    ///
    /// # Arguments
    /// * `config`: Supplies the target path and the ranges to drop.
    /// * `store`: The file backend; tests pass a `DiskStore` rooted in a
    ///   scratch directory.
    ///
    /// # Returns
    /// A `LineStripper` ready for `strip` or `run`.
    pub fn with_store(config: &StripConfig, store: Box<dyn TextStore>) -> Self {
        Self {
            target: config.target.clone(),
            ranges: config.ranges(),
            store,
        }
    }

    /// Drops every line whose 1-based number is matched by any range.
    ///
    /// Lines keep their terminators (`\n`, `\r\n` or a bare `\r`), and a
    /// missing final newline stays missing.
    pub fn strip(&self, content: &str) -> StripOutcome {
        let mut kept = String::with_capacity(content.len());
        let mut removed = Vec::new();
        let mut original_lines = 0;

        for (index, line) in Lines::new(content).enumerate() {
            let line_number = index + 1;
            original_lines = line_number;
            if self.ranges.matches_line(line_number) {
                removed.push(line_number);
            } else {
                kept.push_str(line);
            }
        }

        StripOutcome {
            content: kept,
            original_lines,
            new_lines: original_lines - removed.len(),
            removed,
        }
    }

    /// Reads the target, strips it and writes it back unless `dry_run`.
    pub fn run(&self, dry_run: bool) -> Result<StripReport> {
        info!(target_file = %self.target.display(), ranges = self.ranges.as_slice().len(), "stripping");

        let content = self.store.read_text(&self.target)?;
        let outcome = self.strip(&content);
        debug!(removed = ?outcome.removed, "matched lines");

        if dry_run {
            info!("dry run, leaving file untouched");
        } else {
            self.store.write_text(&self.target, &outcome.content)?;
            info!(
                original = outcome.original_lines,
                new = outcome.new_lines,
                "file rewritten"
            );
        }

        Ok(StripReport {
            target: self.target.clone(),
            original_lines: outcome.original_lines,
            removed_lines: outcome.removed_lines(),
            new_lines: outcome.new_lines,
            dry_run,
        })
    }
}
