use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed interval of 1-based line numbers whose lines are dropped.
///
/// Both ends are inclusive. A range whose `start` is greater than its `end`
/// is accepted but matches nothing; the validator reports it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SkipRange {
    /// First line number removed (1-based).
    pub start: usize,
    /// Last line number removed (1-based, inclusive).
    pub end: usize,
}

/// Renders the range in the same `start-end` form accepted by `FromStr`.
impl fmt::Display for SkipRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// The `LineMatcher` trait decides whether a line is removed.
///
/// Only the position of a line matters, never its content, so the matcher
/// receives the 1-based line number alone.
pub trait LineMatcher {
    /// Returns `true` if the line at `line_number` (1-based) must be dropped.
    fn matches_line(&self, line_number: usize) -> bool;
}

impl SkipRange {
    /// Creates the closed interval `start..=end`.
    ///
    /// # Arguments
    /// * `start`: First 1-based line number to drop.
    /// * `end`: Last 1-based line number to drop, inclusive.
    ///
    /// # Returns
    /// The range as given. No ordering is enforced; `start > end` yields a
    /// range that matches nothing.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Checks whether `line_number` falls inside the closed interval.
    pub fn contains(&self, line_number: usize) -> bool {
        line_number >= self.start && line_number <= self.end
    }

    /// Whether the interval matches no line at all (`start > end`).
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of line numbers the interval spans, ignoring the file length.
    ///
    /// Saturates at `usize::MAX` for the full `0-usize::MAX` interval.
    pub fn width(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).saturating_add(1)
        }
    }

    /// Checks whether the two intervals share at least one line number.
    ///
    /// # Arguments
    /// * `other`: The range to compare against.
    ///
    /// # Returns
    /// `true` if both ranges are non-empty and intersect. An inverted range
    /// never overlaps anything.
    pub fn overlaps(&self, other: &SkipRange) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start <= other.end
            && other.start <= self.end
    }
}

/// Parses the `start-end` form used on the command line (e.g. `"195-198"`).
impl FromStr for SkipRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 2 {
            anyhow::bail!("Line range must be in format 'start-end', got '{s}'");
        }
        let start = parts[0]
            .trim()
            .parse::<usize>()
            .with_context(|| format!("Invalid start line in '{s}'"))?;
        let end = parts[1]
            .trim()
            .parse::<usize>()
            .with_context(|| format!("Invalid end line in '{s}'"))?;
        Ok(Self::new(start, end))
    }
}

impl LineMatcher for SkipRange {
    fn matches_line(&self, line_number: usize) -> bool {
        self.contains(line_number)
    }
}

/// The ordered set of ranges applied to one file.
///
/// A line is removed if any range contains it, so overlapping ranges never
/// remove a line twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipRanges(Vec<SkipRange>);

impl SkipRanges {
    /// Wraps `ranges`, keeping their configured order.
    pub fn new(ranges: Vec<SkipRange>) -> Self {
        Self(ranges)
    }

    pub fn as_slice(&self) -> &[SkipRange] {
        &self.0
    }
}

impl From<&[SkipRange]> for SkipRanges {
    fn from(ranges: &[SkipRange]) -> Self {
        Self(ranges.to_vec())
    }
}

impl LineMatcher for SkipRanges {
    fn matches_line(&self, line_number: usize) -> bool {
        self.0.iter().any(|range| range.matches_line(line_number))
    }
}

/// clap value parser for `--range`.
pub fn parse_skip_range(s: &str) -> std::result::Result<SkipRange, String> {
    s.parse::<SkipRange>().map_err(|e| format!("{e:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let range = SkipRange::new(10, 20);
        assert!(range.matches_line(10));
        assert!(range.matches_line(15));
        assert!(range.matches_line(20));
        assert!(!range.matches_line(9));
        assert!(!range.matches_line(21));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = SkipRange::new(8, 3);
        assert_eq!(range.width(), 0);
        assert!((1..=10).all(|n| !range.matches_line(n)));
    }

    #[test]
    fn test_parse_start_end() {
        let range: SkipRange = "195-198".parse().unwrap();
        assert_eq!(range, SkipRange::new(195, 198));
        assert_eq!(range.to_string(), "195-198");

        let padded: SkipRange = " 3 - 5 ".parse().unwrap();
        assert_eq!(padded, SkipRange::new(3, 5));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("12".parse::<SkipRange>().is_err());
        assert!("1-2-3".parse::<SkipRange>().is_err());
        assert!("a-5".parse::<SkipRange>().is_err());
        assert!("5-".parse::<SkipRange>().is_err());
        assert!(parse_skip_range("-4").is_err());
    }

    #[test]
    fn test_any_range_matches() {
        let ranges = SkipRanges::new(vec![SkipRange::new(246, 310), SkipRange::new(195, 198)]);
        assert!(ranges.matches_line(195));
        assert!(ranges.matches_line(300));
        assert!(!ranges.matches_line(199));
        assert!(!ranges.matches_line(311));
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        let all = SkipRange::new(0, usize::MAX);
        assert_eq!(all.width(), usize::MAX);
        assert!(all.overlaps(&SkipRange::new(1, 2)));
        assert!(SkipRange::new(1, 2).overlaps(&all));
        assert!(all.matches_line(usize::MAX));

        let top = SkipRange::new(usize::MAX, usize::MAX);
        assert_eq!(top.width(), 1);
        assert!(top.overlaps(&all));
        assert!(!top.overlaps(&SkipRange::new(1, 2)));

        let parsed: SkipRange = format!("0-{}", usize::MAX).parse().unwrap();
        assert_eq!(parsed, all);
    }

    #[test]
    fn test_overlap_detection() {
        let a = SkipRange::new(3, 5);
        assert!(a.overlaps(&SkipRange::new(5, 7)));
        assert!(a.overlaps(&SkipRange::new(1, 10)));
        assert!(!a.overlaps(&SkipRange::new(6, 9)));
        assert!(!a.overlaps(&SkipRange::new(4, 2)));
    }
}
