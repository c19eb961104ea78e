// Module declarations for `builders`: the building blocks the engine is
// assembled from.

// `ranges` module:
// `SkipRange`, `SkipRanges` and the `LineMatcher` trait that decides which
// line numbers are dropped.
pub mod ranges;

// `reporter` module:
// `StripReport` and the `ConsoleReporter` that prints the two status lines.
pub mod reporter;

// `validator` module:
// Advisory checks on a `StripConfig` (zero lines, inverted or overlapping
// ranges, missing target).
pub mod validator;
