//! Removes fixed ranges of lines from a text file in place.
//!
//! Lines are numbered from 1 and every range is closed on both ends. A line
//! inside any configured range is dropped; everything else is written back
//! byte for byte, terminators included.
pub mod builders;
pub mod core;
pub mod utils;
