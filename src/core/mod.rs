// Module declarations for `core`: the pieces that carry a strip run from
// configuration to the rewritten file.

// `config` module:
// Defines `StripConfig` with the built-in target and ranges, and the
// `ConfigManager` that optionally loads them from a TOML file.
pub mod config;

// `engine` module:
// `LineStripper`, the read -> filter -> write transaction.
pub mod engine;

// `files` module:
// The `TextStore` abstraction over whole-file text I/O.
pub mod files;
