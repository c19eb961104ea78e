//! Strips hard-coded line ranges out of a source file.
//!
//! Run with no arguments it removes lines 246-310 and 195-198 from
//! `src/main.js` in the current directory and reports the counts. The flags
//! only exist to point the same operation somewhere else.
use anyhow::Result;
use clap::Parser;
use line_range_strip::builders::ranges::{SkipRange, parse_skip_range};
use line_range_strip::utils;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "line-range-strip")]
#[command(about = "Remove fixed line ranges from a text file in place")]
struct Cli {
    /// File to rewrite (default: src/main.js)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Closed 1-based range to drop, as START-END; repeat for more
    #[arg(short, long = "range", value_name = "START-END", value_parser = parse_skip_range)]
    ranges: Vec<SkipRange>,

    /// TOML file with `target` and `[[skip_ranges]]`
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Report what would be removed without writing
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Check the configuration and exit
    #[arg(long)]
    validate: bool,

    /// Write the effective configuration to PATH as TOML and exit
    #[arg(long, value_name = "PATH", conflicts_with = "validate")]
    write_config: Option<PathBuf>,

    /// Log each removed line number
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let config = utils::resolve_config(cli.config, cli.file, cli.ranges)?;

    if let Some(path) = cli.write_config {
        return utils::write_config(path, &config);
    }

    if cli.validate {
        return utils::validate_config(&config);
    }

    utils::run_strip(&config, cli.dry_run)?;
    Ok(())
}
