//! Command-line interface definition.
use std::path::PathBuf;

use clap::{CommandFactory as _, Parser};

/// Version string: `NUZZLE_GEN_VERSION` from the build, else the package version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("NUZZLE_GEN_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Generate a RimWorld mod that makes the listed animals nuzzle.
///
/// Writes `About/About.xml` and `Patches/NuzzlePatches.xml` under
/// `<Mods>/<TARGET_NAME>/`, where `<Mods>` is RimWorld's Mods directory for
/// this platform unless `--root` is given.
#[derive(Parser, Debug)]
#[command(
    name = "nuzzle-gen",
    version = version(),
    override_usage = "nuzzle-gen [OPTIONS] <TARGET_NAME> <ENTRY[:INTERVAL]> [ENTRY[:INTERVAL] ...]"
)]
pub struct Cli {
    /// Name of the mod to generate
    #[arg(value_name = "TARGET_NAME")]
    pub target: Option<String>,

    /// Animal `defName`, optionally followed by `:HOURS` (default 24)
    #[arg(value_name = "ENTRY[:INTERVAL]")]
    pub entries: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview the files without writing them
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Write into this directory instead of the detected Mods directory
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// TOML file overriding author, description, package prefix, versions or default interval
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Rendered usage line, printed alongside usage errors.
#[must_use]
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
