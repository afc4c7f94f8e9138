//! The generate command: Resolve → Parse → Emit.
//!
//! ```text
//! Environment ──mods_dir()──▶ root ─┐
//! Cli tokens ──Request::parse()─────┼──▶ emit_mod() ──▶ About.xml, NuzzlePatches.xml
//! --config ──ModTemplate::load()────┘
//! ```
//!
//! Each stage runs once. The first failure aborts the run; nothing already
//! written is rolled back.
use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::ModTemplate;
use crate::emit::{ModLayout, emit_mod};
use crate::error::NuzzleError;
use crate::logging::Logger;
use crate::platform::Environment;
use crate::request::Request;

/// Run the generator for the parsed command line.
///
/// `env` supplies the platform state used when `--root` is not given.
///
/// # Errors
///
/// Returns the first error raised by path resolution, config loading,
/// argument parsing, or file emission.
pub fn run(cli: &Cli, env: &Environment, log: &Logger) -> Result<ModLayout, NuzzleError> {
    log.info(&format!("nuzzle-gen {}", crate::cli::version()));

    log.stage("Resolving Mods directory");
    let root = resolve_root(cli, env)?;
    log.info(&format!("mods: {}", root.display()));

    let template = ModTemplate::load(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        log.debug(&format!("template overrides from {}", path.display()));
    }

    log.stage("Parsing entries");
    let request = Request::parse(
        cli.target.as_deref(),
        &cli.entries,
        template.interval()?,
    )?;
    for entry in &request.entries {
        log.debug(&format!("{}: {}h", entry.name, entry.interval));
    }
    log.info(&format!(
        "mod '{}' with {} entries",
        request.target,
        request.entries.len()
    ));

    log.stage("Writing mod files");
    let emitted = emit_mod(&root, &request, &template, cli.dry_run, log);

    // Report what landed even when the second file failed.
    log.print_summary(&ModLayout::new(&root, &request.target).mod_dir);
    let layout = emitted?;
    Ok(layout)
}

fn resolve_root(cli: &Cli, env: &Environment) -> Result<PathBuf, NuzzleError> {
    if let Some(root) = &cli.root {
        return Ok(root.clone());
    }
    Ok(env.mods_dir()?)
}
