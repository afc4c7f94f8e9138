#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the generate command.
//!
//! These tests drive [`generate::run`](nuzzle_gen::generate::run) against a
//! temporary Mods directory and check the files it leaves behind: their
//! paths, exact content, entry order, defaults, and that failing runs write
//! nothing.

mod common;

use nuzzle_gen::error::{NuzzleError, RequestError};

// ---------------------------------------------------------------------------
// Successful runs
// ---------------------------------------------------------------------------

/// A valid run produces exactly the two documented files.
#[test]
fn writes_exactly_two_files() {
    let ctx = common::IntegrationTestContext::new();
    let layout = ctx.run(&["ZooSnugglers", "Muffalo"]).unwrap();

    assert_eq!(layout.about, ctx.about_path("ZooSnugglers"));
    assert_eq!(layout.patches, ctx.patches_path("ZooSnugglers"));

    let mut found: Vec<_> = walk(&layout.mod_dir);
    found.sort();
    assert_eq!(
        found,
        vec![
            layout.about.clone(),
            layout.patches.clone()
        ]
    );
}

/// The end-to-end example: three entries, in order, with the default
/// applied to the one without an interval.
#[test]
fn end_to_end_three_entries() {
    let ctx = common::IntegrationTestContext::new();
    ctx.run(&["MyMod", "Muffalo:12", "Elephant:36", "Chicken"])
        .unwrap();

    let ops = common::operations(&ctx.read(&ctx.patches_path("MyMod")));
    assert_eq!(
        ops,
        vec![
            ("Muffalo".to_string(), 12),
            ("Elephant".to_string(), 36),
            ("Chicken".to_string(), 24),
        ]
    );
}

/// An explicit interval only applies to its own entry.
#[test]
fn explicit_interval_does_not_leak_to_siblings() {
    let ctx = common::IntegrationTestContext::new();
    ctx.run(&["M", "Animal:12", "Other"]).unwrap();
    let ops = common::operations(&ctx.read(&ctx.patches_path("M")));
    assert_eq!(ops[0], ("Animal".to_string(), 12));
    assert_eq!(ops[1], ("Other".to_string(), 24));
}

/// About.xml carries the verbatim name and the derived package id.
#[test]
fn about_contains_name_and_package_id() {
    let ctx = common::IntegrationTestContext::new();
    ctx.run(&["My Mod!", "Muffalo"]).unwrap();
    let about = ctx.read(&ctx.about_path("My Mod!"));
    assert!(about.contains("  <name>My Mod!</name>\n"));
    assert!(about.contains("  <packageId>com.yourname.mymod</packageId>\n"));
}

/// The full patch file for a single entry, byte for byte.
#[test]
fn single_entry_patch_file() {
    let ctx = common::IntegrationTestContext::new();
    ctx.run(&["ZooSnugglers", "Muffalo:12"]).unwrap();
    insta::assert_snapshot!(ctx.read(&ctx.patches_path("ZooSnugglers")), @r#"
    <Patch>
      <Operation Class="PatchOperationAdd">
        <xpath>Defs/ThingDef[defName="Muffalo"]/race</xpath>
        <value>
          <nuzzleMtbHours>12</nuzzleMtbHours>
        </value>
      </Operation>
    </Patch>
    "#);
}

/// Running twice with the same arguments leaves byte-identical files.
#[test]
fn rerun_is_idempotent() {
    let ctx = common::IntegrationTestContext::new();
    let args = ["MyMod", "Muffalo:12", "Chicken"];
    ctx.run(&args).unwrap();
    let about = std::fs::read(ctx.about_path("MyMod")).unwrap();
    let patches = std::fs::read(ctx.patches_path("MyMod")).unwrap();

    ctx.run(&args).unwrap();
    assert_eq!(std::fs::read(ctx.about_path("MyMod")).unwrap(), about);
    assert_eq!(std::fs::read(ctx.patches_path("MyMod")).unwrap(), patches);
}

/// A second run with fewer entries replaces the patch file rather than
/// appending to it.
#[test]
fn rerun_overwrites_previous_patch() {
    let ctx = common::IntegrationTestContext::new();
    ctx.run(&["MyMod", "Muffalo", "Elephant", "Chicken"]).unwrap();
    ctx.run(&["MyMod", "Thrumbo:2"]).unwrap();
    let ops = common::operations(&ctx.read(&ctx.patches_path("MyMod")));
    assert_eq!(ops, vec![("Thrumbo".to_string(), 2)]);
}

/// Regenerating keeps the mode of the replaced file, and new files are
/// world-readable.
#[cfg(unix)]
#[test]
fn rerun_keeps_file_mode() {
    use std::os::unix::fs::PermissionsExt as _;
    let mode = |p: &std::path::Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;

    let ctx = common::IntegrationTestContext::new();
    let patches = ctx.patches_path("M");
    std::fs::create_dir_all(patches.parent().unwrap()).unwrap();
    std::fs::write(&patches, "stale").unwrap();
    std::fs::set_permissions(&patches, std::fs::Permissions::from_mode(0o664)).unwrap();

    ctx.run(&["M", "Muffalo"]).unwrap();
    assert_eq!(mode(&patches), 0o664);
    assert_eq!(mode(&ctx.about_path("M")), 0o644);
}

/// XML-unsafe characters in names are escaped in both files.
#[test]
fn unsafe_names_are_escaped() {
    let ctx = common::IntegrationTestContext::new();
    ctx.run(&["Cats&Dogs", "Bad<Def>"]).unwrap();
    let about = ctx.read(&ctx.about_path("Cats&Dogs"));
    assert!(about.contains("<name>Cats&amp;Dogs</name>"));
    let patches = ctx.read(&ctx.patches_path("Cats&Dogs"));
    assert!(patches.contains("defName=\"Bad&lt;Def&gt;\""));
}

/// `--dry-run` renders but leaves the Mods directory untouched.
#[test]
fn dry_run_writes_nothing() {
    let ctx = common::IntegrationTestContext::new();
    let layout = ctx.run(&["--dry-run", "MyMod", "Muffalo"]).unwrap();
    assert!(!layout.mod_dir.exists());
    assert_eq!(ctx.mod_count(), 0);
}

// ---------------------------------------------------------------------------
// Failing runs write nothing
// ---------------------------------------------------------------------------

/// Only a target name: `NoEntries`, no files.
#[test]
fn no_entries_fails_without_writing() {
    let ctx = common::IntegrationTestContext::new();
    let err = ctx.run(&["MyMod"]).unwrap_err();
    assert!(matches!(
        err,
        NuzzleError::Request(RequestError::NoEntries { .. })
    ));
    assert_eq!(ctx.mod_count(), 0);
}

/// Empty target name: `MissingTarget`, no files.
#[test]
fn empty_target_fails_without_writing() {
    let ctx = common::IntegrationTestContext::new();
    let err = ctx.run(&["", "Muffalo"]).unwrap_err();
    assert!(matches!(
        err,
        NuzzleError::Request(RequestError::MissingTarget)
    ));
    assert_eq!(ctx.mod_count(), 0);
}

/// A bad interval anywhere in the list aborts before any file is written.
#[test]
fn invalid_interval_fails_without_writing() {
    let ctx = common::IntegrationTestContext::new();
    for bad in ["Animal:0", "Animal:abc", "Animal:-3"] {
        let err = ctx.run(&["MyMod", "Muffalo", bad]).unwrap_err();
        assert!(
            matches!(
                err,
                NuzzleError::Request(RequestError::InvalidInterval { .. })
            ),
            "{bad} should be rejected"
        );
    }
    assert_eq!(ctx.mod_count(), 0);
}

/// Without `--root`, an unsupported platform is reported by name.
#[test]
fn unsupported_platform_is_reported() {
    use clap::Parser as _;
    use nuzzle_gen::cli::Cli;
    use nuzzle_gen::logging::Logger;

    let cli = Cli::parse_from(["nuzzle-gen", "MyMod", "Muffalo"]);
    let env = common::IntegrationTestContext::unsupported_env();
    let err = nuzzle_gen::generate::run(&cli, &env, &Logger::new()).unwrap_err();
    assert!(err.to_string().contains("integration-test"));
}

fn walk(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            out.extend(walk(&path));
        } else {
            out.push(path);
        }
    }
    out
}
