// Shared helpers for integration tests.
//
// Provides a temporary Mods directory and helpers to run the generator
// against it, either through the library entry point or the built binary.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use clap::Parser as _;
use nuzzle_gen::cli::Cli;
use nuzzle_gen::emit::ModLayout;
use nuzzle_gen::error::NuzzleError;
use nuzzle_gen::generate;
use nuzzle_gen::logging::Logger;
use nuzzle_gen::platform::{Environment, Os};

/// An isolated Mods directory backed by a [`tempfile::TempDir`].
///
/// The directory is deleted when the context is dropped.
pub struct IntegrationTestContext {
    /// Temporary directory standing in for RimWorld's Mods folder.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a new, empty Mods directory.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path to the Mods directory.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// An environment whose platform is unsupported, so any run that does
    /// not pass `--root` fails before writing.
    pub fn unsupported_env() -> Environment {
        Environment {
            os: Os::Other("integration-test".to_string()),
            home_dir: None,
            app_data_dir: None,
        }
    }

    /// Run the generator through the library with `--root` pointing at
    /// this context. `args` excludes the program name.
    pub fn run(&self, args: &[&str]) -> Result<ModLayout, NuzzleError> {
        let mut argv: Vec<String> = vec![
            "nuzzle-gen".to_string(),
            "--root".to_string(),
            self.root_path().display().to_string(),
        ];
        argv.extend(args.iter().map(ToString::to_string));
        let cli = Cli::parse_from(argv);
        generate::run(&cli, &Self::unsupported_env(), &Logger::new())
    }

    /// Run the built binary with `--root` pointing at this context.
    pub fn run_binary(&self, args: &[&str]) -> Output {
        self.binary(args)
            .env_remove("NUZZLE_GEN_LOG")
            .output()
            .expect("spawn nuzzle-gen")
    }

    /// Run the built binary with `NUZZLE_GEN_LOG` set to `filter`.
    pub fn run_binary_with_log_filter(&self, args: &[&str], filter: &str) -> Output {
        self.binary(args)
            .env("NUZZLE_GEN_LOG", filter)
            .output()
            .expect("spawn nuzzle-gen")
    }

    fn binary(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_nuzzle-gen"));
        cmd.arg("--root").arg(self.root_path()).args(args);
        cmd
    }

    /// `<root>/<target>/About/About.xml`.
    pub fn about_path(&self, target: &str) -> PathBuf {
        self.root_path().join(target).join("About").join("About.xml")
    }

    /// `<root>/<target>/Patches/NuzzlePatches.xml`.
    pub fn patches_path(&self, target: &str) -> PathBuf {
        self.root_path()
            .join(target)
            .join("Patches")
            .join("NuzzlePatches.xml")
    }

    /// Read a generated file as UTF-8.
    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path).expect("read generated file")
    }

    /// Number of entries directly under the Mods directory.
    pub fn mod_count(&self) -> usize {
        std::fs::read_dir(self.root_path())
            .expect("read mods dir")
            .count()
    }
}

/// Extract `(defName, hours)` pairs from a rendered patch file, in order.
pub fn operations(patch_xml: &str) -> Vec<(String, u32)> {
    let mut out = Vec::new();
    let mut name = None;
    for line in patch_xml.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("<xpath>Defs/ThingDef[defName=\"") {
            name = rest.split_once("\"]").map(|(n, _)| n.to_string());
        } else if let Some(rest) = line.strip_prefix("<nuzzleMtbHours>") {
            let hours = rest
                .trim_end_matches("</nuzzleMtbHours>")
                .parse()
                .expect("hours");
            out.push((name.take().expect("xpath before hours"), hours));
        }
    }
    out
}
