//! RimWorld nuzzle-patch mod generator.
//!
//! Turns `TARGET_NAME ENTRY[:INTERVAL]...` into a mod skeleton under the
//! local RimWorld Mods directory: `About/About.xml` and
//! `Patches/NuzzlePatches.xml`, one `PatchOperationAdd` per animal.
//!
//! The run is three stages, each in its own module:
//!
//! - **[`platform`]** - capture the environment, resolve the Mods directory
//! - **[`request`]** - parse the target name and `name:hours` entries
//! - **[`emit`]** - render ([`render`]) and atomically write both files
//!
//! [`generate::run`] wires them together; [`config`] holds the fixed
//! metadata values and their optional TOML overrides.

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod logging;
pub mod platform;
pub mod render;
pub mod request;
