//! In-memory rendering of `About.xml` and `NuzzlePatches.xml`.
//!
//! Every value substituted into a template goes through [`escape_xml`];
//! the surrounding markup is fixed.
use std::fmt::Write as _;

use crate::config::ModTemplate;
use crate::request::Entry;

/// Escape the five XML special characters so `s` is safe as element text or
/// inside a quoted attribute.
#[must_use]
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Derive the package-id suffix for a mod name: lower-cased, with everything
/// outside `[a-z0-9.-]` dropped.
///
/// # Examples
///
/// ```
/// use nuzzle_gen::render::package_id;
///
/// assert_eq!(package_id("ZooSnugglers"), "zoosnugglers");
/// assert_eq!(package_id("My Mod!"), "mymod");
/// ```
#[must_use]
pub fn package_id(target: &str) -> String {
    target
        .to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '.' | '-'))
        .collect()
}

/// Render `About/About.xml` for `target`.
#[must_use]
pub fn about_xml(target: &str, template: &ModTemplate) -> String {
    let mut out = String::new();
    out.push_str("<ModMetaData>\n");
    let _ = writeln!(out, "  <name>{}</name>", escape_xml(target));
    let _ = writeln!(out, "  <author>{}</author>", escape_xml(&template.author));
    let _ = writeln!(
        out,
        "  <description>{}</description>",
        escape_xml(&template.description)
    );
    let _ = writeln!(
        out,
        "  <packageId>{}.{}</packageId>",
        escape_xml(&template.package_prefix),
        package_id(target)
    );
    out.push_str("  <supportedVersions>\n");
    for version in &template.supported_versions {
        let _ = writeln!(out, "    <li>{}</li>", escape_xml(version));
    }
    out.push_str("  </supportedVersions>\n");
    out.push_str("</ModMetaData>\n");
    out
}

/// Render `Patches/NuzzlePatches.xml` with one operation per entry, in order.
#[must_use]
pub fn patch_xml(entries: &[Entry]) -> String {
    let mut out = String::new();
    out.push_str("<Patch>\n");
    for entry in entries {
        out.push_str("  <Operation Class=\"PatchOperationAdd\">\n");
        let _ = writeln!(
            out,
            "    <xpath>Defs/ThingDef[defName=\"{}\"]/race</xpath>",
            escape_xml(&entry.name)
        );
        out.push_str("    <value>\n");
        let _ = writeln!(
            out,
            "      <nuzzleMtbHours>{}</nuzzleMtbHours>",
            entry.interval
        );
        out.push_str("    </value>\n");
        out.push_str("  </Operation>\n");
    }
    out.push_str("</Patch>\n");
    out
}
