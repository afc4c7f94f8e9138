//! Build script: embeds a version string as `NUZZLE_GEN_VERSION`.

use std::process::Command;

fn main() {
    // NUZZLE_GEN_VERSION wins when set (release builds); otherwise describe
    // the checkout so local builds are identifiable.
    if let Ok(version) = std::env::var("NUZZLE_GEN_VERSION") {
        println!("cargo:rustc-env=NUZZLE_GEN_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=NUZZLE_GEN_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=NUZZLE_GEN_VERSION");
}
