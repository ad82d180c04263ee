//! Custom cargo commands for snipsearch.
//!
//! Usage:
//!   cargo xtask verify      - Invariant markers, tests, clippy, wasm check
//!   cargo xtask test        - Run all tests
//!   cargo xtask check       - Quick check (cargo test + clippy)
//!   cargo xtask build-wasm  - Build the browser package with wasm-pack

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("build-wasm") => build_wasm()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify      Run full verification suite
  test        Run all Rust tests
  check       Quick check (cargo test + clippy)
  build-wasm  Build the wasm package into pkg/
"#
    );
}

fn verify() -> Result<()> {
    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-features", "--", "-D", "warnings"])?;

    println!("[4/4] Checking wasm target...");
    run_cargo(&[
        "check",
        "--quiet",
        "--lib",
        "--no-default-features",
        "--features",
        "wasm",
        "--target",
        "wasm32-unknown-unknown",
    ])?;

    println!("\n✓ All verification checks passed");
    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn build_wasm() -> Result<()> {
    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "pkg",
            "--",
            "--no-default-features",
            "--features",
            "wasm",
        ])
        .current_dir(project_root()?)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(project_root()?)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }
    Ok(())
}

/// The teaser window and the lazy loader document their invariants; make
/// sure nobody drops those sections.
fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    for file in ["src/teaser.rs", "src/index/lazy.rs"] {
        let content = std::fs::read_to_string(root.join(file))
            .with_context(|| format!("Failed to read {}", file))?;
        if !content.contains("INVARIANTS") {
            bail!("{} lost its INVARIANTS section", file);
        }
    }
    Ok(())
}
