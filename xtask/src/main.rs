//! Development automation tasks for the Dealboard workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! intentionally used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::{anyhow, bail};

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("deny") => run_deny(),
        Some("audit") => run_audit(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            print_help();
            Err(anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Dealboard Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci        Run all CI checks (fmt, clippy, test, deny, audit)");
    println!("    fmt       Check Rust code formatting");
    println!("    clippy    Run Clippy lints");
    println!("    test      Run all tests");
    println!("    deny      Check dependencies with cargo-deny");
    println!("    audit     Audit dependencies for security vulnerabilities");
    println!("    help      Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...\n");

    println!("==> Step 1/5: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/5: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/5: Running tests...");
    run_test()?;

    println!("\n==> Step 4/5: Checking dependencies...");
    run_deny()?;

    println!("\n==> Step 5/5: Auditing dependencies...");
    run_audit()?;

    println!("\n✓ All CI checks passed!");
    Ok(())
}

/// Check Rust code formatting
fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "Format check failed. Run 'cargo fmt --all' to fix.")
}

/// Run Clippy lints
fn run_clippy() -> anyhow::Result<()> {
    cargo(
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        "Clippy run failed. See output above.",
    )
}

/// Run all workspace tests
fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace"], "Tests failed")
}

/// Check dependencies with cargo-deny
fn run_deny() -> anyhow::Result<()> {
    require_subcommand("deny", "cargo-deny")?;
    cargo(&["deny", "check"], "cargo-deny found issues")
}

/// Audit dependencies for known vulnerabilities
fn run_audit() -> anyhow::Result<()> {
    require_subcommand("audit", "cargo-audit")?;
    cargo(&["audit"], "cargo-audit found vulnerabilities")
}

fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        bail!("{failure}");
    }
    Ok(())
}

fn require_subcommand(subcommand: &str, package: &str) -> anyhow::Result<()> {
    let installed = Command::new("cargo")
        .args([subcommand, "--version"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    if !installed {
        eprintln!("{package} is not installed.");
        eprintln!("Install it with: cargo install {package}");
        bail!("{package} not found");
    }
    Ok(())
}
