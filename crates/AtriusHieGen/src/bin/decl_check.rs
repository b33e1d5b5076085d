//! # Declaration Check CLI
//!
//! Thin wrapper that type-checks the generated SDK sources by running
//! `cargo check` against the SDK crate. Pass `--doc` to build the crate's
//! documentation instead, which validates the generated doc comments too.
//!
//! ## Usage
//!
//! ```bash
//! # Type-check the SDK crate the generator writes into
//! atrius-hie-declcheck
//!
//! # Validate generated doc comments as well
//! atrius-hie-declcheck --doc
//! ```

use std::env;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result, bail};
use clap::Parser;

/// Command-line arguments for the declaration checker.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Package whose declarations are checked.
    #[arg(long, default_value = "atrius-hie-sdk")]
    package: String,

    /// Workspace manifest to check against, when not running from the
    /// workspace root.
    #[arg(long)]
    manifest_path: Option<PathBuf>,

    /// Build documentation instead of type-checking.
    #[arg(long)]
    doc: bool,
}

fn main() {
    let args = Args::parse();
    let subcommand = if args.doc { "doc" } else { "check" };

    if let Err(e) = run_cargo(&cargo_bin(), subcommand, &args) {
        eprintln!("Error checking generated declarations: {:#}", e);
        std::process::exit(1);
    }
}

/// The cargo binary to invoke, overridable for environments where cargo is
/// not on PATH.
fn cargo_bin() -> String {
    env::var("ATRIUS_CARGO_BIN").unwrap_or_else(|_| "cargo".to_string())
}

fn run_cargo(cargo_bin: &str, subcommand: &str, args: &Args) -> Result<()> {
    let mut command = Command::new(cargo_bin);
    command.arg(subcommand).args(["-p", &args.package]);
    if args.doc {
        command.arg("--no-deps");
    }
    if let Some(manifest_path) = &args.manifest_path {
        command.arg("--manifest-path").arg(manifest_path);
    }

    let status = command
        .status()
        .with_context(|| format!("failed running {} {}", cargo_bin, subcommand))?;

    if !status.success() {
        bail!("{} {} -p {} failed: {}", cargo_bin, subcommand, args.package, status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(doc: bool) -> Args {
        Args { package: "atrius-hie-sdk".to_string(), manifest_path: None, doc }
    }

    #[cfg(unix)]
    fn write_stub(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join("cargo-stub");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_missing_binary_is_an_error() {
        let err = run_cargo("/nonexistent/cargo-binary", "check", &args(false)).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cargo-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(&dir, "exit 0");
        run_cargo(stub.to_str().unwrap(), "check", &args(false)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_fails() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(&dir, "exit 3");
        let err = run_cargo(stub.to_str().unwrap(), "doc", &args(true)).unwrap_err();
        assert!(err.to_string().contains("atrius-hie-sdk"));
    }
}
