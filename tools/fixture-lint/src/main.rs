//! fixture-lint — validates golden fixture files under `contracts/http/`.
//!
//! # Usage
//!
//! ```bash
//! # Check every fixture file
//! cargo run -p fixture-lint
//!
//! # Check only the identity service's fixtures
//! cargo run -p fixture-lint -- --service identity
//! ```
//!
//! Each file must parse as a fixture document and convert into a registry
//! fixture (valid method, absolute URL, status, headers). Exits 0 when all
//! files pass, 1 when any fail.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use nimbus_core::tracing::init_tracing;

#[derive(Parser)]
#[command(about = "Validate golden HTTP fixture files")]
struct Args {
    /// Directory containing contracts/http/ (defaults to the workspace root)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Check only fixtures for this service subdirectory
    #[arg(long)]
    service: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let root = args.root.unwrap_or_else(workspace_root);
    let files = nimbus_replay::load_all(&root, args.service.as_deref())?;

    if files.is_empty() {
        eprintln!("No fixture files found under {}", root.display());
        return Ok(());
    }

    let mut failures = 0usize;
    for file in &files {
        match file.to_fixture() {
            Ok(_) => println!("ok    {}/{} — {}", file.service, file.id, file.description),
            Err(e) => {
                failures += 1;
                println!("FAIL  {}/{} — {e}", file.service, file.id);
            }
        }
    }

    println!();
    println!("{} fixture(s), {} failure(s)", files.len(), failures);

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Walk up from the binary's own manifest dir to find the workspace root
/// (the directory containing `Cargo.lock`).
fn workspace_root() -> PathBuf {
    let start = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    start
        .ancestors()
        .find(|p| p.join("Cargo.lock").exists())
        .unwrap_or(&start)
        .to_path_buf()
}
