//! Minimal example: programmatically scaffold a basic VS Code extension.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example basic -p vscreate-adapters
//! ```

use vscreate_adapters::scaffold_project;
use vscreate_core::domain::ScaffoldRequest;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let request = ScaffoldRequest::new("./my-basic-extension", "basic").force(true);
    scaffold_project(&request)?;

    println!("Project generated at ./my-basic-extension");
    Ok(())
}
