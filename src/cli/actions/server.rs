use crate::site;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dist: PathBuf,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the bundle directory is unusable or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let dist = if args.dist.is_absolute() {
        args.dist
    } else {
        std::env::current_dir()
            .context("Could not resolve the working directory")?
            .join(args.dist)
    };

    if !dist.is_dir() {
        warn!(
            "Bundle directory {} does not exist yet; /health will report it as missing",
            dist.display()
        );
    }

    debug!("Serving bundle from {}", dist.display());

    site::new(args.port, dist).await
}
