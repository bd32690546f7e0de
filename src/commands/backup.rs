//! Backup command - Copy the MCP configuration file to the backup path

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

/// Execute the backup command
///
/// Copies `source` (the MCP configuration file) to `destination`,
/// overwriting any existing backup.
pub fn execute(source: &Path, destination: &Path) -> Result<()> {
    if !source.exists() {
        bail!(
            "Source file for backup does not exist: {}",
            source.display()
        );
    }

    println!(
        "Backing up {} to {}",
        source.display(),
        destination.display()
    );

    fs::copy(source, destination).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            source.display(),
            destination.display()
        )
    })?;

    println!("{} {}", "Backed up:".green(), destination.display());

    Ok(())
}
