//! Replace command - Overwrite the MCP configuration file with another file

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

/// Execute the replace command
///
/// Copies `source` (the user-supplied replacement) over `destination`
/// (the MCP configuration file), creating the configuration directory
/// if it does not exist yet.
pub fn execute(source: &Path, destination: &Path) -> Result<()> {
    if !source.exists() {
        bail!("Replacement file not found: {}", source.display());
    }

    if source.is_dir() {
        bail!(
            "Replacement must be a file, not a directory: {}",
            source.display()
        );
    }

    println!(
        "Replacing {} with {}",
        destination.display(),
        source.display()
    );

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create: {}", parent.display()))?;
    }

    fs::copy(source, destination).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            source.display(),
            destination.display()
        )
    })?;

    println!("{} {}", "Replaced:".green(), destination.display());

    Ok(())
}
