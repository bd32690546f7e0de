//! Show command - Print the MCP configuration file

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Read the MCP configuration file content
///
/// Separated from printing so the content can be asserted in tests.
pub fn load(config_path: &Path) -> Result<String> {
    if !config_path.exists() {
        bail!(
            "MCP configuration file not found at {}",
            config_path.display()
        );
    }

    fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read: {}", config_path.display()))
}

/// Execute the show command
pub fn execute(config_path: &Path) -> Result<()> {
    let content = load(config_path)?;

    println!("Content of {}:", config_path.display());
    for line in content.lines() {
        println!("{}", line);
    }

    Ok(())
}
