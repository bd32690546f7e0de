//! Paths for the Cursor MCP configuration

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Name of the MCP configuration file inside ~/.cursor/
pub const MCP_FILENAME: &str = "mcp.json";

/// Backup filename, written to the current working directory
pub const BACKUP_FILENAME: &str = "mcp.bk.json";

/// Get the Cursor configuration directory (~/.cursor/)
pub fn cursor_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".cursor"))
}

/// Get the MCP configuration file path (~/.cursor/mcp.json)
pub fn mcp_config_path() -> Result<PathBuf> {
    Ok(cursor_config_dir()?.join(MCP_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcp_config_path_shape() {
        let path = mcp_config_path().unwrap();
        assert!(path.ends_with(".cursor/mcp.json"));
    }

    #[test]
    fn test_config_dir_under_home() {
        let dir = cursor_config_dir().unwrap();
        assert!(dir.starts_with(dirs::home_dir().unwrap()));
    }
}
