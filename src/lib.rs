//! cursor-mcp-config library
//!
//! Core functionality for managing the Cursor MCP configuration file
//! (`~/.cursor/mcp.json`): show, backup, and replace operations.
//!
//! # Disclaimer
//!
//! This tool is not affiliated with or endorsed by Anysphere, Inc. (Cursor).
//! It manages a locally stored configuration file on your machine.

pub mod commands;
pub mod config;
pub mod platform;
