//! cursor-mcp-config: CLI for managing Cursor's MCP configuration file
//!
//! This tool is not affiliated with or endorsed by Anysphere, Inc. (Cursor).
//! It manages a locally stored configuration file on your machine.

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

mod commands;
mod config;
mod platform;

use commands::Action;
use platform::Platform;

const BANNER: &str = r#"
  ____                                    __  __   ____  ____       ____                 __  _
 / ___| _   _  _ __  ___   ___   _ __    |  \/  | / ___||  _ \     / ___|  ___   _ __   / _|(_)  __ _
| |    | | | || '__|/ __| / _ \ | '__|   | |\/| || |    | |_) |   | |     / _ \ | '_ \ | |_ | | / _` |
| |___ | |_| || |   \__ \| (_) || |      | |  | || |___ |  __/    | |___ | (_) || | | ||  _|| || (_| |
 \____| \__,_||_|   |___/ \___/ |_|      |_|  |_| \____||_|        \____| \___/ |_| |_||_|  |_| \__, |
                                                                                                |___/
"#;

#[derive(Parser)]
#[command(name = "cursor-mcp-config")]
#[command(about = "Manages the Cursor MCP configuration file (mcp.json)", long_about = None)]
#[command(version)]
struct Cli {
    /// Backup the current mcp.json to mcp.bk.json in the current directory
    #[arg(long)]
    backup: bool,

    /// Replace the current mcp.json with the specified file
    #[arg(long, value_name = "FILE")]
    replace: Option<PathBuf>,

    /// Show the content of the current ~/.cursor/mcp.json
    #[arg(long)]
    show: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{}", BANNER.green());

    let platform = Platform::current();
    if !platform.is_supported() {
        bail!(
            "This tool only supports Linux and macOS. Detected: {}",
            std::env::consts::OS
        );
    }
    println!("Detected OS: {}", platform);

    match commands::select_action(cli.backup, cli.replace, cli.show)? {
        Action::Show => {
            let mcp_path = config::mcp_config_path()?;
            commands::show::execute(&mcp_path)?;
        }

        Action::Backup => {
            let mcp_path = config::mcp_config_path()?;
            commands::backup::execute(&mcp_path, Path::new(config::BACKUP_FILENAME))?;
        }

        Action::Replace(file) => {
            let mcp_path = config::mcp_config_path()?;
            commands::replace::execute(&file, &mcp_path)?;
        }

        Action::Usage => {
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    }

    Ok(())
}
