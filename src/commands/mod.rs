//! CLI commands

use anyhow::{bail, Result};
use std::path::PathBuf;

pub mod backup;
pub mod replace;
pub mod show;

/// The single action selected for this invocation
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Print the MCP configuration file
    Show,
    /// Copy the MCP configuration file to the backup path
    Backup,
    /// Overwrite the MCP configuration file with the given file
    Replace(PathBuf),
    /// No action flag given; caller prints usage and exits with failure
    Usage,
}

/// Resolve the action flags into exactly one [`Action`].
///
/// `--backup`, `--replace`, and `--show` are mutually exclusive; more than
/// one is an error before any file is touched. None of them selects
/// [`Action::Usage`].
pub fn select_action(backup: bool, replace: Option<PathBuf>, show: bool) -> Result<Action> {
    let selected = usize::from(backup) + usize::from(replace.is_some()) + usize::from(show);
    if selected > 1 {
        bail!("--backup, --replace, and --show options are mutually exclusive");
    }

    Ok(if show {
        Action::Show
    } else if backup {
        Action::Backup
    } else if let Some(file) = replace {
        Action::Replace(file)
    } else {
        Action::Usage
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_flag_selects_action() {
        assert_eq!(select_action(false, None, true).unwrap(), Action::Show);
        assert_eq!(select_action(true, None, false).unwrap(), Action::Backup);
        assert_eq!(
            select_action(false, Some(PathBuf::from("new.json")), false).unwrap(),
            Action::Replace(PathBuf::from("new.json"))
        );
    }

    #[test]
    fn test_no_flag_selects_usage() {
        assert_eq!(select_action(false, None, false).unwrap(), Action::Usage);
    }

    #[test]
    fn test_two_flags_rejected() {
        assert!(select_action(true, None, true).is_err());
        assert!(select_action(true, Some(PathBuf::from("a.json")), false).is_err());
        assert!(select_action(false, Some(PathBuf::from("a.json")), true).is_err());
    }

    #[test]
    fn test_all_flags_rejected() {
        let err = select_action(true, Some(PathBuf::from("a.json")), true).unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }
}
