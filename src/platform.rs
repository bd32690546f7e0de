//! Host platform detection
//!
//! The tool only operates on Linux and macOS; anything else is rejected
//! before any flag is evaluated.

use std::fmt;

/// Supported host platform tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Other,
}

impl Platform {
    /// Detect the platform of the running host
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS name string (as in `std::env::consts::OS`) to a tag
    pub fn from_os_name(os_name: &str) -> Self {
        match os_name {
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            _ => Platform::Other,
        }
    }

    /// Whether this tool supports the platform
    pub fn is_supported(self) -> bool {
        !matches!(self, Platform::Other)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => write!(f, "Linux"),
            Platform::MacOs => write!(f, "macOS"),
            Platform::Other => write!(f, "Other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_name() {
        assert_eq!(Platform::from_os_name("linux"), Platform::Linux);
        assert_eq!(Platform::from_os_name("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("windows"), Platform::Other);
        assert_eq!(Platform::from_os_name("freebsd"), Platform::Other);
        assert_eq!(Platform::from_os_name(""), Platform::Other);
    }

    #[test]
    fn test_is_supported() {
        assert!(Platform::Linux.is_supported());
        assert!(Platform::MacOs.is_supported());
        assert!(!Platform::Other.is_supported());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Platform::Linux.to_string(), "Linux");
        assert_eq!(Platform::MacOs.to_string(), "macOS");
        assert_eq!(Platform::Other.to_string(), "Other");
    }
}
