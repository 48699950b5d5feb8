//! Error types for ufwban.

use thiserror::Error;

/// Crate-wide result alias over [`UfwbanError`].
pub type Result<T> = std::result::Result<T, UfwbanError>;

#[derive(Error, Debug)]
pub enum UfwbanError {
    #[error("Invalid IP address: {0}")]
    Validation(String),

    #[error("Blocklist file error: {0}")]
    Persistence(String),

    #[error("This operation requires root privileges. Please run with sudo.")]
    Privilege,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_includes_input() {
        let err = UfwbanError::Validation("not-an-ip".to_string());
        assert_eq!(err.to_string(), "Invalid IP address: not-an-ip");
    }

    #[test]
    fn test_persistence_display_includes_cause() {
        let err = UfwbanError::Persistence("Failed to read /tmp/x: denied".to_string());
        assert!(err.to_string().contains("Failed to read /tmp/x"));
    }

    #[test]
    fn test_privilege_display_mentions_sudo() {
        assert!(UfwbanError::Privilege.to_string().contains("sudo"));
    }
}
