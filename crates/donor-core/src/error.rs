//! Error types for the BloodDonorNFT shell.

use thiserror::Error;

/// A shared error type for the shell crates.
///
/// Session operations never return this type; it surfaces from storage
/// backends (where the session store swallows it) and from shell plumbing
/// such as config loading and route table construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DonorError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Durable storage error (lock, read, write, remove)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No page is registered for a path
    #[error("No route matches path '{0}'")]
    RouteNotFound(String),

    /// A command or argument could not be understood
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DonorError {
    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a RouteNotFound error
    pub fn route_not_found(path: impl Into<String>) -> Self {
        Self::RouteNotFound(path.into())
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a route lookup failure
    pub fn is_route_not_found(&self) -> bool {
        matches!(self, Self::RouteNotFound(_))
    }
}

impl From<std::io::Error> for DonorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for DonorError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for DonorError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, DonorError>`.
pub type Result<T> = std::result::Result<T, DonorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: DonorError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.is_io());
        assert!(err.to_string().contains("PermissionDenied"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: DonorError = parse.into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: TOML"));
    }

    #[test]
    fn test_route_not_found_message() {
        let err = DonorError::route_not_found("/admin");
        assert!(err.is_route_not_found());
        assert_eq!(err.to_string(), "No route matches path '/admin'");
    }
}
