//! Error types for the salesforce-backup application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    /// Non-success login or an expired session. Carries the raw body.
    #[error("Authentication failed (HTTP {status}): {body}")]
    Authentication { status: u16, body: String },

    #[error("No Content-Length returned for {0}")]
    MissingContentLength(String),

    // Download errors
    #[error("Size didn't match. Expected: {expected} Actual: {actual}")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("Download failed: {0}")]
    Download(String),

    #[error("{failed} of {total} file(s) failed to download")]
    FilesFailed { failed: usize, total: usize },

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Parse errors
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Errors that end the whole run, wherever they occur.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    /// Errors worth another attempt at the same file.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::Io(_)
                | Error::SizeMismatch { .. }
                | Error::Download(_)
                | Error::Api(_)
        )
    }

    /// Process exit code reported when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::MissingConfig(_)
            | Error::YamlParse(_)
            | Error::TomlParse(_) => exit_codes::CONFIG_ERROR,
            Error::Authentication { .. } | Error::Api(_) | Error::Xml(_) | Error::Http(_) => {
                exit_codes::API_ERROR
            }
            Error::FilesFailed { .. } => exit_codes::SOME_FILES_FAILED,
            _ => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const SOME_FILES_FAILED: i32 = 6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_is_fatal() {
        let err = Error::Authentication {
            status: 500,
            body: "<faultstring>INVALID_LOGIN</faultstring>".into(),
        };
        assert!(err.is_fatal());
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("INVALID_LOGIN"));
    }

    #[test]
    fn test_size_mismatch_is_retryable() {
        let err = Error::SizeMismatch {
            expected: 10,
            actual: 7,
        };
        assert!(err.is_retryable());
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "Size didn't match. Expected: 10 Actual: 7");
    }

    #[test]
    fn test_missing_content_length_is_not_retried() {
        let err = Error::MissingContentLength("/servlet/x".into());
        assert!(!err.is_retryable());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_exit_code_config_errors() {
        assert_eq!(Error::MissingConfig("SALES_FORCE_SITE".into()).exit_code(), 3);
        assert_eq!(
            Error::ConfigValidation {
                field: "max_attempts".into(),
                message: "must be at least 1".into(),
            }
            .exit_code(),
            exit_codes::CONFIG_ERROR
        );

        let yaml = serde_yaml::from_str::<u32>("[not, a, number]").unwrap_err();
        assert_eq!(Error::from(yaml).exit_code(), 3);

        let toml = toml::from_str::<toml::Table>("key = ").unwrap_err();
        assert_eq!(Error::from(toml).exit_code(), 3);
    }

    #[test]
    fn test_exit_code_api_errors() {
        let auth = Error::Authentication {
            status: 500,
            body: String::new(),
        };
        assert_eq!(auth.exit_code(), 2);
        assert_eq!(Error::Api("no sessionId".into()).exit_code(), 2);
    }

    #[test]
    fn test_exit_code_failed_files() {
        let err = Error::FilesFailed {
            failed: 1,
            total: 4,
        };
        assert_eq!(err.exit_code(), 6);
        assert_eq!(err.to_string(), "1 of 4 file(s) failed to download");
    }

    #[test]
    fn test_exit_code_unexpected() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(Error::from(io).exit_code(), 5);
        assert_eq!(Error::InvalidFilename("..".into()).exit_code(), 5);
        assert_eq!(
            Error::SizeMismatch {
                expected: 2,
                actual: 1
            }
            .exit_code(),
            exit_codes::UNEXPECTED_ERROR
        );
        assert_eq!(exit_codes::SUCCESS, 0);
    }
}
