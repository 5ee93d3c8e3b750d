//! Centralized error types for jirafmt.
//!
//! Module errors are aggregated into [`AppError`], which keeps the underlying
//! cause while offering a user-friendly message for the command line.

use thiserror::Error;

use crate::config::ConfigError;
use crate::custom_fields::FieldError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Custom-field decoding errors.
    #[error("{0}")]
    Field(#[from] FieldError),

    /// The issue input is not valid JSON or not shaped like issue data.
    #[error("Invalid issue data: {0}")]
    Input(#[from] serde_json::Error),

    /// IO errors (reading input, writing output).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Use --config to pass a file."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check it is readable.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Field(e) => format!("Custom field {} has an unexpected value.", e.field()),
            AppError::Input(_) => {
                "Input is not valid issue JSON. Expected a search result or an array of issues."
                    .to_string()
            }
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Issue, IssueFields};
    use crate::custom_fields::{get_release_blocker, RELEASE_BLOCKER_FIELD};

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::NoConfigDir.into();
        assert!(matches!(app_err, AppError::Config(ConfigError::NoConfigDir)));
    }

    #[test]
    fn test_user_message_config_validation() {
        let err = AppError::Config(ConfigError::ValidationError(
            "separator cannot be empty".to_string(),
        ));
        assert!(err.user_message().contains("separator cannot be empty"));
    }

    #[test]
    fn test_user_message_field_error() {
        let mut fields = IssueFields::default();
        fields
            .unknowns
            .insert(RELEASE_BLOCKER_FIELD.to_string(), serde_json::json!(42));
        let issue = Issue {
            fields: Some(fields),
            ..Issue::default()
        };

        let err: AppError = get_release_blocker(&issue).unwrap_err().into();
        assert!(err.user_message().contains(RELEASE_BLOCKER_FIELD));
        assert!(err.to_string().contains("failed to decode custom field"));
    }

    #[test]
    fn test_user_message_input_error() {
        let err: AppError = serde_json::from_str::<Issue>("not json").unwrap_err().into();
        assert!(err.user_message().contains("not valid issue JSON"));
    }
}
