use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::domain::model::Message;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Logo file not found: {path}")]
    LogoMissing { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl MenuError {
    pub fn not_found(message: impl Into<String>) -> Self {
        MenuError::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        MenuError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            MenuError::NotFound { .. } => StatusCode::NOT_FOUND,
            MenuError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::LogoMissing { path } => {
                format!("Logo image '{}' could not be read", path)
            }
            MenuError::ConfigError { .. }
            | MenuError::ConfigValidationError { .. }
            | MenuError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            MenuError::IoError(e) => format!("File system error: {}", e),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MenuError::LogoMissing { .. } => {
                "Place a logo.png in the working directory or pass --logo-path"
            }
            MenuError::ConfigError { .. } | MenuError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax and referenced environment variables"
            }
            MenuError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and try again"
            }
            MenuError::IoError(_) => "Check that the path exists and is readable/writable",
            MenuError::SerializationError(_) | MenuError::ValidationError { .. } => {
                "Check that the menus file matches the documented Menus schema"
            }
            MenuError::NotFound { .. } | MenuError::InvalidArgument { .. } => {
                "Request a date in YYYY-MM-DD format that has a menu"
            }
        }
    }
}

impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", self);
        } else {
            tracing::debug!(status = %status, "Request rejected: {}", self);
        }

        let message = match &self {
            MenuError::NotFound { message } => message.clone(),
            MenuError::InvalidArgument { .. } => self.to_string(),
            _ => "Internal server error".to_string(),
        };

        (status, Json(Message { message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            MenuError::not_found("nothing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            MenuError::invalid_argument("date", "bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MenuError::LogoMissing {
                path: "logo.png".to_string()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_display_is_bare_message() {
        let err = MenuError::not_found("No menu available for the requested date.");
        assert_eq!(err.to_string(), "No menu available for the requested date.");
    }

    #[test]
    fn test_logo_missing_suggestion() {
        let err = MenuError::LogoMissing {
            path: "./logo.png".to_string(),
        };
        assert!(err.user_friendly_message().contains("./logo.png"));
        assert!(err.recovery_suggestion().contains("--logo-path"));
    }
}
