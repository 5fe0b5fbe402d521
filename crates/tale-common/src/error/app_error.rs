//! Application error types
//!
//! Every variant maps onto one HTTP status. Domain errors are mapped through
//! their [`ErrorKind`]; 401 is reserved for the token variants.

use serde::Serialize;
use std::fmt;
use tale_core::{DomainError, ErrorKind};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Missing authentication")]
    MissingAuth,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP status for an error kind
#[must_use]
pub fn kind_status(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::Validation => 400,
        ErrorKind::Forbidden => 403,
        ErrorKind::NotFound => 404,
        ErrorKind::Conflict => 409,
        ErrorKind::Dependency => 500,
    }
}

impl AppError {
    /// Kind of the failure; `None` for the unauthenticated variants
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::InvalidToken | Self::TokenExpired | Self::MissingAuth => None,
            Self::Validation(_) => Some(ErrorKind::Validation),
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => Some(ErrorKind::Dependency),
            Self::Domain(e) => Some(e.kind()),
        }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.kind().map_or(401, kind_status)
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::MissingAuth => "MISSING_AUTH",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error payload of an API response, wrapped as `{"error": ...}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Build a payload; server-side messages are replaced with a generic one
    pub fn new(code: impl Into<String>, message: impl fmt::Display, server_error: bool) -> Self {
        let message = if server_error {
            "Internal server error".to_string()
        } else {
            message.to_string()
        };
        Self {
            code: code.into(),
            message,
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self::new(err.error_code(), err, err.is_server_error())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tale_core::Snowflake;

    #[test]
    fn test_only_token_errors_are_unauthenticated() {
        for err in [AppError::MissingAuth, AppError::InvalidToken, AppError::TokenExpired] {
            assert_eq!(err.status_code(), 401);
            assert!(err.kind().is_none());
        }
        assert_eq!(AppError::validation("bad").status_code(), 400);
        assert_eq!(AppError::Database("down".to_string()).status_code(), 500);
        assert_eq!(AppError::Config("port".to_string()).status_code(), 500);
    }

    #[test]
    fn test_domain_kinds_map_to_status() {
        let cases = [
            (DomainError::ChannelNotFound(Snowflake::new(1)), 404),
            (DomainError::NotChannelOwner, 403),
            (DomainError::UserBanned, 403),
            (DomainError::EmptyContent, 400),
            (DomainError::EmailAlreadyExists, 409),
            (DomainError::DatabaseError("down".to_string()), 500),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidToken.error_code(), "INVALID_TOKEN");
        assert_eq!(
            AppError::from(DomainError::NotBotOwner).error_code(),
            "NOT_BOT_OWNER"
        );
    }

    #[test]
    fn test_error_response_hides_server_details() {
        let response = ErrorResponse::from(&AppError::Database("password=hunter2".to_string()));
        assert_eq!(response.code, "DATABASE_ERROR");
        assert_eq!(response.message, "Internal server error");

        let response = ErrorResponse::from(&AppError::validation("name too long"))
            .with_details(serde_json::json!({ "name": ["length"] }));
        assert_eq!(response.message, "Validation error: name too long");
        assert!(response.details.is_some());
    }
}
