//! Unified error handling for the portal services.
//!
//! Provides a single error type shared by the store, session and data
//! providers, plus the `{ success, error }` result value UI callers render.

use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Not authenticated")]
    Unauthorized,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    // Simulated-latency operations
    #[error("Operation cancelled")]
    Cancelled,

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cache")]
    #[error("Cache error")]
    Cache(#[from] redis::RedisError),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Cancelled => "CANCELLED",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            #[cfg(feature = "cache")]
            AppError::Cache(_) => "CACHE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal errors
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                "A storage error occurred".to_string()
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                "Stored data could not be read".to_string()
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "A storage error occurred".to_string()
            }
            #[cfg(feature = "cache")]
            AppError::Cache(e) => {
                tracing::error!("Cache error: {:?}", e);
                "A storage error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::NotFound(_) => AppError::NotFound,
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }
}

// =============================================================================
// Action Result
// =============================================================================

/// Outcome value returned to form-style callers instead of an error.
///
/// Serializes as `{ "success": true }` or
/// `{ "success": false, "error": "Not authenticated" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

impl<T> From<AppResult<T>> for ActionResult {
    fn from(result: AppResult<T>) -> Self {
        match result {
            Ok(_) => ActionResult::ok(),
            Err(e) => ActionResult::failed(e.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_action_result() {
        let result: AppResult<()> = Err(AppError::Unauthorized);
        let action = ActionResult::from(result);

        assert_eq!(action, ActionResult::failed("Not authenticated"));
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"Not authenticated"}"#);
    }

    #[test]
    fn test_success_action_result_omits_error() {
        let action = ActionResult::from(Ok::<_, AppError>(42));
        assert_eq!(serde_json::to_string(&action).unwrap(), r#"{"success":true}"#);
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::storage("disk /var/portal is full");
        assert_eq!(err.code(), "STORAGE_ERROR");
        assert_eq!(err.user_message(), "A storage error occurred");
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: AppError = DomainError::validation("Email is required").into();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Email is required"));
        assert_eq!(err.user_message(), "Email is required");

        let err: AppError = DomainError::Unauthorized.into();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[test]
    fn test_option_ext() {
        assert!(matches!(None::<u8>.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(1).ok_or_not_found().unwrap(), 1);
    }
}
