//! # App and API Error Types
//!
//! `AppError` is what the controller returns. `ApiError` is what the UI
//! layer receives from a command.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Basket                                 │
//! │                                                                         │
//! │  UI dialog                    Rust                                      │
//! │  ─────────                    ────                                      │
//! │                                                                         │
//! │  add_item("Milk", "0")                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<CommandResponse, ApiError>                               │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad input? ───── ValidationError::MustBePositive ──┐           │  │
//! │  │         │                                            │           │  │
//! │  │         ▼                                            ▼           │  │
//! │  │  Stale index? ─── CoreError::IndexOutOfRange ───── ApiError ───►│  │
//! │  │         │                                            ▲           │  │
//! │  │         ▼                                            │           │  │
//! │  │  Save failed? ─── PrefsError::Io ───────────────────┘           │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "VALIDATION_ERROR",                                          │
//! │    "message": "Quantity must be greater than 0" }                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use basket_core::{CoreError, ValidationError};
use basket_prefs::PrefsError;
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// App Error
// =============================================================================

/// Errors from startup, configuration, and list operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store, codec, or validation error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Preference storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] PrefsError),

    /// A swipe confirmation arrived after the list had changed.
    #[error("List changed since the swipe at position {index}")]
    StaleDeletion { index: usize },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::ConfigSaveFailed(err.to_string())
    }
}

/// Result type for app operations.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from commands to the UI layer.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Fill in all fields"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable message, shown to the user as-is
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Dialog input rejected; keep the dialog contents for re-entry
    ValidationError,

    /// Row position no longer exists (UI bug)
    IndexOutOfRange,

    /// The list could not be written; nothing changed
    StorageError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts validation errors to the prompts the dialogs show.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let message = match err {
            ValidationError::Required { .. } => "Fill in all fields".to_string(),
            ValidationError::InvalidFormat { .. } => "Enter a valid quantity".to_string(),
            ValidationError::MustBePositive { .. } => {
                "Quantity must be greater than 0".to_string()
            }
            ValidationError::OutOfRange { max, .. } => {
                format!("Quantity cannot exceed {}", max)
            }
        };
        ApiError::validation(message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::from(e),
            CoreError::IndexOutOfRange { index, len } => {
                tracing::error!(index, len, "Stale list position from UI");
                ApiError::new(
                    ErrorCode::IndexOutOfRange,
                    format!("No item at position {}", index),
                )
            }
            CoreError::MalformedData(e) | CoreError::Encoding(e) => {
                tracing::error!("Item data error: {}", e);
                ApiError::internal("Item data could not be processed")
            }
        }
    }
}

/// Converts app errors to API errors.
impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Core(e) => ApiError::from(e),
            AppError::Storage(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Preference write failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Could not save the list")
            }
            AppError::StaleDeletion { index } => {
                tracing::warn!(index, "Swipe confirmation for a changed list");
                ApiError::new(
                    ErrorCode::IndexOutOfRange,
                    "The list changed, swipe the item again",
                )
            }
            AppError::InvalidConfig(e)
            | AppError::ConfigLoadFailed(e)
            | AppError::ConfigSaveFailed(e) => {
                tracing::error!("Configuration error: {}", e);
                ApiError::internal("Configuration error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = ApiError::from(ValidationError::Required {
            field: "name".to_string(),
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Fill in all fields");

        let err = ApiError::from(ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        });
        assert_eq!(err.message, "Enter a valid quantity");

        let err = ApiError::from(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
        assert_eq!(err.message, "Quantity must be greater than 0");
    }

    #[test]
    fn test_index_error_code() {
        let err = ApiError::from(CoreError::out_of_range(3, 1));
        assert_eq!(err.code, ErrorCode::IndexOutOfRange);
    }

    #[test]
    fn test_stale_deletion_code() {
        let err = ApiError::from(AppError::StaleDeletion { index: 2 });
        assert_eq!(err.code, ErrorCode::IndexOutOfRange);
        assert_eq!(err.message, "The list changed, swipe the item again");
    }

    #[test]
    fn test_storage_error_code() {
        let err = ApiError::from(AppError::Storage(PrefsError::WriteRejected(
            "read-only".to_string(),
        )));
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.message, "Could not save the list");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::validation("Fill in all fields");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            r#"{"code":"VALIDATION_ERROR","message":"Fill in all fields"}"#
        );
    }
}
