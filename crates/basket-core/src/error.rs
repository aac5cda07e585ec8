//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  ├── CoreError        - Store and codec failures                       │
//! │  └── ValidationError  - Raw input rejected at the boundary             │
//! │                                                                         │
//! │  basket-prefs errors (separate crate)                                  │
//! │  └── PrefsError       - Preference file failures                       │
//! │                                                                         │
//! │  basket-app errors                                                     │
//! │  ├── AppError         - Startup / config / persistence                 │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → ApiError → UI          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recovery Classes
//! - `Validation`: recovered at the boundary, user re-enters input
//! - `IndexOutOfRange`: programmer error (stale position), never retried
//! - `MalformedData`: recovered on load by starting with an empty list

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Store and codec errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A position does not address an element of the list.
    ///
    /// ## When This Occurs
    /// - UI held on to a row position after the list shrank
    /// - Caller computed a position from a stale snapshot
    ///
    /// The store is left untouched.
    #[error("Index {index} is out of range for a list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Persisted text does not have the shape of an item list.
    ///
    /// ## When This Occurs
    /// - Preference value was hand-edited or truncated
    /// - A field is missing or has the wrong type
    /// - A quantity is not a number
    #[error("Malformed item data: {0}")]
    MalformedData(String),

    /// The item list could not be serialized.
    #[error("Failed to encode item data: {0}")]
    Encoding(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an IndexOutOfRange error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        CoreError::IndexOutOfRange { index, len }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when dialog input doesn't meet requirements.
/// Nothing is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., quantity is not a whole number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::out_of_range(5, 2);
        assert_eq!(
            err.to_string(),
            "Index 5 is out of range for a list of 2 items"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
