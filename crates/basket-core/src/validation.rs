//! # Validation Module
//!
//! Input validation for the add and edit dialogs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI dialog                                                    │
//! │  └── Collects raw text from the name and quantity fields               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trim both fields                                                  │
//! │  ├── Both fields filled?                                               │
//! │  ├── Quantity parses as a whole number?                                │
//! │  └── Quantity > 0?                                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ItemStore                                                    │
//! │  └── Trusts its input, checks only positions                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::validation::{validate_item_input, validate_quantity};
//!
//! let (name, quantity) = validate_item_input("  Milk ", "2").unwrap();
//! assert_eq!(name, "Milk");
//! assert_eq!(quantity, 2);
//!
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be empty after trimming
///
/// ## Returns
/// The trimmed name.
///
/// ## Example
/// ```rust
/// use basket_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name(" Bread ").unwrap(), "Bread");
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Parses quantity text typed into a dialog.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Empty text is `Required`
/// - Anything that is not a 32-bit whole number is `InvalidFormat`
///   (`"abc"`, `"2.5"`, `"99999999999"`)
/// - The parsed value must pass [`validate_quantity`]
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty = text
        .parse::<i32>()
        .map(i64::from)
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        })?;

    validate_quantity(qty)?;
    Ok(qty)
}

// =============================================================================
// Dialog Validators
// =============================================================================

/// Validates both dialog fields together.
///
/// ## Check Order
/// ```text
/// name empty OR quantity empty? ──► Required
///            │
///            ▼
/// quantity not a number?        ──► InvalidFormat
///            │
///            ▼
/// quantity <= 0?                ──► MustBePositive
///            │
///            ▼
///           OK (trimmed name, quantity)
/// ```
///
/// Emptiness of either field is reported before any parsing so the user
/// sees a single "fill in all fields" prompt for a half-filled dialog.
pub fn validate_item_input(name: &str, quantity_text: &str) -> ValidationResult<(String, i64)> {
    if quantity_text.trim().is_empty() {
        // Name gets precedence so an entirely blank dialog reports "name".
        validate_item_name(name)?;
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let name = validate_item_name(name)?;
    let quantity = parse_quantity(quantity_text)?;
    Ok((name, quantity))
}

// =============================================================================
// Unit Tests
// =============================================================================
