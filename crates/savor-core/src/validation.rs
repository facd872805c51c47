//! # Validation Module
//!
//! Field validators shared by every entity constructor in savor-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Validation Layers                        │
//! │                                                             │
//! │  Layer 1: The type system                                   │
//! │  ├── Wrong-typed arguments never compile                    │
//! │  └── Closed enums make invalid statuses unrepresentable     │
//! │           │                                                 │
//! │           ▼                                                 │
//! │  Layer 2: THIS MODULE - value-level constraints             │
//! │  ├── Emptiness, positivity, ranges, required substrings     │
//! │  └── Runs in constructors BEFORE any state exists           │
//! │                                                             │
//! │  An entity that constructs is an entity that is valid.      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use savor_core::validation::{validate_quantity, validate_rating};
//!
//! validate_quantity(5).unwrap();
//! validate_rating(4.5).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a text field is non-empty (whitespace does not count).
///
/// ## Example
/// ```rust
/// use savor_core::validation::validate_required_text;
///
/// assert!(validate_required_text("name", "Margherita").is_ok());
/// assert!(validate_required_text("name", "").is_err());
/// assert!(validate_required_text("name", "   ").is_err());
/// ```
pub fn validate_required_text(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must contain an '@' character
///
/// That is the whole contract: no RFC parsing, no domain checks.
///
/// ## Example
/// ```rust
/// use savor_core::validation::validate_email;
///
/// assert!(validate_email("email", "a@b").is_ok());
/// assert!(validate_email("email", "no-at-sign.example.com").is_err());
/// ```
pub fn validate_email(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    if !value.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must contain '@'",
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// Zero quantities never exist in an order: removal deletes the line
/// instead of zeroing it.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }
    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be strictly positive (free dishes are not a thing here)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive { field: "price" });
    }
    Ok(())
}

/// Validates a generic positive integer field (calories, minutes, phone).
pub fn validate_positive(field: &'static str, value: i64) -> ValidationResult<()> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive { field });
    }
    Ok(())
}

/// Validates a positive decimal field (weight in grams).
pub fn validate_positive_decimal(field: &'static str, value: f64) -> ValidationResult<()> {
    if !(value > 0.0) {
        return Err(ValidationError::MustBePositive { field });
    }
    Ok(())
}

/// Validates a restaurant rating.
///
/// ## Rules
/// - Must be between 0.0 and 5.0, inclusive on both ends
///
/// ## Example
/// ```rust
/// use savor_core::validation::validate_rating;
///
/// assert!(validate_rating(0.0).is_ok());
/// assert!(validate_rating(5.0).is_ok());
/// assert!(validate_rating(5.01).is_err());
/// ```
pub fn validate_rating(rating: f64) -> ValidationResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating",
            min: 0,
            max: 5,
        });
    }
    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that a required collection has at least one entry.
pub fn validate_non_empty<T>(field: &'static str, items: &[T]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::EmptyCollection { field });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
