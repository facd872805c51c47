//! # Error Types
//!
//! Domain-specific error types for savor-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Error Types                           │
//! │                                                             │
//! │  savor-core errors (this file)                              │
//! │  ├── DomainError      - General domain errors               │
//! │  └── ValidationError  - Input validation failures           │
//! │                                                             │
//! │  Flow: ValidationError → DomainError → caller               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, allowed set)
//! 3. Errors are enum variants, never String
//! 4. Validation runs before any state change; a returned error means
//!    the entity was left untouched
//!
//! Note that "item not found" during removal is NOT an error anywhere in
//! this crate - removals report an outcome instead (see [`crate::order`]).

use thiserror::Error;

// =============================================================================
// Domain Error
// =============================================================================

/// Domain-level errors.
///
/// These represent business rule violations. They should be caught and
/// translated to user-facing messages by the hosting application.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a value has the right type but violates a
/// domain constraint (emptiness, non-positivity, out-of-range, missing
/// required substring, not a member of a fixed set).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Invalid format (e.g., email without '@').
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed {
        field: &'static str,
        allowed: &'static [&'static str],
    },

    /// A required collection has no entries.
    #[error("{field} cannot be empty")]
    EmptyCollection { field: &'static str },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with DomainError.
pub type DomainResult<T> = Result<T, DomainError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "description",
        };
        assert_eq!(err.to_string(), "description is required");

        let err = ValidationError::MustBePositive { field: "price" };
        assert_eq!(err.to_string(), "price must be positive");

        let err = ValidationError::OutOfRange {
            field: "rating",
            min: 0,
            max: 5,
        };
        assert_eq!(err.to_string(), "rating must be between 0 and 5");
    }

    #[test]
    fn test_validation_converts_to_domain_error() {
        let validation_err = ValidationError::Required { field: "message" };
        let domain_err: DomainError = validation_err.into();
        assert!(matches!(domain_err, DomainError::Validation(_)));
    }
}
