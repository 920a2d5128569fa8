//! Fleet integrity checks.
//!
//! Validates a fleet's trains before the engine starts taking requests.
//! Detects:
//! - Duplicate train identifiers
//! - Trains with zero capacity
//!
//! All issues are collected and reported together, not first-error-only.

use std::collections::HashSet;

use crate::models::Train;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two trains share the same identifier.
    DuplicateId,
    /// A train was constructed with no seats.
    ZeroCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a fleet's trains.
///
/// Checks:
/// 1. No duplicate train identifiers
/// 2. Every train has a positive capacity
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_fleet(trains: &[Train]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for train in trains {
        if !seen.insert(train.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate train ID: {}", train.id()),
            ));
        }

        if train.total_seats() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Train '{}' has no seats", train.id()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fleet() {
        let trains = vec![
            Train::new("Train1", 5),
            Train::new("Train2", 3),
            Train::new("Train3", 10),
        ];
        assert!(validate_fleet(&trains).is_ok());
    }

    #[test]
    fn test_duplicate_train_id() {
        let trains = vec![Train::new("T1", 5), Train::new("T1", 3)];
        let errors = validate_fleet(&trains).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_zero_capacity() {
        let trains = vec![Train::new("empty", 0)];
        let errors = validate_fleet(&trains).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroCapacity));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let trains = vec![
            Train::new("T1", 0), // Zero capacity
            Train::new("T1", 5), // Duplicate ID
        ];
        let errors = validate_fleet(&trains).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_empty_fleet_is_valid() {
        assert!(validate_fleet(&[]).is_ok());
    }
}
