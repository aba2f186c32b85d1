//! Input validation for simulation runs.
//!
//! Checks the process batch and discipline selection before any simulation
//! state is built. Detects:
//! - Empty batches
//! - Negative arrival times
//! - Non-positive burst times
//! - Duplicate process IDs
//! - Round-robin with a non-positive quantum
//!
//! Validation is fail-fast with respect to the simulation (nothing runs on a
//! rejected batch) but exhaustive with respect to reporting: all violations
//! are collected, not just the first.

use std::collections::HashSet;

use crate::models::{Discipline, Process};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Diagnostic description (not an end-user message; presentation is the
    /// caller's responsibility).
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The batch contains no processes.
    EmptyBatch,
    /// A process has `arrival_time < 0`.
    NegativeArrival,
    /// A process has `burst_time <= 0`.
    NonPositiveBurst,
    /// Two processes share the same ID.
    DuplicateId,
    /// Round-robin selected with `quantum <= 0`.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a batch and discipline selection.
///
/// Checks:
/// 1. The batch is not empty
/// 2. No arrival time is negative
/// 3. Every burst time is positive
/// 4. No two processes share an ID
/// 5. Round-robin quantum is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process], discipline: &Discipline) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "Batch contains no processes",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if let Discipline::RoundRobin { quantum } = discipline {
        if *quantum <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Round-robin quantum must be positive, got {quantum}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
