use thiserror::Error;

use super::grade::parse_grade;
use crate::curriculum::{MarkField, SubjectKind};

/// Maximum SGPA that can be entered directly.
pub const MAX_SGPA: f64 = 10.0;

/// Why an edit was rejected. The previous value is kept in every case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarkError {
    #[error("Enter numeric values only")]
    NotNumeric,

    #[error("Maximum value allowed is {max}")]
    ExceedsMaximum { max: f64 },

    #[error("{field} does not apply to {kind} subjects")]
    FieldNotApplicable { field: MarkField, kind: SubjectKind },

    #[error("{0} is not a grade (expected O, A+, A, B+, B, C, P, F or 10, 9-4, 0)")]
    InvalidGrade(String),
}

/// Digits with at most one decimal point. The empty string also matches.
fn is_numeric_input(s: &str) -> bool {
    let mut seen_dot = false;
    s.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

/// Parse a numeric input; a lone "." or "" reads as 0.
fn parse_numeric(s: &str) -> f64 {
    s.parse().unwrap_or(0.0)
}

/// Validate a mark edit for one field of a subject.
///
/// Returns `Ok(None)` when the input is empty, meaning the field is cleared.
pub fn validate_mark(
    kind: SubjectKind,
    field: MarkField,
    raw: &str,
) -> Result<Option<f64>, MarkError> {
    if !kind.accepts(field) {
        return Err(MarkError::FieldNotApplicable { field, kind });
    }

    let raw = raw.trim();
    if !is_numeric_input(raw) {
        return Err(MarkError::NotNumeric);
    }
    if raw.is_empty() {
        return Ok(None);
    }

    let value = parse_numeric(raw);
    let max = field.max_value(kind);
    if value > max {
        return Err(MarkError::ExceedsMaximum { max });
    }

    Ok(Some(value))
}

/// Validate a directly entered SGPA. Empty input disables the override.
pub fn validate_sgpa(raw: &str) -> Result<Option<f64>, MarkError> {
    let raw = raw.trim();
    if !is_numeric_input(raw) {
        return Err(MarkError::NotNumeric);
    }
    if raw.is_empty() {
        return Ok(None);
    }

    let value = parse_numeric(raw);
    if value > MAX_SGPA {
        return Err(MarkError::ExceedsMaximum { max: MAX_SGPA });
    }

    Ok(Some(value))
}

/// Validate a grade selection given as a letter or grade point.
pub fn validate_grade(raw: &str) -> Result<u8, MarkError> {
    parse_grade(raw).ok_or_else(|| MarkError::InvalidGrade(raw.trim().to_string()))
}
