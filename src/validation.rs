//! Input validation for job sequencing requests.
//!
//! Converts loosely-typed job descriptors (JSON values) into [`Job`]s and
//! checks batch integrity before scheduling. Detects:
//! - Non-object descriptors and missing fields
//! - Non-integer deadlines or profits
//! - Empty IDs
//! - Negative or oversized deadlines
//! - Profits beyond the configured magnitude
//! - Duplicate IDs (when required)
//!
//! All problems in a batch are collected; no job is scheduled if any
//! error is found.
//!
//! # Coercion
//!
//! `deadline` and `profit` accept a JSON integer, a finite JSON float
//! (truncated toward zero), or a string holding a decimal integer with
//! optional surrounding whitespace. Booleans, null, arrays, and objects
//! are rejected.

use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

use crate::models::Job;

/// Validation result.
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// Default upper bound on deadlines (bounds allocator memory).
pub const DEFAULT_MAX_DEADLINE: usize = 1_000_000;

/// Default bound on `|profit|`.
///
/// With at most [`DEFAULT_MAX_DEADLINE`] scheduled jobs the total stays
/// within ±10^18, inside the `i64` range.
pub const DEFAULT_MAX_ABS_PROFIT: i64 = 1_000_000_000_000;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A job descriptor is not a JSON object.
    NotAnObject,
    /// A required field is absent.
    MissingField,
    /// A field has a type that cannot be coerced.
    InvalidType,
    /// A job ID is empty.
    EmptyId,
    /// A deadline is below zero.
    NegativeDeadline,
    /// A deadline exceeds the configured maximum.
    DeadlineTooLarge,
    /// A profit's magnitude exceeds the configured maximum.
    ProfitOutOfRange,
    /// Two jobs share the same ID.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validation settings.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Largest accepted deadline.
    pub max_deadline: usize,
    /// Largest accepted `|profit|`.
    pub max_abs_profit: i64,
    /// Reject batches where two jobs share an ID.
    pub require_unique_ids: bool,
}

impl ValidationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            max_deadline: DEFAULT_MAX_DEADLINE,
            max_abs_profit: DEFAULT_MAX_ABS_PROFIT,
            require_unique_ids: true,
        }
    }

    /// Sets the largest accepted deadline.
    pub fn with_max_deadline(mut self, max_deadline: usize) -> Self {
        self.max_deadline = max_deadline;
        self
    }

    /// Sets the largest accepted `|profit|`. Negative values are treated as 0.
    pub fn with_max_abs_profit(mut self, max_abs_profit: i64) -> Self {
        self.max_abs_profit = max_abs_profit.max(0);
        self
    }

    /// Sets whether duplicate IDs are rejected.
    pub fn with_unique_ids(mut self, required: bool) -> Self {
        self.require_unique_ids = required;
        self
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts job descriptors into validated jobs.
///
/// # Returns
/// `Ok(jobs)` in input order if every descriptor is valid, `Err(errors)`
/// with all detected issues otherwise.
pub fn parse_jobs(values: &[Value], config: &ValidationConfig) -> ValidationResult<Vec<Job>> {
    let mut errors = Vec::new();
    let mut jobs = Vec::with_capacity(values.len());

    for (index, value) in values.iter().enumerate() {
        if let Some(job) = parse_job(index, value, config, &mut errors) {
            jobs.push(job);
        }
    }

    if config.require_unique_ids {
        check_unique_ids(&jobs, &mut errors);
    }

    if errors.is_empty() {
        Ok(jobs)
    } else {
        Err(errors)
    }
}

/// Validates already-typed jobs.
///
/// Checks:
/// 1. No empty IDs
/// 2. No deadline above `config.max_deadline`
/// 3. No `|profit|` above `config.max_abs_profit`
/// 4. No duplicate IDs (if `config.require_unique_ids`)
pub fn validate_jobs(jobs: &[Job], config: &ValidationConfig) -> ValidationResult<()> {
    let mut errors = Vec::new();

    for (index, job) in jobs.iter().enumerate() {
        if job.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("jobs[{index}]: id must not be empty"),
            ));
        }
        if job.deadline > config.max_deadline {
            errors.push(deadline_too_large(index, job.deadline, config.max_deadline));
        }
        if job.profit.unsigned_abs() > config.max_abs_profit.unsigned_abs() {
            errors.push(profit_out_of_range(index, job.profit, config.max_abs_profit));
        }
    }

    if config.require_unique_ids {
        check_unique_ids(jobs, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn parse_job(
    index: usize,
    value: &Value,
    config: &ValidationConfig,
    errors: &mut Vec<ValidationError>,
) -> Option<Job> {
    let Some(fields) = value.as_object() else {
        errors.push(ValidationError::new(
            ValidationErrorKind::NotAnObject,
            format!("jobs[{index}]: expected an object, got {value}"),
        ));
        return None;
    };

    let before = errors.len();

    let id = match fields.get("id") {
        None => {
            errors.push(missing_field(index, "id"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("jobs[{index}]: id must not be empty"),
            ));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidType,
                format!("jobs[{index}]: id must be a string, got {other}"),
            ));
            None
        }
    };

    let deadline = integer_field(index, fields.get("deadline"), "deadline", errors).and_then(|d| {
        if d < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDeadline,
                format!("jobs[{index}]: deadline must be non-negative, got {d}"),
            ));
            return None;
        }
        match usize::try_from(d) {
            Ok(d) if d <= config.max_deadline => Some(d),
            _ => {
                errors.push(deadline_too_large(index, d, config.max_deadline));
                None
            }
        }
    });

    let profit = integer_field(index, fields.get("profit"), "profit", errors).and_then(|p| {
        if p.unsigned_abs() > config.max_abs_profit.unsigned_abs() {
            errors.push(profit_out_of_range(index, p, config.max_abs_profit));
            return None;
        }
        Some(p)
    });

    if errors.len() > before {
        return None;
    }
    Some(Job::new(id?, deadline?, profit?))
}

fn integer_field(
    index: usize,
    value: Option<&Value>,
    name: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<i64> {
    let Some(value) = value else {
        errors.push(missing_field(index, name));
        return None;
    };

    let coerced = coerce_integer(value);
    if coerced.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidType,
            format!("jobs[{index}]: {name} must be an integer, got {value}"),
        ));
    }
    coerced
}

/// Coerces a JSON value to an integer.
///
/// Returns `None` for values outside the `i64` range.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            if n.is_u64() {
                return None;
            }
            let f = n.as_f64()?.trunc();
            (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then(|| f as i64)
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn check_unique_ids(jobs: &[Job], errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for job in jobs {
        if !seen.insert(job.id.as_str()) && reported.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
    }
}

fn missing_field(index: usize, name: &str) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::MissingField,
        format!("jobs[{index}]: missing field '{name}'"),
    )
}

fn deadline_too_large(
    index: usize,
    deadline: impl std::fmt::Display,
    max: usize,
) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::DeadlineTooLarge,
        format!("jobs[{index}]: deadline {deadline} exceeds the maximum of {max}"),
    )
}

fn profit_out_of_range(index: usize, profit: i64, max: i64) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::ProfitOutOfRange,
        format!("jobs[{index}]: profit {profit} is outside -{max}..={max}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(values: Value) -> ValidationResult<Vec<Job>> {
        let values = values.as_array().cloned().unwrap_or_default();
        parse_jobs(&values, &ValidationConfig::default())
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_input() {
        let jobs = parse(json!([
            {"id": "a", "deadline": 2, "profit": 100},
            {"id": "b", "deadline": 1, "profit": -19}
        ]))
        .unwrap();
        assert_eq!(jobs, vec![Job::new("a", 2, 100), Job::new("b", 1, -19)]);
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(parse(json!([])).unwrap(), Vec::<Job>::new());
    }

    #[test]
    fn test_coercion() {
        let jobs = parse(json!([
            {"id": "s", "deadline": " 3 ", "profit": "-7"},
            {"id": "f", "deadline": 2.9, "profit": -4.5},
            {"id": "z", "deadline": 0, "profit": 0}
        ]))
        .unwrap();
        assert_eq!(jobs[0], Job::new("s", 3, -7));
        assert_eq!(jobs[1], Job::new("f", 2, -4));
        assert_eq!(jobs[2], Job::new("z", 0, 0));
    }

    #[test]
    fn test_coerce_integer_rejects() {
        assert_eq!(coerce_integer(&json!(true)), None);
        assert_eq!(coerce_integer(&json!(null)), None);
        assert_eq!(coerce_integer(&json!([1])), None);
        assert_eq!(coerce_integer(&json!({"n": 1})), None);
        assert_eq!(coerce_integer(&json!("3.5")), None);
        assert_eq!(coerce_integer(&json!("abc")), None);
        assert_eq!(coerce_integer(&json!(u64::MAX)), None);
        assert_eq!(coerce_integer(&json!(1e30)), None);
    }

    #[test]
    fn test_not_an_object() {
        let errors = parse(json!([5])).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NotAnObject));
    }

    #[test]
    fn test_missing_fields() {
        let errors = parse(json!([{"deadline": 1}])).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.kind == ValidationErrorKind::MissingField));
        assert!(errors.iter().any(|e| e.message.contains("'id'")));
        assert!(errors.iter().any(|e| e.message.contains("'profit'")));
    }

    #[test]
    fn test_invalid_types() {
        let errors = parse(json!([{"id": 7, "deadline": "soon", "profit": null}])).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.kind == ValidationErrorKind::InvalidType));
    }

    #[test]
    fn test_empty_id() {
        let errors = parse(json!([{"id": "", "deadline": 1, "profit": 1}])).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_negative_deadline() {
        let errors = parse(json!([{"id": "a", "deadline": -1, "profit": 1}])).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NegativeDeadline));
    }

    #[test]
    fn test_deadline_too_large() {
        let config = ValidationConfig::new().with_max_deadline(10);
        let values = vec![json!({"id": "a", "deadline": 11, "profit": 1})];
        let errors = parse_jobs(&values, &config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DeadlineTooLarge));

        let values = vec![json!({"id": "a", "deadline": 10, "profit": 1})];
        assert!(parse_jobs(&values, &config).is_ok());
    }

    #[test]
    fn test_profit_out_of_range() {
        let errors = parse(json!([
            {"id": "a", "deadline": 1, "profit": i64::MAX},
            {"id": "b", "deadline": 1, "profit": i64::MIN}
        ]))
        .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.kind == ValidationErrorKind::ProfitOutOfRange));

        let config = ValidationConfig::new().with_max_abs_profit(10);
        let values = vec![json!({"id": "a", "deadline": 1, "profit": -10})];
        assert!(parse_jobs(&values, &config).is_ok());
        let values = vec![json!({"id": "a", "deadline": 1, "profit": 11})];
        let errors = parse_jobs(&values, &config).unwrap_err();
        assert_eq!(errors[0].message, "jobs[0]: profit 11 is outside -10..=10");
    }

    #[test]
    fn test_duplicate_id() {
        let values = vec![
            json!({"id": "a", "deadline": 1, "profit": 1}),
            json!({"id": "a", "deadline": 2, "profit": 2}),
            json!({"id": "a", "deadline": 3, "profit": 3}),
        ];
        let errors = parse_jobs(&values, &ValidationConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);

        let relaxed = ValidationConfig::new().with_unique_ids(false);
        assert_eq!(parse_jobs(&values, &relaxed).unwrap().len(), 3);
    }

    #[test]
    fn test_multiple_errors() {
        let errors = parse(json!([
            "nope",
            {"id": "a", "deadline": -2, "profit": "x"}
        ]))
        .unwrap_err();
        assert!(errors.len() >= 3);
        assert!(errors[0].message.starts_with("jobs[0]"));
        assert!(errors[1].message.starts_with("jobs[1]"));
    }

    #[test]
    fn test_validate_typed_jobs() {
        let config = ValidationConfig::new()
            .with_max_deadline(5)
            .with_max_abs_profit(100);
        assert!(validate_jobs(&[Job::new("a", 5, 1), Job::new("b", 1, -100)], &config).is_ok());

        let errors = validate_jobs(
            &[
                Job::new("", 6, 1),
                Job::new("b", 1, 1),
                Job::new("b", 2, 1),
                Job::new("c", 1, -101),
            ],
            &config,
        )
        .unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyId));
        assert!(has_kind(&errors, ValidationErrorKind::ProfitOutOfRange));
        assert!(has_kind(&errors, ValidationErrorKind::DeadlineTooLarge));
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_error_display() {
        let errors = parse(json!([{"id": "a", "deadline": -1, "profit": 1}])).unwrap_err();
        assert_eq!(
            errors[0].to_string(),
            "jobs[0]: deadline must be non-negative, got -1"
        );
    }
}
