//! Request/response boundary for job sequencing.
//!
//! Accepts a JSON body of the form
//! `{ "jobs": [ { "id", "deadline", "profit" }, ... ] }`, validates it,
//! runs the greedy scheduler, and produces either a [`RunResult`] or a
//! single descriptive error. No partial result is returned on error.
//!
//! # Response Codes
//!
//! | Status | Body |
//! |--------|------|
//! | 200 | `{ schedule, missed_jobs, stats }` |
//! | 400 | `{ error }` |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::scheduler::{GreedyScheduler, RunResult};
use crate::models::Job;
use crate::validation::{parse_jobs, validate_jobs, ValidationConfig};

/// Incoming scheduling request.
///
/// Job descriptors are kept as raw JSON so validation can coerce them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Job descriptors.
    pub jobs: Vec<Value>,
}

/// Error body returned for rejected requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of everything wrong with the request.
    pub error: String,
}

/// A rendered response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP-style status code (200 or 400).
    pub status: u16,
    /// JSON body.
    pub body: Value,
}

impl Response {
    /// Whether the request succeeded.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Validates requests and schedules them.
///
/// Each call runs independently; the service holds configuration only.
///
/// # Example
///
/// ```
/// use u_sequencing::service::SequencingService;
///
/// let service = SequencingService::new();
/// let response = service.respond(r#"{"jobs": [{"id": "a", "deadline": "2", "profit": 10}]}"#);
/// assert!(response.is_success());
/// assert_eq!(response.body["stats"]["total_profit"], 10);
///
/// let rejected = service.respond(r#"{"jobs": [{"id": "a", "deadline": -1, "profit": 10}]}"#);
/// assert_eq!(rejected.status, 400);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequencingService {
    validation: ValidationConfig,
    scheduler: GreedyScheduler,
}

impl SequencingService {
    /// Creates a service with default validation and scheduling settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets validation settings.
    pub fn with_validation(mut self, config: ValidationConfig) -> Self {
        self.validation = config;
        self
    }

    /// Sets the scheduler.
    pub fn with_scheduler(mut self, scheduler: GreedyScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Validates and schedules a parsed request.
    pub fn handle_request(&self, request: &ScheduleRequest) -> Result<RunResult> {
        let jobs = parse_jobs(&request.jobs, &self.validation).map_err(|errors| {
            tracing::warn!(errors = errors.len(), "Request rejected by validation");
            errors
        })?;
        tracing::debug!(jobs = jobs.len(), "Scheduling request accepted");
        Ok(self.scheduler.schedule(&jobs))
    }

    /// Validates and schedules already-typed jobs.
    ///
    /// Applies the same deadline, profit, and ID checks as
    /// [`handle_request`](Self::handle_request).
    pub fn handle_jobs(&self, jobs: &[Job]) -> Result<RunResult> {
        validate_jobs(jobs, &self.validation).map_err(|errors| {
            tracing::warn!(errors = errors.len(), "Jobs rejected by validation");
            errors
        })?;
        Ok(self.scheduler.schedule(jobs))
    }

    /// Parses a JSON body, then validates and schedules it.
    pub fn handle_json(&self, body: &str) -> Result<RunResult> {
        let request: ScheduleRequest = serde_json::from_str(body)?;
        self.handle_request(&request)
    }

    /// Handles a JSON body and renders the response.
    pub fn respond(&self, body: &str) -> Response {
        match self.handle_json(body).and_then(|result| Ok(serde_json::to_value(result)?)) {
            Ok(body) => Response { status: 200, body },
            Err(e) => {
                tracing::warn!(error = %e, "Request failed");
                let error = ErrorResponse {
                    error: e.to_string(),
                };
                Response {
                    status: 400,
                    body: serde_json::json!(error),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequencingError;
    use serde_json::json;

    const SAMPLE: &str = r#"{"jobs": [
        {"id": "a", "deadline": 2, "profit": 100},
        {"id": "b", "deadline": 1, "profit": 19},
        {"id": "c", "deadline": 2, "profit": 27},
        {"id": "d", "deadline": 1, "profit": 25},
        {"id": "e", "deadline": 3, "profit": 15}
    ]}"#;

    #[test]
    fn test_handle_json() {
        let result = SequencingService::new().handle_json(SAMPLE).unwrap();
        assert_eq!(result.stats.total_profit, 142);
        assert_eq!(result.slot_of("c"), Some(1));
    }

    #[test]
    fn test_respond_success_body() {
        let response = SequencingService::new().respond(SAMPLE);
        assert_eq!(response.status, 200);
        assert_eq!(response.body["schedule"][0]["slot"], 1);
        assert_eq!(response.body["schedule"][0]["job"]["id"], "c");
        assert_eq!(response.body["missed_jobs"][0]["id"], "d");
        assert_eq!(response.body["missed_jobs"][1]["id"], "b");
        assert_eq!(
            response.body["stats"],
            json!({
                "total_profit": 142,
                "utilization_rate": 100.0,
                "scheduled_jobs": 3,
                "missed_jobs": 2,
                "max_deadline": 3
            })
        );
    }

    #[test]
    fn test_respond_empty_jobs() {
        let response = SequencingService::new().respond(r#"{"jobs": []}"#);
        assert!(response.is_success());
        assert_eq!(
            response.body,
            json!({
                "schedule": [],
                "missed_jobs": [],
                "stats": {
                    "total_profit": 0,
                    "utilization_rate": 0.0,
                    "scheduled_jobs": 0,
                    "missed_jobs": 0,
                    "max_deadline": 0
                }
            })
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = SequencingService::new().handle_json("{not json").unwrap_err();
        assert!(matches!(err, SequencingError::Json(_)));

        let err = SequencingService::new().handle_json(r#"{"tasks": []}"#).unwrap_err();
        assert!(matches!(err, SequencingError::Json(_)));
    }

    #[test]
    fn test_validation_error_single_message() {
        let response = SequencingService::new().respond(
            r#"{"jobs": [{"id": "a", "deadline": "x", "profit": 1}, {"deadline": 1, "profit": 1}]}"#,
        );
        assert_eq!(response.status, 400);

        let body: ErrorResponse = serde_json::from_value(response.body).unwrap();
        assert!(body.error.starts_with("Invalid jobs: "));
        assert!(body.error.contains("jobs[0]: deadline must be an integer"));
        assert!(body.error.contains("jobs[1]: missing field 'id'"));
    }

    #[test]
    fn test_oversized_profit_rejected() {
        let response = SequencingService::new().respond(
            r#"{"jobs":[{"id":"a","deadline":1,"profit":9223372036854775807},{"id":"b","deadline":2,"profit":1}]}"#,
        );
        assert_eq!(response.status, 400);

        let body: ErrorResponse = serde_json::from_value(response.body).unwrap();
        assert!(body.error.contains("jobs[0]: profit 9223372036854775807"));
    }

    #[test]
    fn test_profit_bound_configurable() {
        let body = r#"{"jobs": [{"id": "a", "deadline": 1, "profit": 50}]}"#;
        let service = SequencingService::new()
            .with_validation(ValidationConfig::new().with_max_abs_profit(49));
        assert_eq!(service.respond(body).status, 400);
        assert!(SequencingService::new().respond(body).is_success());
    }

    #[test]
    fn test_handle_jobs() {
        let jobs = vec![
            Job::new("a", 2, 100),
            Job::new("b", 1, 19),
            Job::new("c", 2, 27),
        ];
        let result = SequencingService::new().handle_jobs(&jobs).unwrap();
        assert_eq!(result.total_profit(), 127);
        assert!(result.is_partition_of(&jobs));

        let err = SequencingService::new()
            .handle_jobs(&[Job::new("a", 1, i64::MAX), Job::new("b", 2, 1)])
            .unwrap_err();
        assert!(matches!(err, SequencingError::Validation(ref errors) if errors.len() == 1));

        let err = SequencingService::new()
            .handle_jobs(&[Job::new("a", 1, 1), Job::new("a", 2, 1)])
            .unwrap_err();
        assert!(err.to_string().contains("Duplicate job ID: a"));
    }

    #[test]
    fn test_duplicate_ids_configurable() {
        let body = r#"{"jobs": [
            {"id": "a", "deadline": 1, "profit": 5},
            {"id": "a", "deadline": 2, "profit": 4}
        ]}"#;

        let strict = SequencingService::new().respond(body);
        assert_eq!(strict.status, 400);

        let relaxed = SequencingService::new()
            .with_validation(ValidationConfig::new().with_unique_ids(false))
            .respond(body);
        assert!(relaxed.is_success());
        assert_eq!(relaxed.body["stats"]["scheduled_jobs"], 2);
    }

    #[test]
    fn test_scheduler_configurable() {
        let body = r#"{"jobs": [{"id": "loss", "deadline": 1, "profit": -5}]}"#;
        let service = SequencingService::new()
            .with_scheduler(GreedyScheduler::new().with_skip_unprofitable(true));
        let result = service.handle_json(body).unwrap();
        assert!(result.is_missed("loss"));
    }
}
