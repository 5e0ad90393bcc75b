//! Job model.
//!
//! A job is a unit-duration piece of work with a deadline and a profit.
//! It occupies exactly one slot if scheduled.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4.4

use serde::{Deserialize, Serialize};

/// A unit-duration job to be sequenced.
///
/// # Time Representation
/// Slots are numbered from 1. A job with `deadline = d` may occupy any
/// slot in `1..=d`; `deadline = 0` can never be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier (within one batch).
    pub id: String,
    /// Latest slot (inclusive) the job may occupy.
    pub deadline: usize,
    /// Profit earned if the job is scheduled. May be zero or negative.
    pub profit: i64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, deadline: usize, profit: i64) -> Self {
        Self {
            id: id.into(),
            deadline,
            profit,
        }
    }

    /// Whether `slot` is a feasible placement for this job.
    #[inline]
    pub fn accepts_slot(&self, slot: usize) -> bool {
        slot >= 1 && slot <= self.deadline
    }
}

/// Largest deadline in a batch (0 for an empty batch).
pub fn max_deadline(jobs: &[Job]) -> usize {
    jobs.iter().map(|j| j.deadline).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_new() {
        let job = Job::new("a", 2, 100);
        assert_eq!(job.id, "a");
        assert_eq!(job.deadline, 2);
        assert_eq!(job.profit, 100);
    }

    #[test]
    fn test_accepts_slot() {
        let job = Job::new("a", 2, 100);
        assert!(!job.accepts_slot(0));
        assert!(job.accepts_slot(1));
        assert!(job.accepts_slot(2));
        assert!(!job.accepts_slot(3));

        let never = Job::new("z", 0, 5);
        assert!(!never.accepts_slot(0));
        assert!(!never.accepts_slot(1));
    }

    #[test]
    fn test_max_deadline() {
        assert_eq!(max_deadline(&[]), 0);
        let jobs = vec![Job::new("a", 2, 1), Job::new("b", 7, 1), Job::new("c", 0, 1)];
        assert_eq!(max_deadline(&jobs), 7);
    }

    #[test]
    fn test_job_json_shape() {
        let json = serde_json::to_value(Job::new("a", 2, -5)).unwrap();
        assert_eq!(json, serde_json::json!({"id": "a", "deadline": 2, "profit": -5}));
    }
}
