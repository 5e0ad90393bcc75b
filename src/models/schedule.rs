//! Schedule entry and violation models.
//!
//! A schedule is a set of job-slot placements. Violations describe
//! placements that break feasibility; a correct scheduler never
//! produces any.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

use super::Job;

/// A job placed in a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Assigned slot (1-based).
    pub slot: usize,
    /// The scheduled job.
    pub job: Job,
}

/// A feasibility violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related job ID.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of feasibility violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Slot outside `1..=max_deadline`.
    SlotOutOfRange,
    /// Job placed after its deadline.
    DeadlineExceeded,
    /// Two jobs share a slot.
    SlotConflict,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(slot: usize, job: Job) -> Self {
        Self { slot, job }
    }

    /// Whether the slot respects the job's deadline.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.job.accepts_slot(self.slot)
    }
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }

    /// Creates a slot-out-of-range violation.
    pub fn slot_out_of_range(job_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::SlotOutOfRange, job_id, message)
    }

    /// Creates a deadline-exceeded violation.
    pub fn deadline_exceeded(job_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::DeadlineExceeded, job_id, message)
    }

    /// Creates a slot-conflict violation.
    pub fn slot_conflict(job_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::SlotConflict, job_id, message)
    }
}
