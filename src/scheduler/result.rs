//! Output of a scheduling run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Stats;
use crate::models::{Job, ScheduleEntry, Violation};

/// Result of one scheduling run.
///
/// Serializes to the response format
/// `{ schedule, missed_jobs, stats }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Scheduled jobs, sorted by slot ascending.
    pub schedule: Vec<ScheduleEntry>,
    /// Unscheduled jobs, in processing (profit-descending) order.
    #[serde(rename = "missed_jobs")]
    pub missed: Vec<Job>,
    /// Summary statistics.
    pub stats: Stats,
}

impl RunResult {
    /// Result of scheduling an empty batch.
    pub fn empty() -> Self {
        Self {
            schedule: Vec::new(),
            missed: Vec::new(),
            stats: Stats::empty(),
        }
    }

    /// Total profit of scheduled jobs.
    #[inline]
    pub fn total_profit(&self) -> i64 {
        self.stats.total_profit
    }

    /// Slot assigned to a job, if it was scheduled.
    pub fn slot_of(&self, job_id: &str) -> Option<usize> {
        self.schedule
            .iter()
            .find(|e| e.job.id == job_id)
            .map(|e| e.slot)
    }

    /// Whether a job with this ID was missed.
    pub fn is_missed(&self, job_id: &str) -> bool {
        self.missed.iter().any(|j| j.id == job_id)
    }

    /// Checks feasibility of every placement.
    ///
    /// Detects slots outside `1..=max_deadline`, slots after the job's
    /// deadline, and slots shared by more than one job. An empty vector
    /// means the schedule is feasible.
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut occupied: HashMap<usize, &str> = HashMap::new();

        for entry in &self.schedule {
            let id = entry.job.id.as_str();

            if entry.slot == 0 || entry.slot > self.stats.max_deadline {
                violations.push(Violation::slot_out_of_range(
                    id,
                    format!(
                        "Job '{}' placed in slot {} outside 1..={}",
                        id, entry.slot, self.stats.max_deadline
                    ),
                ));
            } else if entry.slot > entry.job.deadline {
                violations.push(Violation::deadline_exceeded(
                    id,
                    format!(
                        "Job '{}' placed in slot {} after deadline {}",
                        id, entry.slot, entry.job.deadline
                    ),
                ));
            }

            if let Some(previous) = occupied.insert(entry.slot, id) {
                violations.push(Violation::slot_conflict(
                    id,
                    format!(
                        "Job '{}' shares slot {} with job '{}'",
                        id, entry.slot, previous
                    ),
                ));
            }
        }

        violations
    }

    /// Whether the schedule is feasible.
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// Whether scheduled and missed jobs together are exactly `jobs`,
    /// each appearing once (as a multiset).
    pub fn is_partition_of(&self, jobs: &[Job]) -> bool {
        if self.schedule.len() + self.missed.len() != jobs.len() {
            return false;
        }

        let mut expected: Vec<&Job> = jobs.iter().collect();
        let mut actual: Vec<&Job> = self
            .schedule
            .iter()
            .map(|e| &e.job)
            .chain(self.missed.iter())
            .collect();
        expected.sort_unstable();
        actual.sort_unstable();
        expected == actual
    }
}
