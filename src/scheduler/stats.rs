//! Schedule summary statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Profit | Sum of profits of scheduled jobs |
//! | Utilization Rate | scheduled / max_deadline × 100, rounded to 2 decimals |
//! | Scheduled / Missed | Job counts on each side of the partition |
//! | Max Deadline | Number of slots in the horizon |

use serde::{Deserialize, Serialize};

use crate::models::{Job, ScheduleEntry};

/// Summary of one scheduling run.
///
/// Field names on the wire follow the response format
/// (`total_profit`, `utilization_rate`, `scheduled_jobs`, `missed_jobs`,
/// `max_deadline`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Sum of profits of scheduled jobs.
    pub total_profit: i64,
    /// Percentage of slots filled (0.0..=100.0, 2 decimals).
    pub utilization_rate: f64,
    /// Number of scheduled jobs.
    #[serde(rename = "scheduled_jobs")]
    pub scheduled_count: usize,
    /// Number of missed jobs.
    #[serde(rename = "missed_jobs")]
    pub missed_count: usize,
    /// Horizon length (largest deadline in the batch).
    pub max_deadline: usize,
}

impl Stats {
    /// Computes statistics from a schedule and its missed jobs.
    ///
    /// Utilization is 0 when `max_deadline` is 0. The total profit
    /// saturates at the `i64` bounds.
    pub fn calculate(schedule: &[ScheduleEntry], missed: &[Job], max_deadline: usize) -> Self {
        let total_profit = schedule
            .iter()
            .fold(0i64, |total, e| total.saturating_add(e.job.profit));

        let utilization_rate = if max_deadline == 0 {
            0.0
        } else {
            round2(schedule.len() as f64 / max_deadline as f64 * 100.0)
        };

        Self {
            total_profit,
            utilization_rate,
            scheduled_count: schedule.len(),
            missed_count: missed.len(),
            max_deadline,
        }
    }

    /// Stats of an empty run.
    pub fn empty() -> Self {
        Self::calculate(&[], &[], 0)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
