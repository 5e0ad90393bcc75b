//! Greedy max-profit job sequencing.
//!
//! # Algorithm
//!
//! 1. Size a slot allocator to the largest deadline in the batch.
//! 2. Sort jobs by profit descending (stable: ties keep input order).
//! 3. Give each job the latest free slot at or before its deadline.
//! 4. Jobs with no free slot left are missed.
//!
//! Unit-duration jobs with deadlines form a matroid, so granting the most
//! profitable remaining job its latest feasible slot yields an optimal
//! total profit.
//!
//! # Complexity
//! O(n log n) for the sort plus O(n α(n)) for allocation.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5

use crate::allocator::SlotAllocator;
use crate::models::{max_deadline, Job, ScheduleEntry};

use super::{RunResult, Stats};

/// Greedy scheduler for unit-duration jobs with deadlines.
///
/// Holds configuration only; every call to [`schedule`](Self::schedule)
/// builds its own allocator, so one scheduler can serve many runs.
///
/// # Negative profits
///
/// By default every job is offered a slot, including jobs with negative
/// profit. That rule trades optimality for completeness: a lone job with
/// deadline 1 and profit -5 is scheduled for a total of -5, while leaving
/// it out would give 0. Enable
/// [`with_skip_unprofitable`](Self::with_skip_unprofitable) to get the
/// optimum over all feasible subsets whatever the signs of the profits.
///
/// # Example
///
/// ```
/// use u_sequencing::models::Job;
/// use u_sequencing::scheduler::GreedyScheduler;
///
/// let jobs = vec![
///     Job::new("a", 2, 100),
///     Job::new("b", 1, 19),
///     Job::new("c", 2, 27),
/// ];
/// let result = GreedyScheduler::new().schedule(&jobs);
///
/// assert_eq!(result.slot_of("c"), Some(1));
/// assert_eq!(result.slot_of("a"), Some(2));
/// assert!(result.is_missed("b"));
/// assert_eq!(result.stats.total_profit, 127);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    skip_unprofitable: bool,
}

impl GreedyScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self {
            skip_unprofitable: false,
        }
    }

    /// Routes negative-profit jobs straight to `missed`.
    ///
    /// When disabled (the default), every job is offered a slot and a
    /// negative-profit job takes one if any is free, which lowers the
    /// total below the optimum. When enabled, the total equals the best
    /// achievable over all feasible subsets.
    pub fn with_skip_unprofitable(mut self, skip: bool) -> Self {
        self.skip_unprofitable = skip;
        self
    }

    /// Schedules a batch of jobs.
    ///
    /// Returns placements sorted by slot, missed jobs in processing order,
    /// and summary statistics.
    pub fn schedule(&self, jobs: &[Job]) -> RunResult {
        let max_deadline = max_deadline(jobs);
        let mut slots = SlotAllocator::new(max_deadline);
        let mut schedule = Vec::new();
        let mut missed = Vec::new();

        for idx in self.sort_jobs(jobs) {
            let job = &jobs[idx];

            if self.skip_unprofitable && job.profit < 0 {
                tracing::trace!(job_id = %job.id, profit = job.profit, "Job skipped");
                missed.push(job.clone());
                continue;
            }

            match slots.allocate(job.deadline) {
                Some(slot) => {
                    debug_assert!(job.accepts_slot(slot));
                    debug_assert!(!slots.is_free(slot));
                    tracing::trace!(job_id = %job.id, slot, "Job scheduled");
                    schedule.push(ScheduleEntry::new(slot, job.clone()));
                }
                None => {
                    tracing::trace!(job_id = %job.id, deadline = job.deadline, "Job missed");
                    missed.push(job.clone());
                }
            }
        }

        debug_assert_eq!(slots.free_count(), max_deadline - schedule.len());
        schedule.sort_by_key(|e| e.slot);
        debug_assert!(schedule.windows(2).all(|w| w[0].slot < w[1].slot));

        let stats = Stats::calculate(&schedule, &missed, max_deadline);
        tracing::debug!(
            jobs = jobs.len(),
            max_deadline,
            scheduled = stats.scheduled_count,
            missed = stats.missed_count,
            total_profit = stats.total_profit,
            "Scheduling run complete"
        );

        RunResult {
            schedule,
            missed,
            stats,
        }
    }

    /// Returns job indices sorted by profit descending, ties in input order.
    fn sort_jobs(&self, jobs: &[Job]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by(|&a, &b| jobs[b].profit.cmp(&jobs[a].profit));
        indices
    }
}

impl Default for GreedyScheduler {
    fn default() -> Self {
        Self::new()
    }
}
