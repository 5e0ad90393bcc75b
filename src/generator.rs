//! Random job batch generation.
//!
//! Produces reproducible instances for benchmarking and randomized
//! testing. Deadlines are drawn uniformly from `1..=max_deadline` and
//! profits uniformly from the configured range.

use rand::Rng;

use crate::models::Job;

/// Generator for random job batches.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_sequencing::generator::InstanceGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let jobs = InstanceGenerator::new(10, 4).generate(&mut rng);
/// assert_eq!(jobs.len(), 10);
/// assert!(jobs.iter().all(|j| (1..=4).contains(&j.deadline)));
/// ```
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    job_count: usize,
    max_deadline: usize,
    min_profit: i64,
    max_profit: i64,
}

impl InstanceGenerator {
    /// Creates a generator for `job_count` jobs with deadlines up to
    /// `max_deadline` and profits in `1..=100`.
    ///
    /// With `max_deadline = 0` every job gets deadline 0.
    pub fn new(job_count: usize, max_deadline: usize) -> Self {
        Self {
            job_count,
            max_deadline,
            min_profit: 1,
            max_profit: 100,
        }
    }

    /// Sets the inclusive profit range. Bounds are swapped if reversed.
    pub fn with_profit_range(mut self, min_profit: i64, max_profit: i64) -> Self {
        self.min_profit = min_profit.min(max_profit);
        self.max_profit = min_profit.max(max_profit);
        self
    }

    /// Generates a batch with IDs `J1..=Jn`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Job> {
        (1..=self.job_count)
            .map(|i| {
                let deadline = if self.max_deadline == 0 {
                    0
                } else {
                    rng.random_range(1..=self.max_deadline)
                };
                let profit = rng.random_range(self.min_profit..=self.max_profit);
                Job::new(format!("J{i}"), deadline, profit)
            })
            .collect()
    }
}
