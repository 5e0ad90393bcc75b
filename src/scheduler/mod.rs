//! Greedy job sequencing and run statistics.
//!
//! # Algorithm
//!
//! `GreedyScheduler` processes jobs in profit-descending order and gives
//! each one the latest free slot at or before its deadline, using a
//! union-find [`SlotAllocator`](crate::allocator::SlotAllocator). For
//! unit-duration jobs this greedy choice is optimal.
//!
//! # Statistics
//!
//! `Stats` summarizes a run: total profit, slot utilization, and
//! scheduled/missed counts.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4.4

mod greedy;
mod result;
mod stats;

pub use greedy::GreedyScheduler;
pub use result::RunResult;
pub use stats::Stats;
