//! Job sequencing with deadlines.
//!
//! Assigns unit-duration jobs to time slots `1..=max_deadline` so that
//! every job finishes by its deadline, no two jobs share a slot, and total
//! profit is maximized. The core is a union-find slot allocator driven by
//! a greedy profit-descending scheduler.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `ScheduleEntry`, `Violation`
//! - **`allocator`**: `SlotAllocator`, the union-find "latest free slot ≤ d" engine
//! - **`scheduler`**: `GreedyScheduler`, `RunResult`, and `Stats`
//! - **`validation`**: Boundary checks and coercion of raw job descriptors
//! - **`service`**: JSON request/response handling
//! - **`generator`**: Seeded random job batches
//!
//! # Architecture
//!
//! Each scheduling run is self-contained: the scheduler builds a fresh
//! allocator per call and keeps no state between runs. Validation happens
//! at the boundary; the core assumes well-formed jobs and never fails.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5 and Ch. 21
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4.4

pub mod allocator;
pub mod error;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod service;
pub mod validation;

pub use error::{Result, SequencingError};
