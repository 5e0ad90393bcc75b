//! Slot allocation for unit-duration jobs.
//!
//! Provides a disjoint-set (union-find) structure over time slots that
//! finds the latest free slot at or before a deadline and retires it in
//! amortized near-constant time.
//!
//! # Slot Numbering
//!
//! Slots are `1..=max_slot`. Slot 0 is a sentinel: a query that resolves
//! to it found nothing free.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good But Not Linear Set Union Algorithm"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 21 and Problem 16-4

mod slots;

pub use slots::SlotAllocator;
