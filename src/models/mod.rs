//! Job sequencing domain models.
//!
//! Provides the data types for describing a batch of unit-duration jobs
//! and the slot placements produced for them.
//!
//! # Domain Mappings
//!
//! | u-sequencing | Manufacturing | Broadcasting | Cloud |
//! |--------------|---------------|--------------|-------|
//! | Job | Rush Order | Ad Spot | Batch Task |
//! | Slot | Shift | Break | Time Window |
//! | Profit | Margin | Revenue | Bid |

mod job;
mod schedule;

pub use job::{max_deadline, Job};
pub use schedule::{ScheduleEntry, Violation, ViolationType};
