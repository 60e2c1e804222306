//! Simulation domain models.
//!
//! Provides the data types flowing through a scheduling run: the immutable
//! job descriptor, its ID allocator and user levels, the resulting
//! per-unit schedule, and a synthetic workload generator.

mod id;
mod job;
mod schedule;
mod workload;

pub use id::IdAllocator;
pub use job::{JobDescriptor, JobId, User};
pub use schedule::{Dispatch, DispatchOutcome, Schedule};
pub use workload::WorkloadGenerator;
