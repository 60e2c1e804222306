//! Built-in ordering policies.
//!
//! | Rule | Sort key (ascending) | Admission |
//! |------|----------------------|-----------|
//! | FCFS | submission order | none |
//! | SJF | (duration, priority) | none |
//! | FPS | (priority, user, duration) | none |
//! | EDF | (deadline, priority, duration) | local finish ≤ deadline |
//!
//! Sorting is stable, so jobs with equal keys keep submission order.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//!   Hard-Real-Time Environment"

use std::cmp::Ordering;

use super::{AdmissionCheck, DispatchingRule};
use crate::models::JobDescriptor;

/// First-Come-First-Served.
///
/// Keeps submission order; every job is eventually dispatched.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn compare(&self, _a: &JobDescriptor, _b: &JobDescriptor) -> Ordering {
        Ordering::Equal
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest Job First.
///
/// Shorter jobs first; equal durations go to the lower priority value.
/// Minimizes mean waiting time on a single unit.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn compare(&self, a: &JobDescriptor, b: &JobDescriptor) -> Ordering {
        (a.duration(), a.priority()).cmp(&(b.duration(), b.priority()))
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Fixed-Priority Scheduling.
///
/// Lower priority value first, then higher user privilege
/// (`Root < Admin < User`), then shorter duration.
#[derive(Debug, Clone, Copy)]
pub struct Fps;

impl DispatchingRule for Fps {
    fn name(&self) -> &'static str {
        "FPS"
    }

    fn compare(&self, a: &JobDescriptor, b: &JobDescriptor) -> Ordering {
        (a.priority(), a.user(), a.duration()).cmp(&(b.priority(), b.user(), b.duration()))
    }

    fn description(&self) -> &'static str {
        "Fixed-Priority Scheduling"
    }
}

/// Earliest Deadline First.
///
/// Orders by deadline, then priority, then duration. A job is admitted only
/// if the unit's local finish time, counting previously admitted jobs on
/// that unit plus this one, stays within the job's deadline.
#[derive(Debug, Clone, Copy)]
pub struct Edf;

impl DispatchingRule for Edf {
    fn name(&self) -> &'static str {
        "EDF"
    }

    fn compare(&self, a: &JobDescriptor, b: &JobDescriptor) -> Ordering {
        (a.deadline(), a.priority(), a.duration()).cmp(&(b.deadline(), b.priority(), b.duration()))
    }

    fn admission(&self) -> Option<AdmissionCheck> {
        Some(meets_deadline)
    }

    fn description(&self) -> &'static str {
        "Earliest Deadline First"
    }
}

/// Admits a job whose projected local finish time does not exceed its deadline.
pub fn meets_deadline(job: &JobDescriptor, finish: i64) -> bool {
    finish <= job.deadline()
}
