//! Ordering policies and the capacity-stepping dispatch loop.
//!
//! Each policy is a [`DispatchingRule`]: a total order over jobs plus an
//! optional admission check. The [`DispatchLoop`] is shared by all of them.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use u_jobsim::dispatching::{rules, DispatchLoop};
//! use u_jobsim::models::IdAllocator;
//!
//! let ids = IdAllocator::new();
//! let jobs = vec![Arc::new(ids.job("long", 30)), Arc::new(ids.job("short", 10))];
//!
//! let schedule = DispatchLoop::new(&rules::Sjf, 1).run(&jobs).unwrap();
//! assert_eq!(schedule.names(), vec![vec!["short", "long"]]);
//! ```

mod algorithm;
mod capacity;
mod engine;
pub mod rules;

pub use algorithm::Algorithm;
pub use capacity::CapacityTracker;
pub use engine::DispatchLoop;

use crate::models::JobDescriptor;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::sync::Arc;

/// Admission predicate: `(job, projected local finish time) -> admit?`.
pub type AdmissionCheck = fn(&JobDescriptor, i64) -> bool;

/// An ordering policy for the dispatch loop.
///
/// # Order Convention
/// [`compare`](Self::compare) returning `Less` means `a` is dispatched
/// before `b`. Jobs comparing `Equal` keep submission order.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "EDF").
    fn name(&self) -> &'static str;

    /// Compares two jobs for dispatch order.
    fn compare(&self, a: &JobDescriptor, b: &JobDescriptor) -> Ordering;

    /// Optional check run on every tentative assignment. `None` admits all.
    fn admission(&self) -> Option<AdmissionCheck> {
        None
    }

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Stable-sorts `queue` into dispatch order.
    fn order(&self, queue: &mut [Arc<JobDescriptor>]) {
        queue.sort_by(|a, b| self.compare(a, b));
    }
}
