//! Capacity-stepping dispatch loop.
//!
//! # Algorithm
//!
//! 1. Validate the job set and unit count.
//! 2. Copy the job queue and sort it with the rule's order.
//! 3. Scan units 0..N-1; every idle unit takes the queue head. The rule's
//!    admission check decides whether the job is kept; the unit is busy for
//!    the job's duration either way.
//! 4. Advance simulated time by the smallest remaining busy time.
//! 5. Repeat 3-4 until the queue is empty.
//!
//! The lowest-indexed idle unit always receives the next job, which makes
//! runs reproducible.
//!
//! # Complexity
//! O(n log n + r * N) where n = jobs, N = units, r = dispatch rounds (≤ n).

use std::collections::VecDeque;
use std::sync::Arc;

use super::{CapacityTracker, DispatchingRule};
use crate::error::Result;
use crate::models::{Dispatch, DispatchOutcome, JobDescriptor, Schedule};
use crate::validation::validate_run;

/// Dispatch loop parameterized by an ordering policy.
#[derive(Debug, Clone, Copy)]
pub struct DispatchLoop<'a> {
    rule: &'a dyn DispatchingRule,
    units: usize,
}

impl<'a> DispatchLoop<'a> {
    /// Creates a loop over `units` processing units.
    pub fn new(rule: &'a dyn DispatchingRule, units: usize) -> Self {
        Self { rule, units }
    }

    /// Runs the simulation over `jobs` (in submission order).
    ///
    /// `jobs` is not modified; the loop works on its own copy of the queue.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidConfiguration`](crate::error::ScheduleError::InvalidConfiguration)
    /// if `units` is zero, a duration is negative, the total duration does
    /// not fit in `i64`, or job IDs repeat.
    pub fn run(&self, jobs: &[Arc<JobDescriptor>]) -> Result<Schedule> {
        validate_run(jobs, self.units)?;
        let mut tracker = CapacityTracker::new(self.units)?;

        let mut sorted = jobs.to_vec();
        self.rule.order(&mut sorted);
        let mut queue = VecDeque::from(sorted);

        let admission = self.rule.admission();
        // Finish time of admitted work per unit; rejected jobs are rolled out.
        let mut local_finish = vec![0i64; self.units];
        let mut clock = 0i64;
        let mut schedule = Schedule::new(self.units);

        while !queue.is_empty() {
            for unit in 0..self.units {
                if !tracker.is_idle(unit) {
                    continue;
                }
                let Some(job) = queue.pop_front() else {
                    break;
                };

                let finish = local_finish[unit] + job.duration();
                let admitted = match admission {
                    Some(check) => check(job.as_ref(), finish),
                    None => true,
                };
                let outcome = if admitted {
                    local_finish[unit] = finish;
                    tracing::debug!(
                        rule = self.rule.name(),
                        job_id = %job.id(),
                        unit,
                        start = clock,
                        finish,
                        "Job dispatched"
                    );
                    DispatchOutcome::Accepted
                } else {
                    tracing::debug!(
                        rule = self.rule.name(),
                        job_id = %job.id(),
                        unit,
                        finish,
                        deadline = job.deadline(),
                        "Job rejected, deadline would be missed"
                    );
                    DispatchOutcome::Rejected
                };

                tracker.occupy(unit, job.duration());
                schedule.record(Dispatch::new(job, unit, clock, outcome));
            }

            let step = tracker.advance();
            clock += step;
            tracing::trace!(step, clock, remaining = ?tracker.as_slice(), "Advanced simulated time");
        }

        Ok(schedule)
    }
}
