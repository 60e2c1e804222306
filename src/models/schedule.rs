//! Schedule (simulation result) model.
//!
//! A schedule holds, for each processing unit, the ordered list of jobs it
//! ran, plus a timeline of every tentative dispatch including the ones EDF
//! rejected.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{JobDescriptor, JobId};

/// Result of a scheduling run.
///
/// `units[i]` lists the jobs accepted on unit `i` in dispatch order. A job
/// appears in at most one unit; rejected jobs appear in none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    units: Vec<Vec<Arc<JobDescriptor>>>,
    timeline: Vec<Dispatch>,
}

/// One tentative placement of a job on a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispatch {
    /// The dispatched job (shared with the scheduler's queue).
    pub job: Arc<JobDescriptor>,
    /// Unit index the job was placed on.
    pub unit: usize,
    /// Simulated time at which the unit picked the job up.
    pub start: i64,
    /// `start + duration`. The unit is busy until then even if rejected.
    pub end: i64,
    /// Whether the job made it into the reported schedule.
    pub outcome: DispatchOutcome,
}

/// Terminal state of a dispatched job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchOutcome {
    /// Job is part of the unit's sequence.
    Accepted,
    /// Job failed the admission check and was dropped.
    Rejected,
}

impl Dispatch {
    /// Creates a dispatch record starting at `start`.
    pub fn new(
        job: Arc<JobDescriptor>,
        unit: usize,
        start: i64,
        outcome: DispatchOutcome,
    ) -> Self {
        let end = start + job.duration();
        Self {
            job,
            unit,
            start,
            end,
            outcome,
        }
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.outcome == DispatchOutcome::Accepted
    }

    /// Time the unit spent on this job.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule over `unit_count` units.
    pub fn new(unit_count: usize) -> Self {
        Self {
            units: vec![Vec::new(); unit_count],
            timeline: Vec::new(),
        }
    }

    /// Records a dispatch; accepted jobs are appended to their unit.
    ///
    /// # Panics
    /// Panics if `dispatch.unit` is out of range.
    pub fn record(&mut self, dispatch: Dispatch) {
        if dispatch.is_accepted() {
            self.units[dispatch.unit].push(Arc::clone(&dispatch.job));
        }
        self.timeline.push(dispatch);
    }

    /// Number of processing units.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Jobs accepted on each unit, in dispatch order.
    pub fn units(&self) -> &[Vec<Arc<JobDescriptor>>] {
        &self.units
    }

    /// Jobs accepted on unit `index`.
    pub fn unit(&self, index: usize) -> Option<&[Arc<JobDescriptor>]> {
        self.units.get(index).map(Vec::as_slice)
    }

    /// Consumes the schedule, returning the per-unit sequences.
    pub fn into_units(self) -> Vec<Vec<Arc<JobDescriptor>>> {
        self.units
    }

    /// Every tentative dispatch, in dispatch order.
    pub fn timeline(&self) -> &[Dispatch] {
        &self.timeline
    }

    /// Number of accepted jobs across all units.
    pub fn job_count(&self) -> usize {
        self.units.iter().map(Vec::len).sum()
    }

    /// Accepted jobs in dispatch order.
    pub fn accepted(&self) -> impl Iterator<Item = &Arc<JobDescriptor>> {
        self.timeline
            .iter()
            .filter(|d| d.is_accepted())
            .map(|d| &d.job)
    }

    /// Jobs dropped by an admission check, in dispatch order.
    pub fn rejected(&self) -> impl Iterator<Item = &Arc<JobDescriptor>> {
        self.timeline
            .iter()
            .filter(|d| !d.is_accepted())
            .map(|d| &d.job)
    }

    /// Unit a job was accepted on, if any.
    pub fn unit_of(&self, id: JobId) -> Option<usize> {
        self.units
            .iter()
            .position(|jobs| jobs.iter().any(|j| j.id() == id))
    }

    /// Whether the job was accepted on some unit.
    pub fn contains(&self, id: JobId) -> bool {
        self.unit_of(id).is_some()
    }

    /// Dispatch record for a job.
    pub fn dispatch_for(&self, id: JobId) -> Option<&Dispatch> {
        self.timeline.iter().find(|d| d.job.id() == id)
    }

    /// Latest end time across all dispatches, rejected ones included.
    pub fn makespan(&self) -> i64 {
        self.timeline.iter().map(|d| d.end).max().unwrap_or(0)
    }

    /// Time unit `index` spent busy, rejected jobs included.
    pub fn busy_time(&self, index: usize) -> i64 {
        self.timeline
            .iter()
            .filter(|d| d.unit == index)
            .map(Dispatch::duration)
            .sum()
    }

    /// Job names per unit.
    pub fn names(&self) -> Vec<Vec<&str>> {
        self.units
            .iter()
            .map(|jobs| jobs.iter().map(|j| j.name()).collect())
            .collect()
    }
}
