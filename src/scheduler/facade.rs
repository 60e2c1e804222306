//! Scheduler façade.
//!
//! Holds the submitted job set and runs the dispatch loop on request. Every
//! run works on a private copy of the queue, so runs are repeatable and the
//! façade can be shared between threads.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::dispatching::{Algorithm, DispatchLoop};
use crate::error::Result;
use crate::models::{JobDescriptor, Schedule};
use crate::validation::validate_units;

/// Run configuration.
///
/// Deserializable so runs can be described in a config file:
///
/// ```
/// use u_jobsim::dispatching::Algorithm;
/// use u_jobsim::scheduler::ScheduleRequest;
///
/// let request: ScheduleRequest =
///     serde_json::from_str(r#"{ "algorithm": "EDF", "units": 2 }"#).unwrap();
/// assert_eq!(request.algorithm, Algorithm::Edf);
/// assert_eq!(request.units, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Policy to run.
    pub algorithm: Algorithm,
    /// Number of processing units. Must be positive.
    pub units: i64,
}

impl ScheduleRequest {
    /// Creates a request.
    pub fn new(algorithm: Algorithm, units: i64) -> Self {
        Self { algorithm, units }
    }

    /// Sets the unit count.
    pub fn with_units(mut self, units: i64) -> Self {
        self.units = units;
        self
    }
}

/// Job store plus entry point for scheduling runs.
///
/// # Example
///
/// ```
/// use u_jobsim::dispatching::Algorithm;
/// use u_jobsim::models::{IdAllocator, User};
/// use u_jobsim::scheduler::Scheduler;
///
/// let ids = IdAllocator::new();
/// let mut scheduler = Scheduler::new();
/// scheduler.add_job(ids.job("J1", 10).with_deadline(10).with_user(User::Root));
/// scheduler.add_job(ids.job("J2", 20).with_deadline(40).with_user(User::Admin));
///
/// let schedule = scheduler.schedule_with(Algorithm::Fcfs, 2).unwrap();
/// assert_eq!(schedule.names(), vec![vec!["J1"], vec!["J2"]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    jobs: Vec<Arc<JobDescriptor>>,
}

impl Scheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a job and returns the shared handle every run will reference.
    pub fn add_job(&mut self, job: JobDescriptor) -> Arc<JobDescriptor> {
        let job = Arc::new(job);
        self.jobs.push(Arc::clone(&job));
        tracing::debug!(job_id = %job.id(), name = job.name(), "Job added");
        job
    }

    /// Adds several jobs in order.
    pub fn extend<I: IntoIterator<Item = JobDescriptor>>(&mut self, jobs: I) {
        for job in jobs {
            self.add_job(job);
        }
    }

    /// Submitted jobs in submission order.
    pub fn jobs(&self) -> &[Arc<JobDescriptor>] {
        &self.jobs
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Runs `algorithm` over `units` processing units.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidConfiguration`](crate::error::ScheduleError::InvalidConfiguration)
    /// if `units` is zero or a job is malformed. Nothing is dispatched then.
    pub fn schedule_with(&self, algorithm: Algorithm, units: usize) -> Result<Schedule> {
        tracing::info!(
            algorithm = %algorithm,
            units,
            jobs = self.jobs.len(),
            "Scheduling run started"
        );
        let schedule = DispatchLoop::new(algorithm.rule(), units).run(&self.jobs)?;
        tracing::info!(
            algorithm = %algorithm,
            accepted = schedule.job_count(),
            rejected = schedule.rejected().count(),
            makespan = schedule.makespan(),
            "Scheduling run finished"
        );
        Ok(schedule)
    }

    /// Runs a configured request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Result<Schedule> {
        let units = validate_units(request.units)?;
        self.schedule_with(request.algorithm, units)
    }

    /// Runs `algorithm` given by name (`"fcfs"`, `"SJF"`, ...).
    pub fn schedule_named(&self, algorithm: &str, units: usize) -> Result<Schedule> {
        self.schedule_with(algorithm.parse()?, units)
    }
}
