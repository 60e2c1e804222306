//! Batch job scheduling simulator.
//!
//! Simulates how a fixed pool of processing units consumes a batch of jobs
//! under four classic disciplines: first-come-first-served (FCFS),
//! shortest-job-first (SJF), fixed-priority scheduling (FPS) and
//! earliest-deadline-first (EDF). Units are simulated; nothing runs in
//! parallel and jobs are never preempted.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `JobDescriptor`, `JobId`, `IdAllocator`,
//!   `User`, `Schedule`, `Dispatch`, `WorkloadGenerator`
//! - **`dispatching`**: Ordering policies (`rules`), the `CapacityTracker`
//!   and the shared `DispatchLoop`
//! - **`scheduler`**: The `Scheduler` façade, `ScheduleRequest` and KPIs
//! - **`validation`**: Run checks (unit count, durations, duplicate IDs)
//! - **`error`**: `ScheduleError`
//!
//! # Example
//!
//! ```
//! use u_jobsim::dispatching::Algorithm;
//! use u_jobsim::models::{IdAllocator, User};
//! use u_jobsim::scheduler::Scheduler;
//!
//! let ids = IdAllocator::new();
//! let mut scheduler = Scheduler::new();
//! scheduler.add_job(ids.job("J1", 10).with_deadline(10).with_user(User::Root));
//! scheduler.add_job(ids.job("J2", 20).with_deadline(40).with_user(User::Admin));
//! scheduler.add_job(ids.job("J3", 15).with_priority(2).with_deadline(40).with_user(User::Root));
//! scheduler.add_job(ids.job("J4", 30).with_priority(1).with_deadline(40));
//! scheduler.add_job(ids.job("J5", 10).with_priority(2).with_deadline(30));
//!
//! let fcfs = scheduler.schedule_with(Algorithm::Fcfs, 2).unwrap();
//! assert_eq!(fcfs.names(), vec![vec!["J1", "J3", "J5"], vec!["J2", "J4"]]);
//!
//! let edf = scheduler.schedule_with(Algorithm::Edf, 2).unwrap();
//! assert_eq!(edf.names(), vec![vec!["J1", "J2"], vec!["J5", "J4"]]);
//! ```

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
