//! Scheduler façade and KPI evaluation.
//!
//! # Façade
//!
//! `Scheduler` stores submitted jobs and runs any of the four policies over
//! a chosen number of processing units. `ScheduleRequest` describes a run
//! as configuration.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, acceptance rate, utilization, flow and
//! waiting times of a finished run.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

mod facade;
mod kpi;

pub use facade::{ScheduleRequest, Scheduler};
pub use kpi::ScheduleKpi;
