//! Simulation quality metrics (KPIs).
//!
//! Computes standard indicators from a completed [`Schedule`]. All jobs are
//! released at t=0, so flow time equals completion time.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest end time of any dispatch |
//! | Acceptance Rate | Accepted / dispatched |
//! | Utilization | Busy time / makespan, per unit |
//! | Avg Flow Time | Mean end time of accepted jobs |
//! | Avg Waiting Time | Mean start time of accepted jobs |
//! | Late Count | Accepted jobs ending after their deadline |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::Serialize;

use crate::models::Schedule;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleKpi {
    /// Latest end time across all dispatches.
    pub makespan: i64,
    /// Jobs in the reported schedule.
    pub accepted: usize,
    /// Jobs dropped by an admission check.
    pub rejected: usize,
    /// `accepted / (accepted + rejected)`; 1.0 for an empty run.
    pub acceptance_rate: f64,
    /// Busy time per unit, rejected jobs included.
    pub busy_by_unit: Vec<i64>,
    /// Utilization per unit (0.0..1.0).
    pub utilization_by_unit: Vec<f64>,
    /// Mean utilization across units.
    pub avg_utilization: f64,
    /// Mean completion time of accepted jobs.
    pub avg_flow_time: f64,
    /// Mean start time of accepted jobs.
    pub avg_waiting_time: f64,
    /// Accepted jobs whose global end time exceeds their deadline.
    pub late: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let makespan = schedule.makespan();

        let mut accepted = 0usize;
        let mut late = 0usize;
        let mut total_flow = 0.0f64;
        let mut total_wait = 0.0f64;
        for d in schedule.timeline().iter().filter(|d| d.is_accepted()) {
            accepted += 1;
            total_flow += d.end as f64;
            total_wait += d.start as f64;
            if d.end > d.job.deadline() {
                late += 1;
            }
        }
        let rejected = schedule.timeline().len() - accepted;

        let busy_by_unit: Vec<i64> = (0..schedule.unit_count())
            .map(|u| schedule.busy_time(u))
            .collect();
        let utilization_by_unit: Vec<f64> = busy_by_unit
            .iter()
            .map(|&busy| {
                if makespan <= 0 {
                    0.0
                } else {
                    busy as f64 / makespan as f64
                }
            })
            .collect();
        let avg_utilization = if utilization_by_unit.is_empty() {
            0.0
        } else {
            utilization_by_unit.iter().sum::<f64>() / utilization_by_unit.len() as f64
        };

        let dispatched = accepted + rejected;
        let acceptance_rate = if dispatched == 0 {
            1.0
        } else {
            accepted as f64 / dispatched as f64
        };

        let (avg_flow_time, avg_waiting_time) = if accepted == 0 {
            (0.0, 0.0)
        } else {
            (
                total_flow / accepted as f64,
                total_wait / accepted as f64,
            )
        };

        Self {
            makespan,
            accepted,
            rejected,
            acceptance_rate,
            busy_by_unit,
            utilization_by_unit,
            avg_utilization,
            avg_flow_time,
            avg_waiting_time,
            late,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_acceptance: f64, min_utilization: f64) -> bool {
        self.acceptance_rate >= min_acceptance && self.avg_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::Algorithm;
    use crate::models::{IdAllocator, User};
    use crate::scheduler::Scheduler;

    fn sample_scheduler() -> Scheduler {
        let ids = IdAllocator::new();
        let mut s = Scheduler::new();
        s.add_job(ids.job("J1", 10).with_priority(0).with_deadline(10).with_user(User::Root));
        s.add_job(ids.job("J2", 20).with_priority(0).with_deadline(40).with_user(User::Admin));
        s.add_job(ids.job("J3", 15).with_priority(2).with_deadline(40).with_user(User::Root));
        s.add_job(ids.job("J4", 30).with_priority(1).with_deadline(40).with_user(User::User));
        s.add_job(ids.job("J5", 10).with_priority(2).with_deadline(30).with_user(User::User));
        s
    }

    #[test]
    fn test_fcfs_kpi() {
        let schedule = sample_scheduler().schedule_with(Algorithm::Fcfs, 2).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);

        // unit0: J1 0-10, J3 10-25, J5 25-35; unit1: J2 0-20, J4 20-50
        assert_eq!(kpi.makespan, 50);
        assert_eq!(kpi.accepted, 5);
        assert_eq!(kpi.rejected, 0);
        assert!((kpi.acceptance_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.busy_by_unit, vec![35, 50]);
        assert!((kpi.utilization_by_unit[0] - 0.7).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.85).abs() < 1e-10);
        // ends: 10 + 20 + 25 + 50 + 35 = 140
        assert!((kpi.avg_flow_time - 28.0).abs() < 1e-10);
        // starts: 0 + 0 + 10 + 20 + 25 = 55
        assert!((kpi.avg_waiting_time - 11.0).abs() < 1e-10);
        // J4 ends at 50 > 40, J5 ends at 35 > 30
        assert_eq!(kpi.late, 2);
    }

    #[test]
    fn test_edf_kpi_counts_rejections() {
        let schedule = sample_scheduler().schedule_with(Algorithm::Edf, 2).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);

        assert_eq!(kpi.accepted, 4);
        assert_eq!(kpi.rejected, 1);
        assert!((kpi.acceptance_rate - 0.8).abs() < 1e-10);
        // Rejected J3 still kept unit 0 busy until 45.
        assert_eq!(kpi.busy_by_unit, vec![45, 40]);
        assert_eq!(kpi.makespan, 45);
        assert_eq!(kpi.late, 0);
    }

    #[test]
    fn test_empty_run() {
        let schedule = Scheduler::new().schedule_with(Algorithm::Sjf, 2).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.utilization_by_unit, vec![0.0, 0.0]);
        assert!((kpi.acceptance_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.avg_flow_time, 0.0);
    }

    #[test]
    fn test_large_times_do_not_overflow_sums() {
        let ids = IdAllocator::new();
        let mut s = Scheduler::new();
        s.add_job(ids.job("a", i64::MAX / 2));
        s.add_job(ids.job("b", i64::MAX / 2));
        let schedule = s.schedule_with(Algorithm::Fcfs, 1).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);
        assert_eq!(kpi.makespan, i64::MAX - 1);
        assert!(kpi.avg_flow_time > 0.0);
    }

    #[test]
    fn test_meets_thresholds() {
        let schedule = sample_scheduler().schedule_with(Algorithm::Edf, 2).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);
        assert!(kpi.meets_thresholds(0.75, 0.5));
        assert!(!kpi.meets_thresholds(0.9, 0.5));
    }
}
