//! Synthetic workload generation.
//!
//! Produces random job batches for simulation runs and property checks.
//! Deadlines are drawn as `duration + slack` so that the deadline pressure
//! of a batch can be tuned independently of job lengths.

use std::ops::RangeInclusive;

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::{IdAllocator, JobDescriptor, User};

/// Random job batch generator.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_jobsim::models::{IdAllocator, WorkloadGenerator};
///
/// let ids = IdAllocator::new();
/// let mut rng = SmallRng::seed_from_u64(7);
/// let jobs = WorkloadGenerator::new(20).generate(&ids, &mut rng);
/// assert_eq!(jobs.len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    duration: RangeInclusive<i64>,
    priority: RangeInclusive<i32>,
    deadline_slack: RangeInclusive<i64>,
    users: Vec<User>,
}

impl WorkloadGenerator {
    /// Generator for `count` jobs with durations 1..=50, priorities 0..=5,
    /// deadline slack 0..=100 and all user levels.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            duration: 1..=50,
            priority: 0..=5,
            deadline_slack: 0..=100,
            users: User::ALL.to_vec(),
        }
    }

    pub fn with_duration(mut self, range: RangeInclusive<i64>) -> Self {
        self.duration = range;
        self
    }

    pub fn with_priority(mut self, range: RangeInclusive<i32>) -> Self {
        self.priority = range;
        self
    }

    /// Sets the range added to each job's duration to form its deadline.
    pub fn with_deadline_slack(mut self, range: RangeInclusive<i64>) -> Self {
        self.deadline_slack = range;
        self
    }

    /// Restricts the user levels drawn from. An empty list means `User::User`.
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// Generates the batch, allocating IDs from `ids`.
    pub fn generate<R: Rng>(&self, ids: &IdAllocator, rng: &mut R) -> Vec<JobDescriptor> {
        (0..self.count)
            .map(|i| {
                let duration = rng.random_range(self.duration.clone());
                let slack = rng.random_range(self.deadline_slack.clone());
                let user = self.users.choose(rng).copied().unwrap_or_default();
                ids.job(format!("W{}", i + 1), duration)
                    .with_priority(rng.random_range(self.priority.clone()))
                    .with_deadline(duration + slack)
                    .with_user(user)
            })
            .collect()
    }
}
