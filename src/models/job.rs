//! Job descriptor model.
//!
//! A job is one unit of work submitted to the simulator. Once handed to the
//! [`Scheduler`](crate::scheduler::Scheduler) it is shared behind an `Arc`
//! and never mutated again.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Unique job identifier, allocated by an [`IdAllocator`](super::IdAllocator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl JobId {
    /// Wraps a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Privilege level of the submitting user.
///
/// Ordered by [`User::rank`]: `Root < Admin < User`, where a lower rank takes
/// precedence under fixed-priority scheduling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum User {
    Root,
    Admin,
    #[default]
    User,
}

impl User {
    /// All privilege levels, highest precedence first.
    pub const ALL: [User; 3] = [User::Root, User::Admin, User::User];

    /// Ordinal rank. Lower = higher precedence.
    pub const fn rank(self) -> u8 {
        match self {
            User::Root => 1,
            User::Admin => 2,
            User::User => 3,
        }
    }

    /// Upper-case label (`ROOT`, `ADMIN`, `USER`).
    pub const fn as_str(self) -> &'static str {
        match self {
            User::Root => "ROOT",
            User::Admin => "ADMIN",
            User::User => "USER",
        }
    }
}

impl Ord for User {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for User {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for User {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        User::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::UnknownUser,
                    format!("Unknown user level '{s}'"),
                )
                .into()
            })
    }
}

/// A job to be scheduled.
///
/// # Time Representation
/// `duration` and `deadline` are in abstract simulated time units relative
/// to the start of a scheduling run (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptor {
    id: JobId,
    name: String,
    duration: i64,
    priority: i32,
    deadline: i64,
    user: User,
}

impl JobDescriptor {
    /// Creates a job with priority 0, deadline `i64::MAX` and [`User::User`].
    pub fn new(id: JobId, name: impl Into<String>, duration: i64) -> Self {
        Self {
            id,
            name: name.into(),
            duration,
            priority: 0,
            deadline: i64::MAX,
            user: User::User,
        }
    }

    /// Sets the priority (lower = more important).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the deadline (latest local finish time accepted by EDF).
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the submitting user's privilege level.
    pub fn with_user(mut self, user: User) -> Self {
        self.user = user;
        self
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn deadline(&self) -> i64 {
        self.deadline
    }

    pub fn user(&self) -> User {
        self.user
    }
}

impl fmt::Display for JobDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
