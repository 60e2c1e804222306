//! Per-unit remaining busy time.

use crate::error::ScheduleError;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Remaining busy time of each processing unit.
///
/// Entry `i` is the simulated time left until unit `i` is idle again. Always
/// holds at least one entry, and all entries stay non-negative as long as
/// only non-negative durations are passed to [`occupy`](Self::occupy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityTracker {
    remaining: Vec<i64>,
}

impl CapacityTracker {
    /// Creates a tracker with `units` idle units.
    pub fn new(units: usize) -> Result<Self, ScheduleError> {
        Self::from_remaining(vec![0; units])
    }

    /// Creates a tracker from explicit remaining times.
    pub fn from_remaining(remaining: Vec<i64>) -> Result<Self, ScheduleError> {
        if remaining.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidUnitCount,
                "Capacity tracker needs at least one unit",
            )
            .into());
        }
        if let Some(&bad) = remaining.iter().find(|&&r| r < 0) {
            return Err(ValidationError::new(
                ValidationErrorKind::NegativeCapacity,
                format!("Remaining capacity cannot be negative, got {bad}"),
            )
            .into());
        }
        Ok(Self { remaining })
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Never true for a constructed tracker.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Whether unit `unit` can take a job now.
    #[inline]
    pub fn is_idle(&self, unit: usize) -> bool {
        self.remaining[unit] == 0
    }

    /// Time left until `unit` is idle.
    #[inline]
    pub fn remaining(&self, unit: usize) -> i64 {
        self.remaining[unit]
    }

    /// Marks `unit` busy for `duration` more time units.
    #[inline]
    pub fn occupy(&mut self, unit: usize, duration: i64) {
        self.remaining[unit] += duration;
    }

    /// Advances simulated time until the soonest-finishing unit is idle.
    ///
    /// Subtracts the minimum entry from every entry and returns it. After
    /// the call at least one entry is 0.
    pub fn advance(&mut self) -> i64 {
        let step = self.remaining.iter().copied().min().unwrap_or(0);
        for r in &mut self.remaining {
            *r -= step;
        }
        step
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.remaining
    }
}
