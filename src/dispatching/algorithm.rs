//! The closed set of scheduling algorithms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rules::{Edf, Fcfs, Fps, Sjf};
use super::DispatchingRule;
use crate::error::ScheduleError;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Scheduling algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(alias = "fcfs")]
    Fcfs,
    /// Shortest Job First.
    #[serde(alias = "sjf")]
    Sjf,
    /// Fixed-Priority Scheduling.
    #[serde(alias = "fps")]
    Fps,
    /// Earliest Deadline First.
    #[serde(alias = "edf")]
    Edf,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Fps,
        Algorithm::Edf,
    ];

    /// The ordering policy implementing this algorithm.
    pub fn rule(self) -> &'static dyn DispatchingRule {
        match self {
            Algorithm::Fcfs => &Fcfs,
            Algorithm::Sjf => &Sjf,
            Algorithm::Fps => &Fps,
            Algorithm::Edf => &Edf,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.rule().name()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::UnknownAlgorithm,
                    format!("Unknown scheduling algorithm '{s}'"),
                )
                .into()
            })
    }
}
