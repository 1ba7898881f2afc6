use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RcspError, Result};

/// Search direction of a label.
///
/// Forward labels accumulate resource consumption from the source,
/// backward labels consume a remaining budget towards the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}

/// Algorithm switches shared by every label of a search run.
///
/// Labels only hold a reference to one `Params`, so it has to outlive all
/// pools of the run and must not change while they exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Number of resource dimensions of every label.
    pub resource_count: usize,
    /// Index of the monotone resource used for pool ordering.
    #[serde(default)]
    pub critical_res: usize,
    /// Enforce elementary paths through the unreachable set.
    #[serde(default)]
    pub elementary: bool,
    /// Forbid immediate u -> v -> u cycles.
    #[serde(default)]
    pub two_cycle_elimination: bool,
}

impl Params {
    pub fn new(resource_count: usize) -> Self {
        Self {
            resource_count,
            critical_res: 0,
            elementary: false,
            two_cycle_elimination: false,
        }
    }

    pub fn elementary(mut self, elementary: bool) -> Self {
        self.elementary = elementary;
        self
    }

    pub fn two_cycle_elimination(mut self, enabled: bool) -> Self {
        self.two_cycle_elimination = enabled;
        self
    }

    pub fn critical_res(mut self, index: usize) -> Self {
        self.critical_res = index;
        self
    }

    /// Checks the settings are consistent with each other.
    pub fn validate(&self) -> Result<()> {
        if self.resource_count == 0 {
            return Err(RcspError::InvalidParams("at least one resource is required"));
        }
        if self.critical_res >= self.resource_count {
            return Err(RcspError::InvalidParams("critical resource index out of range"));
        }
        Ok(())
    }
}
