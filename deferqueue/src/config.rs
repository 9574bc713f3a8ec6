//! Drain configuration.
//!
//! The two behavioral axes of the queue are explicit configuration rather
//! than implicit variants: how the sync unit removes its next callback, and
//! whether the drain collects outcome records at all.

use serde::{Deserialize, Serialize};

/// How the sync unit removes its next callback during a drain.
///
/// Applies to the sync list only; the async unit has no ordering guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalPolicy {
    /// Most recently appended callback runs first (default).
    #[default]
    Lifo,
    /// First appended callback runs first.
    Fifo,
}

impl std::fmt::Display for RemovalPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lifo => write!(f, "lifo"),
            Self::Fifo => write!(f, "fifo"),
        }
    }
}

/// Configuration for a [`DeferQueue`](crate::queue::DeferQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferConfig {
    /// Removal policy for the sync unit.
    pub removal_policy: RemovalPolicy,
    /// Whether the drain collects and returns per-callback outcomes.
    ///
    /// When disabled, callbacks still run and failures are still logged,
    /// but the drain returns an empty outcome sequence.
    pub report_outcomes: bool,
}

impl Default for DeferConfig {
    fn default() -> Self {
        Self {
            removal_policy: RemovalPolicy::default(),
            report_outcomes: true,
        }
    }
}

impl DeferConfig {
    /// Creates a config with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the removal policy.
    #[must_use]
    pub const fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    /// Enables or disables outcome reporting.
    #[must_use]
    pub const fn with_outcome_reporting(mut self, enabled: bool) -> Self {
        self.report_outcomes = enabled;
        self
    }
}
