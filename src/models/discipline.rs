//! Scheduling discipline selector.

use serde::{Deserialize, Serialize};

/// The scheduling policy applied to a batch.
///
/// Round-robin carries its quantum inside the variant, so a preemptive run
/// can never be configured without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discipline {
    /// First-Come-First-Served: non-preemptive, fixed arrival order.
    Fcfs,
    /// Shortest-Job-Next: non-preemptive, shortest ready burst first.
    Sjf,
    /// Priority: non-preemptive, lowest ready priority value first.
    Priority,
    /// Round-Robin: preemptive, fixed time quantum per dispatch.
    RoundRobin {
        /// Maximum time slice granted per dispatch. Must be > 0.
        quantum: i64,
    },
}

impl Discipline {
    /// Short display name (e.g. "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::Priority => "PRIORITY",
            Discipline::RoundRobin { .. } => "RR",
        }
    }

    /// Whether the discipline may interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Discipline::RoundRobin { .. })
    }
}
