//! Schedule (result) model.
//!
//! The outcome of one simulation run: per-process timing records in
//! completion order, the dispatch timeline, and batch aggregates.

use serde::{Deserialize, Serialize};

use crate::sim::BatchMetrics;

/// Timing record of a completed process.
///
/// Records are finalized exactly once, at the instant the process's
/// remaining service reaches zero, and are immutable afterwards. For every
/// record, `turnaround_time == completion_time - arrival_time` and
/// `waiting_time == turnaround_time - burst_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Identity carried over from the input descriptor.
    pub id: String,
    /// Input arrival time.
    pub arrival_time: i64,
    /// Input burst time.
    pub burst_time: i64,
    /// Input priority (`None` = lowest).
    pub priority: Option<i32>,
    /// Instant the last unit of service was delivered.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`; time spent ready but not running.
    pub waiting_time: i64,
}

/// One contiguous interval of CPU time granted to a process.
///
/// Non-preemptive disciplines produce exactly one slice per process;
/// round-robin produces one per dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    /// Process receiving the CPU.
    pub process_id: String,
    /// Slice start instant.
    pub start: i64,
    /// Slice end instant (exclusive).
    pub end: i64,
}

impl Slice {
    /// Service delivered in this slice.
    #[inline]
    pub fn length(&self) -> i64 {
        self.end - self.start
    }
}

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Completed records, in completion order.
    pub completed: Vec<CompletedProcess>,
    /// Every dispatch the driver performed, in clock order.
    pub timeline: Vec<Slice>,
    /// Batch aggregates over `completed`.
    pub metrics: BatchMetrics,
}

impl ScheduleResult {
    /// Process IDs in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.completed.iter().map(|p| p.id.as_str()).collect()
    }

    /// Looks up the record for a process by ID.
    pub fn record(&self, id: &str) -> Option<&CompletedProcess> {
        self.completed.iter().find(|p| p.id == id)
    }
}
