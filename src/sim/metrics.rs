//! Batch timing aggregates.
//!
//! Reduces the completed records of one run to the standard summary
//! measures:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | Makespan | latest completion time |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", §5.2

use serde::{Deserialize, Serialize};

use crate::models::CompletedProcess;

/// Batch-level timing aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMetrics {
    /// Arithmetic mean of per-process waiting times.
    pub avg_waiting_time: f64,
    /// Arithmetic mean of per-process turnaround times.
    pub avg_turnaround_time: f64,
    /// Latest completion time in the batch.
    pub makespan: i64,
}

impl BatchMetrics {
    /// Computes aggregates over completed records.
    ///
    /// An empty slice yields the zero sentinel for every field, never a
    /// division by zero.
    pub fn calculate(completed: &[CompletedProcess]) -> Self {
        if completed.is_empty() {
            return Self {
                avg_waiting_time: 0.0,
                avg_turnaround_time: 0.0,
                makespan: 0,
            };
        }

        let n = completed.len() as f64;
        let total_waiting: i64 = completed.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: i64 = completed.iter().map(|p| p.turnaround_time).sum();
        let makespan = completed
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0);

        Self {
            avg_waiting_time: total_waiting as f64 / n,
            avg_turnaround_time: total_turnaround as f64 / n,
            makespan,
        }
    }
}
