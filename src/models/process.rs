//! Process (input descriptor) model.
//!
//! A process is the unit of scheduling: it arrives at a fixed instant,
//! requires a fixed amount of service, and optionally carries a priority.
//!
//! # Time Representation
//! All times are unitless integers on a shared simulated timeline starting
//! at t=0. The consumer defines the unit (ticks, milliseconds, ...).

use serde::{Deserialize, Serialize};

/// A process submitted for scheduling.
///
/// Descriptors are immutable inputs: the engine never mutates them, and all
/// run state (remaining service, completion) lives inside the driver for the
/// duration of a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Stable identity (a name, or the input index rendered by the caller).
    /// Never reassigned; input position breaks scheduling ties.
    pub id: String,
    /// Instant the process becomes eligible to run. Must be >= 0.
    pub arrival_time: i64,
    /// Total service time required. Must be > 0.
    pub burst_time: i64,
    /// Scheduling priority; **lower value = higher priority**.
    /// `None` = lowest priority. Only consulted by [`Discipline::Priority`].
    ///
    /// [`Discipline::Priority`]: super::Discipline::Priority
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a new process descriptor.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority (lower value = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority used for selection: the explicit value, or `i32::MAX`
    /// (lowest) when unset.
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, Some(2));
        assert_eq!(p.effective_priority(), 2);
    }

    #[test]
    fn test_default_priority_is_lowest() {
        let p = Process::new("P1", 0, 1);
        assert_eq!(p.priority, None);
        assert_eq!(p.effective_priority(), i32::MAX);
    }
}
