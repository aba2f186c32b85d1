//! Simulation driver.
//!
//! [`run`] is the engine's single operational surface: it validates the
//! caller-owned batch, hands a private [`Driver`] to the selected
//! discipline, and packages the completed records into a
//! [`ScheduleResult`]. The driver is the sole owner of the simulated clock
//! and the process pool for the duration of one run; nothing is retained
//! between runs.

use crate::models::{CompletedProcess, Discipline, Process, ScheduleResult, Slice};
use crate::validation::{validate_batch, ValidationError};

use super::metrics::BatchMetrics;

/// Per-process run state, private to one simulation run.
///
/// The immutable descriptor fields are copied in; `remaining_time` is the
/// only field a discipline decrements (and only round-robin decrements it
/// in more than one step).
pub(crate) struct ProcState {
    pub id: String,
    pub arrival_time: i64,
    pub burst_time: i64,
    pub remaining_time: i64,
    pub priority: Option<i32>,
}

impl ProcState {
    /// Priority used for selection (`i32::MAX` = lowest when unset).
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(i32::MAX)
    }
}

/// Owns the simulated clock and the process pool for one run.
pub(crate) struct Driver {
    pub clock: i64,
    pub pool: Vec<ProcState>,
    pub completed: Vec<CompletedProcess>,
    pub timeline: Vec<Slice>,
}

impl Driver {
    pub fn new(processes: &[Process]) -> Self {
        let pool = processes
            .iter()
            .map(|p| ProcState {
                id: p.id.clone(),
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                remaining_time: p.burst_time,
                priority: p.priority,
            })
            .collect();

        Self {
            clock: 0,
            pool,
            completed: Vec::with_capacity(processes.len()),
            timeline: Vec::new(),
        }
    }

    /// Grants `slice` units of CPU to `idx`: advances the clock, records the
    /// slice, and finalizes the timing record when the last unit of service
    /// is delivered.
    pub fn dispatch(&mut self, idx: usize, slice: i64) {
        let start = self.clock;
        self.clock += slice;

        let proc = &mut self.pool[idx];
        proc.remaining_time -= slice;
        self.timeline.push(Slice {
            process_id: proc.id.clone(),
            start,
            end: self.clock,
        });

        if proc.remaining_time == 0 {
            let turnaround_time = self.clock - proc.arrival_time;
            self.completed.push(CompletedProcess {
                id: proc.id.clone(),
                arrival_time: proc.arrival_time,
                burst_time: proc.burst_time,
                priority: proc.priority,
                completion_time: self.clock,
                turnaround_time,
                waiting_time: turnaround_time - proc.burst_time,
            });
        }
    }

    pub fn all_completed(&self) -> bool {
        self.completed.len() == self.pool.len()
    }

    pub fn into_result(self) -> ScheduleResult {
        let metrics = BatchMetrics::calculate(&self.completed);
        ScheduleResult {
            completed: self.completed,
            timeline: self.timeline,
            metrics,
        }
    }
}

/// Simulates `processes` under `discipline` and returns the per-process
/// timing records (in completion order), the dispatch timeline, and batch
/// averages.
///
/// Validation happens before any simulation state is built: on error the
/// batch is untouched and no partial result exists.
///
/// # Example
///
/// ```
/// use cpu_sched::{run, Discipline, Process};
///
/// let batch = vec![
///     Process::new("P0", 0, 5),
///     Process::new("P1", 1, 3),
///     Process::new("P2", 2, 8),
/// ];
/// let result = run(&batch, Discipline::Sjf).unwrap();
/// assert_eq!(result.completion_order(), ["P0", "P1", "P2"]);
/// ```
pub fn run(
    processes: &[Process],
    discipline: Discipline,
) -> Result<ScheduleResult, Vec<ValidationError>> {
    validate_batch(processes, &discipline)?;

    let mut driver = Driver::new(processes);
    match discipline {
        Discipline::Fcfs => driver.run_fcfs(),
        Discipline::Sjf => driver.run_sjf(),
        Discipline::Priority => driver.run_priority(),
        Discipline::RoundRobin { quantum } => driver.run_round_robin(quantum),
    }

    Ok(driver.into_result())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use rand::prelude::*;

    fn fixture_batch() -> Vec<Process> {
        vec![
            Process::new("P0", 0, 5).with_priority(3),
            Process::new("P1", 1, 3).with_priority(1),
            Process::new("P2", 2, 8).with_priority(4),
            Process::new("P3", 3, 6).with_priority(2),
            Process::new("P4", 4, 2).with_priority(5),
        ]
    }

    fn all_disciplines() -> Vec<Discipline> {
        vec![
            Discipline::Fcfs,
            Discipline::Sjf,
            Discipline::Priority,
            Discipline::RoundRobin { quantum: 2 },
        ]
    }

    fn random_batch(seed: u64, n: usize) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(0..40),
                    rng.random_range(1..12),
                )
                .with_priority(rng.random_range(0..6))
            })
            .collect()
    }

    #[test]
    fn test_rejects_invalid_quantum_without_result() {
        let batch = fixture_batch();
        let original = batch.clone();

        let errors = run(&batch, Discipline::RoundRobin { quantum: 0 }).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidQuantum));
        // Fail-fast: the caller's batch is exactly as supplied.
        assert_eq!(batch, original);
    }

    #[test]
    fn test_rejects_empty_batch() {
        let errors = run(&[], Discipline::Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyBatch));
    }

    #[test]
    fn test_single_process_any_discipline() {
        let batch = vec![Process::new("only", 5, 3).with_priority(1)];
        for discipline in all_disciplines() {
            let result = run(&batch, discipline).unwrap();
            let rec = result.record("only").unwrap();
            assert_eq!(rec.waiting_time, 0, "{}", discipline.name());
            assert_eq!(rec.turnaround_time, rec.burst_time);
            assert_eq!(rec.completion_time, 8);
        }
    }

    #[test]
    fn test_determinism() {
        let batch = fixture_batch();
        for discipline in all_disciplines() {
            let first = run(&batch, discipline).unwrap();
            let second = run(&batch, discipline).unwrap();
            assert_eq!(first, second, "{}", discipline.name());
        }
    }

    #[test]
    fn test_invariants_on_random_batches() {
        for seed in 0..25 {
            let batch = random_batch(seed, 8);
            let total_burst: i64 = batch.iter().map(|p| p.burst_time).sum();

            for discipline in all_disciplines() {
                let result = run(&batch, discipline).unwrap();
                assert_eq!(result.completed.len(), batch.len());

                for rec in &result.completed {
                    assert_eq!(rec.turnaround_time, rec.completion_time - rec.arrival_time);
                    assert_eq!(rec.waiting_time, rec.turnaround_time - rec.burst_time);
                    assert!(rec.waiting_time >= 0, "{}: {rec:?}", discipline.name());
                    assert!(rec.completion_time >= rec.arrival_time + rec.burst_time);
                }

                // Conservation: dispatched slices account for every unit of
                // requested service, no more, no less.
                let total_sliced: i64 = result.timeline.iter().map(Slice::length).sum();
                assert_eq!(total_sliced, total_burst, "{}", discipline.name());
            }
        }
    }

    #[test]
    fn test_timeline_slices_never_overlap() {
        // Slices never overlap and never run backwards.
        for discipline in all_disciplines() {
            let result = run(&fixture_batch(), discipline).unwrap();
            for pair in result.timeline.windows(2) {
                assert!(pair[0].end <= pair[1].start, "{}", discipline.name());
            }
        }
    }
}
