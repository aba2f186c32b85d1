//! The four scheduling disciplines.
//!
//! Every policy answers the same question (who runs next, and for how long)
//! against the driver-owned pool:
//!
//! | Discipline | Selection | Slice |
//! |------------|-----------|-------|
//! | FCFS | arrival order, fixed up front | full burst |
//! | SJF | shortest ready burst | full burst |
//! | Priority | lowest ready priority value | full burst |
//! | Round-Robin | FIFO admission queue | `min(remaining, quantum)` |
//!
//! SJF and Priority share one decision loop and differ only in the selection
//! key; a job that has not arrived yet is invisible to selection even if it
//! would win on the key. Ties are broken by earliest arrival, then input
//! position, everywhere.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", §5.3

use std::collections::VecDeque;

use super::driver::{Driver, ProcState};
use super::ready::select_ready;

impl Driver {
    /// First-Come-First-Served: the order is fixed before the clock starts,
    /// so no ready-queue is needed. One full-burst dispatch per process,
    /// idling forward when the next process has not arrived yet.
    pub(crate) fn run_fcfs(&mut self) {
        let mut order: Vec<usize> = (0..self.pool.len()).collect();
        // Stable sort: input position breaks arrival ties.
        order.sort_by_key(|&i| self.pool[i].arrival_time);

        for idx in order {
            self.clock = self.clock.max(self.pool[idx].arrival_time);
            self.dispatch(idx, self.pool[idx].burst_time);
        }
    }

    /// Shortest-Job-Next: re-selects the shortest ready burst at every
    /// decision point. Non-preemptive: a shorter job arriving mid-burst
    /// waits for the running one to finish.
    pub(crate) fn run_sjf(&mut self) {
        self.run_nonpreemptive(|p| p.burst_time);
    }

    /// Priority scheduling: same loop as SJF with the priority value as the
    /// key (lower = higher priority, unset = lowest). Non-preemptive.
    pub(crate) fn run_priority(&mut self) {
        self.run_nonpreemptive(|p| i64::from(p.effective_priority()));
    }

    /// Shared decision loop for the non-preemptive re-selecting disciplines:
    /// pick the minimum of `(key, arrival, input position)` among the ready
    /// set and run it to completion; jump the clock to the next arrival when
    /// nothing is ready.
    fn run_nonpreemptive(&mut self, key: impl Fn(&ProcState) -> i64) {
        // Every pass either completes a process or jumps to an arrival that
        // makes the ready set non-empty, so 2n passes always suffice.
        let mut fuel = 2 * self.pool.len();

        while !self.all_completed() {
            debug_assert!(fuel > 0, "decision loop exceeded its bound");
            fuel = fuel.saturating_sub(1);

            let snapshot = select_ready(&self.pool, self.clock);
            if snapshot.ready.is_empty() {
                let Some(next) = snapshot.next_arrival else { break };
                self.clock = next;
                continue;
            }

            let pick = snapshot
                .ready
                .iter()
                .copied()
                .min_by_key(|&i| (key(&self.pool[i]), self.pool[i].arrival_time, i));
            let Some(pick) = pick else { break };

            let burst = self.pool[pick].burst_time;
            self.dispatch(pick, burst);
        }
    }

    /// Round-Robin: FIFO admission queue, fixed quantum per dispatch.
    ///
    /// Arrivals are admitted to the tail in arrival order, and newly-arrived
    /// processes are admitted *before* a preempted process is re-queued:
    /// when both reach the queue at the same instant, the arrival goes
    /// first.
    pub(crate) fn run_round_robin(&mut self, quantum: i64) {
        let n = self.pool.len();
        let mut admitted = vec![false; n];
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);

        // At most one clock jump per process plus one pass per slice.
        let slices: i64 = self
            .pool
            .iter()
            .map(|p| (p.burst_time + quantum - 1) / quantum)
            .sum();
        let mut fuel = n as i64 + slices;

        while !self.all_completed() {
            debug_assert!(fuel > 0, "round-robin loop exceeded its bound");
            fuel -= 1;

            self.admit_arrivals(&mut admitted, &mut queue);

            let Some(idx) = queue.pop_front() else {
                let snapshot = select_ready(&self.pool, self.clock);
                let Some(next) = snapshot.next_arrival else { break };
                self.clock = next;
                continue;
            };

            let slice = quantum.min(self.pool[idx].remaining_time);
            self.dispatch(idx, slice);

            self.admit_arrivals(&mut admitted, &mut queue);
            if self.pool[idx].remaining_time > 0 {
                queue.push_back(idx);
            }
        }
    }

    /// Appends every arrived-but-not-yet-admitted process to the queue tail,
    /// in arrival order.
    fn admit_arrivals(&self, admitted: &mut [bool], queue: &mut VecDeque<usize>) {
        for idx in select_ready(&self.pool, self.clock).ready {
            if !admitted[idx] {
                admitted[idx] = true;
                queue.push_back(idx);
            }
        }
    }
}
