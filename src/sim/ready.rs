//! Ready-set selection.
//!
//! At each decision point the non-FCFS disciplines ask which processes have
//! arrived and still need service. When nothing is ready, the selector
//! reports the next arrival instant so the driver can jump the clock there
//! in one step: no process can become ready strictly between the current
//! clock and that arrival, so the jump produces results identical to
//! advancing one unit at a time.

use super::driver::ProcState;

/// Snapshot of the processes competing for the next dispatch decision.
pub(crate) struct ReadySet {
    /// Indices of arrived, incomplete processes, in arrival order
    /// (ties broken by input position). FIFO admission consumes this
    /// order directly.
    pub ready: Vec<usize>,
    /// Earliest arrival strictly after `now` among incomplete processes,
    /// or `None` when nothing further is pending.
    pub next_arrival: Option<i64>,
}

/// Selects the ready set at instant `now`. Pure: never mutates the pool.
pub(crate) fn select_ready(pool: &[ProcState], now: i64) -> ReadySet {
    let mut ready: Vec<usize> = pool
        .iter()
        .enumerate()
        .filter(|(_, p)| p.remaining_time > 0 && p.arrival_time <= now)
        .map(|(i, _)| i)
        .collect();
    // Stable sort: input position breaks arrival ties.
    ready.sort_by_key(|&i| pool[i].arrival_time);

    let next_arrival = pool
        .iter()
        .filter(|p| p.remaining_time > 0 && p.arrival_time > now)
        .map(|p| p.arrival_time)
        .min();

    ReadySet {
        ready,
        next_arrival,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pool(specs: &[(i64, i64)]) -> Vec<ProcState> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(arrival, remaining))| ProcState {
                id: format!("P{i}"),
                arrival_time: arrival,
                burst_time: remaining.max(1),
                remaining_time: remaining,
                priority: None,
            })
            .collect()
    }

    #[test]
    fn test_nothing_arrived() {
        let pool = make_pool(&[(5, 3), (9, 2)]);
        let set = select_ready(&pool, 0);
        assert!(set.ready.is_empty());
        assert_eq!(set.next_arrival, Some(5));
    }

    #[test]
    fn test_arrival_order_with_input_tie_break() {
        // P1 arrived first; P0 and P2 tie at t=5 and keep input order.
        let pool = make_pool(&[(5, 3), (0, 2), (5, 4)]);
        let set = select_ready(&pool, 5);
        assert_eq!(set.ready, [1, 0, 2]);
        assert_eq!(set.next_arrival, None);
    }

    #[test]
    fn test_completed_excluded() {
        let mut pool = make_pool(&[(0, 3), (0, 2)]);
        pool[0].remaining_time = 0;
        let set = select_ready(&pool, 4);
        assert_eq!(set.ready, [1]);
    }

    #[test]
    fn test_arrival_at_now_is_ready() {
        let pool = make_pool(&[(4, 1), (6, 1)]);
        let set = select_ready(&pool, 4);
        assert_eq!(set.ready, [0]);
        assert_eq!(set.next_arrival, Some(6));
    }

    #[test]
    fn test_next_arrival_ignores_completed() {
        let mut pool = make_pool(&[(0, 1), (7, 2), (9, 2)]);
        pool[1].remaining_time = 0;
        let set = select_ready(&pool, 3);
        assert!(set.ready.is_empty());
        assert_eq!(set.next_arrival, Some(9));
    }
}
