//! # Write-once win signal shared by all workers.
//!
//! [`WinSignal`] records which worker won the race. It is the only mutable
//! state shared between workers, and it is never exposed as raw memory:
//! the claim is a single atomic compare-and-set, so even if several
//! workers reach the winning condition at overlapping times, exactly one
//! claim succeeds and every later check observes that winner.
//!
//! Worker ids are 1-based; `0` is the internal "no winner yet" sentinel.

use std::sync::atomic::{AtomicU32, Ordering};

/// Shared, write-once record of the winning worker.
///
/// ### Contract
/// - [`try_claim`](Self::try_claim) is linearizable: among concurrent
///   claims exactly one returns `true`, and the stored id never changes
///   afterwards.
/// - [`winner`](Self::winner) is a non-blocking read; after a successful
///   claim, every subsequent read observes that worker's id.
#[derive(Debug, Default)]
pub struct WinSignal {
    winner: AtomicU32,
}

impl WinSignal {
    /// Creates a signal with no winner recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to record `worker_id` as the winner.
    ///
    /// Returns `true` iff no winner was previously recorded. The
    /// read-then-write is one compare-and-set, never a separate
    /// check-then-set.
    ///
    /// `worker_id` must be non-zero (ids are 1-based).
    pub fn try_claim(&self, worker_id: u32) -> bool {
        debug_assert!(worker_id != 0, "worker ids are 1-based");
        self.winner
            .compare_exchange(0, worker_id, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Returns the winning worker id, if any.
    pub fn winner(&self) -> Option<u32> {
        match self.winner.load(Ordering::Acquire) {
            0 => None,
            id => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn starts_without_a_winner() {
        assert_eq!(WinSignal::new().winner(), None);
    }

    #[test]
    fn first_claim_wins_and_sticks() {
        let signal = WinSignal::new();
        assert!(signal.try_claim(3));
        assert!(!signal.try_claim(5));
        assert_eq!(signal.winner(), Some(3));
    }

    #[test]
    fn reclaim_by_the_same_worker_also_fails() {
        let signal = WinSignal::new();
        assert!(signal.try_claim(1));
        assert!(!signal.try_claim(1));
    }

    #[test]
    fn exactly_one_concurrent_claim_succeeds() {
        // Stress the CAS from real OS threads; repeated to shake out
        // interleavings.
        for _ in 0..50 {
            let signal = Arc::new(WinSignal::new());
            let handles: Vec<_> = (1..=8u32)
                .map(|id| {
                    let signal = Arc::clone(&signal);
                    std::thread::spawn(move || signal.try_claim(id))
                })
                .collect();

            let wins: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(wins.iter().filter(|&&w| w).count(), 1);

            let winner = signal.winner().expect("someone won");
            assert!((1..=8).contains(&winner));
        }
    }
}
