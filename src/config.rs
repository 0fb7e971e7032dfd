//! # Global race configuration.
//!
//! Provides [`RaceConfig`], the centralized settings for a race run.
//!
//! All formatting decisions live in [`FormatOptions`](crate::FormatOptions)
//! and are passed explicitly wherever they are needed; nothing here is
//! process-wide mutable state.
//!
//! ## Sentinel values
//! - `seed = None` → every worker draws from OS entropy (non-deterministic)
//! - `seed = Some(s)` → worker `i` uses `s + i`, making runs reproducible

/// Configuration for the race coordinator.
///
/// Defines:
/// - **Parallelism**: how many workers race each other
/// - **Observability**: checkpoint cadence and event bus capacity
/// - **Determinism**: optional base seed for worker keyboards
///
/// ## Field semantics
/// - `worker_count`: number of concurrent workers (must be > 0, validated at run)
/// - `checkpoint_interval`: key presses between `Checkpoint` events (min 1; clamped)
/// - `bus_capacity`: event bus ring buffer size (min 1; clamped by Bus)
/// - `seed`: base seed; worker `i` gets `seed.wrapping_add(i)`
#[derive(Clone, Debug)]
pub struct RaceConfig {
    /// Number of workers racing for the same target.
    ///
    /// Each worker gets a distinct id in `[1, worker_count]`. Validated
    /// by the coordinator; zero is rejected with `ConfigError`.
    pub worker_count: u32,

    /// How many key presses a worker makes between `Checkpoint` events.
    ///
    /// Checkpoints are emitted regardless of match/mismatch outcome and
    /// double as the worker's cooperative yield point. Minimum 1.
    pub checkpoint_interval: u64,

    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Slow subscribers that lag behind more than `bus_capacity` messages
    /// will skip older items. Minimum value is 1 (enforced by Bus).
    pub bus_capacity: usize,

    /// Optional base seed for deterministic worker keyboards.
    ///
    /// - `None` → keyboards are seeded from OS entropy
    /// - `Some(s)` → worker `i` is seeded with `s.wrapping_add(i)`
    pub seed: Option<u64>,
}

impl RaceConfig {
    /// Returns the checkpoint interval clamped to a minimum of 1.
    ///
    /// A zero interval would make the modulo check in the worker loop panic.
    #[inline]
    pub fn checkpoint_interval_clamped(&self) -> u64 {
        self.checkpoint_interval.max(1)
    }

    /// Returns the seed for a specific worker, if a base seed is set.
    #[inline]
    pub fn worker_seed(&self, worker_id: u32) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(u64::from(worker_id)))
    }
}

impl Default for RaceConfig {
    /// Default configuration:
    ///
    /// - `worker_count = 4`
    /// - `checkpoint_interval = 100_000` key presses
    /// - `bus_capacity = 1024`
    /// - `seed = None` (OS entropy)
    fn default() -> Self {
        Self {
            worker_count: 4,
            checkpoint_interval: 100_000,
            bus_capacity: 1024,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoint_interval_is_clamped() {
        let cfg = RaceConfig {
            checkpoint_interval: 0,
            ..RaceConfig::default()
        };
        assert_eq!(cfg.checkpoint_interval_clamped(), 1);
    }

    #[test]
    fn worker_seeds_are_distinct_per_worker() {
        let cfg = RaceConfig {
            seed: Some(42),
            ..RaceConfig::default()
        };
        assert_eq!(cfg.worker_seed(1), Some(43));
        assert_eq!(cfg.worker_seed(2), Some(44));
    }

    #[test]
    fn no_base_seed_means_no_worker_seed() {
        let cfg = RaceConfig::default();
        assert_eq!(cfg.worker_seed(1), None);
    }
}
