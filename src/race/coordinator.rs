//! # RaceCoordinator: validates inputs, launches workers, reports the winner.
//!
//! The [`RaceCoordinator`] owns the event bus, the subscriber list, and
//! the [`RaceConfig`]. It validates the target/alphabet pair eagerly,
//! spawns one worker task per configured id on a [`JoinSet`], and blocks
//! only on the join barrier.
//!
//! ## High-level flow
//! ```text
//! run(target, alphabet):
//!   ├─► validate: worker_count > 0, alphabet non-empty,
//!   │             every target char drawable        (ConfigError, eager)
//!   ├─► start fan-out: SubscriberSet::listen(bus, stop_token)
//!   ├─► WinSignal::new(), CancellationToken::new()
//!   ├─► for id in 1..=worker_count:
//!   │       Worker::new(id, target, alphabet, signal, bus, keyboard)
//!   │       set.spawn(worker.run(child_token))
//!   ├─► join all workers, collect WorkerReports
//!   ├─► stop fan-out: cancel listener, drain bus, SubscriberSet::shutdown
//!   └─► RaceReport { winner: signal.winner(), workers }
//! ```
//!
//! The fan-out is scoped to one `run` call: the listener and the
//! subscriber queues are torn down (fully drained) before `run` returns,
//! so repeated races on the same coordinator never stack listeners and
//! subscribers have seen every event by the time the report is out.
//!
//! Data flows one direction: configuration → alphabet → workers, racing
//! against the shared signal; the coordinator only collects terminations.

use std::sync::Arc;

use tokio::task::{JoinHandle, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::alphabet::Alphabet;
use crate::config::RaceConfig;
use crate::error::{ConfigError, RaceError};
use crate::events::Bus;
use crate::race::keys::RandomKeyboard;
use crate::race::signal::WinSignal;
use crate::race::worker::{Worker, WorkerReport};
use crate::subscribers::{Subscribe, SubscriberSet};

/// Outcome of a finished race.
#[derive(Clone, Debug)]
pub struct RaceReport {
    /// Id of the worker that claimed the win.
    pub winner: u32,
    /// Per-worker terminal reports, sorted by worker id.
    pub workers: Vec<WorkerReport>,
}

impl RaceReport {
    /// Report of the winning worker.
    pub fn winning_worker(&self) -> &WorkerReport {
        // The winner id always comes from the signal, which only ever
        // holds an id a spawned worker claimed.
        self.workers
            .iter()
            .find(|w| w.id == self.winner)
            .expect("winner id present in reports")
    }
}

/// Fan-out machinery for one race run.
struct Fanout {
    set: Arc<SubscriberSet>,
    stop: CancellationToken,
    listener: JoinHandle<()>,
}

/// Coordinates a pool of racing workers and the event fan-out.
pub struct RaceCoordinator {
    /// Race configuration.
    pub cfg: RaceConfig,
    /// Event bus shared with all workers.
    pub bus: Bus,
    /// Subscribers fanned out to for the duration of each run.
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl RaceCoordinator {
    /// Creates a coordinator with the given config and subscribers.
    pub fn new(cfg: RaceConfig, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        let bus = Bus::new(cfg.bus_capacity);
        Self {
            cfg,
            bus,
            subscribers,
        }
    }

    /// Runs one race to completion and returns the report.
    ///
    /// Fails eagerly with [`ConfigError`] before spawning anything when
    /// the worker count is zero, the alphabet is empty, or the target
    /// contains a character the alphabet cannot produce.
    ///
    /// By the time this returns, every subscriber has been handed every
    /// event the race published (modulo per-subscriber queue overflow).
    pub async fn run(&self, target: &str, alphabet: &Alphabet) -> Result<RaceReport, RaceError> {
        self.validate(target, alphabet)?;
        let fanout = self.start_fanout();

        let target: Arc<[char]> = target.chars().collect();
        let alphabet = Arc::new(alphabet.clone());
        let signal = Arc::new(WinSignal::new());
        let token = CancellationToken::new();

        let mut set = JoinSet::new();
        self.spawn_workers(&mut set, &target, &alphabet, &signal, &token);

        let mut workers = Vec::with_capacity(self.cfg.worker_count as usize);
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(report) => workers.push(report),
                // A panicking worker never claimed the signal; the rest
                // of the race is unaffected.
                Err(join_err) => eprintln!("[monkeyrace] worker task failed: {join_err}"),
            }
        }
        workers.sort_by_key(|w| w.id);

        Self::stop_fanout(fanout).await;

        let winner = signal.winner().ok_or(RaceError::NoWinner)?;
        Ok(RaceReport { winner, workers })
    }

    /// Eager validation, performed before any worker exists.
    fn validate(&self, target: &str, alphabet: &Alphabet) -> Result<(), ConfigError> {
        if self.cfg.worker_count == 0 {
            return Err(ConfigError::InvalidWorkerCount);
        }
        if alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if let Some(ch) = target.chars().find(|&ch| !alphabet.contains(ch)) {
            return Err(ConfigError::UnreachableTarget { ch });
        }
        Ok(())
    }

    /// Builds the per-run subscriber set and attaches it to the bus.
    ///
    /// Scoping the fan-out to one run keeps listeners from accumulating
    /// across repeated races on the same coordinator.
    fn start_fanout(&self) -> Option<Fanout> {
        if self.subscribers.is_empty() {
            return None;
        }
        let set = Arc::new(SubscriberSet::new(self.subscribers.clone()));
        let stop = CancellationToken::new();
        let listener = set.listen(&self.bus, stop.clone());
        Some(Fanout {
            set,
            stop,
            listener,
        })
    }

    /// Stops the listener, drains the bus, and waits for the subscriber
    /// queues to empty. Called after all workers have joined, so nothing
    /// publishes past this point.
    async fn stop_fanout(fanout: Option<Fanout>) {
        let Some(Fanout {
            set,
            stop,
            listener,
        }) = fanout
        else {
            return;
        };
        stop.cancel();
        let _ = listener.await;
        // The listener held the only other reference; a failed unwrap
        // means a caller kept one, and they own the shutdown then.
        if let Ok(set) = Arc::try_unwrap(set) {
            set.shutdown().await;
        }
    }

    /// Spawns one worker per id onto the join set.
    fn spawn_workers(
        &self,
        set: &mut JoinSet<WorkerReport>,
        target: &Arc<[char]>,
        alphabet: &Arc<Alphabet>,
        signal: &Arc<WinSignal>,
        runtime_token: &CancellationToken,
    ) {
        for id in 1..=self.cfg.worker_count {
            let keyboard = match self.cfg.worker_seed(id) {
                Some(seed) => RandomKeyboard::seeded(seed),
                None => RandomKeyboard::from_entropy(),
            };
            let worker = Worker::new(
                id,
                Arc::clone(target),
                Arc::clone(alphabet),
                Arc::clone(signal),
                self.bus.clone(),
                Box::new(keyboard),
                self.cfg.checkpoint_interval_clamped(),
            );
            let child = runtime_token.child_token();
            set.spawn(worker.run(child));
        }
    }
}

/// Runs a race with default configuration and no subscribers.
///
/// This is the one-call entry point: validates inputs, races
/// `worker_count` workers for `target`, and returns the winning worker id
/// in `[1, worker_count]`.
///
/// # Example
/// ```
/// use monkeyrace::{run_race, Alphabet};
///
/// # async fn demo() -> Result<(), monkeyrace::RaceError> {
/// let alphabet = Alphabet::from_chars("ab".chars());
/// let winner = run_race("ab", &alphabet, 2).await?;
/// assert!((1..=2).contains(&winner));
/// # Ok(())
/// # }
/// ```
pub async fn run_race(
    target: &str,
    alphabet: &Alphabet,
    worker_count: u32,
) -> Result<u32, RaceError> {
    let cfg = RaceConfig {
        worker_count,
        ..RaceConfig::default()
    };
    let coordinator = RaceCoordinator::new(cfg, Vec::new());
    let report = coordinator.run(target, alphabet).await?;
    Ok(report.winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ProgressEvent, ProgressKind};
    use crate::race::worker::WorkerStatus;
    use crate::subscribers::Scoreboard;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn seeded_cfg(worker_count: u32) -> RaceConfig {
        RaceConfig {
            worker_count,
            checkpoint_interval: 1_000,
            seed: Some(0xC0FFEE),
            ..RaceConfig::default()
        }
    }

    /// Counts `Won` events delivered to it.
    struct WinCounter {
        won: Arc<AtomicU64>,
    }

    #[async_trait]
    impl Subscribe for WinCounter {
        fn name(&self) -> &'static str {
            "win-counter"
        }

        async fn on_event(&self, ev: &ProgressEvent) {
            if ev.kind == ProgressKind::Won {
                self.won.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn race_returns_a_winner_in_range() {
        let coordinator = RaceCoordinator::new(seeded_cfg(3), Vec::new());
        let alphabet = Alphabet::from_chars("ab".chars());

        let report = coordinator.run("abba", &alphabet).await.expect("race");
        assert!((1..=3).contains(&report.winner));
        assert_eq!(report.workers.len(), 3);
        assert_eq!(report.winning_worker().id, report.winner);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn exactly_one_worker_wins_and_the_rest_concede() {
        for round in 0..10u64 {
            let cfg = RaceConfig {
                seed: Some(round),
                ..seeded_cfg(4)
            };
            let coordinator = RaceCoordinator::new(cfg, Vec::new());
            let alphabet = Alphabet::from_chars("ab".chars());
            let report = coordinator.run("ab", &alphabet).await.expect("race");

            let won: Vec<u32> = report
                .workers
                .iter()
                .filter(|w| w.status == WorkerStatus::Won)
                .map(|w| w.id)
                .collect();
            assert_eq!(won, vec![report.winner], "round {round}");
            assert!(report
                .workers
                .iter()
                .filter(|w| w.id != report.winner)
                .all(|w| w.status == WorkerStatus::Conceded));
        }
    }

    #[tokio::test]
    async fn winner_presses_at_least_target_length() {
        let coordinator = RaceCoordinator::new(seeded_cfg(1), Vec::new());
        let alphabet = Alphabet::from_chars("ab".chars());
        let report = coordinator.run("aba", &alphabet).await.expect("race");
        assert!(report.winning_worker().presses >= 3);
        assert!(report.winning_worker().best_len < 3);
    }

    #[tokio::test]
    async fn empty_target_resolves_without_looping() {
        let coordinator = RaceCoordinator::new(seeded_cfg(3), Vec::new());
        let alphabet = Alphabet::from_chars("ab".chars());

        let report = coordinator.run("", &alphabet).await.expect("race");
        assert!((1..=3).contains(&report.winner));
        assert_eq!(report.winning_worker().presses, 0);
    }

    #[tokio::test]
    async fn zero_workers_is_rejected_eagerly() {
        let coordinator = RaceCoordinator::new(seeded_cfg(0), Vec::new());
        let alphabet = Alphabet::from_chars("ab".chars());
        let err = coordinator.run("ab", &alphabet).await.unwrap_err();
        assert!(matches!(
            err,
            RaceError::Config(ConfigError::InvalidWorkerCount)
        ));
    }

    #[tokio::test]
    async fn empty_alphabet_is_rejected_eagerly() {
        let coordinator = RaceCoordinator::new(seeded_cfg(1), Vec::new());
        let alphabet = Alphabet::from_chars(std::iter::empty());
        let err = coordinator.run("ab", &alphabet).await.unwrap_err();
        assert!(matches!(err, RaceError::Config(ConfigError::EmptyAlphabet)));
    }

    #[tokio::test]
    async fn unwinnable_target_is_rejected_eagerly() {
        let coordinator = RaceCoordinator::new(seeded_cfg(2), Vec::new());
        let alphabet = Alphabet::from_chars("ab".chars());
        let err = coordinator.run("xy", &alphabet).await.unwrap_err();
        assert!(matches!(
            err,
            RaceError::Config(ConfigError::UnreachableTarget { ch: 'x' })
        ));
    }

    #[tokio::test]
    async fn run_race_returns_the_winning_id() {
        let alphabet = Alphabet::from_chars("ab".chars());
        let winner = run_race("ab", &alphabet, 2).await.expect("race");
        assert!((1..=2).contains(&winner));
    }

    #[tokio::test]
    async fn subscribers_observe_the_terminal_events() {
        let board = Scoreboard::new();
        let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(board.clone())];
        let coordinator = RaceCoordinator::new(seeded_cfg(2), subs);
        let alphabet = Alphabet::from_chars("ab".chars());
        let report = coordinator.run("ab", &alphabet).await.expect("race");

        // run() drains the fan-out before returning; no settling needed.
        let rows = board.snapshot().await;
        assert_eq!(rows.len(), 2);
        assert!(rows
            .iter()
            .any(|r| r.worker == report.winner && r.finished == Some(ProgressKind::Won)));
    }

    #[tokio::test]
    async fn coordinator_reuse_does_not_duplicate_fanout() {
        // Two consecutive races on one coordinator: each publishes one
        // Won event, and each must reach the subscriber exactly once.
        let won = Arc::new(AtomicU64::new(0));
        let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(WinCounter { won: won.clone() })];
        let coordinator = RaceCoordinator::new(seeded_cfg(1), subs);
        let alphabet = Alphabet::from_chars("ab".chars());

        coordinator.run("ab", &alphabet).await.expect("first race");
        coordinator.run("ab", &alphabet).await.expect("second race");

        assert_eq!(won.load(Ordering::Relaxed), 2);
    }
}
