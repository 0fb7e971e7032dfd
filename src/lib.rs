//! # monkeyrace
//!
//! **monkeyrace** simulates the infinite monkey theorem as a concurrent
//! race: N independent workers draw random characters from a fixed
//! alphabet, each trying to reproduce a target string one character at a
//! time and restarting from scratch on any mismatch. The first worker to
//! reproduce the full target claims a shared write-once win signal; all
//! others concede.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     raw text ──► normalize(FormatOptions) ──► target string
//!                         │
//!                  Alphabet::from_options (same flags)
//!                         ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  RaceCoordinator                                              │
//! │  - eager validation (ConfigError before any worker spawns)    │
//! │  - Bus (broadcast progress events)                            │
//! │  - SubscriberSet (fans out to user subscribers)               │
//! │  - WinSignal (atomic write-once claim register)               │
//! └──────┬──────────────────┬──────────────────┬──────────────────┘
//!        ▼                  ▼                  ▼
//!     ┌──────────┐      ┌──────────┐      ┌──────────┐
//!     │ Worker 1 │      │ Worker 2 │      │ Worker N │
//!     │ (match   │      │ (match   │      │ (match   │
//!     │  loop)   │      │  loop)   │      │  loop)   │
//!     └┬─────────┘      └┬─────────┘      └┬─────────┘
//!      │ Publishes       │ Publishes       │ Publishes
//!      │ - Checkpoint    │ - NewBest       │ - Won/Conceded
//!      ▼                 ▼                 ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │                    Bus (broadcast channel)                    │
//! └───────────────────────────────┬───────────────────────────────┘
//!                                 ▼
//!                      SubscriberSet::listen
//!                      (scoped to one run)
//!                      ┌─────────┼─────────┐
//!                      ▼         ▼         ▼
//!                  LogWriter Scoreboard  custom
//! ```
//!
//! ### Worker lifecycle
//! ```text
//! Running ──(full target reproduced, claim succeeds)──► Won
//!    │                └─(claim lost: photo finish)────► Conceded
//!    └──(winner observed / cancellation)─────────────► Conceded
//! ```
//!
//! The only shared mutable state is the [`WinSignal`]: an atomic
//! compare-and-set register, so exactly one claim succeeds even when
//! several workers finish at overlapping times. Target and alphabet are
//! immutable and shared read-only; per-worker state is exclusively owned.
//!
//! ## Features
//! | Area             | Description                                          | Key types / traits                 |
//! |------------------|------------------------------------------------------|------------------------------------|
//! | **Race**         | Run the concurrent race, collect per-worker reports. | [`run_race`], [`RaceCoordinator`]  |
//! | **Alphabet**     | Derive the drawable character set from flags.        | [`Alphabet`], [`FormatOptions`]    |
//! | **Text**         | Normalize raw text into a race target.               | [`normalize`]                      |
//! | **Events**       | Observe checkpoints, bests, and terminal outcomes.   | [`ProgressEvent`], [`Subscribe`]   |
//! | **Determinism**  | Seeded or scripted key presses for tests/replays.    | [`RaceConfig`], [`ScriptedKeyboard`] |
//! | **Errors**       | Eager validation of unwinnable configurations.       | [`ConfigError`], [`RaceError`]     |
//!
//! ## Example
//! ```rust
//! use monkeyrace::{normalize, Alphabet, FormatOptions, RaceConfig, RaceCoordinator};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), monkeyrace::RaceError> {
//!     let opts = FormatOptions::default();
//!     let target = normalize("To be, or not to be!", &opts);
//!     let alphabet = Alphabet::from_options(&opts);
//!
//!     let cfg = RaceConfig {
//!         worker_count: 2,
//!         seed: Some(7),
//!         ..RaceConfig::default()
//!     };
//!     let coordinator = RaceCoordinator::new(cfg, Vec::new());
//!     let report = coordinator.run(&target[..2], &alphabet).await?;
//!     println!("worker {} wins", report.winner);
//!     Ok(())
//! }
//! ```

mod alphabet;
mod config;
mod error;
mod events;
mod race;
mod subscribers;
mod text;

// ---- Public re-exports ----

pub use alphabet::{Alphabet, FormatOptions};
pub use config::RaceConfig;
pub use error::{ConfigError, RaceError};
pub use events::{Bus, ProgressEvent, ProgressKind};
pub use race::{
    run_race, Keyboard, RaceCoordinator, RaceReport, RandomKeyboard, ScriptedKeyboard, WinSignal,
    Worker, WorkerReport, WorkerStatus,
};
pub use subscribers::{LogWriter, Scoreboard, Standing, Subscribe, SubscriberSet};
pub use text::normalize;
