//! Race core: workers, the shared win signal, and the coordinator.
//!
//! Internal modules:
//! - [`keys`]: keyboard abstraction (uniform random or scripted draws);
//! - [`signal`]: write-once atomic claim register;
//! - [`worker`]: the restart-on-mismatch matching state machine;
//! - [`coordinator`]: validation, worker pool, join barrier, report.

mod coordinator;
mod keys;
mod signal;
mod worker;

pub use coordinator::{run_race, RaceCoordinator, RaceReport};
pub use keys::{Keyboard, RandomKeyboard, ScriptedKeyboard};
pub use signal::WinSignal;
pub use worker::{Worker, WorkerReport, WorkerStatus};
