//! # Stateful subscriber that tracks per-worker standings.
//!
//! [`Scoreboard`] maintains an in-memory table of each worker's latest
//! press counter, best-attempt length, and terminal state by listening to
//! progress events.
//!
//! ```text
//!  Worker ── publish(ProgressEvent) ──► Bus
//!                                        │
//!                                   subscribe()
//!                                        │
//!                                        ▼
//!                      Scoreboard (HashMap<u32, Standing> behind Mutex)
//!
//! At any point:
//!   Scoreboard::snapshot() ──► Vec<Standing> sorted by worker id
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::events::{ProgressEvent, ProgressKind};

use super::Subscribe;

/// One worker's row on the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    /// Worker id (1-based).
    pub worker: u32,
    /// Latest observed press counter.
    pub presses: u64,
    /// Latest observed best-attempt length.
    pub best_len: usize,
    /// Terminal kind (`Won`/`Conceded`) once the worker has finished.
    pub finished: Option<ProgressKind>,
}

/// Tracks the latest standing of every worker in the race.
///
/// Thread-safe and cloneable — clones share the same internal table.
#[derive(Clone, Default)]
pub struct Scoreboard {
    inner: Arc<Mutex<HashMap<u32, Standing>>>,
}

impl Scoreboard {
    /// Creates a new, empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current standings, sorted by worker id.
    pub async fn snapshot(&self) -> Vec<Standing> {
        let g = self.inner.lock().await;
        let mut rows: Vec<Standing> = g.values().cloned().collect();
        rows.sort_by_key(|r| r.worker);
        rows
    }
}

#[async_trait]
impl Subscribe for Scoreboard {
    fn name(&self) -> &'static str {
        "scoreboard"
    }

    async fn on_event(&self, ev: &ProgressEvent) {
        let mut g = self.inner.lock().await;
        let row = g.entry(ev.worker).or_insert(Standing {
            worker: ev.worker,
            presses: 0,
            best_len: 0,
            finished: None,
        });
        row.presses = row.presses.max(ev.presses);
        row.best_len = row.best_len.max(ev.best_len);
        if ev.is_terminal() {
            row.finished = Some(ev.kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scoreboard_tracks_latest_state_per_worker() {
        let board = Scoreboard::new();

        board
            .on_event(
                &ProgressEvent::new(ProgressKind::NewBest, 1)
                    .with_presses(10)
                    .with_best_len(2),
            )
            .await;
        board
            .on_event(
                &ProgressEvent::new(ProgressKind::Checkpoint, 1)
                    .with_presses(25)
                    .with_best_len(2),
            )
            .await;
        board
            .on_event(
                &ProgressEvent::new(ProgressKind::Won, 2)
                    .with_presses(40)
                    .with_best_len(3),
            )
            .await;

        let rows = board.snapshot().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].worker, 1);
        assert_eq!(rows[0].presses, 25);
        assert_eq!(rows[0].best_len, 2);
        assert_eq!(rows[0].finished, None);
        assert_eq!(rows[1].finished, Some(ProgressKind::Won));
    }
}
