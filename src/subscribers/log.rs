//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints progress events to stdout in a human-readable
//! format. Primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [checkpoint] worker=2 presses=100000 best=3/19
//! [new-best] worker=2 best=4/19 text="itwa" presses=120531
//! [won] worker=1 presses=893211 text="itwasthebestoftimes"
//! [conceded] worker=2 presses=893400 best=7/19
//! ```

use async_trait::async_trait;

use crate::events::{ProgressEvent, ProgressKind};

use super::Subscribe;

/// Simple stdout logging subscriber.
///
/// Not intended for production use — implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    fn name(&self) -> &'static str {
        "log-writer"
    }

    async fn on_event(&self, e: &ProgressEvent) {
        match e.kind {
            ProgressKind::Checkpoint => {
                println!(
                    "[checkpoint] worker={} presses={} best={}/{}",
                    e.worker, e.presses, e.best_len, e.target_len
                );
            }
            ProgressKind::NewBest => {
                println!(
                    "[new-best] worker={} best={}/{} text={:?} presses={}",
                    e.worker,
                    e.best_len,
                    e.target_len,
                    e.text.as_deref().unwrap_or(""),
                    e.presses
                );
            }
            ProgressKind::Won => {
                println!(
                    "[won] worker={} presses={} text={:?}",
                    e.worker,
                    e.presses,
                    e.text.as_deref().unwrap_or("")
                );
            }
            ProgressKind::Conceded => {
                println!(
                    "[conceded] worker={} presses={} best={}/{}",
                    e.worker, e.presses, e.best_len, e.target_len
                );
            }
        }
    }
}
