//! # Event subscribers for the race runtime.
//!
//! This module provides the [`Subscribe`] trait and built-in
//! implementations for handling progress events broadcast through the
//! [`Bus`](crate::events::Bus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Worker ── publish(ProgressEvent) ──► Bus ──► SubscriberSet fan-out
//!                                                   │
//!                                              ┌────┴──────┬─────────┐
//!                                              ▼           ▼         ▼
//!                                          LogWriter  Scoreboard  Custom
//! ```
//!
//! ## Subscriber types
//! - **Passive subscribers** — observe and react (logging, metrics)
//! - **Stateful subscribers** — maintain state from events ([`Scoreboard`])

mod log;
mod scoreboard;
mod set;
mod subscriber;

pub use log::LogWriter;
pub use scoreboard::{Scoreboard, Standing};
pub use set::SubscriberSet;
pub use subscriber::Subscribe;
