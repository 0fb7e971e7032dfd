//! Progress event model and the bus that carries it.
//!
//! Workers describe their state through [`ProgressEvent`]s and publish
//! them on the [`Bus`]; the matching loop itself has no I/O side effects.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{ProgressEvent, ProgressKind};
