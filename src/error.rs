//! Error types used by the race runtime.
//!
//! This module defines two error enums:
//!
//! - [`ConfigError`] — invalid race inputs, rejected eagerly before any
//!   worker is spawned.
//! - [`RaceError`] — errors surfaced by a race run itself.
//!
//! Both types provide `as_label` for logging/metrics.

use thiserror::Error;

/// # Errors raised by eager validation of race inputs.
///
/// All of these are detected by [`RaceCoordinator::run`](crate::RaceCoordinator::run)
/// before a single worker is spawned. They are fatal to that race invocation,
/// not to the process.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The race was configured with zero workers.
    #[error("worker count must be positive")]
    InvalidWorkerCount,

    /// The alphabet contains no characters; nothing can ever be drawn.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// The target contains a character the alphabet can never produce,
    /// which would make the race unwinnable and spin forever.
    #[error("target character {ch:?} is not in the alphabet")]
    UnreachableTarget {
        /// The offending target character.
        ch: char,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use monkeyrace::ConfigError;
    ///
    /// let err = ConfigError::EmptyAlphabet;
    /// assert_eq!(err.as_label(), "config_empty_alphabet");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::InvalidWorkerCount => "config_invalid_worker_count",
            ConfigError::EmptyAlphabet => "config_empty_alphabet",
            ConfigError::UnreachableTarget { .. } => "config_unreachable_target",
        }
    }
}

/// # Errors produced by a race run.
///
/// Validation failures are wrapped transparently; [`RaceError::NoWinner`]
/// is only reachable when every worker was cancelled externally before
/// anyone claimed the win.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RaceError {
    /// Inputs rejected before the race started.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// All workers terminated without a recorded winner.
    #[error("race ended with no winner")]
    NoWinner,
}

impl RaceError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            RaceError::Config(e) => e.as_label(),
            RaceError::NoWinner => "race_no_winner",
        }
    }
}
