//! # Keyboard abstraction: where a worker's key presses come from.
//!
//! Workers draw characters through the [`Keyboard`] trait instead of
//! calling an RNG directly. In a real race that is [`RandomKeyboard`]
//! (uniform draws from the alphabet); in tests and replays a
//! [`ScriptedKeyboard`] is injected to make the draw sequence exact.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::alphabet::Alphabet;

/// Source of key presses for one worker.
///
/// Each worker owns its keyboard exclusively; implementations do not need
/// to be thread-safe beyond `Send`.
pub trait Keyboard: Send {
    /// Produces the next key press, drawn from `alphabet`.
    fn strike(&mut self, alphabet: &Alphabet) -> char;
}

/// Uniform random keyboard backed by a small fast RNG.
///
/// Seeded per worker: either from the configured base seed (deterministic
/// runs) or from OS entropy.
pub struct RandomKeyboard {
    rng: SmallRng,
}

impl RandomKeyboard {
    /// Creates a keyboard with an explicit seed (reproducible draws).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a keyboard seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl Keyboard for RandomKeyboard {
    fn strike(&mut self, alphabet: &Alphabet) -> char {
        alphabet.sample(&mut self.rng)
    }
}

/// Keyboard that replays a fixed sequence of key presses.
///
/// Used to pin down exact matching scenarios in tests.
///
/// # Panics
/// Panics when struck after the script is exhausted — a scripted scenario
/// is expected to end the race on its last key.
pub struct ScriptedKeyboard {
    script: Vec<char>,
    next: usize,
}

impl ScriptedKeyboard {
    /// Creates a keyboard that will produce exactly the given characters.
    pub fn new(script: impl IntoIterator<Item = char>) -> Self {
        Self {
            script: script.into_iter().collect(),
            next: 0,
        }
    }
}

impl Keyboard for ScriptedKeyboard {
    fn strike(&mut self, _alphabet: &Alphabet) -> char {
        let ch = self.script[self.next];
        self.next += 1;
        ch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_keyboards_replay_identically() {
        let alphabet = Alphabet::from_chars("abc".chars());
        let mut a = RandomKeyboard::seeded(99);
        let mut b = RandomKeyboard::seeded(99);
        for _ in 0..64 {
            assert_eq!(a.strike(&alphabet), b.strike(&alphabet));
        }
    }

    #[test]
    fn scripted_keyboard_replays_in_order() {
        let alphabet = Alphabet::from_chars("ab".chars());
        let mut keys = ScriptedKeyboard::new("bab".chars());
        assert_eq!(keys.strike(&alphabet), 'b');
        assert_eq!(keys.strike(&alphabet), 'a');
        assert_eq!(keys.strike(&alphabet), 'b');
    }
}
