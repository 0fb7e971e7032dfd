//! # Alphabet construction from formatting flags.
//!
//! [`Alphabet`] is the set of characters a worker may draw at random.
//! It is derived once from [`FormatOptions`] — the same flags that drive
//! text normalization ([`normalize`](crate::text::normalize)) — so the
//! alphabet always covers exactly what normalization can leave behind.
//!
//! ## Rules
//! - Lowercase letters are **unconditional**: the alphabet is never empty.
//! - Each disabled "remove" flag widens the alphabet with the characters
//!   that normalization would then retain.
//! - Sampling is uniform over the set.
//!
//! ## Example
//! ```rust
//! use monkeyrace::{Alphabet, FormatOptions};
//!
//! let strict = Alphabet::from_options(&FormatOptions::default());
//! assert_eq!(strict.len(), 26); // lowercase only
//!
//! let full = Alphabet::from_options(&FormatOptions::keep_everything());
//! assert!(full.contains(' '));
//! assert!(full.contains('!'));
//! ```

use rand::Rng;

/// ASCII punctuation, in the same order as Python's `string.punctuation`.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Formatting flags shared by text normalization and alphabet construction.
///
/// Each flag removes a character class during normalization and, in turn,
/// excludes that class from the alphabet. All flags default to `true`
/// (aggressive cleaning: lowercase letters only).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Collapse whitespace runs (newlines, tabs, repeated spaces) into
    /// single spaces. When `false`, the alphabet also offers `'\n'` and `'\t'`.
    pub collapse_formatting: bool,
    /// Strip ASCII punctuation. When `false`, the alphabet offers all 32
    /// punctuation characters.
    pub remove_punctuation: bool,
    /// Drop literal spaces. When `false`, the alphabet offers `' '`.
    pub remove_spaces: bool,
    /// Fold uppercase to lowercase. When `false`, the alphabet offers the
    /// 26 uppercase letters.
    pub remove_capitalization: bool,
}

impl Default for FormatOptions {
    /// All flags enabled: normalize down to lowercase letters only.
    fn default() -> Self {
        Self {
            collapse_formatting: true,
            remove_punctuation: true,
            remove_spaces: true,
            remove_capitalization: true,
        }
    }
}

impl FormatOptions {
    /// All flags disabled: keep capitalization, punctuation, spaces, and
    /// formatting characters.
    pub fn keep_everything() -> Self {
        Self {
            collapse_formatting: false,
            remove_punctuation: false,
            remove_spaces: false,
            remove_capitalization: false,
        }
    }
}

/// The set of characters available for random sampling.
///
/// Built once before a race and shared read-only by all workers.
/// Invariant: non-empty (lowercase letters are unconditional when built
/// from options; [`Alphabet::from_chars`] may produce an empty set, which
/// the coordinator rejects eagerly).
#[derive(Clone, Debug)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds the alphabet implied by the given formatting flags.
    ///
    /// Starts from the 26 lowercase letters and appends, in order:
    /// uppercase letters, punctuation, the space character, and the
    /// newline/tab pair — each only when the corresponding flag is off.
    /// Pure and infallible; the result is always non-empty.
    pub fn from_options(opts: &FormatOptions) -> Self {
        let mut chars: Vec<char> = ('a'..='z').collect();
        if !opts.remove_capitalization {
            chars.extend('A'..='Z');
        }
        if !opts.remove_punctuation {
            chars.extend(PUNCTUATION.chars());
        }
        if !opts.remove_spaces {
            chars.push(' ');
        }
        if !opts.collapse_formatting {
            chars.push('\n');
            chars.push('\t');
        }
        Self { chars }
    }

    /// Builds an alphabet from an arbitrary character sequence.
    ///
    /// Duplicates are dropped, first occurrence wins. Useful for tests and
    /// demos with tiny alphabets; the coordinator rejects an empty result.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut out = Vec::new();
        for ch in chars {
            if !out.contains(&ch) {
                out.push(ch);
            }
        }
        Self { chars: out }
    }

    /// True if the alphabet can produce `ch`.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Number of distinct characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if there is nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Draws one character uniformly at random.
    ///
    /// # Panics
    /// Panics if the alphabet is empty; the coordinator validates
    /// non-emptiness before any worker samples.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[rng.random_range(0..self.chars.len())]
    }

    /// The characters in sampling order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn all_flags_on_is_exactly_lowercase() {
        let a = Alphabet::from_options(&FormatOptions::default());
        assert_eq!(a.len(), 26);
        for ch in 'a'..='z' {
            assert!(a.contains(ch), "missing {ch:?}");
        }
    }

    #[test]
    fn all_flags_off_is_full_set_without_duplicates() {
        let a = Alphabet::from_options(&FormatOptions::keep_everything());
        // 26 lower + 26 upper + 32 punctuation + space + newline + tab
        assert_eq!(a.len(), 87);
        let unique: HashSet<char> = a.chars().iter().copied().collect();
        assert_eq!(unique.len(), a.len(), "duplicates in alphabet");
        assert!(a.contains('A'));
        assert!(a.contains('~'));
        assert!(a.contains(' '));
        assert!(a.contains('\n'));
        assert!(a.contains('\t'));
    }

    #[test]
    fn each_flag_widens_independently() {
        let upper = Alphabet::from_options(&FormatOptions {
            remove_capitalization: false,
            ..FormatOptions::default()
        });
        assert_eq!(upper.len(), 52);

        let punct = Alphabet::from_options(&FormatOptions {
            remove_punctuation: false,
            ..FormatOptions::default()
        });
        assert_eq!(punct.len(), 58);

        let spaces = Alphabet::from_options(&FormatOptions {
            remove_spaces: false,
            ..FormatOptions::default()
        });
        assert_eq!(spaces.len(), 27);

        let fmt = Alphabet::from_options(&FormatOptions {
            collapse_formatting: false,
            ..FormatOptions::default()
        });
        assert_eq!(fmt.len(), 28);
    }

    #[test]
    fn from_chars_deduplicates_keeping_first() {
        let a = Alphabet::from_chars("abcba".chars());
        assert_eq!(a.chars(), &['a', 'b', 'c']);
    }

    #[test]
    fn sample_is_always_a_member() {
        let a = Alphabet::from_chars("xyz".chars());
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(a.contains(a.sample(&mut rng)));
        }
    }

    #[test]
    fn sample_eventually_covers_the_whole_set() {
        let a = Alphabet::from_chars("ab".chars());
        let mut rng = SmallRng::seed_from_u64(11);
        let seen: HashSet<char> = (0..100).map(|_| a.sample(&mut rng)).collect();
        assert_eq!(seen.len(), 2);
    }
}
