//! # Text normalization collaborator.
//!
//! Cleans raw input text into the target string a race runs against,
//! driven by the same [`FormatOptions`] that build the alphabet. Using one
//! options value for both guarantees every character the normalizer leaves
//! behind is representable in the alphabet — the coordinator still
//! re-checks this eagerly at race start.
//!
//! Operations, applied in order when the corresponding flag is set:
//! 1. `collapse_formatting` — whitespace runs (newlines, tabs, repeated
//!    spaces) become single spaces; leading/trailing whitespace is trimmed.
//! 2. `remove_punctuation` — ASCII punctuation is stripped.
//! 3. `remove_spaces` — remaining spaces are dropped.
//! 4. `remove_capitalization` — uppercase is folded to lowercase.

use crate::alphabet::FormatOptions;

/// Normalizes raw text into a race target according to `opts`.
///
/// # Example
/// ```
/// use monkeyrace::{normalize, FormatOptions};
///
/// let cleaned = normalize("It was\n the best,  of times!", &FormatOptions::default());
/// assert_eq!(cleaned, "itwasthebestoftimes");
/// ```
pub fn normalize(raw: &str, opts: &FormatOptions) -> String {
    let mut text = if opts.collapse_formatting {
        collapse_whitespace(raw)
    } else {
        raw.to_string()
    };

    if opts.remove_punctuation {
        text.retain(|ch| !ch.is_ascii_punctuation());
    }
    if opts.remove_spaces {
        text.retain(|ch| ch != ' ');
    }
    if opts.remove_capitalization {
        text = text.to_lowercase();
    }
    text
}

/// Collapses every whitespace run to a single space and trims the ends.
fn collapse_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;
    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    #[test]
    fn default_options_strip_down_to_lowercase() {
        let got = normalize("Hello, World!\nSecond\tline.", &FormatOptions::default());
        assert_eq!(got, "helloworldsecondline");
    }

    #[test]
    fn keep_everything_is_identity() {
        let raw = "Keep IT: all!\n\tplease ";
        assert_eq!(normalize(raw, &FormatOptions::keep_everything()), raw);
    }

    #[test]
    fn collapse_formatting_folds_runs_and_trims() {
        let opts = FormatOptions {
            collapse_formatting: true,
            remove_punctuation: false,
            remove_spaces: false,
            remove_capitalization: false,
        };
        assert_eq!(normalize("  a \n\n b\t\tc  ", &opts), "a b c");
    }

    #[test]
    fn remove_spaces_only_drops_literal_spaces() {
        let opts = FormatOptions {
            collapse_formatting: false,
            remove_punctuation: false,
            remove_spaces: true,
            remove_capitalization: false,
        };
        assert_eq!(normalize("a b\nc", &opts), "ab\nc");
    }

    #[test]
    fn normalized_text_fits_the_matching_alphabet() {
        let cases = [
            FormatOptions::default(),
            FormatOptions::keep_everything(),
            FormatOptions {
                remove_spaces: false,
                ..FormatOptions::default()
            },
        ];
        let raw = "The quick, brown\nfox JUMPS over 2 fences!";
        for opts in cases {
            let alphabet = Alphabet::from_options(&opts);
            let target = normalize(raw, &opts);
            for ch in target.chars() {
                // Digits are outside every alphabet variant; anything else
                // the normalizer keeps must be drawable.
                if !ch.is_ascii_digit() {
                    assert!(alphabet.contains(ch), "{ch:?} not drawable under {opts:?}");
                }
            }
        }
    }
}
