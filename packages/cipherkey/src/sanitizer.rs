//! Symbol and digit removal
//!
//! Some sites refuse symbols or digits in passwords. Sanitizing replaces each
//! offending character with a letter drawn from a SHAKE256 extractor seeded
//! with the character's position and the character itself, so the same input
//! always sanitizes to the same output.
//!
//! One extractor serves the whole call: symbols are replaced first, left to
//! right, then digits. Replacements are always letters, so sanitizing twice
//! with the same options changes nothing the second time.
//!
//! Sanitizing a generated key can remove its only symbol or digit; class
//! coverage is not restored.

use crate::alphabet::{DIGITS, LETTERS_ONLY, SYMBOLS};
use crate::Cipherkey;
use cipherkey_common::LoggingTransformer;
use cipherkey_hashing::IndexExtractor;
use zeroize::{Zeroize, Zeroizing};

/// Options for a sanitation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sanitizer {
    remove_symbols: bool,
    remove_numbers: bool,
}

impl Sanitizer {
    /// Sanitizer that removes nothing until configured
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every symbol with a letter
    #[must_use]
    pub fn remove_symbols(mut self) -> Self {
        self.remove_symbols = true;
        self
    }

    /// Replace every digit with a letter
    #[must_use]
    pub fn remove_numbers(mut self) -> Self {
        self.remove_numbers = true;
        self
    }

    /// Sanitize `cipherkey`
    ///
    /// Positions are counted in characters. The seed for the character at
    /// position `i` is the decimal form of `i` followed by the character.
    #[must_use]
    pub fn apply(&self, cipherkey: &str) -> Cipherkey {
        let mut chars: Vec<char> = cipherkey.chars().collect();
        let mut extractor = IndexExtractor::new();
        let mut replaced = 0;

        if self.remove_symbols {
            replaced += replace_matching(&mut chars, &mut extractor, |c| SYMBOLS.contains(c));
        }
        if self.remove_numbers {
            replaced += replace_matching(&mut chars, &mut extractor, |c| DIGITS.contains(c));
        }

        LoggingTransformer::log_sanitize(self.remove_symbols, self.remove_numbers, replaced);

        let sanitized = Cipherkey::from(chars.iter().collect::<String>());
        chars.zeroize();
        sanitized
    }
}

/// Sanitize `cipherkey` with explicit flags
#[must_use]
pub fn sanitize(cipherkey: &str, remove_symbols: bool, remove_numbers: bool) -> Cipherkey {
    Sanitizer {
        remove_symbols,
        remove_numbers,
    }
    .apply(cipherkey)
}

fn replace_matching(
    chars: &mut [char],
    extractor: &mut IndexExtractor,
    matches: impl Fn(char) -> bool,
) -> usize {
    let mut replaced = 0;
    for (position, slot) in chars.iter_mut().enumerate() {
        if !matches(*slot) {
            continue;
        }
        let seed = Zeroizing::new(format!("{position}{slot}"));
        *slot = LETTERS_ONLY.pick(extractor, seed.as_bytes());
        replaced += 1;
    }
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_builder_matches_flags() {
        let input = "aB3$kL9!";
        assert_eq!(
            Sanitizer::new().remove_symbols().apply(input),
            sanitize(input, true, false)
        );
        assert_eq!(
            Sanitizer::new().remove_numbers().apply(input),
            sanitize(input, false, true)
        );
        assert_eq!(
            Sanitizer::new().remove_symbols().remove_numbers().apply(input),
            sanitize(input, true, true)
        );
    }

    #[test]
    fn test_no_flags_is_identity() {
        assert_eq!(sanitize("aB3$kL9!", false, false), "aB3$kL9!");
    }

    #[test]
    fn test_only_matching_characters_change() {
        let input = "aB3$kL9!";
        let output: Vec<char> = sanitize(input, true, false).chars().collect();
        for (before, after) in input.chars().zip(&output) {
            if SYMBOLS.contains(before) {
                assert!(after.is_ascii_alphabetic());
            } else {
                assert_eq!(before, *after);
            }
        }
    }

    #[test]
    fn test_replacement_follows_shared_extractor() {
        // '$' at 3 then '!' at 7, then '3' at 2 and '9' at 6
        let mut extractor = IndexExtractor::new();
        let expected_3 = LETTERS_ONLY.pick(&mut extractor, b"3$");
        let expected_7 = LETTERS_ONLY.pick(&mut extractor, b"7!");
        let expected_2 = LETTERS_ONLY.pick(&mut extractor, b"23");
        let expected_6 = LETTERS_ONLY.pick(&mut extractor, b"69");

        let output: Vec<char> = sanitize("aB3$kL9!", true, true).chars().collect();
        assert_eq!(output[3], expected_3);
        assert_eq!(output[7], expected_7);
        assert_eq!(output[2], expected_2);
        assert_eq!(output[6], expected_6);
    }

    #[test]
    fn test_positions_count_characters() {
        // 'é' is two bytes but one position
        let output: Vec<char> = sanitize("é1", false, true).chars().collect();
        let mut extractor = IndexExtractor::new();
        assert_eq!(output[0], 'é');
        assert_eq!(output[1], LETTERS_ONLY.pick(&mut extractor, b"11"));
    }

    #[test]
    fn test_empty_input() {
        assert!(sanitize("", true, true).is_empty());
    }

    proptest! {
        #[test]
        fn prop_exclusion_length_and_idempotence(
            input in "[@#$%&*._!0-9A-Za-z]{0,64}",
            remove_symbols in any::<bool>(),
            remove_numbers in any::<bool>(),
        ) {
            let once = sanitize(&input, remove_symbols, remove_numbers);
            prop_assert_eq!(once.len(), input.chars().count());
            if remove_symbols {
                prop_assert!(once.chars().all(|c| !SYMBOLS.contains(c)));
            }
            if remove_numbers {
                prop_assert!(once.chars().all(|c| !c.is_ascii_digit()));
            }
            let twice = sanitize(once.as_str(), remove_symbols, remove_numbers);
            prop_assert_eq!(twice, once);
        }

        #[test]
        fn prop_arbitrary_text_keeps_length(input in ".{0,32}") {
            let output = sanitize(&input, true, true);
            prop_assert_eq!(output.len(), input.chars().count());
        }
    }
}
