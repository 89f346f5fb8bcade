//! Fixed character alphabets
//!
//! Ordering inside each alphabet is part of the derivation: a draw `i`
//! selects the `i`-th character, so reordering any constant changes every
//! cipherkey derived with it.

use cipherkey_hashing::IndexExtractor;
use std::num::NonZeroUsize;

/// Ordered, non-empty ASCII alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    chars: &'static str,
    modulo: NonZeroUsize,
}

impl Alphabet {
    /// Build an alphabet, rejecting empty or non-ASCII input at compile time
    #[must_use]
    pub const fn new(chars: &'static str) -> Self {
        assert!(chars.is_ascii(), "alphabet must be ASCII");
        let modulo = match NonZeroUsize::new(chars.len()) {
            Some(modulo) => modulo,
            None => panic!("alphabet must not be empty"),
        };
        Self { chars, modulo }
    }

    /// Characters in draw order
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.chars
    }

    /// Number of characters
    #[must_use]
    pub const fn len(&self) -> usize {
        self.modulo.get()
    }

    /// Always false; alphabets are non-empty by construction
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `c` belongs to this alphabet
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.as_bytes().contains(&(c as u8))
    }

    /// Draw one character, absorbing `seed` into the extractor
    pub fn pick(&self, extractor: &mut IndexExtractor, seed: &[u8]) -> char {
        let index = extractor.draw(seed, self.modulo);
        char::from(self.chars.as_bytes()[index])
    }
}

/// `a`–`z`
pub const LOWERCASE: Alphabet = Alphabet::new("abcdefghijklmnopqrstuvwxyz");

/// `A`–`Z`
pub const UPPERCASE: Alphabet = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// Decimal digits, `0` last
pub const DIGITS: Alphabet = Alphabet::new("1234567890");

/// The accepted symbol set
pub const SYMBOLS: Alphabet = Alphabet::new("@#$%&*._!");

/// Symbols, digits, uppercase, lowercase: every character a cipherkey may hold
pub const ALLOWED_ALL: Alphabet = Alphabet::new(
    "@#$%&*._!0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
);

/// Lowercase then uppercase; replacement pool of the sanitizer
pub const LETTERS_ONLY: Alphabet =
    Alphabet::new("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// Character classes every generated cipherkey contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `a`–`z`
    Lowercase,
    /// `A`–`Z`
    Uppercase,
    /// One of `@#$%&*._!`
    Symbol,
    /// `0`–`9`
    Digit,
}

impl CharClass {
    /// Guaranteed classes in the order their positions are drawn
    pub const GUARANTEED: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Symbol,
        CharClass::Digit,
    ];

    /// Alphabet a character of this class is drawn from
    #[must_use]
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            CharClass::Lowercase => &LOWERCASE,
            CharClass::Uppercase => &UPPERCASE,
            CharClass::Symbol => &SYMBOLS,
            CharClass::Digit => &DIGITS,
        }
    }

    /// Class of `c`, if it belongs to one
    #[must_use]
    pub fn of(c: char) -> Option<CharClass> {
        Self::GUARANTEED
            .into_iter()
            .find(|class| class.alphabet().contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 9);
        assert_eq!(ALLOWED_ALL.len(), 71);
        assert_eq!(LETTERS_ONLY.len(), 52);
        assert!(!SYMBOLS.is_empty());
    }

    #[test]
    fn test_allowed_all_is_union_of_classes() {
        let union: HashSet<char> = CharClass::GUARANTEED
            .iter()
            .flat_map(|class| class.alphabet().as_str().chars())
            .collect();
        let allowed: HashSet<char> = ALLOWED_ALL.as_str().chars().collect();
        assert_eq!(union, allowed);
        assert_eq!(allowed.len(), ALLOWED_ALL.len());
    }

    #[test]
    fn test_letters_only_is_lower_then_upper() {
        assert_eq!(
            LETTERS_ONLY.as_str(),
            format!("{}{}", LOWERCASE.as_str(), UPPERCASE.as_str())
        );
    }

    #[test]
    fn test_classes_are_disjoint() {
        for c in ALLOWED_ALL.as_str().chars() {
            let owners = CharClass::GUARANTEED
                .iter()
                .filter(|class| class.alphabet().contains(c))
                .count();
            assert_eq!(owners, 1, "{c} belongs to {owners} classes");
        }
    }

    #[test]
    fn test_class_of() {
        assert_eq!(CharClass::of('q'), Some(CharClass::Lowercase));
        assert_eq!(CharClass::of('Q'), Some(CharClass::Uppercase));
        assert_eq!(CharClass::of('_'), Some(CharClass::Symbol));
        assert_eq!(CharClass::of('0'), Some(CharClass::Digit));
        assert_eq!(CharClass::of('-'), None);
        assert_eq!(CharClass::of('é'), None);
    }

    #[test]
    fn test_pick_maps_draw_to_position() {
        let seed = b"seed";
        let mut extractor = IndexExtractor::new();
        let mut reference = IndexExtractor::new();

        let picked = SYMBOLS.pick(&mut extractor, seed);
        let index = reference.draw(seed, NonZeroUsize::new(SYMBOLS.len()).unwrap());
        assert_eq!(Some(picked), SYMBOLS.as_str().chars().nth(index));
    }
}
