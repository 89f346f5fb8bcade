//! Derived cipherkey value

use crate::alphabet::CharClass;
use crate::generator::CipherkeyGenerator;
use crate::sanitizer::Sanitizer;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A derived password
///
/// The string is wiped when the value is dropped and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Cipherkey {
    value: String,
}

impl Cipherkey {
    /// Builder for deriving a cipherkey of `length` characters
    #[must_use]
    pub fn generator(length: usize) -> CipherkeyGenerator {
        CipherkeyGenerator::new(length)
    }

    /// Builder for stripping symbols or digits from an existing key
    #[must_use]
    pub fn sanitizer() -> Sanitizer {
        Sanitizer::new()
    }

    /// The password text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Number of characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Whether the key holds no characters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Iterate over the characters
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.value.chars()
    }

    /// Take the password text, leaving nothing behind to wipe
    #[must_use]
    pub fn into_string(mut self) -> String {
        std::mem::take(&mut self.value)
    }

    /// Whether at least one character belongs to `class`
    #[must_use]
    pub fn has_class(&self, class: CharClass) -> bool {
        self.chars().any(|c| class.alphabet().contains(c))
    }

    /// Whether every guaranteed class is present
    #[must_use]
    pub fn covers_all_classes(&self) -> bool {
        CharClass::GUARANTEED
            .into_iter()
            .all(|class| self.has_class(class))
    }

    /// Copy with symbols and/or digits replaced by letters
    #[must_use]
    pub fn sanitized(&self, remove_symbols: bool, remove_numbers: bool) -> Cipherkey {
        crate::sanitizer::sanitize(self.as_str(), remove_symbols, remove_numbers)
    }
}

impl From<String> for Cipherkey {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl AsRef<str> for Cipherkey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Cipherkey {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Cipherkey {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl std::fmt::Debug for Cipherkey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cipherkey")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
