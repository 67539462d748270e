//! Secret word representation
//!
//! A `SecretWord` is a validated, uppercase ASCII word. Its length sets the
//! expected guess length for the round it is played in.

use rustc_hash::FxHashMap;
use std::fmt;

/// A secret word drawn from the word list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretWord {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// Surrounding whitespace is trimmed and the word is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use phirldle::core::SecretWord;
    ///
    /// let word = SecretWord::new("fall").unwrap();
    /// assert_eq!(word.text(), "FALL");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("f4ll").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into();
        let text = text.trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        // Checked before case folding: full Unicode uppercasing can turn
        // non-ASCII letters into ASCII ones ("ß" becomes "SS").
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters, which is also the required guess length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the evaluator to account for duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for SecretWord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
