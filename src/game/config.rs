//! Game configuration
//!
//! All tunables of a session live here so front-ends and tests can override them.

use super::flavor::FlavorText;
use crate::core::SecretWord;
use crate::wordlists::{WORDS, loader::words_from_slice};
use std::fmt;
use std::time::Duration;

/// Attempts allowed per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Life tokens at session start
pub const DEFAULT_LIVES: usize = 15;

/// Pause between a round outcome and the next round
pub const DEFAULT_ROUND_DELAY: Duration = Duration::from_millis(3000);

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyWordList,
    ZeroAttempts,
    ZeroLives,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list must contain at least one valid word"),
            Self::ZeroAttempts => write!(f, "At least one attempt per round is required"),
            Self::ZeroLives => write!(f, "At least one life is required"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Session configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    words: Vec<SecretWord>,
    pub max_attempts: usize,
    pub lives: usize,
    pub round_delay: Duration,
    pub flavor: FlavorText,
}

impl GameConfig {
    /// Create a configuration for the given ordered word list with default tunables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<SecretWord>) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        Ok(Self {
            words,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            lives: DEFAULT_LIVES,
            round_delay: DEFAULT_ROUND_DELAY,
            flavor: FlavorText::default(),
        })
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_lives(mut self, lives: usize) -> Self {
        self.lives = lives;
        self
    }

    #[must_use]
    pub const fn with_round_delay(mut self, round_delay: Duration) -> Self {
        self.round_delay = round_delay;
        self
    }

    #[must_use]
    pub fn with_flavor(mut self, flavor: FlavorText) -> Self {
        self.flavor = flavor;
        self
    }

    /// Check the numeric tunables
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        Ok(())
    }

    /// The ordered word list
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }
}

impl Default for GameConfig {
    /// Embedded word list with default tunables
    fn default() -> Self {
        Self {
            words: words_from_slice(WORDS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            lives: DEFAULT_LIVES,
            round_delay: DEFAULT_ROUND_DELAY,
            flavor: FlavorText::default(),
        }
    }
}
