//! Life tokens
//!
//! The pool has a fixed number of slots. Each slot starts alive with its own
//! icon and turns into a ghost when spent. Slots are never revived except by a
//! full reset.

use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Marker shown for a spent life
pub const GHOST: &str = "👻";

/// Alive count at or below which the player is considered low on lives
pub const LOW_LIVES_THRESHOLD: usize = 2;

/// Icons handed out to the slots, in order; reused cyclically for larger pools
pub const DEFAULT_ICONS: &[&str] = &[
    "🐱", "🧙", "🦊", "🥳", "👨‍🎤", "🤓", "🐸", "🤠", "🌝", "😘", "🐙", "👸", "🐹", "🐥", "👽",
];

/// One slot in the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeToken {
    Alive(&'static str),
    Spent,
}

impl LifeToken {
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive(_))
    }

    /// Icon to display for this slot
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Alive(icon) => icon,
            Self::Spent => GHOST,
        }
    }
}

/// Fixed-size pool of life tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivesPool {
    tokens: Vec<LifeToken>,
}

impl LivesPool {
    /// Create a pool of `size` alive tokens
    #[must_use]
    pub fn new(size: usize) -> Self {
        let tokens = DEFAULT_ICONS
            .iter()
            .cycle()
            .take(size)
            .map(|&icon| LifeToken::Alive(icon))
            .collect();
        Self { tokens }
    }

    /// Every slot, in display order
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[LifeToken] {
        &self.tokens
    }

    /// Total number of slots
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn alive(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_alive()).count()
    }

    #[must_use]
    pub fn spent(&self) -> usize {
        self.size() - self.alive()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.tokens.iter().all(|t| !t.is_alive())
    }

    #[must_use]
    pub fn is_low(&self) -> bool {
        self.alive() <= LOW_LIVES_THRESHOLD
    }

    /// Spend one alive token chosen uniformly at random
    ///
    /// Returns the slot index that was spent, or `None` if nothing was alive.
    pub fn spend_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        let alive: Vec<usize> = self
            .tokens
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.is_alive().then_some(i))
            .collect();

        let &index = alive.choose(rng)?;
        self.tokens[index] = LifeToken::Spent;
        Some(index)
    }

    /// Bring every slot back to life with its original icon
    pub fn reset(&mut self) {
        *self = Self::new(self.size());
    }
}

impl fmt::Display for LivesPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icons: Vec<&str> = self.tokens.iter().map(|t| t.icon()).collect();
        write!(f, "{}", icons.join(" "))
    }
}
