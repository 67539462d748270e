//! Word lists for the game
//!
//! Provides the embedded secret word list, compiled into the binary, and a loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
