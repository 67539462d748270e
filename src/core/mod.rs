//! Core domain types for the game
//!
//! Pure types with no game-state dependencies: secret words and the guess evaluator.

mod feedback;
mod word;

pub use feedback::{Classification, Feedback, evaluate, letter_statuses};
pub use word::{SecretWord, WordError};
