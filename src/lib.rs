//! Phirldle
//!
//! A Wordle-style word guessing game where wrong guesses cost lives and the
//! rounds walk through a fixed list of words.
//!
//! # Quick Start
//!
//! ```rust
//! use phirldle::game::{GameConfig, Input, InputOutcome, Session};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut session = Session::new(GameConfig::default(), StdRng::seed_from_u64(7)).unwrap();
//! assert_eq!(session.secret().unwrap().text(), "FALL");
//!
//! for c in "FALL".chars() {
//!     session.handle_input(Input::Letter(c));
//! }
//! assert_eq!(session.handle_input(Input::Submit), InputOutcome::Won);
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
