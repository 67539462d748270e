//! Terminal output formatting
//!
//! Display utilities for the line-oriented game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_message, print_status};
