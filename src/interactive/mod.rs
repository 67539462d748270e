//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Command, map_key, run_tui};
pub use rendering::{class_style, ui};
