//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
pub use rendering::{hint_style, ui};
