//! Terminal front end: key mapping, the interactive loop, clipboard.

pub mod clipboard;
pub mod keymap;
pub mod repl;

pub use keymap::{is_key_script, key_event};
pub use repl::{print_frame, run_interactive, run_script};
