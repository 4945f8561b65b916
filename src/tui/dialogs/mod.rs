//! Dialog modules for the TUI

pub mod wizard;
