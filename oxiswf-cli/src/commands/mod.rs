//! Command implementations for OxiSWF CLI.

pub mod check;
pub mod completions;
pub mod dissect;

pub use check::cmd_check;
pub use completions::cmd_completions;
pub use dissect::cmd_dissect;
