//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod tracing_setup;

pub use commands::{Cli, Commands, ContactAction, FinanceAction, NoteAction, TaskAction};
pub use tracing_setup::{init_tracing, TracingConfig};
