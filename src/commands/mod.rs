//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components to perform user tasks.

pub mod generate;

// Re-export main command functions
pub use generate::{execute_generate, validate_args, GenerateArgs};
