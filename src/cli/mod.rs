//! Command Line Interface for the Thesaurus registry.

pub mod args;
pub mod commands;
pub mod output;
pub mod session;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
pub use session::*;
