//! # Thesaurus
//!
//! A concurrent, in-memory synonym registry for Rust.
//!
//! ## Features
//!
//! - Thread-safe registry with per-key atomic updates
//! - Hash-sharded locking so writers on different words rarely contend
//! - Non-transitive union semantics: only words submitted together are synonyms
//! - Parallel bulk loading
//! - Interactive and batch console front end

pub mod cli;
pub mod error;
pub mod registry;
pub mod thesaurus;

pub mod prelude {
    pub use crate::error::{Result, ThesaurusError};
    pub use crate::registry::{RegistryConfig, RegistryStats, SynonymRegistry};
    pub use crate::thesaurus::{Thesaurus, Word};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
