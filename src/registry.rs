//! Concurrent synonym registry for Thesaurus.
//!
//! The registry maps every known word to the set of words declared
//! synonymous with it. The map is split into hash-partitioned shards so
//! that writers touching different words rarely contend for the same lock.

pub mod config;
pub mod partitioner;
pub mod sharded_map;
pub mod stats;
pub mod synonym_registry;

// Re-export commonly used types
pub use config::*;
pub use partitioner::*;
pub use sharded_map::*;
pub use stats::*;
pub use synonym_registry::*;
