//! Word partitioning across registry shards.

use std::hash::{Hash, Hasher};

use ahash::AHasher;

/// Hash-based word partitioner.
///
/// The same word always maps to the same shard, which is what keeps a key
/// and its synonym set under a single lock.
#[derive(Debug, Clone)]
pub struct WordPartitioner {
    /// Number of partitions.
    partition_count: usize,
}

impl WordPartitioner {
    /// Create a new partitioner. A count of zero is treated as one.
    pub fn new(partition_count: usize) -> Self {
        Self {
            partition_count: partition_count.max(1),
        }
    }

    /// Get the total number of partitions.
    pub fn partition_count(&self) -> usize {
        self.partition_count
    }

    /// Determine which partition a word belongs to (0-based).
    pub fn partition(&self, word: &str) -> usize {
        if self.partition_count == 1 {
            return 0;
        }
        // AHasher::default() uses fixed keys, so this is stable for the
        // lifetime of the process.
        let mut hasher = AHasher::default();
        word.hash(&mut hasher);
        (hasher.finish() % self.partition_count as u64) as usize
    }
}
