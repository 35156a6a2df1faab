//! Lock-sharded word → synonym set map.
//!
//! Every shard is an [`AHashMap`] behind its own [`RwLock`]. All access goes
//! through closures that run while the shard lock is held, so a key's set can
//! only be observed before or after a whole mutation, never halfway through.

use ahash::{AHashMap, AHashSet};
use parking_lot::RwLock;

use crate::registry::partitioner::WordPartitioner;

/// The synonym set stored for one key.
pub type SynonymSet = AHashSet<String>;

/// One shard of the map.
pub type Shard = AHashMap<String, SynonymSet>;

/// A word-keyed map split into independently locked shards.
#[derive(Debug)]
pub struct ShardedMap {
    partitioner: WordPartitioner,
    shards: Vec<RwLock<Shard>>,
}

impl ShardedMap {
    /// Create an empty map with `shard_count` shards (at least one).
    pub fn new(shard_count: usize) -> Self {
        let partitioner = WordPartitioner::new(shard_count);
        let shards = (0..partitioner.partition_count())
            .map(|_| RwLock::new(Shard::default()))
            .collect();
        Self {
            partitioner,
            shards,
        }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Index of the shard that owns `word`.
    pub fn shard_of(&self, word: &str) -> usize {
        self.partitioner.partition(word)
    }

    /// Run `f` with exclusive access to one shard.
    pub fn write_shard<R>(&self, shard: usize, f: impl FnOnce(&mut Shard) -> R) -> R {
        let mut guard = self.shards[shard].write();
        f(&mut guard)
    }

    /// Run `f` with shared access to one shard.
    pub fn read_shard<R>(&self, shard: usize, f: impl FnOnce(&Shard) -> R) -> R {
        let guard = self.shards[shard].read();
        f(&guard)
    }

    /// Run `f` with shared access to the shard owning `word`.
    pub fn read_word<R>(&self, word: &str, f: impl FnOnce(Option<&SynonymSet>) -> R) -> R {
        self.read_shard(self.shard_of(word), |shard| f(shard.get(word)))
    }

    /// Visit every entry, one shard lock at a time.
    ///
    /// Shards are visited in order and each one is released before the next is
    /// taken, so the visit is consistent per key but not across shards.
    pub fn for_each(&self, mut f: impl FnMut(&str, &SynonymSet)) {
        for shard in &self.shards {
            let guard = shard.read();
            for (word, set) in guard.iter() {
                f(word, set);
            }
        }
    }

    /// All keys currently in the map.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.len());
        for shard in &self.shards {
            keys.extend(shard.read().keys().cloned());
        }
        keys
    }

    /// Number of keys currently in the map.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.read().is_empty())
    }
}
