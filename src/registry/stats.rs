//! Registry statistics.

use serde::{Deserialize, Serialize};

use crate::registry::sharded_map::ShardedMap;

/// A point-in-time summary of a registry.
///
/// Collected one shard at a time, so under concurrent writes the numbers may
/// mix shards observed at slightly different moments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Number of distinct words (keys).
    pub word_count: usize,
    /// Total number of directed key → synonym links.
    pub relation_count: usize,
    /// Size of the largest synonym set.
    pub largest_set: usize,
    /// Number of lock shards.
    pub shard_count: usize,
}

impl RegistryStats {
    pub(crate) fn collect(map: &ShardedMap) -> Self {
        let mut stats = RegistryStats {
            shard_count: map.shard_count(),
            ..Default::default()
        };
        map.for_each(|_, set| {
            stats.word_count += 1;
            stats.relation_count += set.len();
            stats.largest_set = stats.largest_set.max(set.len());
        });
        stats
    }
}
