//! The concurrent synonym registry.

use ahash::AHashSet;
use log::{debug, error, warn};
use rayon::prelude::*;

use crate::error::{Result, ThesaurusError};
use crate::registry::config::RegistryConfig;
use crate::registry::sharded_map::ShardedMap;
use crate::registry::stats::RegistryStats;
use crate::thesaurus::{Thesaurus, Word};

/// A thread-safe, in-memory synonym registry.
///
/// Every word of a submitted group becomes a key whose synonym set gains all
/// other words of that group. Relationships are never transitive across
/// groups: adding `{a, b}` and then `{b, c}` leaves `a` and `c` unrelated.
///
/// # Examples
///
/// ```
/// use thesaurus::registry::SynonymRegistry;
///
/// let registry = SynonymRegistry::new();
/// registry.add_group(&["cat", "feline", "kitty"]).unwrap();
///
/// let mut synonyms = registry.synonyms_of("cat");
/// synonyms.sort();
/// assert_eq!(synonyms, vec!["feline", "kitty"]);
/// ```
#[derive(Debug)]
pub struct SynonymRegistry {
    map: ShardedMap,
}

impl SynonymRegistry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self {
            map: ShardedMap::new(RegistryConfig::default().shard_count),
        }
    }

    /// Create an empty registry from a validated configuration.
    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            map: ShardedMap::new(config.shard_count),
        })
    }

    /// Add a group of words that cannot contain absent elements.
    pub fn add_group<S: AsRef<str>>(&self, words: &[S]) -> Result<()> {
        let group: Vec<Option<&str>> = words.iter().map(|w| Some(w.as_ref())).collect();
        self.add_synonyms(Some(group.as_slice()))
    }

    /// Add many groups, spreading the work over the rayon thread pool.
    ///
    /// Every group is validated before any of them is applied, so an invalid
    /// group leaves the registry untouched.
    pub fn add_groups<G, S>(&self, groups: &[G]) -> Result<()>
    where
        G: AsRef<[S]> + Sync,
        S: AsRef<str> + Sync,
    {
        for (index, group) in groups.iter().enumerate() {
            if group.as_ref().len() < 2 {
                error!("Failed to add synonym group #{index}: input count was less than 2");
                return Err(ThesaurusError::invalid_input(format!(
                    "group #{index} has fewer than two elements"
                )));
            }
        }

        debug!("Adding {} synonym groups...", groups.len());
        groups.par_iter().for_each(|group| {
            let words: Vec<&str> = group.as_ref().iter().map(|w| w.as_ref()).collect();
            self.merge_group(&words);
        });
        debug!("Finished adding {} synonym groups", groups.len());
        Ok(())
    }

    /// Get the synonyms of a word that cannot be absent.
    pub fn synonyms_of(&self, word: &str) -> Vec<Word> {
        let synonyms: Option<Vec<Word>> = self
            .map
            .read_word(word, |set| set.map(|set| set.iter().cloned().collect()));
        synonyms.unwrap_or_else(|| {
            warn!("Requested synonyms for word that is not present in the thesaurus; '{word}'");
            Vec::new()
        })
    }

    /// Whether `word` is a key of the registry.
    pub fn contains(&self, word: &str) -> bool {
        self.map.read_word(word, |set| set.is_some())
    }

    /// Number of distinct words in the registry.
    pub fn word_count(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats::collect(&self.map)
    }

    fn validate<'a>(group: Option<&[Option<&'a str>]>) -> Result<Vec<&'a str>> {
        let Some(group) = group else {
            error!("Failed to add synonyms: input was null");
            return Err(ThesaurusError::null_input("group"));
        };

        let words: Option<Vec<&str>> = group.iter().copied().collect();
        let Some(words) = words else {
            error!("Failed to add synonyms: input contained null values");
            return Err(ThesaurusError::invalid_input("group contains null values"));
        };

        if words.len() < 2 {
            error!("Failed to add synonyms: input count was less than 2");
            return Err(ThesaurusError::invalid_input(
                "group has fewer than two elements",
            ));
        }

        Ok(words)
    }

    /// Union `group \ {w}` into the set of every word `w` of the group.
    ///
    /// Words are bucketed by shard and each shard lock is taken once. Only
    /// one lock is held at a time.
    fn merge_group(&self, group: &[&str]) {
        let distinct: AHashSet<&str> = group.iter().copied().collect();

        let mut buckets: Vec<Vec<&str>> = vec![Vec::new(); self.map.shard_count()];
        for &word in &distinct {
            buckets[self.map.shard_of(word)].push(word);
        }

        for (shard, keys) in buckets.iter().enumerate() {
            if keys.is_empty() {
                continue;
            }

            self.map.write_shard(shard, |entries| {
                for &key in keys {
                    let others = distinct
                        .iter()
                        .filter(|&&word| word != key)
                        .map(|&word| word.to_string());
                    match entries.get_mut(key) {
                        Some(set) => set.extend(others),
                        None => {
                            entries.insert(key.to_string(), others.collect());
                        }
                    }
                }
            });

            debug!(
                "Added or updated {} synonyms for {} word(s) in shard {shard}",
                distinct.len() - 1,
                keys.len()
            );
        }
    }
}

impl Default for SynonymRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Thesaurus for SynonymRegistry {
    fn add_synonyms(&self, group: Option<&[Option<&str>]>) -> Result<()> {
        debug!("Starting adding synonyms...");
        let words = Self::validate(group)?;
        self.merge_group(&words);
        debug!("Finished adding synonyms");
        Ok(())
    }

    fn get_synonyms(&self, word: Option<&str>) -> Result<Vec<Word>> {
        let Some(word) = word else {
            error!("Failed to get synonyms: input was null");
            return Err(ThesaurusError::null_input("word"));
        };
        Ok(self.synonyms_of(word))
    }

    fn words(&self) -> Vec<Word> {
        self.map.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<Word>) -> Vec<Word> {
        words.sort();
        words
    }

    #[test]
    fn test_add_and_get_synonyms() {
        let registry = SynonymRegistry::new();
        registry.add_group(&["a", "b", "c", "d"]).unwrap();

        assert_eq!(sorted(registry.synonyms_of("a")), vec!["b", "c", "d"]);
        assert_eq!(sorted(registry.synonyms_of("d")), vec!["a", "b", "c"]);
        assert_eq!(sorted(registry.words()), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_validation_order() {
        let registry = SynonymRegistry::new();

        assert!(registry.add_synonyms(None).unwrap_err().is_null_input());

        // A null element is reported before the size check.
        let err = registry.add_synonyms(Some(&[None][..])).unwrap_err();
        match err {
            ThesaurusError::InvalidInput(msg) => assert!(msg.contains("null")),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }

        let err = registry.add_synonyms(Some(&[Some("a")][..])).unwrap_err();
        match err {
            ThesaurusError::InvalidInput(msg) => assert!(msg.contains("fewer than two")),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }

        assert!(registry.add_synonyms(Some(&[] as &[Option<&str>])).unwrap_err().is_invalid_input());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_synonyms_null_and_unknown() {
        let registry = SynonymRegistry::new();
        assert!(registry.get_synonyms(None).unwrap_err().is_null_input());
        assert!(registry.get_synonyms(Some("missing")).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_word_group_registers_key_without_synonyms() {
        let registry = SynonymRegistry::new();
        registry.add_group(&["a", "a"]).unwrap();

        assert!(registry.contains("a"));
        assert_eq!(registry.words(), vec!["a"]);
        assert!(registry.synonyms_of("a").is_empty());
    }

    #[test]
    fn test_duplicates_inside_group_collapse() {
        let registry = SynonymRegistry::new();
        registry.add_group(&["a", "b", "a", "b", "c"]).unwrap();

        assert_eq!(sorted(registry.synonyms_of("a")), vec!["b", "c"]);
        assert_eq!(registry.word_count(), 3);
    }

    #[test]
    fn test_single_shard_behaves_like_many() {
        let coarse = SynonymRegistry::with_config(RegistryConfig::with_shards(1)).unwrap();
        let sharded = SynonymRegistry::with_config(RegistryConfig::with_shards(16)).unwrap();

        for registry in [&coarse, &sharded] {
            registry.add_group(&["a", "b"]).unwrap();
            registry.add_group(&["b", "c"]).unwrap();
        }

        for word in ["a", "b", "c"] {
            assert_eq!(
                sorted(coarse.synonyms_of(word)),
                sorted(sharded.synonyms_of(word))
            );
        }
        assert_eq!(sorted(sharded.synonyms_of("b")), vec!["a", "c"]);
        // No transitive closure
        assert_eq!(sharded.synonyms_of("a"), vec!["b"]);
    }

    #[test]
    fn test_with_config_rejects_zero_shards() {
        let result = SynonymRegistry::with_config(RegistryConfig::with_shards(0));
        assert!(matches!(result, Err(ThesaurusError::InvalidConfig(_))));
    }

    #[test]
    fn test_add_groups_is_all_or_nothing() {
        let registry = SynonymRegistry::new();
        let groups = vec![vec!["a", "b"], vec!["c"]];
        assert!(registry.add_groups(&groups).unwrap_err().is_invalid_input());
        assert!(registry.is_empty());

        let groups = vec![vec!["a", "b"], vec!["a", "c"], vec!["d", "e", "f"]];
        registry.add_groups(&groups).unwrap();
        assert_eq!(sorted(registry.synonyms_of("a")), vec!["b", "c"]);
        assert_eq!(registry.word_count(), 6);
    }

    #[test]
    fn test_stats() {
        let registry = SynonymRegistry::with_config(RegistryConfig::with_shards(4)).unwrap();
        registry.add_group(&["a", "b", "c"]).unwrap();
        registry.add_group(&["a", "d"]).unwrap();

        let stats = registry.stats();
        assert_eq!(stats.word_count, 4);
        // a: {b, c, d}, b: {a, c}, c: {a, b}, d: {a}
        assert_eq!(stats.relation_count, 8);
        assert_eq!(stats.largest_set, 3);
        assert_eq!(stats.shard_count, 4);
    }
}
