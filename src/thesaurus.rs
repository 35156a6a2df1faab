//! The abstract synonym registry interface.
//!
//! Front ends depend on [`Thesaurus`] rather than on a concrete registry so
//! that the storage strategy can change without touching them.

use crate::error::Result;

/// A word is opaque text. Two words are equal iff their text is equal.
pub type Word = String;

/// A simple, thread-safe thesaurus.
///
/// Absent arguments are modelled with `Option` so that callers bridging from
/// nullable sources (console input, foreign callers) get the same
/// [`NullInput`](crate::error::ThesaurusError::NullInput) and
/// [`InvalidInput`](crate::error::ThesaurusError::InvalidInput) errors as any
/// other caller.
pub trait Thesaurus: Send + Sync {
    /// Declare every word of `group` synonymous with every other word of it.
    ///
    /// Fails with `NullInput` when `group` is `None`, and with `InvalidInput`
    /// when it contains a `None` element or has fewer than two elements.
    /// The element count is taken on the raw input, duplicates included.
    fn add_synonyms(&self, group: Option<&[Option<&str>]>) -> Result<()>;

    /// Get the synonyms of `word`, or an empty list when the word is unknown.
    ///
    /// Fails with `NullInput` when `word` is `None`.
    fn get_synonyms(&self, word: Option<&str>) -> Result<Vec<Word>>;

    /// Get every word stored in the thesaurus, in no particular order.
    fn words(&self) -> Vec<Word>;
}
