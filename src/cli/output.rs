//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ThesaurusArgs};
use crate::error::Result;
use crate::registry::RegistryStats;
use crate::thesaurus::Word;

/// Result structure for a synonym lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynonymsResult {
    pub word: Word,
    pub synonyms: Vec<Word>,
}

/// Result structure for listing every word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordsResult {
    pub words: Vec<Word>,
}

/// Result structure for loading a groups file.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoadResult {
    pub groups_loaded: usize,
    pub word_count: usize,
    pub duration_ms: u64,
}

/// Human-readable rendering of a result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

impl HumanOutput for SynonymsResult {
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.synonyms.is_empty() {
            return writeln!(out, "The word '{}' doesn't have any synonyms", self.word);
        }
        writeln!(out, "Synonyms for '{}' are:", self.word)?;
        for synonym in &self.synonyms {
            writeln!(out, "{synonym}")?;
        }
        Ok(())
    }
}

impl HumanOutput for WordsResult {
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.words.is_empty() {
            return writeln!(
                out,
                "The thesaurus does not contain any words! Try adding some"
            );
        }
        for word in &self.words {
            writeln!(out, "{word}")?;
        }
        Ok(())
    }
}

impl HumanOutput for LoadResult {
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "Loaded {} groups ({} words) in {}ms",
            self.groups_loaded, self.word_count, self.duration_ms
        )
    }
}

impl HumanOutput for RegistryStats {
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Registry Statistics:")?;
        writeln!(out, "════════════════════")?;
        writeln!(out, "Words: {}", self.word_count)?;
        writeln!(out, "Synonym links: {}", self.relation_count)?;
        writeln!(out, "Largest synonym set: {}", self.largest_set)?;
        writeln!(out, "Shards: {}", self.shard_count)
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T, W>(out: &mut W, result: &T, args: &ThesaurusArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => {
            if args.pretty {
                serde_json::to_writer_pretty(&mut *out, result)?;
            } else {
                serde_json::to_writer(&mut *out, result)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn render<T: Serialize + HumanOutput>(result: &T, argv: &[&str]) -> String {
        let args = ThesaurusArgs::try_parse_from(argv).unwrap();
        let mut buffer = Vec::new();
        output_result(&mut buffer, result, &args).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_human_synonyms() {
        let result = SynonymsResult {
            word: "cat".to_string(),
            synonyms: vec!["feline".to_string(), "kitty".to_string()],
        };
        assert_eq!(
            render(&result, &["thesaurus"]),
            "Synonyms for 'cat' are:\nfeline\nkitty\n"
        );

        let empty = SynonymsResult {
            word: "dog".to_string(),
            synonyms: Vec::new(),
        };
        assert_eq!(
            render(&empty, &["thesaurus"]),
            "The word 'dog' doesn't have any synonyms\n"
        );
    }

    #[test]
    fn test_json_words() {
        let result = WordsResult {
            words: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            render(&result, &["thesaurus", "--format", "json"]),
            "{\"words\":[\"a\",\"b\"]}\n"
        );
    }

    #[test]
    fn test_human_empty_words() {
        let result = WordsResult { words: Vec::new() };
        assert!(render(&result, &["thesaurus"]).starts_with("The thesaurus does not contain"));
    }
}
