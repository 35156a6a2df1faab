//! Interactive console menu over any [`Thesaurus`].

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::cli::args::ThesaurusArgs;
use crate::cli::output::{SynonymsResult, WordsResult, output_result};
use crate::error::{Result, ThesaurusError};
use crate::thesaurus::Thesaurus;

const MENU: &str = "Choose an option:\n\
                    1. Add synonyms to the thesaurus\n\
                    2. List synonyms for a word\n\
                    3. List all added words\n\
                    4. Exit";

/// Split a comma-separated line into words.
///
/// All spaces are removed before splitting, so `"cat, feline"` yields
/// `["cat", "feline"]`. Empty entries are kept as empty words.
pub fn parse_group(line: &str) -> Vec<String> {
    line.replace(' ', "").split(',').map(str::to_string).collect()
}

/// A menu-driven session reading commands from `input` and writing to `output`.
pub struct InteractiveSession<'a, R, W> {
    thesaurus: &'a dyn Thesaurus,
    args: &'a ThesaurusArgs,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> InteractiveSession<'a, R, W> {
    pub fn new(thesaurus: &'a dyn Thesaurus, args: &'a ThesaurusArgs, input: R, output: W) -> Self {
        Self {
            thesaurus,
            args,
            input,
            output,
        }
    }

    /// Run the menu until the user exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting interactive session");
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            let outcome = match choice.trim() {
                "1" => self.add_synonyms(),
                "2" => self.list_synonyms(),
                "3" => self.list_words(),
                "4" | "q" | "quit" | "exit" => break,
                other => {
                    writeln!(self.output, "Unknown option '{other}'")?;
                    Ok(())
                }
            };

            match outcome {
                Ok(()) => {}
                Err(e @ ThesaurusError::Io(_)) => return Err(e),
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
        }
        info!("Exiting interactive session");
        Ok(())
    }

    fn add_synonyms(&mut self) -> Result<()> {
        loop {
            writeln!(
                self.output,
                "Input synonyms in a comma-separated list (ex 'cat,feline,kitty'):"
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            let group = parse_group(&line);
            if group.len() < 2 {
                writeln!(self.output, "Input 2 or more words")?;
                continue;
            }

            let words: Vec<Option<&str>> = group.iter().map(|w| Some(w.as_str())).collect();
            match self.thesaurus.add_synonyms(Some(words.as_slice())) {
                Ok(()) => {
                    debug!("Added synonym group of {} words", group.len());
                    writeln!(self.output, "Added {} synonyms", group.len())?;
                    return Ok(());
                }
                Err(e) if e.is_invalid_input() => {
                    writeln!(self.output, "Input 2 or more words")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn list_synonyms(&mut self) -> Result<()> {
        writeln!(self.output, "Input the word you want the synonyms of:")?;
        let Some(word) = self.read_line()? else {
            return Ok(());
        };

        let mut synonyms = self.thesaurus.get_synonyms(Some(word.as_str()))?;
        synonyms.sort();
        output_result(
            &mut self.output,
            &SynonymsResult { word, synonyms },
            self.args,
        )
    }

    fn list_words(&mut self) -> Result<()> {
        let mut words = self.thesaurus.words();
        words.sort();
        output_result(&mut self.output, &WordsResult { words }, self.args)
    }

    /// Read one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
