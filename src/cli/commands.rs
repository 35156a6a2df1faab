//! Command implementations for the Thesaurus CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::cli::session::{InteractiveSession, parse_group};
use crate::error::Result;
use crate::registry::{RegistryConfig, SynonymRegistry};
use crate::thesaurus::Thesaurus;

/// Execute a CLI command.
pub fn execute_command(args: ThesaurusArgs) -> Result<()> {
    let registry = build_registry(&args)?;

    match &args.command {
        None | Some(Command::Interactive) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            InteractiveSession::new(&registry, &args, stdin.lock(), stdout.lock()).run()
        }
        Some(Command::Batch(batch_args)) => {
            let stdout = io::stdout();
            run_batch(&registry, batch_args, &args, &mut stdout.lock())
        }
    }
}

/// Build a registry from the configuration file and command line overrides.
pub fn build_registry(args: &ThesaurusArgs) -> Result<SynonymRegistry> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading registry configuration from: {}", path.display());
            RegistryConfig::from_file(path)?
        }
        None => RegistryConfig::default(),
    };

    if let Some(shards) = args.shards {
        config.shard_count = shards;
    }

    info!("Creating registry with {} shards", config.shard_count);
    SynonymRegistry::with_config(config)
}

/// Read one synonym group per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn load_groups<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut groups = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        groups.push(parse_group(trimmed));
    }

    Ok(groups)
}

/// Load a groups file into `registry` and print the requested lookups.
pub fn run_batch<W: Write>(
    registry: &SynonymRegistry,
    batch_args: &BatchArgs,
    cli_args: &ThesaurusArgs,
    out: &mut W,
) -> Result<()> {
    let start_time = Instant::now();
    let groups = load_groups(&batch_args.groups)?;
    registry.add_groups(&groups)?;
    let duration = start_time.elapsed();

    info!(
        "Loaded {} groups from {}",
        groups.len(),
        batch_args.groups.display()
    );

    if cli_args.verbosity() > 1 {
        output_result(
            out,
            &LoadResult {
                groups_loaded: groups.len(),
                word_count: registry.word_count(),
                duration_ms: duration.as_millis() as u64,
            },
            cli_args,
        )?;
    }

    for word in &batch_args.words {
        let mut synonyms = registry.get_synonyms(Some(word.as_str()))?;
        synonyms.sort();
        output_result(
            out,
            &SynonymsResult {
                word: word.clone(),
                synonyms,
            },
            cli_args,
        )?;
    }

    if batch_args.list_words {
        let mut words = registry.words();
        words.sort();
        output_result(out, &WordsResult { words }, cli_args)?;
    }

    if batch_args.stats {
        output_result(out, &registry.stats(), cli_args)?;
    }

    Ok(())
}
