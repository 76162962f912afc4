//! `sense`: hybrid word-sense disambiguation from the command line.
//!
//! ```text
//! sense disambiguate --sentence "I went to the bank to deposit money." --word bank
//! sense words
//! ```

use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand};
use sense_lexicon::Dictionary;
use sense_rank::{Disambiguation, Disambiguator};
use sense_wiki::{cache_dir, enrich, CachedProvider, DiskCache, Enrichment, WikipediaProvider};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "sense")]
#[command(about = "Hybrid word-sense disambiguation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only errors (stdout is reserved for results)
    #[arg(long, global = true)]
    quiet: bool,

    /// Lexicon JSON file (defaults to the built-in inventory)
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the senses of a word against a sentence
    Disambiguate(DisambiguateArgs),

    /// List disambiguation targets: words in a sentence, or the whole lexicon
    Words(WordsArgs),
}

#[derive(clap::Args)]
struct DisambiguateArgs {
    /// Sentence providing the context
    #[arg(short, long)]
    sentence: String,

    /// Target word to disambiguate
    #[arg(short, long)]
    word: String,

    /// Emit the full result as JSON
    #[arg(long)]
    json: bool,

    /// Skip the encyclopedic summary lookup
    #[arg(long)]
    no_wiki: bool,

    /// Bypass the on-disk summary cache
    #[arg(long)]
    no_cache: bool,
}

#[derive(clap::Args)]
struct WordsArgs {
    /// List the words of this sentence instead of the lexicon headwords
    #[arg(short, long)]
    sentence: Option<String>,

    /// Emit the word list as JSON
    #[arg(long)]
    json: bool,
}

/// Full query result as printed by `--json`.
#[derive(Serialize)]
struct Report {
    sentence: String,
    #[serde(flatten)]
    disambiguation: Disambiguation,
    #[serde(skip_serializing_if = "Option::is_none")]
    enrichment: Option<Enrichment>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .filter_module("ort", log::LevelFilter::Off) // Silence ONNX Runtime
        .init();

    let lexicon = load_lexicon(cli.lexicon.as_deref())?;

    match cli.command {
        Commands::Disambiguate(args) => run_disambiguate(lexicon, args).await,
        Commands::Words(args) => run_words(&lexicon, &args),
    }
}

fn load_lexicon(path: Option<&std::path::Path>) -> Result<Dictionary> {
    match path {
        Some(path) => sense_lexicon::from_path(path)
            .with_context(|| format!("Failed to load lexicon from {}", path.display())),
        None => sense_lexicon::builtin().context("Built-in lexicon is invalid"),
    }
}

async fn run_disambiguate(lexicon: Dictionary, args: DisambiguateArgs) -> Result<()> {
    let scorer = sense_neural::scorer_from_env().context("Failed to initialize the scorer")?;
    let disambiguator = Disambiguator::new(Arc::new(lexicon), scorer);

    let disambiguation = disambiguator
        .disambiguate(&args.sentence, &args.word)
        .await
        .context("Disambiguation failed")?;

    let enrichment = if args.no_wiki {
        None
    } else {
        Some(lookup_enrichment(&args).await?)
    };

    let report = Report {
        sentence: args.sentence.clone(),
        disambiguation,
        enrichment,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

async fn lookup_enrichment(args: &DisambiguateArgs) -> Result<Enrichment> {
    let provider = WikipediaProvider::new().context("Failed to build HTTP client")?;
    let enrichment = if args.no_cache {
        enrich(&provider, &args.sentence, &args.word).await
    } else {
        let cache = DiskCache::new(cache_dir()).context("Failed to open the summary cache")?;
        let cached = CachedProvider::new(provider, cache);
        enrich(&cached, &args.sentence, &args.word).await
    };
    Ok(enrichment)
}

fn print_report(report: &Report) {
    let word = &report.disambiguation.word;
    match &report.disambiguation.best {
        Some(best) => {
            println!("Best sense for '{word}': {}", best.sense.key);
            println!("  {}", best.sense.definition);
            println!();
            println!(
                "{:<4} {:<16} {:>9} {:>8} {:>7}",
                "#", "sense", "knowledge", "neural", "fused"
            );
            for candidate in &report.disambiguation.ranked {
                println!(
                    "{:<4} {:<16} {:>9} {:>8.3} {:>7.3}",
                    candidate.rank,
                    candidate.sense.key,
                    candidate.knowledge,
                    candidate.neural,
                    candidate.fused
                );
            }
        }
        None => {
            println!("No senses known for '{word}'.");
        }
    }

    if let Some(enrichment) = &report.enrichment {
        if let Some(topic) = enrichment.topic {
            println!();
            println!("Detected topic: {topic}");
        }
        if let Some(compound) = &enrichment.compound {
            println!("Compound term: {compound}");
        }
        if let Some(summary) = &enrichment.summary {
            println!();
            println!("{}: {}", summary.term, summary.text);
        }
    }
}

fn run_words(lexicon: &Dictionary, args: &WordsArgs) -> Result<()> {
    let words = match &args.sentence {
        Some(sentence) => sentence_words(sentence),
        None => lexicon.words(),
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&words)?);
    } else {
        for word in words {
            println!("{word}");
        }
    }
    Ok(())
}

/// Distinct cleaned words of a sentence, in first-occurrence order.
fn sentence_words(sentence: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    sense_text::extract_words(sentence)
        .into_iter()
        .map(|w| w.clean)
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
