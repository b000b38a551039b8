//! lexalign command-line entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lexalign::{Config, MatcherKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

/// lexalign: lexical ontology matching
#[derive(Parser, Debug)]
#[command(name = "lexalign")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable JSON logging format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match the terms of two lexicons
    Match {
        /// Source lexicon (term_id, name, weight, type, source; tab-separated)
        source: PathBuf,
        /// Target lexicon
        target: PathBuf,
        /// Matching strategy (word or synonym)
        #[arg(short, long, default_value = "word")]
        strategy: MatcherKind,
        /// Minimum similarity (defaults to matching.threshold from config)
        #[arg(short, long)]
        threshold: Option<f64>,
        /// Synset file, one synset per line (required by the synonym strategy)
        #[arg(long)]
        thesaurus: Option<PathBuf>,
        /// Existing alignment to extend; only new mappings are printed
        #[arg(short, long)]
        extend: Option<PathBuf>,
        /// Accumulate word evidence in parallel
        #[arg(long)]
        parallel: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the most informative words of a lexicon
    Words {
        /// Lexicon file
        lexicon: PathBuf,
        /// Maximum number of words
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.json_logs);

    match args.command {
        Command::Match {
            source,
            target,
            strategy,
            threshold,
            thesaurus,
            extend,
            parallel,
            json,
        } => {
            let config = load_config(&args.config)?;
            let options = cli::MatchOptions {
                source,
                target,
                strategy,
                threshold,
                thesaurus,
                extend,
                parallel,
            };
            cli::run_match(config, options, json)
        }
        Command::Words {
            lexicon,
            limit,
            json,
        } => cli::run_words(lexicon, limit, json),
    }
}

fn load_config(path: &Option<String>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(json_logs: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lexalign=info"));

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
