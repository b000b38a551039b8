//! CLI command handlers.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use lexalign::{
    create_matcher, load_alignment, load_lexicon, load_ontology, CachedThesaurus, Config,
    MatcherKind, SynsetThesaurus, Thesaurus, WordLexicon,
};
use tracing::info;

use super::output;
use super::types::{MatchResult, WordScore, WordsResult};

/// Options of the match command.
#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub source: PathBuf,
    pub target: PathBuf,
    pub strategy: MatcherKind,
    pub threshold: Option<f64>,
    pub thesaurus: Option<PathBuf>,
    pub extend: Option<PathBuf>,
    pub parallel: bool,
}

/// Run the match command.
pub fn run_match(mut config: Config, options: MatchOptions, json_output: bool) -> Result<()> {
    let threshold = options.threshold.unwrap_or(config.matching.threshold);
    config.matching.parallel |= options.parallel;

    let source = load_ontology(&options.source)
        .with_context(|| format!("loading source lexicon {}", options.source.display()))?;
    let target = load_ontology(&options.target)
        .with_context(|| format!("loading target lexicon {}", options.target.display()))?;

    let thesaurus = match &options.thesaurus {
        Some(path) => {
            let synsets = SynsetThesaurus::from_file(path)
                .with_context(|| format!("loading thesaurus {}", path.display()))?;
            let cached: Arc<dyn Thesaurus> = Arc::new(CachedThesaurus::new(synsets, &config.cache));
            Some(cached)
        }
        None => None,
    };

    let matcher = create_matcher(options.strategy, &config, thesaurus)?;

    let (mut alignment, extended) = match &options.extend {
        Some(path) => {
            let existing = load_alignment(path, Arc::clone(&source), Arc::clone(&target))
                .with_context(|| format!("loading alignment {}", path.display()))?;
            let extension = matcher.extend_alignment(&existing, threshold)?;
            (extension, Some(existing.len()))
        }
        None => (matcher.match_ontologies(&source, &target, threshold)?, None),
    };
    alignment.sort_by_similarity();

    info!(
        strategy = %options.strategy,
        threshold,
        mappings = alignment.len(),
        "Match finished"
    );

    let result = MatchResult {
        strategy: options.strategy,
        source: source.uri().to_string(),
        target: target.uri().to_string(),
        threshold,
        extended,
        mappings: alignment.mappings().to_vec(),
    };
    output::print_match_result(&result, json_output)
}

/// Run the words command.
pub fn run_words(lexicon_path: PathBuf, limit: usize, json_output: bool) -> Result<()> {
    let lexicon = load_lexicon(&lexicon_path)
        .with_context(|| format!("loading lexicon {}", lexicon_path.display()))?;
    let words = WordLexicon::new(&lexicon);

    let result = WordsResult {
        lexicon: lexicon_path.display().to_string(),
        word_count: words.word_count(),
        term_count: words.term_count(),
        words: words
            .top_words(limit)
            .into_iter()
            .map(|(word, ec)| WordScore {
                word: word.to_string(),
                ec,
                terms: words.terms(word).map_or(0, |terms| terms.len()),
            })
            .collect(),
    };
    output::print_words(&result, json_output)
}
