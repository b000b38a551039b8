//! Text formats for lexicons and alignments.
//!
//! Both formats are tab-separated, one record per line. Blank lines and lines
//! starting with `#` are skipped.
//!
//! Lexicon: `term_id<TAB>name[<TAB>weight[<TAB>type[<TAB>source]]]`. A missing
//! or empty weight falls back to the default weight of the lexical type,
//! which itself defaults to `label`.
//!
//! Alignment: `source_id<TAB>target_id<TAB>similarity`.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::alignment::{Alignment, Mapping};
use crate::error::{LexAlignError, LoadError, Result};
use crate::ontology::{LexicalType, Lexicon, Ontology, TermId};

/// Parse a lexicon from tab-separated text.
pub fn parse_lexicon(reader: impl BufRead) -> Result<Lexicon> {
    let mut builder = Lexicon::builder();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = n + 1;
        if is_skipped(&line) {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() < 2 {
            return Err(parse_error(line_no, "expected term id and name"));
        }

        let term = parse_term(fields[0], line_no)?;
        let name = fields[1];
        if name.is_empty() {
            return Err(parse_error(line_no, "empty name"));
        }

        let lexical_type = match fields.get(3).filter(|f| !f.is_empty()) {
            Some(field) => field
                .parse::<LexicalType>()
                .map_err(|e| parse_error(line_no, e.to_string()))?,
            None => LexicalType::Label,
        };

        let weight = match fields.get(2).filter(|f| !f.is_empty()) {
            Some(field) => {
                let weight: f64 = field
                    .parse()
                    .map_err(|_| parse_error(line_no, format!("invalid weight '{field}'")))?;
                if !(weight > 0.0 && weight <= 1.0) {
                    return Err(parse_error(line_no, format!("weight {weight} not in (0, 1]")));
                }
                weight
            }
            None => lexical_type.default_weight(),
        };

        let source = fields.get(4).copied().unwrap_or("");
        builder.add(term, name, lexical_type, source, weight);
    }

    Ok(builder.build())
}

/// Load a lexicon file, see [`parse_lexicon`].
pub fn load_lexicon(path: impl AsRef<Path>) -> Result<Lexicon> {
    let path = path.as_ref();
    let lexicon = parse_lexicon(open(path)?)?;
    debug!(
        path = %path.display(),
        names = lexicon.name_count(),
        terms = lexicon.term_count(),
        entries = lexicon.entry_count(),
        "Loaded lexicon"
    );
    Ok(lexicon)
}

/// Load a lexicon file as an ontology identified by its path.
pub fn load_ontology(path: impl AsRef<Path>) -> Result<Arc<Ontology>> {
    let path = path.as_ref();
    let lexicon = load_lexicon(path)?;
    Ok(Arc::new(Ontology::new(path.display().to_string(), lexicon)))
}

/// Parse an alignment between `source` and `target` from tab-separated text.
pub fn parse_alignment(
    reader: impl BufRead,
    source: Arc<Ontology>,
    target: Arc<Ontology>,
) -> Result<Alignment> {
    let mut alignment = Alignment::new(source, target);

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = n + 1;
        if is_skipped(&line) {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(parse_error(
                line_no,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        }

        let s = parse_term(fields[0], line_no)?;
        let t = parse_term(fields[1], line_no)?;
        let similarity: f64 = fields[2]
            .parse()
            .map_err(|_| parse_error(line_no, format!("invalid similarity '{}'", fields[2])))?;
        if !(0.0..=1.0).contains(&similarity) {
            return Err(parse_error(
                line_no,
                format!("similarity {similarity} not in [0, 1]"),
            ));
        }

        alignment.add(Mapping::new(s, t, similarity));
    }

    Ok(alignment)
}

/// Load an alignment file, see [`parse_alignment`].
pub fn load_alignment(
    path: impl AsRef<Path>,
    source: Arc<Ontology>,
    target: Arc<Ontology>,
) -> Result<Alignment> {
    let path = path.as_ref();
    let alignment = parse_alignment(open(path)?, source, target)?;
    debug!(path = %path.display(), mappings = alignment.len(), "Loaded alignment");
    Ok(alignment)
}

fn open(path: &Path) -> Result<BufReader<std::fs::File>> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn is_skipped(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

fn parse_term(field: &str, line: usize) -> Result<TermId> {
    field
        .parse()
        .map_err(|_| parse_error(line, format!("invalid term id '{field}'")))
}

fn parse_error(line: usize, reason: impl Into<String>) -> LexAlignError {
    LoadError::Parse {
        line,
        reason: reason.into(),
    }
    .into()
}
