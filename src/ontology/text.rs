//! Name normalization, word splitting and formula detection.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that only appear in structured expressions, never in
/// natural-language names.
const FORMULA_SYMBOLS: &[char] = &['[', ']', '{', '}', '=', '^', '|', '<', '>'];

/// Words that carry no meaning on their own and are left out of word lexicons.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "by", "for", "from", "in", "into", "is", "of", "on", "or",
    "the", "to", "with",
];

// Element symbols followed by optional counts, e.g. "H2O", "C6H12O6".
static CHEMICAL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z][a-z]?\d*)+$").expect("Invalid regex"));

/// Whether `name` is a structured expression (e.g. a chemical formula)
/// rather than a natural-language phrase.
///
/// Only a name that is a single formula-shaped token, or that contains a
/// formula symbol, qualifies. A formula-like token inside a phrase
/// ("C7 vertebra", "Vitamin B12") does not make the phrase a formula.
pub fn is_formula(name: &str) -> bool {
    if name.contains(FORMULA_SYMBOLS) {
        return true;
    }

    let token = name
        .trim()
        .trim_matches(|c: char| matches!(c, '(' | ')' | ',' | ';'));
    token.len() >= 2
        && !token.contains(char::is_whitespace)
        && token.chars().any(|c| c.is_ascii_digit())
        && CHEMICAL_TOKEN.is_match(token)
}

/// Normalize a name for storage in a lexicon.
///
/// Whitespace is trimmed and collapsed. Natural-language names are also
/// lowercased and underscores become spaces; formulas keep their case since
/// it is significant.
pub fn normalize_name(name: &str) -> String {
    if is_formula(name) {
        return collapse_whitespace(name);
    }
    collapse_whitespace(&name.replace('_', " ")).to_lowercase()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `word` is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Split a name into lowercase content words.
pub fn words(name: &str) -> Vec<String> {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .filter(|w| !is_stop_word(w))
        .collect()
}
