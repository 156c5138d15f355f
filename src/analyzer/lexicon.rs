use crate::analyzer::policy::MatchMode;

/// Most matched terms reported per lexicon.
pub const MAX_REPORTED_TERMS: usize = 5;

pub const EMOTIONAL_TERMS: &[&str] = &[
    "shocking",
    "devastating",
    "incredible",
    "amazing",
    "terrible",
    "outrageous",
    "unbelievable",
    "stunning",
    "fantastic",
    "horrible",
];

pub const HEDGING_TERMS: &[&str] = &[
    "allegedly",
    "reportedly",
    "sources say",
    "it appears",
    "seems to",
    "might",
    "could",
    "possibly",
    "perhaps",
    "appears to",
];

pub const ASSERTIVE_VERBS: &[&str] = &[
    "is",
    "are",
    "will",
    "has",
    "have",
    "shows",
    "proves",
    "demonstrates",
];

/// Lowercased text plus its word tokens, built once and matched many times.
pub struct Haystack<'a> {
    lower: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> Haystack<'a> {
    /// `lower` must already be lowercased.
    pub fn new(lower: &'a str) -> Self {
        Self {
            lower,
            tokens: tokenize(lower),
        }
    }

    pub fn contains(&self, term: &str, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Substring => self.lower.contains(term),
            MatchMode::WholeWord => {
                let words = tokenize(term);
                !words.is_empty()
                    && self
                        .tokens
                        .windows(words.len())
                        .any(|window| window == words.as_slice())
            }
        }
    }

    /// Every entry of `lexicon` present in the text, in lexicon order.
    pub fn matches(&self, lexicon: &[&'static str], mode: MatchMode) -> Vec<&'static str> {
        lexicon
            .iter()
            .copied()
            .filter(|term| self.contains(term, mode))
            .collect()
    }
}

/// Words are runs of alphanumerics and apostrophes.
fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|token| !token.is_empty())
        .collect()
}

/// Split on `.`, `!` and `?`, trim, and keep pieces at least `min_len`
/// characters long.
pub fn sentences(text: &str, min_len: usize) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty() && sentence.chars().count() >= min_len)
        .collect()
}
