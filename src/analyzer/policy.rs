//! Tunable knobs for the heuristic analyzer.
//!
//! Two presets exist because two rule sets were in use before they were
//! merged: [`AnalysisPolicy::standard`] (the default) and the terser, more
//! forgiving [`AnalysisPolicy::quick`]. Everything else in the analyzer is
//! shared.

/// How lexicon entries are located in the body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive containment anywhere in the text, so "amazing"
    /// also matches inside "amazingly".
    Substring,
    /// Case-insensitive match of whole words (or whole word sequences for
    /// multi-word entries).
    WholeWord,
}

/// Which sentences become core claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimMode {
    /// Sentences that use an assertive verb ("is", "shows", "proves", ...).
    AssertiveVerbs,
    /// The leading sentences, whatever they say.
    LeadingSentences,
}

/// Signed adjustments applied to the base credibility score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Added once if the body quotes anyone.
    pub quote: f64,
    /// Added once if the body contains any digit.
    pub numeral: f64,
    /// Added once if an attribution marker is present.
    pub attribution: f64,
    /// Subtracted per distinct emotional term.
    pub emotional: f64,
    /// Added per distinct hedging term.
    pub hedging: f64,
    /// Subtracted per red flag.
    pub red_flag: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            quote: 10.0,
            numeral: 5.0,
            attribution: 10.0,
            emotional: 5.0,
            hedging: 2.0,
            red_flag: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisPolicy {
    pub base_score: f64,
    pub weights: ScoreWeights,
    /// Shortest sentence (trimmed, in characters) counted toward the
    /// article's sentence count.
    pub min_sentence_len: usize,
    /// Shortest sentence eligible as a core claim.
    pub min_claim_len: usize,
    /// Fewer sentences than this raises the short-article flag.
    pub min_sentence_count: usize,
    pub claim_mode: ClaimMode,
    pub match_mode: MatchMode,
    /// Lowercase phrases whose presence counts as citing a source.
    pub attribution_markers: &'static [&'static str],
}

impl AnalysisPolicy {
    pub fn standard() -> Self {
        Self {
            base_score: 50.0,
            weights: ScoreWeights::default(),
            min_sentence_len: 1,
            min_claim_len: 10,
            min_sentence_count: 5,
            claim_mode: ClaimMode::AssertiveVerbs,
            match_mode: MatchMode::Substring,
            attribution_markers: &["according to", "source", "study", "research"],
        }
    }

    pub fn quick() -> Self {
        Self {
            base_score: 70.0,
            weights: ScoreWeights::default(),
            min_sentence_len: 1,
            min_claim_len: 20,
            min_sentence_count: 10,
            claim_mode: ClaimMode::LeadingSentences,
            match_mode: MatchMode::WholeWord,
            attribution_markers: &["according to", "source"],
        }
    }
}

impl Default for AnalysisPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
