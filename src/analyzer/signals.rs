use crate::analyzer::{
    lexicon::{ASSERTIVE_VERBS, EMOTIONAL_TERMS, HEDGING_TERMS, Haystack, sentences},
    policy::{AnalysisPolicy, ClaimMode, MatchMode},
};

/// Markers the tone rule treats as attribution, independent of policy.
const TONE_ATTRIBUTION_MARKERS: &[&str] = &["according to", "source"];

const QUOTE_CHARS: &[char] = &['"', '\u{201C}', '\u{201D}'];

/// Raw observations about an article, before any rule turns them into labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSignals {
    /// Every emotional term present, lexicon order.
    pub emotional_terms: Vec<&'static str>,
    /// Every hedging term present, lexicon order.
    pub hedging_terms: Vec<&'static str>,
    pub has_quotes: bool,
    pub has_numerals: bool,
    /// Any of the policy's attribution markers is present.
    pub has_attribution: bool,
    /// "according to" or "source" is present.
    pub has_tone_attribution: bool,
    pub sentence_count: usize,
    /// Body length in characters.
    pub body_chars: usize,
}

impl TextSignals {
    pub fn collect(body: &str, policy: &AnalysisPolicy) -> Self {
        let lower = body.to_lowercase();
        let haystack = Haystack::new(&lower);

        Self {
            emotional_terms: haystack.matches(EMOTIONAL_TERMS, policy.match_mode),
            hedging_terms: haystack.matches(HEDGING_TERMS, policy.match_mode),
            has_quotes: body.contains(QUOTE_CHARS),
            has_numerals: body.chars().any(|c| c.is_ascii_digit()),
            has_attribution: policy
                .attribution_markers
                .iter()
                .any(|marker| lower.contains(marker)),
            has_tone_attribution: TONE_ATTRIBUTION_MARKERS
                .iter()
                .any(|marker| lower.contains(marker)),
            sentence_count: sentences(body, policy.min_sentence_len).len(),
            body_chars: body.chars().count(),
        }
    }

    pub fn emotional_hits(&self) -> usize {
        self.emotional_terms.len()
    }

    pub fn hedging_hits(&self) -> usize {
        self.hedging_terms.len()
    }
}

/// The first four eligible sentences, in document order.
pub fn core_claims(body: &str, policy: &AnalysisPolicy) -> Vec<String> {
    const MAX_CLAIMS: usize = 4;

    sentences(body, policy.min_claim_len)
        .into_iter()
        .filter(|sentence| match policy.claim_mode {
            ClaimMode::LeadingSentences => true,
            ClaimMode::AssertiveVerbs => {
                let lower = sentence.to_lowercase();
                let haystack = Haystack::new(&lower);
                ASSERTIVE_VERBS
                    .iter()
                    .any(|verb| haystack.contains(verb, MatchMode::WholeWord))
            }
        })
        .take(MAX_CLAIMS)
        .map(str::to_string)
        .collect()
}
