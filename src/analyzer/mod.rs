//! Rule-based credibility analysis of article text.
//!
//! Everything here is a pure function of `(body, title, policy)`: no I/O,
//! no randomness, no shared state. The same input always yields the same
//! [`AnalysisResult`].

pub mod lexicon;
pub mod model;
pub mod policy;
pub mod rules;
pub mod signals;

pub use model::{
    AnalysisResult, LanguageAnalysis, Objectivity, OverallAssessment, StrengthsWeaknesses, Tone,
};
pub use policy::{AnalysisPolicy, ClaimMode, MatchMode, ScoreWeights};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::extractor::ExtractedArticle;
use lexicon::MAX_REPORTED_TERMS;
use signals::TextSignals;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("article body is empty")]
    EmptyBody,
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    policy: AnalysisPolicy,
}

impl Analyzer {
    pub fn new(policy: AnalysisPolicy) -> Self {
        Self { policy }
    }

    pub fn analyze_article(&self, article: &ExtractedArticle) -> Result<AnalysisResult, AnalysisError> {
        self.analyze(&article.body_text, &article.title, &article.source_url)
    }

    /// Produce a credibility report. Fails only when `body` has no
    /// non-whitespace content.
    #[instrument(skip_all, fields(source_url = %source_url, body_chars = body.chars().count()))]
    pub fn analyze(
        &self,
        body: &str,
        title: &str,
        source_url: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        if body.trim().is_empty() {
            return Err(AnalysisError::EmptyBody);
        }

        let policy = &self.policy;
        let signals = TextSignals::collect(body, policy);
        let red_flags = rules::red_flags(&signals, title, policy);
        let credibility_score = rules::credibility_score(&signals, red_flags.len(), policy);

        debug!(
            emotional_hits = signals.emotional_hits(),
            hedging_hits = signals.hedging_hits(),
            sentences = signals.sentence_count,
            red_flags = red_flags.len(),
            credibility_score,
            "Scored article"
        );

        Ok(AnalysisResult {
            core_claims: signals::core_claims(body, policy),
            language_analysis: LanguageAnalysis {
                tone: rules::tone(&signals),
                objectivity: rules::objectivity(&signals),
                emotional_language: reported(&signals.emotional_terms),
                hedging_language: reported(&signals.hedging_terms),
            },
            verification_questions: rules::VERIFICATION_QUESTIONS
                .iter()
                .map(|q| q.to_string())
                .collect(),
            overall_assessment: OverallAssessment {
                credibility_score,
                bias_indicators: rules::bias_indicators(&signals, title, red_flags.len()),
                strengths_weaknesses: rules::strengths_weaknesses(&signals, policy),
            },
            red_flags,
        })
    }
}

fn reported(terms: &[&str]) -> Vec<String> {
    terms
        .iter()
        .take(MAX_REPORTED_TERMS)
        .map(|term| term.to_string())
        .collect()
}
