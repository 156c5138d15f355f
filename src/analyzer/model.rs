use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Emotional,
    Cautious,
    Mixed,
    Analytical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Objectivity {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageAnalysis {
    pub tone: Tone,
    pub objectivity: Objectivity,
    /// Matched emotional terms, lexicon order, at most five.
    pub emotional_language: Vec<String>,
    /// Matched hedging terms, lexicon order, at most five.
    pub hedging_language: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct StrengthsWeaknesses {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverallAssessment {
    /// 0 (not credible) to 100.
    #[schema(minimum = 0, maximum = 100)]
    pub credibility_score: u8,
    pub bias_indicators: Vec<String>,
    pub strengths_weaknesses: StrengthsWeaknesses,
}

/// Credibility report for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub core_claims: Vec<String>,
    pub language_analysis: LanguageAnalysis,
    /// In the order the checks run, not by severity.
    pub red_flags: Vec<String>,
    pub verification_questions: Vec<String>,
    pub overall_assessment: OverallAssessment,
}
