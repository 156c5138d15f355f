//! Deterministic labeling and scoring rules over [`TextSignals`].

use crate::analyzer::{
    model::{Objectivity, StrengthsWeaknesses, Tone},
    policy::AnalysisPolicy,
    signals::TextSignals,
};

pub const FLAG_EMOTIONAL_LANGUAGE: &str = "Excessive emotional language may indicate bias";
pub const FLAG_NO_SOURCES: &str = "Lack of cited sources or attribution";
pub const FLAG_SHORT_ARTICLE: &str = "Unusually short article";
pub const FLAG_SENSATIONAL_HEADLINE: &str = "Sensationalized headline";
pub const FLAG_NO_DATA: &str = "Lacks specific data or statistics";

/// Bodies longer than this with no digits at all are flagged.
const DATA_EXPECTED_CHARS: usize = 1000;
/// Bodies longer than this count as substantial.
const SUBSTANTIAL_CHARS: usize = 500;

pub const VERIFICATION_QUESTIONS: [&str; 4] = [
    "What are the primary sources for the main claims in this article?",
    "Can the key claims be independently corroborated by other reputable outlets?",
    "What expertise or potential biases does the author bring to this topic?",
    "Are there credible perspectives or evidence that contradict this article?",
];

/// First matching rule wins.
pub fn tone(signals: &TextSignals) -> Tone {
    let emotional = signals.emotional_hits();
    let hedging = signals.hedging_hits();

    if emotional > 2 && hedging == 0 {
        Tone::Emotional
    } else if hedging > 0 && emotional == 0 {
        Tone::Cautious
    } else if hedging > 0 && emotional > 0 {
        Tone::Mixed
    } else if emotional == 0 && signals.has_numerals && signals.has_tone_attribution {
        Tone::Analytical
    } else {
        Tone::Neutral
    }
}

pub fn objectivity(signals: &TextSignals) -> Objectivity {
    let emotional = signals.emotional_hits();

    if emotional == 0 && signals.hedging_hits() > 2 {
        Objectivity::High
    } else if emotional > 3 {
        Objectivity::Low
    } else {
        Objectivity::Moderate
    }
}

/// `!` anywhere, all letters upper-case, or the literal "BREAKING".
///
/// The upper-case test also catches short acronym-only titles ("NASA"),
/// a known false positive.
pub fn is_sensational_headline(title: &str) -> bool {
    let shouting = title.chars().any(char::is_uppercase) && !title.chars().any(char::is_lowercase);
    title.contains('!') || shouting || title.contains("BREAKING")
}

/// Every check runs; flags are appended in check order.
pub fn red_flags(signals: &TextSignals, title: &str, policy: &AnalysisPolicy) -> Vec<String> {
    let checks = [
        (signals.emotional_hits() > 3, FLAG_EMOTIONAL_LANGUAGE),
        (!signals.has_attribution, FLAG_NO_SOURCES),
        (signals.sentence_count < policy.min_sentence_count, FLAG_SHORT_ARTICLE),
        (is_sensational_headline(title), FLAG_SENSATIONAL_HEADLINE),
        (
            signals.body_chars > DATA_EXPECTED_CHARS && !signals.has_numerals,
            FLAG_NO_DATA,
        ),
    ];

    checks
        .into_iter()
        .filter(|(tripped, _)| *tripped)
        .map(|(_, flag)| flag.to_string())
        .collect()
}

/// Base score plus weighted signals, clamped to 0..=100. Hedging adds to
/// the score.
pub fn credibility_score(signals: &TextSignals, red_flag_count: usize, policy: &AnalysisPolicy) -> u8 {
    let weights = &policy.weights;
    let mut score = policy.base_score;

    if signals.has_quotes {
        score += weights.quote;
    }
    if signals.has_numerals {
        score += weights.numeral;
    }
    if signals.has_attribution {
        score += weights.attribution;
    }
    score -= weights.emotional * signals.emotional_hits() as f64;
    score += weights.hedging * signals.hedging_hits() as f64;
    score -= weights.red_flag * red_flag_count as f64;

    // NaN (from a nonsensical policy) saturates to 0
    score.clamp(0.0, 100.0).round() as u8
}

pub fn strengths_weaknesses(signals: &TextSignals, policy: &AnalysisPolicy) -> StrengthsWeaknesses {
    let strengths = [
        (signals.has_quotes, "Includes direct quotations"),
        (signals.has_numerals, "Cites specific numbers or data"),
        (signals.has_attribution, "References sources or attribution"),
        (signals.hedging_hits() > 0, "Uses appropriately cautious language"),
        (signals.body_chars > SUBSTANTIAL_CHARS, "Provides substantial detail"),
    ];
    let weaknesses = [
        (signals.emotional_hits() > 2, "Heavy use of emotional language"),
        (!signals.has_attribution, "No clear source attribution"),
        (
            signals.sentence_count < policy.min_sentence_count,
            "Very short article with limited detail",
        ),
    ];

    StrengthsWeaknesses {
        strengths: labels(&strengths),
        weaknesses: labels(&weaknesses),
    }
}

pub fn bias_indicators(signals: &TextSignals, title: &str, red_flag_count: usize) -> Vec<String> {
    labels(&[
        (signals.emotional_hits() > 2, "Emotionally charged language"),
        (title.contains('!'), "Sensational punctuation in headline"),
        (red_flag_count > 2, "Multiple red flags detected"),
    ])
}

fn labels(rules: &[(bool, &str)]) -> Vec<String> {
    rules
        .iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, label)| label.to_string())
        .collect()
}
