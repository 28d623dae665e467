//! Structured sentiment extraction from model responses.
//!
//! Model output is untrusted: it may be clean JSON, JSON buried in prose,
//! half-quoted fragments, or nothing usable at all. Extraction is total:
//! every input maps to a valid [`SentimentResult`], and no stage can fail
//! the caller.

use regex::Regex;

use super::{AnalysisScope, Sentiment, SentimentResult, SentimentScore};

/// Extracts sentiment results from raw model text.
///
/// Stages run in strict order and short-circuit on first success:
///
/// 1. Bracket-span JSON parse (first `{` to last `}`, strict)
/// 2. Regex field recovery over the full text
/// 3. Score-driven inference for neutral labels
///
/// Empty input skips the stages and returns the hard fallback.
#[derive(Debug, Clone)]
pub struct SentimentExtractor {
    sentiment_regex: Regex,
    score_regex: Regex,
    summary_regex: Regex,
}

impl SentimentExtractor {
    /// Creates a new extractor with precompiled recovery patterns.
    pub fn new() -> Self {
        Self {
            // Matches a sentiment key with a quoted word, key quoting optional:
            // "sentiment": "positive", sentiment = "Negative", ...
            sentiment_regex: Regex::new(r#"(?i)"?sentiment"?\s*[:=]\s*"(\w+)""#).unwrap(),
            // Matches a quoted score key with a numeric literal. An unquoted
            // key does not count as recovered.
            score_regex: Regex::new(r#""score"\s*:\s*(-?\d+(?:\.\d+)?)"#).unwrap(),
            // Matches a quoted summary key with a quoted string value.
            summary_regex: Regex::new(r#""summary"\s*:\s*"([^"]*)""#).unwrap(),
        }
    }

    /// Extracts a sentiment result from raw model text.
    ///
    /// Never fails: unparseable input degrades through recovery patterns
    /// to per-field defaults, and empty input returns the hard fallback.
    pub fn extract(&self, raw: &str, scope: AnalysisScope) -> SentimentResult {
        if raw.trim().is_empty() {
            return SentimentResult::analysis_failure();
        }

        let candidate = self
            .parse_json_span(raw, scope)
            .unwrap_or_else(|| self.recover_fields(raw, scope));

        Self::infer_from_score(candidate)
    }

    /// Stage 1: strict JSON parse of the outermost brace span.
    ///
    /// Multiple JSON fragments in one reply make the outer span invalid;
    /// that is an ordinary stage failure, not an error.
    fn parse_json_span(&self, raw: &str, scope: AnalysisScope) -> Option<SentimentResult> {
        let start = raw.find('{')?;
        let end = raw.rfind('}')?;
        if start >= end {
            return None;
        }

        let value: serde_json::Value = serde_json::from_str(&raw[start..=end]).ok()?;

        let sentiment = value
            .get("sentiment")
            .and_then(|v| v.as_str())
            .and_then(Sentiment::from_label)
            .unwrap_or_default();

        let score = value
            .get("score")
            .and_then(Self::numeric_value)
            .map(SentimentScore::clamped)
            .unwrap_or_default();

        let detail = value
            .get(scope.detail_key())
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .unwrap_or_else(|| scope.fallback_detail().to_owned());

        Some(SentimentResult::new(sentiment, score, detail))
    }

    /// Stage 2: regex recovery over the whole text.
    ///
    /// Each field defaults independently when its pattern finds nothing or
    /// recovers an invalid value.
    fn recover_fields(&self, raw: &str, scope: AnalysisScope) -> SentimentResult {
        let sentiment = self
            .sentiment_regex
            .captures(raw)
            .and_then(|c| c.get(1))
            .and_then(|m| Sentiment::from_label(m.as_str()))
            .unwrap_or_default();

        let score = self
            .score_regex
            .captures(raw)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .map(SentimentScore::clamped)
            .unwrap_or_default();

        let detail = match scope {
            AnalysisScope::Conversation => self
                .summary_regex
                .captures(raw)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_owned()),
            AnalysisScope::Message => None,
        }
        .unwrap_or_else(|| scope.fallback_detail().to_owned());

        SentimentResult::new(sentiment, score, detail)
    }

    /// Stage 3: a neutral label with a score away from the midpoint is
    /// read from the score instead.
    fn infer_from_score(mut result: SentimentResult) -> SentimentResult {
        if result.sentiment == Sentiment::Neutral && result.score != SentimentScore::NEUTRAL {
            if result.score.leans_positive() {
                result.sentiment = Sentiment::Positive;
            } else if result.score.leans_negative() {
                result.sentiment = Sentiment::Negative;
            }
        }
        result
    }

    /// Reads a JSON number, or a string holding one.
    ///
    /// `"NaN"` parses as an f64 but carries no usable score, so string
    /// values must be finite.
    fn numeric_value(value: &serde_json::Value) -> Option<f64> {
        match value {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => {
                s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
            }
            _ => None,
        }
    }
}

impl Default for SentimentExtractor {
    fn default() -> Self {
        Self::new()
    }
}
