//! Sentiment analysis outcome types.

use serde::{Deserialize, Serialize};

use super::{Sentiment, SentimentScore};

/// Which shape of analysis is being performed.
///
/// Single-message analysis explains one message; conversation analysis
/// summarizes the emotional trajectory across the whole exchange. The
/// scope decides which JSON key carries the free text and which fallback
/// string stands in when the model omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisScope {
    Message,
    Conversation,
}

impl AnalysisScope {
    /// JSON key holding the free-text detail for this scope.
    pub fn detail_key(&self) -> &'static str {
        match self {
            AnalysisScope::Message => "explanation",
            AnalysisScope::Conversation => "summary",
        }
    }

    /// Stand-in detail when the model omitted the free-text field.
    pub fn fallback_detail(&self) -> &'static str {
        match self {
            AnalysisScope::Message => "Analyzed from response",
            AnalysisScope::Conversation => "Conversation analyzed",
        }
    }
}

/// Result of a sentiment analysis.
///
/// # Invariants
///
/// - `score` is always within `[0.0, 1.0]`
/// - `detail` is always present (possibly a fallback string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// The sentiment label.
    pub sentiment: Sentiment,
    /// Intensity of the sentiment.
    pub score: SentimentScore,
    /// Free-text explanation or summary.
    pub detail: String,
}

impl SentimentResult {
    /// Creates a new result.
    pub fn new(
        sentiment: Sentiment,
        score: SentimentScore,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            sentiment,
            score,
            detail: detail.into(),
        }
    }

    /// Result returned when analysis cannot run at all.
    pub fn analysis_failure() -> Self {
        Self::new(
            Sentiment::Neutral,
            SentimentScore::NEUTRAL,
            "Error in analysis",
        )
    }
}
