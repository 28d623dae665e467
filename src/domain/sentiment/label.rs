//! Sentiment label and score value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity of a piece of text.
///
/// [`Sentiment::from_label`] is the only way untrusted text becomes one of
/// these values; callers coerce its rejections to `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Parses a label case-insensitively.
    ///
    /// Returns `None` for anything that is not one of the three valid words.
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }

    /// Returns the lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Sentiment::Neutral
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sentiment intensity between 0.0 (very negative) and 1.0 (very positive).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentScore(f64);

impl SentimentScore {
    /// The neutral midpoint.
    pub const NEUTRAL: Self = Self(0.5);

    /// Creates a score, clamping to the valid range.
    pub fn clamped(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// True above the threshold at which a neutral label reads as positive.
    pub fn leans_positive(&self) -> bool {
        self.0 > 0.6
    }

    /// True below the threshold at which a neutral label reads as negative.
    pub fn leans_negative(&self) -> bool {
        self.0 < 0.4
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod sentiment {
        use super::*;

        #[test]
        fn from_label_accepts_valid_words() {
            assert_eq!(Sentiment::from_label("positive"), Some(Sentiment::Positive));
            assert_eq!(Sentiment::from_label("negative"), Some(Sentiment::Negative));
            assert_eq!(Sentiment::from_label("neutral"), Some(Sentiment::Neutral));
        }

        #[test]
        fn from_label_is_case_insensitive() {
            assert_eq!(Sentiment::from_label("POSITIVE"), Some(Sentiment::Positive));
            assert_eq!(Sentiment::from_label("Negative"), Some(Sentiment::Negative));
            assert_eq!(Sentiment::from_label("NeUtRaL"), Some(Sentiment::Neutral));
        }

        #[test]
        fn from_label_trims_whitespace() {
            assert_eq!(
                Sentiment::from_label("  positive  "),
                Some(Sentiment::Positive)
            );
        }

        #[test]
        fn from_label_rejects_unknown_words() {
            assert_eq!(Sentiment::from_label("bogus"), None);
            assert_eq!(Sentiment::from_label("happy"), None);
            assert_eq!(Sentiment::from_label(""), None);
        }

        #[test]
        fn default_is_neutral() {
            assert_eq!(Sentiment::default(), Sentiment::Neutral);
        }

        #[test]
        fn serializes_lowercase() {
            assert_eq!(
                serde_json::to_string(&Sentiment::Positive).unwrap(),
                "\"positive\""
            );
        }

        #[test]
        fn deserializes_from_lowercase() {
            let s: Sentiment = serde_json::from_str("\"negative\"").unwrap();
            assert_eq!(s, Sentiment::Negative);
        }
    }

    mod sentiment_score {
        use super::*;

        #[test]
        fn clamped_accepts_in_range_values() {
            assert_eq!(SentimentScore::clamped(0.0).value(), 0.0);
            assert_eq!(SentimentScore::clamped(0.5).value(), 0.5);
            assert_eq!(SentimentScore::clamped(1.0).value(), 1.0);
        }

        #[test]
        fn clamped_clamps_below_zero() {
            assert_eq!(SentimentScore::clamped(-0.3).value(), 0.0);
        }

        #[test]
        fn clamped_clamps_above_one() {
            assert_eq!(SentimentScore::clamped(1.7).value(), 1.0);
        }

        #[test]
        fn default_is_neutral_midpoint() {
            assert_eq!(SentimentScore::default(), SentimentScore::NEUTRAL);
            assert_eq!(SentimentScore::default().value(), 0.5);
        }

        #[test]
        fn leans_positive_above_threshold() {
            assert!(SentimentScore::clamped(0.9).leans_positive());
            assert!(SentimentScore::clamped(0.61).leans_positive());
            assert!(!SentimentScore::clamped(0.6).leans_positive());
            assert!(!SentimentScore::clamped(0.5).leans_positive());
        }

        #[test]
        fn leans_negative_below_threshold() {
            assert!(SentimentScore::clamped(0.1).leans_negative());
            assert!(SentimentScore::clamped(0.39).leans_negative());
            assert!(!SentimentScore::clamped(0.4).leans_negative());
            assert!(!SentimentScore::clamped(0.5).leans_negative());
        }

        #[test]
        fn serializes_as_bare_number() {
            let json = serde_json::to_string(&SentimentScore::clamped(0.9)).unwrap();
            assert_eq!(json, "0.9");
        }
    }
}
