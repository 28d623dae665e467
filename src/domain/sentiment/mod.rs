//! Sentiment analysis domain: labels, scores, prompts, and extraction.

mod extractor;
mod label;
pub mod prompt;
mod result;

pub use extractor::SentimentExtractor;
pub use label::{Sentiment, SentimentScore};
pub use result::{AnalysisScope, SentimentResult};
