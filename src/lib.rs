//! Sentiment Chat - Conversational API with sentiment analysis
//!
//! This crate implements a chat service that scores the sentiment of user
//! messages and whole conversations by structuring free-form model output
//! into typed results.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
