//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Completion gateway implementations (OpenRouter, mock)
//! - `http` - REST API exposure
//! - `memory` - In-memory storage for tests and local development
//! - `postgres` - PostgreSQL-backed storage

pub mod ai;
pub mod http;
pub mod memory;
pub mod postgres;
