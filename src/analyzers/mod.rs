//! Aggregation and summarization of scored feedback.
//!
//! This module groups scored records per provider, concatenates their
//! feedback and analysis text, computes average ratings, and produces the
//! per-provider narrative summaries.

pub mod aggregate;
pub mod summary;
pub mod types;
pub mod utility;
