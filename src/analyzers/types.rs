//! Data types produced by the aggregation and summary stages.

use serde::Serialize;

/// Per-provider aggregate over all of that provider's scored records.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderAggregate {
    pub provider_name: String,
    /// All contributing feedback texts, joined with the group separator.
    pub feedback: String,
    /// All contributing analysis texts, joined with the group separator.
    pub analysis: String,
    /// Unweighted arithmetic mean of the group's ratings, zero defaults
    /// included.
    pub average_rating: f64,
}

/// Final per-provider performance summary.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSummary {
    pub provider_name: String,
    /// Distinct known locations, comma-joined; `"Unknown"` when none.
    pub locations: String,
    pub average_rating: f64,
    /// The generated narrative.
    pub summary: String,
}
