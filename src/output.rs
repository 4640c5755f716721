//! CSV export of the two result tables.
//!
//! Writes the scored-record table and the provider-summary table, one
//! serde-serialized row per entry with a header row.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::types::ProviderSummary;
use crate::aspects::Aspect;
use crate::error::Result;
use crate::scorer::ScoredRecord;

/// Logs a scored record using Rust's debug pretty-print format.
pub fn print_pretty(record: &ScoredRecord) {
    debug!("{:#?}", record);
}

/// Logs a provider summary as pretty-printed JSON.
pub fn print_json(summary: &ProviderSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

#[derive(Debug, Serialize)]
struct ScoredRow<'a> {
    timestamp: DateTime<Utc>,
    reviewer_name: &'a str,
    provider_name: &'a str,
    location: &'a str,
    feedback: &'a str,
    rating: f64,
    customer_support: &'static str,
    cancellation: &'static str,
    ride_comfort: &'static str,
    trip_efficiency: &'static str,
    billing: &'static str,
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    timestamp: DateTime<Utc>,
    provider_name: &'a str,
    locations: &'a str,
    average_rating: f64,
    summary: &'a str,
}

/// Writes the scored-record table to a CSV file at `path`, replacing any
/// existing file.
pub fn write_scored_records(path: &str, records: &[ScoredRecord]) -> Result<()> {
    debug!(path, record_count = records.len(), "Writing scored records");

    let timestamp = Utc::now();
    let mut writer = csv::Writer::from_path(path)?;

    for entry in records {
        writer.serialize(ScoredRow {
            timestamp,
            reviewer_name: &entry.record.reviewer_name,
            provider_name: &entry.record.provider_name,
            location: entry.record.location(),
            feedback: &entry.record.feedback_text,
            rating: entry.record.rating,
            customer_support: entry.scores.get(Aspect::CustomerSupport).label(),
            cancellation: entry.scores.get(Aspect::Cancellation).label(),
            ride_comfort: entry.scores.get(Aspect::RideComfort).label(),
            trip_efficiency: entry.scores.get(Aspect::TripEfficiency).label(),
            billing: entry.scores.get(Aspect::Billing).label(),
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the provider-summary table to a CSV file at `path`, replacing any
/// existing file.
pub fn write_summaries(path: &str, summaries: &[ProviderSummary]) -> Result<()> {
    debug!(path, provider_count = summaries.len(), "Writing summaries");

    let timestamp = Utc::now();
    let mut writer = csv::Writer::from_path(path)?;

    for summary in summaries {
        writer.serialize(SummaryRow {
            timestamp,
            provider_name: &summary.provider_name,
            locations: &summary.locations,
            average_rating: summary.average_rating,
            summary: &summary.summary,
        })?;
    }

    writer.flush()?;
    Ok(())
}
