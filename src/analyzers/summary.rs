//! Per-provider performance summaries.
//!
//! Walks the provider aggregates one at a time, resolves the provider's
//! known locations, and asks the active scoring strategy for the narrative.
//! The good/poor framing threshold and the aspect-frequency helpers used by
//! the lexical narrative live here.

use tracing::info;

use crate::analyzers::types::{ProviderAggregate, ProviderSummary};
use crate::aspects::{Aspect, Sentiment};
use crate::error::Result;
use crate::record::UNKNOWN;
use crate::scorer::{AspectScorer, ScoredRecord};

/// Average-rating threshold separating positive from negative framing.
/// Fixed business rule, not configurable.
pub const GOOD_RATING_THRESHOLD: f64 = 3.0;

/// Summarizes every provider aggregate, one at a time, in aggregate order.
#[tracing::instrument(skip_all, fields(provider_count = aggregates.len()))]
pub async fn summarize_providers<S: AspectScorer>(
    scorer: &S,
    aggregates: &[ProviderAggregate],
    records: &[ScoredRecord],
) -> Result<Vec<ProviderSummary>> {
    let mut summaries = Vec::with_capacity(aggregates.len());

    for aggregate in aggregates {
        let provider_records: Vec<ScoredRecord> = records
            .iter()
            .filter(|r| r.record.provider_name == aggregate.provider_name)
            .cloned()
            .collect();

        let locations = resolve_locations(&provider_records);
        let narrative = scorer
            .summarize(aggregate, &locations, &provider_records)
            .await?;

        info!(
            provider = %aggregate.provider_name,
            locations = %locations,
            average_rating = aggregate.average_rating,
            "Provider summarized"
        );

        summaries.push(ProviderSummary {
            provider_name: aggregate.provider_name.clone(),
            locations,
            average_rating: aggregate.average_rating,
            summary: narrative,
        });
    }

    Ok(summaries)
}

/// Distinct known locations across the provider's records, in record order,
/// comma-joined. `"Unknown"` when no record carries a location.
pub fn resolve_locations(records: &[ScoredRecord]) -> String {
    let mut seen: Vec<&str> = Vec::new();

    for record in records {
        if let Some(location) = record.record.location.as_deref() {
            if !seen.contains(&location) {
                seen.push(location);
            }
        }
    }

    if seen.is_empty() {
        UNKNOWN.to_string()
    } else {
        seen.join(", ")
    }
}

/// The aspect with the most `target` labels across `records`. Ties break
/// toward the earliest aspect in canonical order; `None` when every count
/// is zero.
pub fn top_aspect(records: &[ScoredRecord], target: Sentiment) -> Option<Aspect> {
    let mut best: Option<(Aspect, usize)> = None;

    for aspect in Aspect::ALL {
        let count = records
            .iter()
            .filter(|r| r.scores.get(aspect) == target)
            .count();

        if count > 0 && best.map_or(true, |(_, c)| count > c) {
            best = Some((aspect, count));
        }
    }

    best.map(|(aspect, _)| aspect)
}
