//! Grouping of scored records by provider.

use std::collections::HashMap;

use crate::analyzers::types::ProviderAggregate;
use crate::analyzers::utility::mean;
use crate::scorer::ScoredRecord;

/// Separator joining feedback and analysis text within a group.
pub const GROUP_SEPARATOR: &str = " ||| ";

/// Groups scored records by exact provider-name equality, in first-seen
/// order. Every record lands in exactly one aggregate; empty input yields
/// empty output.
pub fn aggregate_by_provider(records: &[ScoredRecord]) -> Vec<ProviderAggregate> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&ScoredRecord>> = HashMap::new();

    for record in records {
        let name = record.record.provider_name.as_str();
        if !groups.contains_key(name) {
            order.push(name);
        }
        groups.entry(name).or_default().push(record);
    }

    order
        .into_iter()
        .map(|name| {
            let group = &groups[name];

            let feedback = group
                .iter()
                .map(|r| r.record.feedback_text.as_str())
                .collect::<Vec<_>>()
                .join(GROUP_SEPARATOR);

            let analysis = group
                .iter()
                .map(|r| r.analysis_text())
                .collect::<Vec<_>>()
                .join(GROUP_SEPARATOR);

            let ratings: Vec<f64> = group.iter().map(|r| r.record.rating).collect();

            ProviderAggregate {
                provider_name: name.to_string(),
                feedback,
                analysis,
                average_rating: mean(&ratings),
            }
        })
        .collect()
}
