//! Per-entry aspect scoring.
//!
//! [`AspectScorer`] is the seam between the pipeline skeleton and the two
//! interchangeable scoring strategies: [`GenerativeScorer`] delegates to an
//! external completion service, [`LexicalScorer`] uses local keyword and
//! polarity heuristics. Both return the same typed [`AspectScores`].

pub mod generative;
pub mod lexical;

pub use generative::GenerativeScorer;
pub use lexical::LexicalScorer;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::analyzers::types::ProviderAggregate;
use crate::aspects::{Aspect, Sentiment};
use crate::error::Result;
use crate::record::FeedbackRecord;

/// One sentiment per aspect, in canonical aspect order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectScores([Sentiment; Aspect::ALL.len()]);

impl AspectScores {
    pub fn new(scores: [Sentiment; Aspect::ALL.len()]) -> Self {
        AspectScores(scores)
    }

    /// Builds scores by evaluating `f` for each aspect in canonical order.
    pub fn from_fn(mut f: impl FnMut(Aspect) -> Sentiment) -> Self {
        AspectScores(Aspect::ALL.map(|aspect| f(aspect)))
    }

    pub fn get(&self, aspect: Aspect) -> Sentiment {
        self.0[aspect.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Aspect, Sentiment)> + '_ {
        Aspect::ALL.into_iter().zip(self.0.iter().copied())
    }
}

/// A feedback record plus its five aspect sentiments.
#[derive(Debug, Clone)]
pub struct ScoredRecord {
    pub record: FeedbackRecord,
    pub scores: AspectScores,
}

impl ScoredRecord {
    /// Canonical multi-line analysis text: the feedback followed by one
    /// `<AspectLabel>- <Sentiment>` line per aspect. This is the text the
    /// aggregator concatenates and the diagnostic sink prints.
    pub fn analysis_text(&self) -> String {
        let lines: Vec<String> = self
            .scores
            .iter()
            .map(|(aspect, sentiment)| format!("{}- {}", aspect.label(), sentiment.label()))
            .collect();

        format!(
            "Feedback: {}\n\n{}",
            self.record.feedback_text,
            lines.join("\n")
        )
    }
}

/// Strategy seam for per-entry scoring and per-provider narratives.
#[async_trait]
pub trait AspectScorer: Send + Sync {
    /// Scores one record: one sentiment per aspect, order-stable.
    async fn score(&self, record: &FeedbackRecord) -> Result<AspectScores>;

    /// Produces the narrative for one provider. `records` holds only that
    /// provider's scored records; `locations` is the resolved location
    /// string for the summary.
    async fn summarize(
        &self,
        aggregate: &ProviderAggregate,
        locations: &str,
        records: &[ScoredRecord],
    ) -> Result<String>;
}

/// Scores every record in order, one at a time. Each result is surfaced to
/// the log as it is produced; a scoring failure aborts the run.
#[tracing::instrument(skip(scorer, records), fields(record_count = records.len()))]
pub async fn score_records<S: AspectScorer>(
    scorer: &S,
    records: &[FeedbackRecord],
) -> Result<Vec<ScoredRecord>> {
    let mut scored = Vec::with_capacity(records.len());

    for record in records {
        let scores = scorer.score(record).await?;
        let entry = ScoredRecord {
            record: record.clone(),
            scores,
        };

        info!(
            reviewer = %entry.record.reviewer_name,
            provider = %entry.record.provider_name,
            location = %entry.record.location(),
            "Record scored"
        );
        debug!("{}", entry.analysis_text());

        scored.push(entry);
    }

    Ok(scored)
}
