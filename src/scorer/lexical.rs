//! Lexical scoring strategy: keyword gating plus document polarity.
//!
//! An aspect is scored only if one of its keywords occurs in the feedback
//! text. All matched aspects of a record share one whole-document polarity
//! score; aspects are gated independently but never scored independently.
//! Deterministic, no external dependency.

use async_trait::async_trait;

use crate::analyzers::summary::{GOOD_RATING_THRESHOLD, top_aspect};
use crate::analyzers::types::ProviderAggregate;
use crate::aspects::Sentiment;
use crate::error::Result;
use crate::polarity::PolarityLexicon;
use crate::record::FeedbackRecord;
use crate::scorer::{AspectScorer, AspectScores, ScoredRecord};

const POSITIVE_THRESHOLD: f64 = 0.05;
const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Maps a document polarity in [-1, 1] to a sentiment label. Scores on the
/// thresholds themselves are Neutral.
pub fn polarity_label(polarity: f64) -> Sentiment {
    if polarity > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Local scoring strategy backed by a [`PolarityLexicon`].
pub struct LexicalScorer {
    lexicon: PolarityLexicon,
}

impl LexicalScorer {
    pub fn new() -> Self {
        Self {
            lexicon: PolarityLexicon::new(),
        }
    }
}

impl Default for LexicalScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AspectScorer for LexicalScorer {
    async fn score(&self, record: &FeedbackRecord) -> Result<AspectScores> {
        let feedback_lower = record.feedback_text.to_lowercase();
        // One document-level score, reused for every matched aspect
        let polarity = self.lexicon.polarity(&record.feedback_text);

        Ok(AspectScores::from_fn(|aspect| {
            let matched = aspect
                .keywords()
                .iter()
                .any(|keyword| feedback_lower.contains(keyword));

            if matched {
                polarity_label(polarity)
            } else {
                Sentiment::NotApplicable
            }
        }))
    }

    async fn summarize(
        &self,
        aggregate: &ProviderAggregate,
        _locations: &str,
        records: &[ScoredRecord],
    ) -> Result<String> {
        let text = if aggregate.average_rating < GOOD_RATING_THRESHOLD {
            let aspect = top_aspect(records, Sentiment::Negative)
                .map(|a| a.label().to_string())
                .unwrap_or_else(|| "No negative aspect found".to_string());

            format!(
                "Provider {} is performing poorly (Average Rating: {:.2}).\n\
                 One of the most frequent negative aspects is: {}.\n\
                 Suggestion: Improve on {} to enhance customer satisfaction.",
                aggregate.provider_name, aggregate.average_rating, aspect, aspect
            )
        } else {
            let aspect = top_aspect(records, Sentiment::Positive)
                .map(|a| a.label().to_string())
                .unwrap_or_else(|| "No positive aspect found".to_string());

            format!(
                "Provider {} is performing well (Average Rating: {:.2}).\n\
                 One of the most frequent positive aspects is: {}.\n\
                 Suggestion: Continue to maintain strengths in {}!",
                aggregate.provider_name, aggregate.average_rating, aspect, aspect
            )
        };

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::Aspect;

    fn record(feedback: &str) -> FeedbackRecord {
        FeedbackRecord {
            reviewer_name: "User 1".to_string(),
            provider_name: "Driver A".to_string(),
            location: None,
            feedback_text: feedback.to_string(),
            rating: 0.0,
        }
    }

    fn scored(provider: &str, scores: AspectScores) -> ScoredRecord {
        ScoredRecord {
            record: FeedbackRecord {
                reviewer_name: "User 1".to_string(),
                provider_name: provider.to_string(),
                location: None,
                feedback_text: "x".to_string(),
                rating: 0.0,
            },
            scores,
        }
    }

    fn aggregate(provider: &str, average_rating: f64) -> ProviderAggregate {
        ProviderAggregate {
            provider_name: provider.to_string(),
            feedback: String::new(),
            analysis: String::new(),
            average_rating,
        }
    }

    #[test]
    fn test_polarity_label_boundaries() {
        assert_eq!(polarity_label(0.05), Sentiment::Neutral);
        assert_eq!(polarity_label(0.0500001), Sentiment::Positive);
        assert_eq!(polarity_label(-0.05), Sentiment::Neutral);
        assert_eq!(polarity_label(-0.0500001), Sentiment::Negative);
        assert_eq!(polarity_label(0.0), Sentiment::Neutral);
    }

    #[tokio::test]
    async fn test_single_polarity_reused_across_aspects() {
        // Known coarse-graining: aspects are gated independently by keyword
        // presence but share one document-level polarity score.
        let scorer = LexicalScorer::new();
        let scores = scorer
            .score(&record("driver cancelled last minute, terrible support"))
            .await
            .unwrap();

        assert_eq!(scores.get(Aspect::Cancellation), Sentiment::Negative);
        assert_eq!(scores.get(Aspect::CustomerSupport), Sentiment::Negative);
        assert_eq!(scores.get(Aspect::RideComfort), Sentiment::NotApplicable);
        assert_eq!(scores.get(Aspect::TripEfficiency), Sentiment::NotApplicable);
        assert_eq!(scores.get(Aspect::Billing), Sentiment::NotApplicable);
    }

    #[tokio::test]
    async fn test_no_keyword_match_is_not_applicable() {
        let scorer = LexicalScorer::new();
        let scores = scorer.score(&record("wonderful experience overall")).await.unwrap();

        for (_, sentiment) in scores.iter() {
            assert_eq!(sentiment, Sentiment::NotApplicable);
        }
    }

    #[tokio::test]
    async fn test_scoring_is_idempotent() {
        let scorer = LexicalScorer::new();
        let input = record("the car was clean but the fare was terrible");

        let first = scorer.score(&input).await.unwrap();
        let second = scorer.score(&input).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_rating_threshold_picks_framing() {
        let scorer = LexicalScorer::new();

        let good = scorer
            .summarize(&aggregate("Driver A", 3.0), "Unknown", &[])
            .await
            .unwrap();
        assert!(good.contains("performing well"));
        assert!(good.contains("(Average Rating: 3.00)"));
        assert!(good.contains("No positive aspect found"));

        let poor = scorer
            .summarize(&aggregate("Driver A", 2.999), "Unknown", &[])
            .await
            .unwrap();
        assert!(poor.contains("performing poorly"));
        assert!(poor.contains("No negative aspect found"));
    }

    #[tokio::test]
    async fn test_tied_negative_counts_break_to_earliest_aspect() {
        // Two records, every aspect Negative except Billing: four aspects
        // tie at two mentions each, so the earliest in canonical order wins.
        let all_negative_but_billing = || {
            AspectScores::from_fn(|aspect| {
                if aspect == Aspect::Billing {
                    Sentiment::NotApplicable
                } else {
                    Sentiment::Negative
                }
            })
        };
        let records = vec![
            scored("Driver B", all_negative_but_billing()),
            scored("Driver B", all_negative_but_billing()),
        ];

        let scorer = LexicalScorer::new();
        let text = scorer
            .summarize(&aggregate("Driver B", 1.5), "Unknown", &records)
            .await
            .unwrap();

        assert!(text.contains("most frequent negative aspects is: Customer Support"));
        assert!(text.contains("(Average Rating: 1.50)"));
    }

    #[tokio::test]
    async fn test_max_count_wins_over_earlier_aspect() {
        let records = vec![
            scored(
                "Driver C",
                AspectScores::from_fn(|aspect| match aspect {
                    Aspect::Billing => Sentiment::Positive,
                    Aspect::CustomerSupport => Sentiment::Positive,
                    _ => Sentiment::NotApplicable,
                }),
            ),
            scored(
                "Driver C",
                AspectScores::from_fn(|aspect| match aspect {
                    Aspect::Billing => Sentiment::Positive,
                    _ => Sentiment::NotApplicable,
                }),
            ),
            scored(
                "Driver C",
                AspectScores::from_fn(|aspect| match aspect {
                    Aspect::Billing => Sentiment::Positive,
                    _ => Sentiment::NotApplicable,
                }),
            ),
        ];

        let scorer = LexicalScorer::new();
        let text = scorer
            .summarize(&aggregate("Driver C", 4.0), "Boston", &records)
            .await
            .unwrap();

        assert!(text.contains("most frequent positive aspects is: Billing"));
    }
}
