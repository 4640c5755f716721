//! Generative scoring strategy: prompt construction and completion parsing.
//!
//! Delegates per-entry scoring and per-provider narratives to a
//! [`CompletionApi`] implementation. The scoring completion is requested in
//! a fixed line template and parsed straight into typed [`AspectScores`];
//! an errored call or an unusable completion fails the run.

use async_trait::async_trait;

use crate::analyzers::types::ProviderAggregate;
use crate::aspects::{Aspect, Sentiment};
use crate::error::{RaterError, Result};
use crate::record::FeedbackRecord;
use crate::scorer::{AspectScorer, AspectScores, ScoredRecord};
use crate::services::completion_api::CompletionApi;

/// Strategy delegating to a completion service. Generic over the client so
/// tests can substitute a deterministic fake.
pub struct GenerativeScorer<C> {
    api: C,
}

impl<C: CompletionApi> GenerativeScorer<C> {
    pub fn new(api: C) -> Self {
        Self { api }
    }
}

fn score_prompt(record: &FeedbackRecord) -> String {
    let taxonomy = Aspect::ALL
        .iter()
        .enumerate()
        .map(|(i, aspect)| format!("{}) {}", i + 1, aspect.synonyms()))
        .collect::<Vec<_>>()
        .join("\n");

    let template = Aspect::ALL
        .iter()
        .map(|aspect| format!("{}- <sentiment>", aspect.label()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert in sentiment analysis for customer reviews.\n\
         \n\
         We have the following aspects (including synonyms to broaden scope):\n\
         {taxonomy}\n\
         \n\
         We have 4 possible sentiments: Positive, Negative, Neutral, N/A\n\
         \n\
         Feedback: {feedback}\n\
         Provider Name: {provider}\n\
         Location: {location}\n\
         Rating: {rating}\n\
         \n\
         Please return your response in this exact format:\n\
         \n\
         {template}\n",
        feedback = record.feedback_text,
        provider = record.provider_name,
        location = record.location(),
        rating = record.rating,
    )
}

fn summary_prompt(aggregate: &ProviderAggregate, locations: &str) -> String {
    format!(
        "As a dedicated researcher in sentiment analysis evaluating service-provider \
         performance, examine the following data:\n\
         \n\
         Provider Name: {name}\n\
         Location(s): {locations}\n\
         Average Rating: {rating:.2}\n\
         \n\
         Aggregated Feedback:\n\
         {feedback}\n\
         \n\
         Aggregated Sentiment Analysis:\n\
         {analysis}\n\
         \n\
         Only mention negative aspects if the average rating < 3, and only mention \
         positive aspects if the average rating >= 3.\n\
         If the average rating >= 3, the provider is considered \"good\" overall; \
         otherwise \"poor\".\n\
         \n\
         Output-\n\
         Provider {name}, consistently performing <good/poor>, one of the repetitive \
         callouts is <reason>.\n\
         Suggestion: <improvement suggestion>.\n",
        name = aggregate.provider_name,
        locations = locations,
        rating = aggregate.average_rating,
        feedback = aggregate.feedback,
        analysis = aggregate.analysis,
    )
}

/// Parses a completion into typed aspect scores, expecting one
/// `<AspectLabel>- <Sentiment>` line per aspect. The first line seen for an
/// aspect wins; a missing aspect line fails the record.
fn parse_scores(completion: &str) -> Result<AspectScores> {
    let mut parsed: [Option<Sentiment>; Aspect::ALL.len()] = [None; Aspect::ALL.len()];

    for line in completion.lines() {
        let line = line.trim();
        for aspect in Aspect::ALL {
            if let Some(rest) = line.strip_prefix(aspect.label()) {
                if let Some(value) = rest.trim_start().strip_prefix('-') {
                    if let Some(sentiment) = Sentiment::parse(value) {
                        parsed[aspect.index()].get_or_insert(sentiment);
                    }
                }
            }
        }
    }

    let mut scores = [Sentiment::NotApplicable; Aspect::ALL.len()];
    for aspect in Aspect::ALL {
        match parsed[aspect.index()] {
            Some(sentiment) => scores[aspect.index()] = sentiment,
            None => {
                return Err(RaterError::ExternalService(format!(
                    "completion missing aspect line for '{}'",
                    aspect.label()
                )));
            }
        }
    }

    Ok(AspectScores::new(scores))
}

#[async_trait]
impl<C: CompletionApi> AspectScorer for GenerativeScorer<C> {
    async fn score(&self, record: &FeedbackRecord) -> Result<AspectScores> {
        let completion = self.api.complete(&score_prompt(record)).await?;
        parse_scores(&completion)
    }

    async fn summarize(
        &self,
        aggregate: &ProviderAggregate,
        locations: &str,
        _records: &[ScoredRecord],
    ) -> Result<String> {
        let completion = self.api.complete(&summary_prompt(aggregate, locations)).await?;

        let narrative = completion.trim();
        if narrative.is_empty() {
            return Err(RaterError::ExternalService(
                "summary completion was empty".to_string(),
            ));
        }

        Ok(narrative.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCompletion(&'static str);

    #[async_trait]
    impl CompletionApi for FixedCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn record() -> FeedbackRecord {
        FeedbackRecord {
            reviewer_name: "Alice".to_string(),
            provider_name: "Driver A".to_string(),
            location: Some("Boston".to_string()),
            feedback_text: "great support, fair fare".to_string(),
            rating: 4.0,
        }
    }

    #[test]
    fn test_score_prompt_embeds_record_and_taxonomy() {
        let prompt = score_prompt(&record());

        assert!(prompt.contains("Feedback: great support, fair fare"));
        assert!(prompt.contains("Provider Name: Driver A"));
        assert!(prompt.contains("Location: Boston"));
        assert!(prompt.contains("Rating: 4"));
        assert!(prompt.contains("Customer Support, Issue Resolution, Communication Quality"));
        assert!(prompt.contains("Billing- <sentiment>"));
    }

    #[test]
    fn test_summary_prompt_embeds_aggregate() {
        let aggregate = ProviderAggregate {
            provider_name: "Driver A".to_string(),
            feedback: "good ||| bad".to_string(),
            analysis: "lines".to_string(),
            average_rating: 2.5,
        };
        let prompt = summary_prompt(&aggregate, "Boston, Cambridge");

        assert!(prompt.contains("Provider Name: Driver A"));
        assert!(prompt.contains("Location(s): Boston, Cambridge"));
        assert!(prompt.contains("Average Rating: 2.50"));
        assert!(prompt.contains("good ||| bad"));
    }

    #[test]
    fn test_parse_scores_full_completion() {
        let completion = "Customer Support- Positive\n\
                          Cancellation- N/A\n\
                          Ride Comfort- Neutral\n\
                          Trip Efficiency- Negative\n\
                          Billing- Positive";
        let scores = parse_scores(completion).unwrap();

        assert_eq!(scores.get(Aspect::CustomerSupport), Sentiment::Positive);
        assert_eq!(scores.get(Aspect::Cancellation), Sentiment::NotApplicable);
        assert_eq!(scores.get(Aspect::RideComfort), Sentiment::Neutral);
        assert_eq!(scores.get(Aspect::TripEfficiency), Sentiment::Negative);
        assert_eq!(scores.get(Aspect::Billing), Sentiment::Positive);
    }

    #[test]
    fn test_parse_scores_tolerates_extra_text_and_order() {
        let completion = "Here is the analysis:\n\
                          Billing- Negative\n\
                          Trip Efficiency- Neutral\n\
                          Ride Comfort- N/A\n\
                          Cancellation- Positive\n\
                          Customer Support- positive\n\
                          Thank you!";
        let scores = parse_scores(completion).unwrap();

        assert_eq!(scores.get(Aspect::CustomerSupport), Sentiment::Positive);
        assert_eq!(scores.get(Aspect::Billing), Sentiment::Negative);
    }

    #[test]
    fn test_parse_scores_missing_line_fails() {
        let completion = "Customer Support- Positive\n\
                          Cancellation- N/A\n\
                          Ride Comfort- Neutral\n\
                          Trip Efficiency- Negative";
        let err = parse_scores(completion).unwrap_err();

        assert!(matches!(err, RaterError::ExternalService(_)));
        assert!(err.to_string().contains("Billing"));
    }

    #[test]
    fn test_parse_scores_unknown_sentiment_fails() {
        let completion = "Customer Support- Mixed\n\
                          Cancellation- N/A\n\
                          Ride Comfort- N/A\n\
                          Trip Efficiency- N/A\n\
                          Billing- N/A";
        assert!(parse_scores(completion).is_err());
    }

    #[tokio::test]
    async fn test_score_parses_fixed_completion() {
        let scorer = GenerativeScorer::new(FixedCompletion(
            "Customer Support- Positive\n\
             Cancellation- N/A\n\
             Ride Comfort- N/A\n\
             Trip Efficiency- N/A\n\
             Billing- Neutral",
        ));

        let scores = scorer.score(&record()).await.unwrap();
        assert_eq!(scores.get(Aspect::CustomerSupport), Sentiment::Positive);
        assert_eq!(scores.get(Aspect::Billing), Sentiment::Neutral);
    }

    #[tokio::test]
    async fn test_summarize_returns_trimmed_narrative() {
        let scorer = GenerativeScorer::new(FixedCompletion(
            "  Provider Driver A, consistently performing good.\n",
        ));
        let aggregate = ProviderAggregate {
            provider_name: "Driver A".to_string(),
            feedback: String::new(),
            analysis: String::new(),
            average_rating: 4.0,
        };

        let narrative = scorer.summarize(&aggregate, "Boston", &[]).await.unwrap();
        assert_eq!(
            narrative,
            "Provider Driver A, consistently performing good."
        );
    }

    #[tokio::test]
    async fn test_summarize_empty_completion_fails() {
        let scorer = GenerativeScorer::new(FixedCompletion("   \n"));
        let aggregate = ProviderAggregate {
            provider_name: "Driver A".to_string(),
            feedback: String::new(),
            analysis: String::new(),
            average_rating: 1.0,
        };

        let err = scorer.summarize(&aggregate, "Unknown", &[]).await.unwrap_err();
        assert!(matches!(err, RaterError::ExternalService(_)));
    }
}
