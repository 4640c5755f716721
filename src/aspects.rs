//! The fixed aspect taxonomy and sentiment labels.
//!
//! Five service aspects in a fixed order. The order matters for output
//! formatting and for tie-breaking in summaries, not for aggregation.

use std::fmt;

/// One of the five service aspects every feedback entry is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    CustomerSupport,
    Cancellation,
    RideComfort,
    TripEfficiency,
    Billing,
}

impl Aspect {
    /// All aspects, in canonical order.
    pub const ALL: [Aspect; 5] = [
        Aspect::CustomerSupport,
        Aspect::Cancellation,
        Aspect::RideComfort,
        Aspect::TripEfficiency,
        Aspect::Billing,
    ];

    /// Short label used in analysis lines and summaries.
    pub fn label(self) -> &'static str {
        match self {
            Aspect::CustomerSupport => "Customer Support",
            Aspect::Cancellation => "Cancellation",
            Aspect::RideComfort => "Ride Comfort",
            Aspect::TripEfficiency => "Trip Efficiency",
            Aspect::Billing => "Billing",
        }
    }

    /// Synonym row handed to the completion service to broaden scope.
    pub fn synonyms(self) -> &'static str {
        match self {
            Aspect::CustomerSupport => "Customer Support, Issue Resolution, Communication Quality",
            Aspect::Cancellation => "Cancellation, Provider Availability, Pickup Timeliness",
            Aspect::RideComfort => "Ride Comfort, Vehicle Condition, Cleanliness",
            Aspect::TripEfficiency => "Trip Efficiency, Route Accuracy, Journey Duration",
            Aspect::Billing => "Billing Transparency, Fare Clarity, Payment Process",
        }
    }

    /// Keywords gating this aspect in the lexical strategy. Matched as
    /// case-insensitive substrings of the feedback text.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Aspect::CustomerSupport => &[
                "support",
                "issue",
                "help",
                "resolve",
                "resolution",
                "complaint",
                "service",
                "assistance",
                "contact",
                "agent",
                "problem",
                "refund",
            ],
            Aspect::Cancellation => &[
                "cancel",
                "cancellation",
                "driver availability",
                "availability",
                "schedule",
                "time slot",
                "driver shortage",
                "unable to find driver",
            ],
            Aspect::RideComfort => &[
                "comfort",
                "vehicle",
                "car",
                "seat",
                "clean",
                "ride comfort",
                "odor",
                "air conditioning",
                "music volume",
                "noise",
                "space",
            ],
            Aspect::TripEfficiency => &[
                "efficiency",
                "route",
                "gps",
                "wrong route",
                "timely",
                "late",
                "delay",
                "traffic",
                "shortcuts",
                "navigation",
                "fast",
                "speed",
            ],
            Aspect::Billing => &[
                "bill",
                "billing",
                "fare",
                "payment",
                "charge",
                "transparent",
                "hidden fees",
                "receipt",
                "tax",
                "cost breakdown",
                "price",
            ],
        }
    }

    /// Position in [`Aspect::ALL`].
    pub fn index(self) -> usize {
        match self {
            Aspect::CustomerSupport => 0,
            Aspect::Cancellation => 1,
            Aspect::RideComfort => 2,
            Aspect::TripEfficiency => 3,
            Aspect::Billing => 4,
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sentiment label attached to one aspect of one feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    NotApplicable,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::NotApplicable => "N/A",
        }
    }

    /// Parses a label as produced by the completion service. Lenient about
    /// case and surrounding whitespace, strict about the vocabulary.
    pub fn parse(value: &str) -> Option<Sentiment> {
        match value.trim().to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            "n/a" | "na" | "not applicable" => Some(Sentiment::NotApplicable),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
