//! The per-row input record and its missing-value defaults.
//!
//! Every default is resolved exactly once, when the record is built from a
//! raw CSV row. Downstream stages never see a missing value, with one
//! exception: `location` stays optional so the summarizer can tell a real
//! `"Unknown"` apart from an absent value.

use std::collections::HashMap;

/// Fallback used wherever a textual field is absent.
pub const UNKNOWN: &str = "Unknown";

/// Expected column names, matched after the loader trims header whitespace.
pub const COL_REVIEWER: &str = "Reviewer Name";
pub const COL_PROVIDER: &str = "Provider Name";
pub const COL_LOCATION: &str = "Location";
pub const COL_FEEDBACK: &str = "Feedback";
pub const COL_RATING: &str = "Rating";

/// One input row, immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    /// Reviewer display name; `"User <n>"` when the column is absent or blank.
    pub reviewer_name: String,
    /// Aggregation key; `"Unknown"` when absent or blank.
    pub provider_name: String,
    /// `None` when absent or blank. Read through [`FeedbackRecord::location`]
    /// everywhere the default applies.
    pub location: Option<String>,
    /// Free-text feedback; `"Unknown"` when absent or blank.
    pub feedback_text: String,
    /// Numeric rating; `0` when absent or non-numeric.
    pub rating: f64,
}

impl FeedbackRecord {
    /// Builds a record from a raw CSV row, applying every field default.
    ///
    /// `index` is the 0-based position of the row in the dataset, used to
    /// synthesize the `"User <n>"` reviewer placeholder. `columns` maps
    /// trimmed column names to their positions in `row`.
    pub fn from_row(
        index: usize,
        columns: &HashMap<String, usize>,
        row: &csv::StringRecord,
    ) -> Self {
        let field = |name: &str| -> Option<&str> {
            columns
                .get(name)
                .and_then(|&i| row.get(i))
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        FeedbackRecord {
            reviewer_name: field(COL_REVIEWER)
                .map(str::to_string)
                .unwrap_or_else(|| format!("User {}", index + 1)),
            provider_name: field(COL_PROVIDER)
                .map(str::to_string)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            location: field(COL_LOCATION).map(str::to_string),
            feedback_text: field(COL_FEEDBACK)
                .map(str::to_string)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            rating: field(COL_RATING)
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(0.0),
        }
    }

    /// The location with the documented default applied.
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or(UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> HashMap<String, usize> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.to_string(), i))
            .collect()
    }

    #[test]
    fn test_all_fields_present() {
        let cols = columns(&[
            COL_REVIEWER,
            COL_PROVIDER,
            COL_LOCATION,
            COL_FEEDBACK,
            COL_RATING,
        ]);
        let row =
            csv::StringRecord::from(vec!["Alice", "Driver A", "Boston", "Great ride", "4.5"]);
        let record = FeedbackRecord::from_row(0, &cols, &row);

        assert_eq!(record.reviewer_name, "Alice");
        assert_eq!(record.provider_name, "Driver A");
        assert_eq!(record.location(), "Boston");
        assert_eq!(record.feedback_text, "Great ride");
        assert_eq!(record.rating, 4.5);
    }

    #[test]
    fn test_missing_columns_resolve_to_defaults() {
        let cols = columns(&[COL_FEEDBACK]);
        let row = csv::StringRecord::from(vec!["Late pickup"]);
        let record = FeedbackRecord::from_row(2, &cols, &row);

        assert_eq!(record.reviewer_name, "User 3");
        assert_eq!(record.provider_name, UNKNOWN);
        assert_eq!(record.location, None);
        assert_eq!(record.location(), UNKNOWN);
        assert_eq!(record.rating, 0.0);
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let cols = columns(&[COL_REVIEWER, COL_FEEDBACK, COL_RATING]);
        let row = csv::StringRecord::from(vec!["   ", "", "  "]);
        let record = FeedbackRecord::from_row(0, &cols, &row);

        assert_eq!(record.reviewer_name, "User 1");
        assert_eq!(record.feedback_text, UNKNOWN);
        assert_eq!(record.rating, 0.0);
    }

    #[test]
    fn test_non_numeric_rating_defaults_to_zero() {
        let cols = columns(&[COL_FEEDBACK, COL_RATING]);
        let row = csv::StringRecord::from(vec!["ok", "five stars"]);
        let record = FeedbackRecord::from_row(0, &cols, &row);

        assert_eq!(record.rating, 0.0);
    }
}
