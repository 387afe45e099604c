use serde::Serialize;

/// Polarity sub-scores for one piece of text.
///
/// `positive`, `negative`, and `neutral` are proportions in `[0, 1]` of the
/// text's sentiment mass (all zero for token-free text). `compound` is the
/// normalized overall valence in `[-1, 1]`; it drives classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PolarityScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

/// Per-review sentiment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Overall verdict for a whole review set.
///
/// `NoData` is the sentinel for an empty review set; it serializes as the
/// human-readable "No reviews to analyze." string rather than a bare tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallSentiment {
    Positive,
    Negative,
    Neutral,
    NoData,
}

impl OverallSentiment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OverallSentiment::Positive => "Positive",
            OverallSentiment::Negative => "Negative",
            OverallSentiment::Neutral => "Neutral",
            OverallSentiment::NoData => "No reviews to analyze.",
        }
    }
}

impl std::fmt::Display for OverallSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OverallSentiment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// One classified review. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredReview {
    pub original_review: String,
    pub processed_review: String,
    pub sentiment: SentimentLabel,
    pub scores: PolarityScores,
}

/// Aggregated sentiment statistics for one review set.
///
/// Percentages are rounded to two decimals and computed independently from
/// bucket counts — they sum to 100 modulo rounding, with no forced
/// normalization. `detailed_sentiments` preserves the input review order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub total_reviews: usize,
    pub overall_sentiment: OverallSentiment,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
    /// Up to 5 positive reviews, most positive compound first.
    pub top_positive_reviews: Vec<ScoredReview>,
    /// Up to 5 negative reviews, most negative compound first.
    pub top_negative_reviews: Vec<ScoredReview>,
    pub detailed_sentiments: Vec<ScoredReview>,
}
