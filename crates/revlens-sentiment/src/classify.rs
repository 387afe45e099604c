//! Review classification and aggregation.

use std::cmp::Ordering;

use crate::preprocess::preprocess;
use crate::scorer::PolarityScorer;
use crate::types::{AggregateReport, OverallSentiment, ScoredReview, SentimentLabel};

/// Compound score above which a review is positive; mirrored for negative.
/// Strict comparisons — a compound of exactly ±0.1 stays neutral. The dead
/// zone keeps mildly-worded reviews out of the polar buckets.
const POSITIVE_THRESHOLD: f64 = 0.1;
const NEGATIVE_THRESHOLD: f64 = -0.1;

/// How many reviews each top list keeps.
const TOP_REVIEWS: usize = 5;

/// Scores and classifies every review, then aggregates the set into an
/// [`AggregateReport`].
///
/// An empty input degrades to a zero-valued report with the
/// [`OverallSentiment::NoData`] sentinel — an empty review set is an
/// expected outcome, not a defect, so this never fails.
///
/// `detailed_sentiments` preserves the input order. Scoring is sequential;
/// if it is ever parallelized, results must be collected back into input
/// index order before the report is built.
pub fn analyze_reviews<S: PolarityScorer>(scorer: &S, reviews: &[String]) -> AggregateReport {
    if reviews.is_empty() {
        tracing::info!("no reviews to analyze — returning empty report");
        return AggregateReport {
            total_reviews: 0,
            overall_sentiment: OverallSentiment::NoData,
            positive_percentage: 0.0,
            negative_percentage: 0.0,
            neutral_percentage: 0.0,
            top_positive_reviews: Vec::new(),
            top_negative_reviews: Vec::new(),
            detailed_sentiments: Vec::new(),
        };
    }

    let detailed: Vec<ScoredReview> = reviews
        .iter()
        .map(|original| {
            let processed = preprocess(original);
            let scores = scorer.score(&processed);
            ScoredReview {
                original_review: original.clone(),
                processed_review: processed,
                sentiment: label_for_compound(scores.compound),
                scores,
            }
        })
        .collect();

    let total = detailed.len();
    let positive_count = count_label(&detailed, SentimentLabel::Positive);
    let negative_count = count_label(&detailed, SentimentLabel::Negative);
    let neutral_count = total - positive_count - negative_count;

    let positive_pct = percentage(positive_count, total);
    let negative_pct = percentage(negative_count, total);
    let neutral_pct = percentage(neutral_count, total);

    // Neutral votes count half towards either side; ties stay Neutral.
    // Comparison happens on unrounded percentages.
    let overall = if positive_pct > negative_pct + 0.5 * neutral_pct {
        OverallSentiment::Positive
    } else if negative_pct > positive_pct + 0.5 * neutral_pct {
        OverallSentiment::Negative
    } else {
        OverallSentiment::Neutral
    };

    let top_positive_reviews = top_by_compound(&detailed, SentimentLabel::Positive, |a, b| {
        b.partial_cmp(&a).unwrap_or(Ordering::Equal)
    });
    let top_negative_reviews = top_by_compound(&detailed, SentimentLabel::Negative, |a, b| {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    });

    tracing::debug!(
        total,
        positive = positive_count,
        negative = negative_count,
        neutral = neutral_count,
        overall = %overall,
        "classified review set"
    );

    AggregateReport {
        total_reviews: total,
        overall_sentiment: overall,
        positive_percentage: round2(positive_pct),
        negative_percentage: round2(negative_pct),
        neutral_percentage: round2(neutral_pct),
        top_positive_reviews,
        top_negative_reviews,
        detailed_sentiments: detailed,
    }
}

/// Buckets a compound score: `> 0.1` positive, `< -0.1` negative, else neutral.
#[must_use]
pub fn label_for_compound(compound: f64) -> SentimentLabel {
    if compound > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

fn count_label(reviews: &[ScoredReview], label: SentimentLabel) -> usize {
    reviews.iter().filter(|r| r.sentiment == label).count()
}

#[allow(clippy::cast_precision_loss)]
fn percentage(count: usize, total: usize) -> f64 {
    count as f64 / total as f64 * 100.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Filters one bucket and returns its top entries by compound score.
/// `Vec::sort_by` is stable, so ties retain input order.
fn top_by_compound(
    reviews: &[ScoredReview],
    label: SentimentLabel,
    cmp: impl Fn(f64, f64) -> Ordering,
) -> Vec<ScoredReview> {
    let mut bucket: Vec<ScoredReview> = reviews
        .iter()
        .filter(|r| r.sentiment == label)
        .cloned()
        .collect();
    bucket.sort_by(|a, b| cmp(a.scores.compound, b.scores.compound));
    bucket.truncate(TOP_REVIEWS);
    bucket
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
