//! Rule-based insight generation for managers.
//!
//! Deterministically turns an [`AggregateReport`] into exactly five
//! natural-language statements: overall assessment, engagement volume, top
//! positive themes, top negative issues, and a strategic recommendation.
//! No re-scoring happens here — every number comes from the report.

use std::collections::HashMap;

use crate::types::{AggregateReport, OverallSentiment, ScoredReview, SentimentLabel};

/// The generator always returns exactly this many statements.
const INSIGHT_COUNT: usize = 5;

/// How many theme words each of the theme slots names.
const TOP_THEMES: usize = 3;

/// Theme words must be strictly longer than this many chars.
const MIN_THEME_WORD_LEN: usize = 3;

/// Generic positive/product vocabulary excluded from positive-theme
/// extraction — these words carry sentiment, not feature information.
const POSITIVE_STOPWORDS: &[&str] = &[
    "great",
    "good",
    "love",
    "excellent",
    "best",
    "product",
    "very",
    "would",
    "really",
    "much",
    "well",
    "amazing",
    "highly",
    "recommend",
    "happy",
    "perfectly",
    "quick",
];

/// Mirror list for negative-theme extraction.
const NEGATIVE_STOPWORDS: &[&str] = &[
    "bad",
    "poor",
    "issue",
    "problem",
    "not",
    "disappointed",
    "worst",
    "product",
    "very",
    "would",
    "really",
    "much",
    "well",
    "terrible",
    "waste",
    "away",
    "buggy",
    "crashes",
];

/// Derives the fixed five-slot insight list from a classified report.
///
/// Always returns exactly [`INSIGHT_COUNT`] strings for any input,
/// including the degenerate empty report — each slot has a fallback
/// phrasing, and a generic padding sentence is a final safety net.
#[must_use]
pub fn generate_insights(report: &AggregateReport) -> Vec<String> {
    let mut insights = Vec::with_capacity(INSIGHT_COUNT);

    insights.push(overall_assessment(report));
    insights.push(engagement_volume(report.total_reviews));
    insights.push(positive_themes(report));
    insights.push(negative_themes(report));
    insights.push(strategic_recommendation(report));

    while insights.len() < INSIGHT_COUNT {
        insights.push("Not enough review data yet to produce further insights.".to_string());
    }
    insights.truncate(INSIGHT_COUNT);
    insights
}

/// Slot 1 — overall assessment keyed by the overall sentiment label.
fn overall_assessment(report: &AggregateReport) -> String {
    match report.overall_sentiment {
        OverallSentiment::Positive => format!(
            "Product is generally well-received with {:.1}% positive reviews. \
             Customers are satisfied with the product quality and performance.",
            report.positive_percentage
        ),
        OverallSentiment::Negative => format!(
            "Product has significant issues with {:.1}% negative reviews. \
             Immediate attention required to address customer concerns.",
            report.negative_percentage
        ),
        OverallSentiment::Neutral | OverallSentiment::NoData => format!(
            "Product has mixed reviews with {:.1}% positive, {:.1}% negative, \
             and {:.1}% neutral feedback.",
            report.positive_percentage, report.negative_percentage, report.neutral_percentage
        ),
    }
}

/// Slot 2 — volume/engagement tier by total review count.
fn engagement_volume(total: usize) -> String {
    if total >= 50 {
        format!(
            "High engagement: {total} reviews analyzed, a strong sample for \
             decision-making."
        )
    } else if total >= 20 {
        format!(
            "Moderate engagement: {total} reviews analyzed provide a \
             reasonable read on customer reception."
        )
    } else {
        format!(
            "Limited feedback so far: only {total} reviews available, so \
             treat these results as directional."
        )
    }
}

/// Slot 3 — most-mentioned feature words across positive reviews.
fn positive_themes(report: &AggregateReport) -> String {
    let positives: Vec<&ScoredReview> = bucket(report, SentimentLabel::Positive);
    if positives.is_empty() {
        return "No positive reviews to extract key features from.".to_string();
    }

    let top = top_theme_words(&positives, POSITIVE_STOPWORDS);
    if top.is_empty() {
        return "No specific features were frequently mentioned in positive reviews.".to_string();
    }

    format!(
        "Key positive features mentioned: {}. These are the main selling \
         points customers appreciate.",
        top.join(", ")
    )
}

/// Slot 4 — most-mentioned issue words across negative reviews.
fn negative_themes(report: &AggregateReport) -> String {
    let negatives: Vec<&ScoredReview> = bucket(report, SentimentLabel::Negative);
    if negatives.is_empty() {
        return "No negative reviews to extract issues from.".to_string();
    }

    let top = top_theme_words(&negatives, NEGATIVE_STOPWORDS);
    if top.is_empty() {
        return "No specific issues were frequently mentioned in negative reviews.".to_string();
    }

    format!(
        "Main issues reported: {}. These problems need immediate attention \
         and improvement.",
        top.join(", ")
    )
}

/// Slot 5 — strategic recommendation, tiers checked in order.
fn strategic_recommendation(report: &AggregateReport) -> String {
    let neutral_count = bucket(report, SentimentLabel::Neutral).len();
    #[allow(clippy::cast_precision_loss)]
    let neutral_heavy = neutral_count as f64 > 0.4 * report.total_reviews as f64;

    if report.positive_percentage > 70.0 {
        format!(
            "Strong advocate base: with {:.1}% positive sentiment the product \
             is ready for expanded marketing and distribution.",
            report.positive_percentage
        )
    } else if report.negative_percentage > 50.0 {
        format!(
            "Urgent remediation needed: {:.1}% of reviews are negative; \
             prioritize fixes before investing in growth.",
            report.negative_percentage
        )
    } else if neutral_heavy {
        "Customer indifference risk: a large neutral segment suggests the \
         product needs clearer differentiation."
            .to_string()
    } else {
        "Hold steady: sentiment is balanced; continue monitoring reviews for \
         emerging trends."
            .to_string()
    }
}

fn bucket(report: &AggregateReport, label: SentimentLabel) -> Vec<&ScoredReview> {
    report
        .detailed_sentiments
        .iter()
        .filter(|r| r.sentiment == label)
        .collect()
}

/// Counts alphanumeric word tokens (length > 3, lowercased) across the
/// processed text of `reviews`, excluding `stopwords`, and returns the top
/// words by count, capitalized. Ties break by first-encountered order
/// (stable sort over accumulation order).
fn top_theme_words(reviews: &[&ScoredReview], stopwords: &[&str]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for review in reviews {
        let words = review
            .processed_review
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty());
        for raw in words {
            let word = raw.to_lowercase();
            if word.chars().count() > MIN_THEME_WORD_LEN && !stopwords.contains(&word.as_str()) {
                if !counts.contains_key(&word) {
                    first_seen.push(word.clone());
                }
                *counts.entry(word).or_insert(0) += 1;
            }
        }
    }

    let mut ranked = first_seen;
    ranked.sort_by_key(|word| std::cmp::Reverse(counts[word]));
    ranked.truncate(TOP_THEMES);
    ranked.iter().map(|word| capitalize(word)).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;
