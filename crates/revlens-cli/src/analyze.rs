//! `analyze` command: run the review pipeline for one URL and print the report.

use anyhow::Context;

use revlens_extract::extract_reviews;
use revlens_fetch::DocumentFetcher;
use revlens_sentiment::{analyze_reviews, generate_insights, AggregateReport, LexiconScorer};

pub async fn run(url: &str, max_reviews: Option<usize>, as_json: bool) -> anyhow::Result<()> {
    let config = revlens_core::load_app_config_from_env()?;
    let max_reviews = max_reviews.unwrap_or(config.max_reviews);

    let fetcher = DocumentFetcher::new(
        config.fetch_timeout_secs,
        config.fetch_user_agent.as_deref(),
        config.fetch_max_retries,
        config.fetch_retry_backoff_base_secs,
    )?;

    let document = fetcher
        .fetch(url)
        .await
        .context("failed to fetch product page")?;
    let reviews = extract_reviews(&document, max_reviews)?;

    if reviews.is_empty() {
        anyhow::bail!(
            "no reviews found at {url} — the page may block scraping or contain no reviews"
        );
    }

    tracing::info!(url, count = reviews.len(), "analyzing extracted reviews");
    let scorer = LexiconScorer::new();
    let report = analyze_reviews(&scorer, &reviews);
    let insights = generate_insights(&report);

    if as_json {
        let payload = serde_json::json!({
            "url": url,
            "summary": {
                "total_reviews_found": report.total_reviews,
                "overall_sentiment": report.overall_sentiment,
                "positive_percentage": report.positive_percentage,
                "negative_percentage": report.negative_percentage,
                "neutral_percentage": report.neutral_percentage,
            },
            "insights_for_manager": insights,
            "top_positive_reviews": report.top_positive_reviews,
            "top_negative_reviews": report.top_negative_reviews,
            "detailed_sentiments": report.detailed_sentiments,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", render_summary(url, &report, &insights));
    }

    Ok(())
}

/// Renders the human-readable report. Pure so it can be tested without
/// running the pipeline.
fn render_summary(url: &str, report: &AggregateReport, insights: &[String]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "Analysis for {url}");
    let _ = writeln!(out, "Reviews analyzed: {}", report.total_reviews);
    let _ = writeln!(out, "Overall sentiment: {}", report.overall_sentiment);
    let _ = writeln!(
        out,
        "Positive: {:.2}%  Negative: {:.2}%  Neutral: {:.2}%",
        report.positive_percentage, report.negative_percentage, report.neutral_percentage
    );

    let _ = writeln!(out, "\nInsights:");
    for (i, insight) in insights.iter().enumerate() {
        let _ = writeln!(out, "  {}. {insight}", i + 1);
    }

    if !report.top_positive_reviews.is_empty() {
        let _ = writeln!(out, "\nTop positive reviews:");
        for review in &report.top_positive_reviews {
            let _ = writeln!(
                out,
                "  [{:+.2}] {}",
                review.scores.compound, review.original_review
            );
        }
    }

    if !report.top_negative_reviews.is_empty() {
        let _ = writeln!(out, "\nTop negative reviews:");
        for review in &report.top_negative_reviews {
            let _ = writeln!(
                out,
                "  [{:+.2}] {}",
                review.scores.compound, review.original_review
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_names_overall_sentiment_and_counts() {
        let reviews = vec![
            "Absolutely love this machine, excellent build quality.".to_string(),
            "Terrible experience, broke within a week.".to_string(),
        ];
        let report = analyze_reviews(&LexiconScorer::new(), &reviews);
        let insights = generate_insights(&report);

        let rendered = render_summary("https://shop.example.com/p/1", &report, &insights);
        assert!(rendered.contains("Reviews analyzed: 2"));
        assert!(rendered.contains("Overall sentiment:"));
        assert!(rendered.contains("Insights:"));
        assert!(rendered.contains("1. "));
        assert!(rendered.contains("Top positive reviews:"));
        assert!(rendered.contains("Top negative reviews:"));
    }
}
