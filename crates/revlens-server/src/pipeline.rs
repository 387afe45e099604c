//! Request pipeline: fetch → extract → classify → insights.

use serde::Serialize;
use thiserror::Error;

use revlens_extract::{extract_reviews, ExtractError};
use revlens_fetch::{DocumentFetcher, FetchError};
use revlens_sentiment::{
    analyze_reviews, generate_insights, AggregateReport, OverallSentiment, PolarityScorer,
    ScoredReview,
};

/// Failure class the caller reports as a retryable external error: the page
/// could not be retrieved or could not be parsed at all. "No reviews found"
/// is NOT an error — see [`PipelineOutcome::NoReviews`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("document parse failed: {0}")]
    Extract(#[from] ExtractError),
}

/// Terminal outcome of a successful pipeline run.
#[derive(Debug)]
pub enum PipelineOutcome {
    Report(Box<AnalysisReport>),
    /// The page was fetched and parsed but yielded zero candidate reviews.
    NoReviews,
}

/// The full client-facing analysis for one product URL.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub url: String,
    pub summary: AnalysisSummary,
    pub insights_for_manager: Vec<String>,
    pub top_positive_reviews: Vec<ScoredReview>,
    pub top_negative_reviews: Vec<ScoredReview>,
    pub detailed_sentiments: Vec<ScoredReview>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisSummary {
    pub total_reviews_found: usize,
    pub overall_sentiment: OverallSentiment,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
}

impl AnalysisReport {
    fn assemble(url: &str, report: AggregateReport, insights: Vec<String>) -> Self {
        Self {
            url: url.to_string(),
            summary: AnalysisSummary {
                total_reviews_found: report.total_reviews,
                overall_sentiment: report.overall_sentiment,
                positive_percentage: report.positive_percentage,
                negative_percentage: report.negative_percentage,
                neutral_percentage: report.neutral_percentage,
            },
            insights_for_manager: insights,
            top_positive_reviews: report.top_positive_reviews,
            top_negative_reviews: report.top_negative_reviews,
            detailed_sentiments: report.detailed_sentiments,
        }
    }
}

/// Runs the whole analysis for one URL.
///
/// The stages never overlap and share no state across requests; review order
/// in `detailed_sentiments` matches extraction order. Failures are surfaced,
/// never papered over with sample data.
///
/// # Errors
///
/// Returns [`PipelineError`] when the page cannot be fetched or parsed.
pub async fn run_pipeline<S: PolarityScorer>(
    fetcher: &DocumentFetcher,
    scorer: &S,
    url: &str,
    max_reviews: usize,
) -> Result<PipelineOutcome, PipelineError> {
    let document = fetcher.fetch(url).await?;
    let reviews = extract_reviews(&document, max_reviews)?;

    if reviews.is_empty() {
        tracing::info!(url, "extraction yielded zero reviews");
        return Ok(PipelineOutcome::NoReviews);
    }

    tracing::info!(url, count = reviews.len(), "analyzing extracted reviews");
    let report = analyze_reviews(scorer, &reviews);
    let insights = generate_insights(&report);

    Ok(PipelineOutcome::Report(Box::new(AnalysisReport::assemble(
        url, report, insights,
    ))))
}
