use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;

use crate::api::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;
use crate::pipeline::{run_pipeline, PipelineOutcome};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: Option<String>,
}

/// `POST /api/v1/analyze` — run the full fetch → extract → classify →
/// insights pipeline for one product URL.
///
/// - Missing/blank `url` → 400 before the pipeline is invoked.
/// - Zero reviews extracted → 404 (an empty result, not a server fault).
/// - Fetch/parse failure → 502 with a generic retry message; the diagnostic
///   detail goes to the log, not the client.
pub async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<AnalyzeRequest>,
) -> Response {
    let Some(url) = body
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
    else {
        return ApiError::new(
            req_id.0,
            "validation_error",
            "missing 'url' in request body",
        )
        .into_response();
    };

    tracing::info!(url, "analyze request received");

    match run_pipeline(&state.fetcher, &state.scorer, url, state.max_reviews).await {
        Ok(PipelineOutcome::Report(report)) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: report,
                meta: ResponseMeta::new(req_id.0),
            }),
        )
            .into_response(),
        Ok(PipelineOutcome::NoReviews) => ApiError::new(
            req_id.0,
            "not_found",
            "no reviews found — the page may block scraping or contain no reviews",
        )
        .into_response(),
        Err(e) => {
            tracing::error!(url, error = %e, "pipeline failed");
            ApiError::new(
                req_id.0,
                "upstream_error",
                "could not retrieve or analyze the page; try again later",
            )
            .into_response()
        }
    }
}
