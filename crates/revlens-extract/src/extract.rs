//! Two-phase review extraction over a fetched HTML document.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

use revlens_fetch::RawDocument;

use crate::error::ExtractError;
use crate::selectors::{REVIEW_KEYWORDS, REVIEW_SELECTORS};

/// Minimum visible-text length (chars, strict `>`) for the structured phase.
const MIN_STRUCTURED_LEN: usize = 30;

/// Minimum visible-text length (chars, strict `>`) for the keyword fallback.
/// Higher than the structured threshold: without a review container the
/// keyword sniff needs more text to be trustworthy.
const MIN_FALLBACK_LEN: usize = 40;

/// Extracts up to `max_reviews` candidate review strings from `doc`.
///
/// 1. **Structured phase** — walk [`REVIEW_SELECTORS`] in order, collecting
///    whitespace-normalized element text longer than 30 chars, in pattern
///    order then document order, short-circuiting at `max_reviews`.
/// 2. **Fallback phase** — only when the structured phase found nothing:
///    walk `p`/`span`/`div` elements in document order and accept text
///    longer than 40 chars containing at least one review keyword.
/// 3. Deduplicate exact strings, first occurrence wins its position.
/// 4. Truncate to `max_reviews`.
///
/// A page matching nothing at either phase yields `Ok(vec![])` — "no reviews
/// found" is an expected outcome, not a failure.
///
/// # Errors
///
/// Returns [`ExtractError::EmptyDocument`] when the document body is empty
/// or whitespace-only. The underlying parser is error-tolerant, so any
/// non-empty input parses.
pub fn extract_reviews(doc: &RawDocument, max_reviews: usize) -> Result<Vec<String>, ExtractError> {
    if doc.html.trim().is_empty() {
        return Err(ExtractError::EmptyDocument {
            url: doc.url.clone(),
        });
    }

    let document = Html::parse_document(&doc.html);

    let mut reviews = structured_phase(&document, max_reviews);
    if reviews.is_empty() {
        tracing::debug!(url = %doc.url, "no structured review markup — using keyword fallback");
        reviews = fallback_phase(&document, max_reviews);
    }

    let mut unique = dedup_preserving_order(reviews);
    unique.truncate(max_reviews);

    tracing::debug!(url = %doc.url, count = unique.len(), "extracted candidate reviews");
    Ok(unique)
}

/// Collects element text for every pattern in [`REVIEW_SELECTORS`], in
/// pattern order then document order, stopping once `max_reviews` texts
/// have been accepted.
fn structured_phase(document: &Html, max_reviews: usize) -> Vec<String> {
    let mut accepted = Vec::new();

    'patterns: for pattern in REVIEW_SELECTORS {
        let selector = Selector::parse(pattern).expect("valid review selector");
        for element in document.select(&selector) {
            let text = element_text(element);
            if text.chars().count() > MIN_STRUCTURED_LEN {
                accepted.push(text);
                if accepted.len() >= max_reviews {
                    break 'patterns;
                }
            }
        }
    }

    accepted
}

/// Walks every `p`, `span`, and `div` in document order and accepts text
/// that is long enough and mentions at least one review keyword.
fn fallback_phase(document: &Html, max_reviews: usize) -> Vec<String> {
    let selector = Selector::parse("p, span, div").expect("valid fallback selector");
    let mut accepted = Vec::new();

    for element in document.select(&selector) {
        let text = element_text(element);
        if text.chars().count() > MIN_FALLBACK_LEN {
            let lower = text.to_lowercase();
            if REVIEW_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
                accepted.push(text);
                if accepted.len() >= max_reviews {
                    break;
                }
            }
        }
    }

    accepted
}

/// Visible text of an element: descendant text nodes joined with spaces,
/// whitespace runs collapsed, leading/trailing whitespace trimmed.
fn element_text(element: ElementRef<'_>) -> String {
    let joined = element.text().collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes exact-duplicate strings while preserving first-occurrence order.
/// A later duplicate does not move the surviving item's position.
fn dedup_preserving_order(texts: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    texts
        .into_iter()
        .filter(|text| seen.insert(text.clone()))
        .collect()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
