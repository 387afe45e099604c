//! Selector and keyword tables driving review extraction.

/// Ordered CSS selector patterns for structured review markup.
///
/// Ordering matters: schema.org microdata first (highest precision), then
/// attribute-substring matches, then class names common on storefronts and
/// content sites. Extraction appends matches in this pattern order, so more
/// precise sources fill the `max_reviews` quota first.
pub(crate) const REVIEW_SELECTORS: &[&str] = &[
    "[itemtype=\"http://schema.org/Review\"]",
    "[itemprop=\"reviewBody\"]",
    ".review",
    ".reviews",
    "[data-review]",
    "[class*=\"review\"]",
    "[id*=\"review\"]",
    ".customer-review",
    ".product-review",
    ".user-review",
    ".comment",
    ".feedback",
    ".testimonial",
];

/// Keywords used by the fallback phase to sniff review-like prose out of
/// generic `p`/`span`/`div` elements. Matched case-insensitively as
/// substrings.
pub(crate) const REVIEW_KEYWORDS: &[&str] = &[
    "good",
    "bad",
    "excellent",
    "poor",
    "worst",
    "nice",
    "awesome",
    "terrible",
    "satisfied",
    "unsatisfied",
    "recommend",
    "disappointed",
    "love",
    "hate",
    "great",
    "amazing",
    "horrible",
    "perfect",
    "quality",
    "worth",
    "value",
    "price",
    "delivery",
    "service",
    "product",
    "item",
];
