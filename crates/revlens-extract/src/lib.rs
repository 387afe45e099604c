//! Review text extraction from product-page HTML.
//!
//! Two-phase strategy: structured CSS selectors for known review markup
//! first, then a keyword-sniffing fallback over generic text elements when
//! a page exposes no structured review containers. Output is a deduplicated,
//! bounded list of candidate review strings — no scoring happens here.

pub mod error;
pub mod extract;
pub mod selectors;

pub use error::ExtractError;
pub use extract::extract_reviews;
