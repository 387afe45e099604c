/// An already-fetched HTML page plus its source URL.
///
/// Ephemeral: produced by [`crate::DocumentFetcher`], consumed by the review
/// extractor, and dropped at the end of the request.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub url: String,
    pub html: String,
}
