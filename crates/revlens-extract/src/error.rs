use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The fetched body was empty or whitespace-only — nothing to parse.
    /// A well-formed page that simply contains no reviews is NOT an error;
    /// extraction returns an empty list for that case.
    #[error("empty document from {url}")]
    EmptyDocument { url: String },
}
