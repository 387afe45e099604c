//! Product-page document fetcher.
//!
//! Retrieves raw HTML for a product URL over plain HTTP GET with a rotating
//! User-Agent, mapping non-success statuses to typed errors and retrying
//! transient failures with exponential backoff. Review extraction happens
//! downstream; this crate only produces [`RawDocument`]s.

pub mod client;
pub mod error;
pub mod types;

mod retry;

pub use client::DocumentFetcher;
pub use error::FetchError;
pub use types::RawDocument;
