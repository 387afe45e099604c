use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for the review-analysis service.
///
/// Every field has a default, so a bare environment boots a development
/// instance on `0.0.0.0:3000`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub fetch_timeout_secs: u64,
    pub fetch_max_retries: u32,
    pub fetch_retry_backoff_base_secs: u64,
    /// Fixed User-Agent for page fetches. When unset the fetcher rotates
    /// through its built-in pool per request.
    pub fetch_user_agent: Option<String>,
    /// Upper bound on candidate reviews collected from a single page.
    pub max_reviews: usize,
}
