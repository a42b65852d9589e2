use thiserror::Error;

/// Errors surfaced by the search engine.
///
/// Invalid requests are rejected before any SQL is built. Store failures are
/// propagated unchanged: no retries, and never partial results (a failed
/// count after a successful fetch fails the whole page request).
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
