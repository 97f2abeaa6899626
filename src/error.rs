use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures at the web boundary. The rules themselves never fail; refused
/// actions come back as ordinary outcomes with `success: false`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("session not initialized")]
    NotInitialized,

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
