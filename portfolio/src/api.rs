use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error: {0}")]
    Error(&'static str),
    // transport failures and bodies that are not a JSON array
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Malformed repository record #{index}: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Repository object exactly as returned by the API, decoded later field by field.
pub type RawRepo = serde_json::Value;

#[async_trait]
pub trait Client: Send + Sync {
    /// Lists public repositories of `user` (first API page only).
    ///
    /// Non-success responses are reported to the user and yield an empty list,
    /// so callers can not tell "no repositories" from "request rejected".
    async fn user_repos(&self, user: &str) -> Result<Vec<RawRepo>>;
}
