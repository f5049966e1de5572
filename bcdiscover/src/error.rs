use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("{0}")]
    Usage(String),
    #[error("request to {url} failed")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to decode discover response")]
    Decode(#[from] serde_json::Error),
}
