use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{path} responded with status {status}")]
    Status { status: u16, path: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("please provide at least some content (text or media)")]
    EmptyContent,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
