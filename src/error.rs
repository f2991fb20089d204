use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    #[error("Credential error: {0}")]
    Credential(String),
}
