use thiserror::Error;

use crate::config::api;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing credential: {0}")]
    MissingCredentials(&'static str),

    #[error("Invalid user ID: {0}")]
    InvalidUserId(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Plot error: {0}")]
    Plot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let message = match e.status() {
            Some(status) => format!("osu! API returned HTTP {}: {}", status.as_u16(), e),
            None if e.is_timeout() => format!(
                "osu! API did not respond within {}s: {}",
                api::REQUEST_TIMEOUT.as_secs(),
                e
            ),
            None if e.is_connect() => format!("Could not connect to the osu! API: {}", e),
            None if e.is_decode() => format!("Unexpected response from the osu! API: {}", e),
            None => format!("Request to the osu! API failed: {}", e),
        };
        Error::Http(message)
    }
}
