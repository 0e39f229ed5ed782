use std::time::Duration;

use log::error;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single page request. One attempt per page; callers decide
/// what a lost page means for the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
}

/// Fetches one URL into body text. Implemented over HTTP in production and by
/// in-memory fakes in tests.
pub trait PageFetcher {
    fn fetch(&self, url: &str, headers: HeaderMap) -> Result<String, FetchError>;
}

/// Blocking HTTP fetcher with a fixed per-request timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        HttpFetcher { client }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str, headers: HeaderMap) -> Result<String, FetchError> {
        let response = match self.client.get(url).headers(headers).send() {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to fetch page: {}", e);
                return Err(FetchError::Transport(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("Failed to fetch page: server returned {}", status);
            return Err(FetchError::Status(status));
        }

        response.text().map_err(|e| {
            error!("Failed to read response body: {}", e);
            FetchError::Transport(e)
        })
    }
}
