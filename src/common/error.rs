use thiserror::Error;

/// Everything that can go wrong while fetching from the amphibians endpoint.
///
/// The GUI treats all variants as the same failure; the detail only reaches the logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Marker for a failed fetch once the cause has been dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchFailed;

impl From<FetchError> for FetchFailed {
    fn from(_: FetchError) -> Self {
        FetchFailed
    }
}
