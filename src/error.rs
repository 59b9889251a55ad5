use thiserror::Error;

// Basic error handling with thiserror
#[derive(Error, Debug)]
pub enum WatchTimeError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseFailed(#[from] serde_json::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("YOUTUBE_API_KEY is not set")]
    MissingApiKey,

    #[error("no playlist reference found in input")]
    MissingPlaylistId,

    #[error("no video or playlist references found in input")]
    NoIdentifiers,

    #[error("no playable videos found")]
    NoPlayableVideos,
}

impl WatchTimeError {
    /// Helper to check if an error came back from the remote API rather
    /// than from input validation on this side.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            WatchTimeError::RequestFailed(_)
                | WatchTimeError::ParseFailed(_)
                | WatchTimeError::Api { .. }
        )
    }
}
