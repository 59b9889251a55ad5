mod duration;
pub use duration::{format_clock, format_long, parse_iso8601, Locale};
mod error;
pub use error::WatchTimeError;
mod models;
pub use models::{
    AggregateResult, ApiErrorDetail, ApiErrorResponse, BatchAggregate, ContentDetails, InputLine,
    PageInfo, ParsedBatch, ParsedVideos, PlaylistId, PlaylistItem, PlaylistItemSnippet,
    PlaylistItemStatus, PlaylistItemsResponse, PlaylistMembers, ResourceId, Thumbnail, Thumbnails,
    VideoId, VideoInfo, VideoItem, VideoSnippet, VideosResponse,
};
mod speed;
pub use speed::{project, seconds_at_speed, SpeedDuration, SPEEDS};
mod urls;
pub use urls::{
    classify_line, extract_playlist_id, extract_video_id, parse_batch, parse_video_batch,
};

use std::collections::HashSet;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info, warn};

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const PAGE_SIZE: usize = 50; // playlistItems page size, also the /videos id limit
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable read by [`WatchTimeClient::from_env`].
pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Main client totals the watch time of YouTube playlists and ad-hoc video
/// batches through the YouTube Data API. It handles playlist pagination,
/// batched metadata lookups, duration decoding, and the aggregation of the
/// results.
///
/// # Logging
///
/// The library logs through the `tracing` crate and never installs a
/// subscriber itself; set one up in the application to see its output:
///
/// ```no_run
/// use tracing::Level;
/// use tracing_subscriber::FmtSubscriber;
///
/// let subscriber = FmtSubscriber::builder()
///     .with_max_level(Level::DEBUG)
///     .finish();
/// tracing::subscriber::set_global_default(subscriber)
///     .expect("Failed to set tracing subscriber");
/// ```
///
/// What each level carries:
/// - `DEBUG`: each API request and per-page scan progress
/// - `INFO`: high-level operations and their outcomes
/// - `WARN`: empty results and other recoverable conditions
/// - `ERROR`: remote failures
pub struct WatchTimeClient {
    http: Client,
    api_key: String,
    api_base: String,
}

impl WatchTimeClient {
    /// Create a new client around the given Data API key. Optionally accepts
    /// a custom reqwest client for connection reuse and shared configuration.
    pub fn new(api_key: &str, custom_client: Option<Client>) -> Self {
        let http = custom_client.unwrap_or_else(|| {
            Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .connect_timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap()
        });

        Self {
            http,
            api_key: api_key.to_string(),
            api_base: API_BASE.to_string(),
        }
    }

    /// Create a client from the `YOUTUBE_API_KEY` environment variable,
    /// loading a `.env` file first when one is present.
    pub fn from_env() -> Result<Self, WatchTimeError> {
        let _ = dotenvy::dotenv();
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| WatchTimeError::MissingApiKey)?;
        Ok(Self::new(&api_key, None))
    }

    /// Point the client at a different API base URL. The default is the
    /// public Data API endpoint; tests point this at a local mock server.
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Collect the playable video IDs of a playlist, following page tokens
    /// until the listing is exhausted.
    ///
    /// Entries whose privacy status marks them private or unspecified are
    /// excluded and counted in `unavailable_count` instead. The returned IDs
    /// keep the playlist's listing order and are not deduplicated.
    pub async fn fetch_playlist_video_ids(
        &self,
        playlist_id: &PlaylistId,
    ) -> Result<PlaylistMembers, WatchTimeError> {
        info!("Scanning playlist: {}", playlist_id);

        let mut members = PlaylistMembers::default();
        let mut page_token: Option<String> = None;
        let mut page_count = 0u32;

        loop {
            let mut params: Vec<(&str, String)> = vec![
                ("part", "snippet,status".to_string()),
                ("playlistId", playlist_id.as_str().to_string()),
                ("maxResults", PAGE_SIZE.to_string()),
                ("key", self.api_key.clone()),
            ];
            if let Some(token) = &page_token {
                params.push(("pageToken", token.clone()));
            }

            debug!(playlist_id = %playlist_id, page = page_count + 1, "Requesting playlist page");
            let response = self
                .http
                .get(format!("{}/playlistItems", self.api_base))
                .query(&params)
                .send()
                .await?;

            let status = response.status();
            let body = response.text().await?;
            if !status.is_success() {
                error!(%status, playlist_id = %playlist_id, "Playlist page request failed");
                return Err(Self::api_error(status.as_u16(), &body, "cannot load playlist"));
            }

            let page: PlaylistItemsResponse = serde_json::from_str(&body)?;
            page_count += 1;

            if page_count == 1 {
                if let Some(page_info) = &page.page_info {
                    debug!(
                        total_results = page_info.total_results,
                        "Playlist reports its total size"
                    );
                }
            }

            for item in page.items {
                if item.status.as_ref().is_some_and(|s| s.is_unavailable()) {
                    members.unavailable_count += 1;
                } else {
                    members
                        .video_ids
                        .push(VideoId::from_api(item.snippet.resource_id.video_id));
                }
            }

            page_token = page.next_page_token.filter(|token| !token.is_empty());
            if page_token.is_none() {
                break;
            }
        }

        info!(
            "Playlist scan finished: {} playable, {} unavailable, {} page(s)",
            members.video_ids.len(),
            members.unavailable_count,
            page_count
        );
        Ok(members)
    }

    /// Fetch title, channel, thumbnail, and decoded duration for each ID.
    ///
    /// IDs are looked up in batches of fifty, and the batches are issued
    /// sequentially so the output keeps the input's order. IDs the API does
    /// not return (deleted videos, typos) are skipped without a trace.
    pub async fn fetch_video_details(
        &self,
        ids: &[VideoId],
    ) -> Result<Vec<VideoInfo>, WatchTimeError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        info!("Fetching details for {} video(s)", ids.len());
        let mut videos = Vec::with_capacity(ids.len());

        for batch in ids.chunks(PAGE_SIZE) {
            let joined = batch
                .iter()
                .map(VideoId::as_str)
                .collect::<Vec<_>>()
                .join(",");
            let params: Vec<(&str, String)> = vec![
                ("part", "snippet,contentDetails".to_string()),
                ("id", joined),
                ("key", self.api_key.clone()),
            ];

            debug!(batch_len = batch.len(), "Requesting video details batch");
            let response = self
                .http
                .get(format!("{}/videos", self.api_base))
                .query(&params)
                .send()
                .await?;

            let status = response.status();
            let body = response.text().await?;
            if !status.is_success() {
                error!(%status, "Video details request failed");
                return Err(Self::api_error(
                    status.as_u16(),
                    &body,
                    "cannot load video details",
                ));
            }

            let page: VideosResponse = serde_json::from_str(&body)?;
            videos.extend(page.items.into_iter().map(VideoInfo::from_item));
        }

        info!("Fetched details for {} video(s)", videos.len());
        Ok(videos)
    }

    /// Total a playlist: scan its members, then fetch and sum their
    /// durations.
    ///
    /// Fails with [`WatchTimeError::NoPlayableVideos`] when the scan comes
    /// back empty.
    pub async fn aggregate_playlist(
        &self,
        playlist_id: &PlaylistId,
    ) -> Result<AggregateResult, WatchTimeError> {
        let members = self.fetch_playlist_video_ids(playlist_id).await?;

        if members.video_ids.is_empty() {
            warn!("Playlist {} has no playable videos", playlist_id);
            return Err(WatchTimeError::NoPlayableVideos);
        }

        let videos = self.fetch_video_details(&members.video_ids).await?;
        let result = AggregateResult::from_videos(videos, members.unavailable_count);
        info!(
            "Aggregated playlist {}: {} video(s), {} total",
            playlist_id,
            result.video_count(),
            result.total_clock()
        );
        Ok(result)
    }

    /// Convenience form of [`aggregate_playlist`](Self::aggregate_playlist)
    /// that extracts the playlist ID from pasted text first.
    pub async fn aggregate_playlist_url(
        &self,
        text: &str,
    ) -> Result<AggregateResult, WatchTimeError> {
        let playlist_id =
            urls::extract_playlist_id(text).ok_or(WatchTimeError::MissingPlaylistId)?;
        self.aggregate_playlist(&playlist_id).await
    }

    /// Total a mixed batch of video and playlist references, one per line.
    ///
    /// Explicit video IDs come first, then each referenced playlist is
    /// scanned in first-seen order and contributes the IDs not already
    /// collected. The whole merged set is fetched in one detail pass. Lines
    /// that matched nothing ride along in the output for the caller to
    /// surface.
    pub async fn aggregate_batch(&self, text: &str) -> Result<BatchAggregate, WatchTimeError> {
        let parsed = urls::parse_batch(text);
        if parsed.video_ids.is_empty() && parsed.playlist_ids.is_empty() {
            warn!(
                invalid_lines = parsed.invalid_lines.len(),
                "Batch input carries no recognizable references"
            );
            return Err(WatchTimeError::NoIdentifiers);
        }

        info!(
            "Aggregating batch: {} video(s), {} playlist(s), {} invalid line(s)",
            parsed.video_ids.len(),
            parsed.playlist_ids.len(),
            parsed.invalid_lines.len()
        );

        let mut all_video_ids = parsed.video_ids;
        let mut seen: HashSet<VideoId> = all_video_ids.iter().cloned().collect();
        let mut unavailable_count = 0;

        for playlist_id in &parsed.playlist_ids {
            let members = self.fetch_playlist_video_ids(playlist_id).await?;
            unavailable_count += members.unavailable_count;
            for video_id in members.video_ids {
                if seen.insert(video_id.clone()) {
                    all_video_ids.push(video_id);
                }
            }
        }

        if all_video_ids.is_empty() {
            warn!("Batch input produced no playable videos");
            return Err(WatchTimeError::NoPlayableVideos);
        }

        let videos = self.fetch_video_details(&all_video_ids).await?;
        Ok(BatchAggregate {
            result: AggregateResult::from_videos(videos, unavailable_count),
            invalid_lines: parsed.invalid_lines,
        })
    }

    /// Build the Api error for a non-success response, preferring the
    /// message inside the API's error envelope over the generic fallback.
    fn api_error(status: u16, body: &str, what: &str) -> WatchTimeError {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .and_then(|envelope| envelope.error)
            .map(|detail| detail.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("{} (status {})", what, status));
        WatchTimeError::Api { status, message }
    }
}

// Keep the API key out of debug output
impl std::fmt::Debug for WatchTimeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchTimeClient")
            .field("api_base", &self.api_base)
            .finish()
    }
}
