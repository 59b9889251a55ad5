use serde::Deserialize;

use crate::duration::{format_clock, format_long, Locale};
use crate::speed::{self, SpeedDuration};

fn is_id_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

// Identifier newtypes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Wrap a string that has the 11-character video ID shape.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.len() == 11 && is_id_token(trimmed) {
            Some(VideoId(trimmed.to_string()))
        } else {
            None
        }
    }

    // IDs handed back by the API are taken at face value
    pub(crate) fn from_api(raw: String) -> Self {
        VideoId(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Watch page URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Wrap a non-empty playlist ID. The token is opaque, so any non-empty
    /// value a `list` query parameter carries is taken as-is.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PlaylistId(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlaylistId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Classification of one trimmed line of batch input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    Playlist(PlaylistId),
    Video(VideoId),
    Unrecognized(String),
}

// Identifier lists recovered from free-form batch input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBatch {
    pub video_ids: Vec<VideoId>,
    pub playlist_ids: Vec<PlaylistId>,
    pub invalid_lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedVideos {
    pub video_ids: Vec<VideoId>,
    pub invalid_lines: Vec<String>,
}

// Response types for API calls
#[derive(Debug, Deserialize)]
pub struct PlaylistItemsResponse {
    #[serde(rename = "nextPageToken", default)]
    pub next_page_token: Option<String>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: Option<PageInfo>,
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    #[serde(rename = "resultsPerPage", default)]
    pub results_per_page: u32,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub snippet: PlaylistItemSnippet,
    #[serde(default)]
    pub status: Option<PlaylistItemStatus>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
pub struct ResourceId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemStatus {
    #[serde(rename = "privacyStatus", default)]
    pub privacy_status: String,
}

impl PlaylistItemStatus {
    /// Whether the entry is excluded from playback for ordinary viewers.
    pub fn is_unavailable(&self) -> bool {
        self.privacy_status == "private" || self.privacy_status == "privacyStatusUnspecified"
    }
}

#[derive(Debug, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoItem {
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(rename = "contentDetails")]
    pub content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "channelTitle", default)]
    pub channel_title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ContentDetails {
    #[serde(default)]
    pub duration: String,
}

// Error envelope the API wraps non-success responses in
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

// Per-video metadata after duration decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo {
    pub id: VideoId,
    pub title: String,
    pub channel_title: String,
    pub thumbnail: String,
    pub duration_seconds: u64,
    pub duration_formatted: String,
}

impl VideoInfo {
    pub(crate) fn from_item(item: VideoItem) -> Self {
        let duration_seconds = crate::duration::parse_iso8601(&item.content_details.duration);
        VideoInfo {
            id: VideoId::from_api(item.id),
            title: item.snippet.title,
            channel_title: item.snippet.channel_title,
            thumbnail: item
                .snippet
                .thumbnails
                .default
                .map(|t| t.url)
                .unwrap_or_default(),
            duration_seconds,
            duration_formatted: format_clock(duration_seconds),
        }
    }
}

// Outcome of scanning one playlist, in listing order and not deduplicated
#[derive(Debug, Clone, Default)]
pub struct PlaylistMembers {
    pub video_ids: Vec<VideoId>,
    pub unavailable_count: u32,
}

// Aggregation output
#[derive(Debug, Clone)]
pub struct AggregateResult {
    pub videos: Vec<VideoInfo>,
    pub total_seconds: u64,
    pub unavailable_count: u32,
}

impl AggregateResult {
    pub(crate) fn from_videos(videos: Vec<VideoInfo>, unavailable_count: u32) -> Self {
        // Durations are remote-controlled; the total saturates like the codec
        let total_seconds = videos
            .iter()
            .fold(0u64, |total, v| total.saturating_add(v.duration_seconds));
        AggregateResult {
            videos,
            total_seconds,
            unavailable_count,
        }
    }

    /// Number of videos that contributed to the total.
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    /// Total runtime as a clock reading.
    pub fn total_clock(&self) -> String {
        format_clock(self.total_seconds)
    }

    /// Total runtime in the spoken-style long form.
    pub fn total_long(&self, locale: Locale) -> String {
        format_long(self.total_seconds, locale)
    }

    /// Total runtime at the given playback speed.
    pub fn seconds_at(&self, playback_speed: f64) -> u64 {
        speed::seconds_at_speed(self.total_seconds, playback_speed)
    }

    /// Average video length at the given playback speed, zero when there are
    /// no videos. Rounded once, after both divisions.
    pub fn average_seconds_at(&self, playback_speed: f64) -> u64 {
        if self.videos.is_empty() {
            return 0;
        }
        (self.total_seconds as f64 / self.videos.len() as f64 / playback_speed).round() as u64
    }

    /// The fixed speed table applied to this total.
    pub fn speed_projections(&self, locale: Locale) -> Vec<SpeedDuration> {
        speed::project(self.total_seconds, locale)
    }

    /// Three-line shareable report: video count, total watch time, and the
    /// watch time at the given speed.
    pub fn summary(&self, locale: Locale, playback_speed: f64) -> String {
        let adjusted = format_long(self.seconds_at(playback_speed), locale);
        let total = format_long(self.total_seconds, locale);
        let lines = match locale {
            Locale::Ko => [
                format!("총 영상: {}개", self.videos.len()),
                format!("총 재생시간: {}", total),
                format!("{}x 배속: {}", playback_speed, adjusted),
            ],
            Locale::En => [
                format!("Total videos: {}", self.videos.len()),
                format!("Total watch time: {}", total),
                format!("{}x speed: {}", playback_speed, adjusted),
            ],
        };
        lines.join("\n")
    }
}

// Batch outcome, carrying the lines that matched nothing for the caller's
// warning list
#[derive(Debug, Clone)]
pub struct BatchAggregate {
    pub result: AggregateResult,
    pub invalid_lines: Vec<String>,
}
