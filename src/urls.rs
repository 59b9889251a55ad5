use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::models::{InputLine, ParsedBatch, ParsedVideos, PlaylistId, VideoId};

lazy_static! {
    static ref LIST_PARAM_RE: Regex = Regex::new(r"[?&]list=([a-zA-Z0-9_-]+)").unwrap();
    static ref SHORT_LINK_RE: Regex = Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})").unwrap();
    static ref WATCH_PARAM_RE: Regex = Regex::new(r"[?&]v=([a-zA-Z0-9_-]{11})").unwrap();
    static ref EMBED_RE: Regex = Regex::new(r"youtube\.com/embed/([a-zA-Z0-9_-]{11})").unwrap();
    static ref SHORTS_RE: Regex = Regex::new(r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})").unwrap();
    static ref BARE_ID_RE: Regex = Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap();
}

/// Pull a playlist ID out of user-supplied text.
///
/// Text that parses as an absolute URL is answered from its `list` query
/// parameter alone; text that does not parse falls back to a regex scan for
/// a `?list=` / `&list=` marker. A bare ID with no marker is not recognized,
/// and an empty `list=` value counts as absent.
pub fn extract_playlist_id(text: &str) -> Option<PlaylistId> {
    let trimmed = text.trim();
    match Url::parse(trimmed) {
        Ok(parsed) => parsed
            .query_pairs()
            .find(|(key, _)| key == "list")
            .and_then(|(_, value)| PlaylistId::new(&value)),
        Err(_) => LIST_PARAM_RE
            .captures(trimmed)
            .and_then(|caps| PlaylistId::new(&caps[1])),
    }
}

/// Pull a video ID out of user-supplied text.
///
/// Recognized shapes, first match wins: `youtu.be/<id>` short links, watch
/// URLs with a `v=` parameter, `/embed/<id>` paths, `/shorts/<id>` paths,
/// and finally input that is exactly an 11-character ID.
pub fn extract_video_id(text: &str) -> Option<VideoId> {
    let trimmed = text.trim();

    if let Some(caps) = SHORT_LINK_RE.captures(trimmed) {
        return VideoId::new(&caps[1]);
    }
    if let Some(caps) = WATCH_PARAM_RE.captures(trimmed) {
        return VideoId::new(&caps[1]);
    }
    if let Some(caps) = EMBED_RE.captures(trimmed) {
        return VideoId::new(&caps[1]);
    }
    if let Some(caps) = SHORTS_RE.captures(trimmed) {
        return VideoId::new(&caps[1]);
    }
    if let Some(m) = BARE_ID_RE.find(trimmed) {
        return VideoId::new(m.as_str());
    }

    None
}

/// Classify one line of batch input. A line that carries both a playlist
/// reference and a video reference counts as the playlist.
pub fn classify_line(line: &str) -> InputLine {
    if let Some(playlist_id) = extract_playlist_id(line) {
        return InputLine::Playlist(playlist_id);
    }
    if let Some(video_id) = extract_video_id(line) {
        return InputLine::Video(video_id);
    }
    InputLine::Unrecognized(line.trim().to_string())
}

/// Split free-form input into lines and collect the playlist and video IDs
/// it references, keeping each list deduplicated in first-seen order. Lines
/// that match nothing are returned verbatim.
pub fn parse_batch(text: &str) -> ParsedBatch {
    let mut batch = ParsedBatch::default();
    let mut seen_videos = HashSet::new();
    let mut seen_playlists = HashSet::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match classify_line(line) {
            InputLine::Playlist(playlist_id) => {
                if seen_playlists.insert(playlist_id.clone()) {
                    batch.playlist_ids.push(playlist_id);
                }
            }
            InputLine::Video(video_id) => {
                if seen_videos.insert(video_id.clone()) {
                    batch.video_ids.push(video_id);
                }
            }
            InputLine::Unrecognized(line) => batch.invalid_lines.push(line),
        }
    }

    batch
}

/// Videos-only variant of [`parse_batch`]: playlist references are not
/// followed, so a line that names a playlist but no video counts as invalid.
pub fn parse_video_batch(text: &str) -> ParsedVideos {
    let mut parsed = ParsedVideos::default();
    let mut seen = HashSet::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match extract_video_id(line) {
            Some(video_id) => {
                if seen.insert(video_id.clone()) {
                    parsed.video_ids.push(video_id);
                }
            }
            None => parsed.invalid_lines.push(line.to_string()),
        }
    }

    parsed
}
