use log::warn;
use serde_json::Value;

use super::resolver::{self, ResolvedIdentifier};

/// Declared playback intent of an episode. The catalog document carries
/// this as free text; anything unrecognized lands on `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Fullshow,
    Queue,
    Playlist,
    Unknown,
}

impl Mode {
    pub(crate) fn parse(raw: &str) -> Mode {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fullshow" => Mode::Fullshow,
            "queue" => Mode::Queue,
            "playlist" => Mode::Playlist,
            _ => Mode::Unknown,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Mode::Fullshow => "fullshow",
            Mode::Queue => "queue",
            Mode::Playlist => "playlist",
            Mode::Unknown => "",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Track {
    pub(crate) title: String,
    pub(crate) url: String,
}

#[derive(Debug, Clone)]
pub(crate) struct Encore {
    pub(crate) title: Option<String>,
    pub(crate) url: String,
}

#[derive(Debug, Clone)]
pub(crate) struct Episode {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) year: Option<i64>,
    pub(crate) mode: Mode,
    pub(crate) tracks: Vec<Track>,
    pub(crate) encore: Option<Encore>,
    pub(crate) encore_after: Option<i64>,
}

impl Episode {
    /// Encore fields are honored only for declared queue episodes that
    /// carry both a non-empty encore URL and a well-formed splice index.
    pub(crate) fn has_encore(&self) -> bool {
        self.mode == Mode::Queue
            && self
                .encore
                .as_ref()
                .is_some_and(|encore| !encore.url.trim().is_empty())
            && self.encore_after.is_some()
    }
}

/// Mode actually used for routing. Playlist evidence in the first track's
/// URL overrides the declared mode; the override is one-sided, a video id
/// never overrides a declared queue or playlist. Episodes without tracks
/// are not routable and yield `None`.
pub(crate) fn effective_mode(episode: &Episode) -> Option<Mode> {
    let first = episode.tracks.first()?;
    if let ResolvedIdentifier::Playlist(_) = resolver::resolve(&first.url) {
        return Some(Mode::Playlist);
    }
    match episode.mode {
        Mode::Fullshow | Mode::Queue | Mode::Playlist => Some(episode.mode),
        Mode::Unknown => Some(Mode::Fullshow),
    }
}

/// Case-insensitive (artist, year, title) ordering key for mode listings.
pub(crate) fn listing_sort_key(episode: &Episode) -> (String, String, String) {
    (
        episode.artist.to_lowercase(),
        episode.year.map(|year| year.to_string()).unwrap_or_default(),
        episode.title.to_lowercase(),
    )
}

/// "artist • year • mode" row annotation, skipping absent parts.
pub(crate) fn annotation(episode: &Episode) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !episode.artist.trim().is_empty() {
        parts.push(episode.artist.trim().to_string());
    }
    if let Some(year) = episode.year {
        parts.push(year.to_string());
    }
    if !episode.mode.label().is_empty() {
        parts.push(episode.mode.label().to_string());
    }
    parts.join(" \u{2022} ")
}

pub(crate) fn episodes_from_values(items: &[Value]) -> Vec<Episode> {
    let mut episodes = Vec::with_capacity(items.len());
    for item in items {
        match episode_from_value(item) {
            Some(episode) => episodes.push(episode),
            None => warn!("skipping non-object catalog entry: {item}"),
        }
    }
    episodes
}

pub(crate) fn episode_from_value(value: &Value) -> Option<Episode> {
    let object = value.as_object()?;

    let tracks = object
        .get("tracks")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(track_from_value).collect())
        .unwrap_or_default();

    Some(Episode {
        title: string_field(value, "title", "Untitled"),
        artist: string_field(value, "artist", ""),
        year: object.get("year").and_then(integer_value),
        mode: object
            .get("mode")
            .and_then(Value::as_str)
            .map(Mode::parse)
            .unwrap_or(Mode::Unknown),
        tracks,
        encore: object.get("encore").and_then(encore_from_value),
        encore_after: object.get("encoreAfterTrackIndex").and_then(integer_value),
    })
}

fn track_from_value(value: &Value) -> Option<Track> {
    value.as_object()?;
    Some(Track {
        title: string_field(value, "title", "Track"),
        url: string_field(value, "url", ""),
    })
}

fn encore_from_value(value: &Value) -> Option<Encore> {
    let object = value.as_object()?;
    Some(Encore {
        title: object
            .get("title")
            .and_then(Value::as_str)
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty()),
        url: string_field(value, "url", ""),
    })
}

fn string_field(value: &Value, key: &str, default: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(default)
        .to_string()
}

// The document may carry integers as JSON numbers or numeric strings.
fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}
