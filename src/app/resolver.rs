use std::sync::LazyLock;

use regex::Regex;

/// Canonical identifier extracted from a raw content-provider URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResolvedIdentifier {
    Video(String),
    Playlist(String),
    Unresolved,
}

impl ResolvedIdentifier {
    pub(crate) fn is_unresolved(&self) -> bool {
        matches!(self, ResolvedIdentifier::Unresolved)
    }
}

// Identifier charset stops the match at `&`, `?`, `/`, `#`, or end of input.
static PLAYLIST_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]list=([A-Za-z0-9_-]+)").expect("playlist pattern"));
static SHORT_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtu\.be/([A-Za-z0-9_-]+)").expect("short-link pattern"));
static WATCH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([A-Za-z0-9_-]+)").expect("watch pattern"));
static EMBED_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/embed/([A-Za-z0-9_-]+)").expect("embed pattern"));

/// Extracts the canonical video or playlist identifier from a raw URL.
///
/// A `list=` query parameter always wins, even when the same URL also
/// carries a video id: such links address the whole playlist.
pub(crate) fn resolve(raw: &str) -> ResolvedIdentifier {
    let url = raw.trim();
    if url.is_empty() {
        return ResolvedIdentifier::Unresolved;
    }

    if let Some(id) = capture(&PLAYLIST_PARAM, url) {
        return ResolvedIdentifier::Playlist(id);
    }
    for pattern in [&SHORT_LINK, &WATCH_PARAM, &EMBED_PATH] {
        if let Some(id) = capture(pattern, url) {
            return ResolvedIdentifier::Video(id);
        }
    }
    ResolvedIdentifier::Unresolved
}

fn capture(pattern: &Regex, url: &str) -> Option<String> {
    pattern
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|id| id.as_str().to_string())
}
