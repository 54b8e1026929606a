use std::collections::HashMap;

use log::{debug, info, warn};

use super::catalog::{self, Episode, Mode};
use super::error::NavError;
use super::loader::CatalogLoader;
use super::player;
use super::queue;
use super::resolver::{self, ResolvedIdentifier};
use super::shell::{ContentKind, Row, RowInfo, Shell};
use crate::config::Config;

const ROOT_CATEGORY: &str = "Joey's Acoustic Corner";
const PLAYER_UNAVAILABLE_NOTICE: &str = "The YouTube player add-on is not available.";

/// One incoming navigation request: the `action` parameter plus the rest
/// of the decoded parameter map.
#[derive(Debug)]
pub(crate) struct Request {
    pub(crate) action: Option<String>,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Decodes a plugin-style query string ("action=list&mode=queue",
/// optionally with a leading `?`). Malformed pairs are dropped rather
/// than failing the request.
pub(crate) fn parse_request(raw: &str) -> Request {
    let mut params = HashMap::new();
    for pair in raw.trim().trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode(key);
        if key.is_empty() {
            continue;
        }
        params.insert(key, decode(value));
    }
    let action = params.remove("action");
    Request { action, params }
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|text| text.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Builds the query-string target for a listing row, the inverse of
/// `parse_request`.
pub(crate) fn build_target(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Dispatches one navigation request. Unknown and missing actions land
/// on the root listing; every taxonomy error is converted to a notice
/// here and never propagates out.
pub(crate) fn route(config: &Config, shell: &mut dyn Shell, raw: &str) {
    let request = parse_request(raw);
    let action = request.action.clone().unwrap_or_default();
    info!(
        "dispatching action {:?}",
        if action.is_empty() { "<root>" } else { action.as_str() }
    );

    let outcome = match action.as_str() {
        "" => {
            render_root(shell);
            Ok(())
        }
        "list" => {
            render_mode_listing(config, shell, request.param("mode").unwrap_or("all"));
            Ok(())
        }
        "tracks" | "browse_queue" | "open_queue" => render_episode_queue(config, shell, &request),
        "play" | "open_url" | "play_video" => play(shell, &request),
        "play_queue_all" => play_queue_all(config, shell, &request),
        other => {
            warn!("unknown action {other:?}; falling back to the root listing");
            render_root(shell);
            Ok(())
        }
    };

    if let Err(err) = outcome {
        warn!("{err}");
        shell.notify(err.notice());
        if matches!(err, NavError::BadReference { .. }) {
            render_root(shell);
        }
    }
}

fn render_root(shell: &mut dyn Shell) {
    shell.begin_listing(ROOT_CATEGORY, ContentKind::Videos);
    for (label, mode) in [
        ("Full Sessions", "fullshow"),
        ("Queues", "queue"),
        ("Playlists", "playlist"),
        ("All Sessions", "all"),
    ] {
        let target = build_target(&[("action", "list"), ("mode", mode)]);
        shell.add_row(Row::folder(label, target, RowInfo::default()));
    }
    shell.end_listing();
}

fn load_with_notice(config: &Config, shell: &mut dyn Shell) -> Vec<Episode> {
    let (episodes, failure) = CatalogLoader::new(config).load_or_fallback();
    if let Some(err) = failure {
        shell.notify(err.notice());
    }
    episodes
}

fn render_mode_listing(config: &Config, shell: &mut dyn Shell, mode_param: &str) {
    let episodes = load_with_notice(config, shell);
    let filter = (mode_param != "all").then(|| Mode::parse(mode_param));

    let mut entries: Vec<(usize, &Episode, Mode)> = episodes
        .iter()
        .enumerate()
        .filter_map(|(index, episode)| {
            catalog::effective_mode(episode).map(|mode| (index, episode, mode))
        })
        .filter(|(_, _, mode)| filter.is_none_or(|wanted| *mode == wanted))
        .collect();
    entries.sort_by_key(|(_, episode, _)| catalog::listing_sort_key(episode));

    shell.begin_listing(&listing_category(mode_param), ContentKind::Videos);
    for (index, episode, mode) in entries {
        let info = RowInfo {
            artist: episode.artist.clone(),
            year: episode.year,
            annotation: catalog::annotation(episode),
        };
        match mode {
            Mode::Queue | Mode::Playlist => {
                let index_param = index.to_string();
                let target = build_target(&[
                    ("action", "tracks"),
                    ("index", index_param.as_str()),
                    ("title", episode.title.as_str()),
                ]);
                shell.add_row(Row::folder(&episode.title, target, info));
            }
            _ => {
                let Some(first) = episode.tracks.first() else {
                    continue;
                };
                if resolver::resolve(&first.url).is_unresolved() {
                    debug!("hiding {:?}: first track link is unplayable", episode.title);
                    continue;
                }
                let target = build_target(&[("action", "play"), ("u", first.url.as_str())]);
                shell.add_row(Row::playable(&episode.title, target, info));
            }
        }
    }
    shell.end_listing();
}

fn listing_category(mode_param: &str) -> String {
    match mode_param {
        "fullshow" => "Full Sessions".to_string(),
        "queue" => "Queues".to_string(),
        "playlist" => "Playlists".to_string(),
        "all" => "All Sessions".to_string(),
        other => other.to_string(),
    }
}

/// Resolves an episode reference against the freshly loaded catalog.
/// The index is authoritative when it still matches; otherwise an exact
/// title lookup is attempted before giving up, since the remote document
/// may have been reordered between two requests.
fn find_episode<'a>(
    episodes: &'a [Episode],
    request: &Request,
) -> Result<(usize, &'a Episode), NavError> {
    let index = request
        .param("index")
        .and_then(|raw| raw.trim().parse::<usize>().ok());
    let title = request.param("title");

    if let Some(idx) = index
        && let Some(episode) = episodes.get(idx)
        && title.is_none_or(|wanted| episode.title == wanted)
    {
        return Ok((idx, episode));
    }

    if let Some(wanted) = title
        && let Some((idx, episode)) = episodes
            .iter()
            .enumerate()
            .find(|(_, episode)| episode.title == wanted)
    {
        return Ok((idx, episode));
    }

    Err(NavError::BadReference {
        reference: match (index, title) {
            (Some(idx), Some(wanted)) => format!("index {idx} / title {wanted:?}"),
            (Some(idx), None) => format!("index {idx}"),
            (None, Some(wanted)) => format!("title {wanted:?}"),
            (None, None) => "missing".to_string(),
        },
    })
}

fn render_episode_queue(
    config: &Config,
    shell: &mut dyn Shell,
    request: &Request,
) -> Result<(), NavError> {
    let episodes = load_with_notice(config, shell);
    let (index, episode) = find_episode(&episodes, request)?;

    shell.begin_listing(&episode.title, ContentKind::Songs);

    let index_param = index.to_string();
    let play_all = build_target(&[
        ("action", "play_queue_all"),
        ("index", index_param.as_str()),
        ("title", episode.title.as_str()),
    ]);
    shell.add_row(Row::playable("Play All", play_all, RowInfo::default()));

    let mut hidden = 0usize;
    for track in &episode.tracks {
        match resolver::resolve(&track.url) {
            ResolvedIdentifier::Video(id) => {
                let target = build_target(&[("action", "play"), ("video", id.as_str())]);
                shell.add_row(Row::playable(&track.title, target, RowInfo::default()));
            }
            ResolvedIdentifier::Playlist(id) => {
                let target = build_target(&[("action", "play"), ("list", id.as_str())]);
                shell.add_row(Row::playable(&track.title, target, RowInfo::default()));
            }
            ResolvedIdentifier::Unresolved => hidden += 1,
        }
    }
    if hidden > 0 {
        warn!("{hidden} track(s) of {:?} have unplayable links", episode.title);
        shell.notify("Some tracks have unplayable links and were hidden.");
    }

    if episode.has_encore()
        && let Some(encore) = &episode.encore
        && let ResolvedIdentifier::Video(id) = resolver::resolve(&encore.url)
    {
        let target = build_target(&[("action", "play"), ("video", id.as_str())]);
        let label = encore.title.as_deref().unwrap_or("Encore");
        shell.add_row(Row::playable(label, target, RowInfo::default()));
    }

    shell.end_listing();
    Ok(())
}

fn play(shell: &mut dyn Shell, request: &Request) -> Result<(), NavError> {
    let identifier = requested_identifier(request);
    let Some(target) = player::playback_target(&identifier) else {
        return Err(NavError::UnresolvedLink {
            url: request.param("u").unwrap_or_default().to_string(),
        });
    };

    if !shell.player_available() {
        warn!("player component unavailable; dropping handoff of {target}");
        shell.notify(PLAYER_UNAVAILABLE_NOTICE);
        return Ok(());
    }
    info!("handing off playback: {target}");
    shell.resolve_playback(&target);
    Ok(())
}

// Play requests carry either a raw provider URL (`u`) or an already
// resolved identifier (`video` / `list`) from a queue listing row.
fn requested_identifier(request: &Request) -> ResolvedIdentifier {
    if let Some(raw) = request.param("u") {
        return resolver::resolve(raw);
    }
    if let Some(id) = request.param("video")
        && !id.trim().is_empty()
    {
        return ResolvedIdentifier::Video(id.trim().to_string());
    }
    if let Some(id) = request.param("list")
        && !id.trim().is_empty()
    {
        return ResolvedIdentifier::Playlist(id.trim().to_string());
    }
    ResolvedIdentifier::Unresolved
}

fn play_queue_all(
    config: &Config,
    shell: &mut dyn Shell,
    request: &Request,
) -> Result<(), NavError> {
    let episodes = load_with_notice(config, shell);
    let (_, episode) = find_episode(&episodes, request)?;

    let ids = queue::build_queue(episode);
    if ids.is_empty() {
        return Err(NavError::EmptyQueue);
    }

    if !shell.player_available() {
        shell.notify(PLAYER_UNAVAILABLE_NOTICE);
        return Ok(());
    }
    let targets: Vec<String> = ids.iter().map(|id| player::video_target(id)).collect();
    info!(
        "handing off {} queued item(s) of {:?}",
        targets.len(),
        episode.title
    );
    shell.play_sequence(&targets);
    Ok(())
}
