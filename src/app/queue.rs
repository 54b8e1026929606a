use log::debug;

use super::catalog::Episode;
use super::resolver::{self, ResolvedIdentifier};

/// Builds the ordered playable sequence for a queue episode: every track
/// URL that resolves to a video id, in source order, with the encore
/// spliced in after `encoreAfterTrackIndex` when the episode carries one.
///
/// The splice index is clamped into the resolved list, so an
/// out-of-range value lands the encore at the start or end instead of
/// failing. An encore URL that does not resolve to a video is omitted.
pub(crate) fn build_queue(episode: &Episode) -> Vec<String> {
    let mut queue: Vec<String> = Vec::new();
    for track in &episode.tracks {
        match resolver::resolve(&track.url) {
            ResolvedIdentifier::Video(id) => queue.push(id),
            _ => debug!(
                "dropping unplayable track {:?} of {:?}",
                track.title, episode.title
            ),
        }
    }

    if episode.has_encore()
        && let Some(encore) = &episode.encore
        && let Some(after) = episode.encore_after
    {
        match resolver::resolve(&encore.url) {
            ResolvedIdentifier::Video(id) => {
                let splice_at = (after + 1).clamp(0, queue.len() as i64) as usize;
                queue.insert(splice_at, id);
            }
            _ => debug!("dropping unresolvable encore of {:?}", episode.title),
        }
    }

    queue
}
