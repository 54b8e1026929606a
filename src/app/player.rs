use super::resolver::ResolvedIdentifier;

// Target forms understood by the external YouTube player component.
const VIDEO_TARGET: &str = "plugin://plugin.video.youtube/play/?video_id=";
const PLAYLIST_TARGET: &str = "plugin://plugin.video.youtube/play/?playlist_id=";

/// Composes the handoff target for a resolved identifier. `Unresolved`
/// never reaches the player; callers surface an unplayable-link notice
/// instead.
pub(crate) fn playback_target(identifier: &ResolvedIdentifier) -> Option<String> {
    match identifier {
        ResolvedIdentifier::Video(id) => Some(video_target(id)),
        ResolvedIdentifier::Playlist(id) => Some(format!("{PLAYLIST_TARGET}{id}")),
        ResolvedIdentifier::Unresolved => None,
    }
}

pub(crate) fn video_target(id: &str) -> String {
    format!("{VIDEO_TARGET}{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_identifier_composes_video_form() {
        let target = playback_target(&ResolvedIdentifier::Video("abc123".to_string()));
        assert_eq!(
            target.as_deref(),
            Some("plugin://plugin.video.youtube/play/?video_id=abc123")
        );
    }

    #[test]
    fn playlist_identifier_composes_playlist_form() {
        let target = playback_target(&ResolvedIdentifier::Playlist("PL123".to_string()));
        assert_eq!(
            target.as_deref(),
            Some("plugin://plugin.video.youtube/play/?playlist_id=PL123")
        );
    }

    #[test]
    fn unresolved_identifier_has_no_target() {
        assert_eq!(playback_target(&ResolvedIdentifier::Unresolved), None);
    }
}
