use std::env;

/// Content hint for a rendered listing, mirroring the host shell's
/// videos/songs distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContentKind {
    Videos,
    Songs,
}

impl ContentKind {
    fn label(self) -> &'static str {
        match self {
            ContentKind::Videos => "videos",
            ContentKind::Songs => "songs",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RowInfo {
    pub(crate) artist: String,
    pub(crate) year: Option<i64>,
    pub(crate) annotation: String,
}

/// One listing row handed to the host shell: a sub-folder transition or
/// a playable leaf.
#[derive(Debug, Clone)]
pub(crate) struct Row {
    pub(crate) label: String,
    pub(crate) target: String,
    pub(crate) is_container: bool,
    pub(crate) info: RowInfo,
}

impl Row {
    pub(crate) fn folder(label: &str, target: String, info: RowInfo) -> Row {
        Row {
            label: label.to_string(),
            target,
            is_container: true,
            info,
        }
    }

    pub(crate) fn playable(label: &str, target: String, info: RowInfo) -> Row {
        Row {
            label: label.to_string(),
            target,
            is_container: false,
            info,
        }
    }
}

/// Host navigation shell boundary. The router only ever talks to this
/// trait; tests substitute a recording implementation.
pub(crate) trait Shell {
    fn begin_listing(&mut self, category: &str, content: ContentKind);
    fn add_row(&mut self, row: Row);
    fn end_listing(&mut self);

    /// Transient user-visible notice.
    fn notify(&mut self, message: &str);

    /// Terminal directive: resolve this request to one playable target.
    fn resolve_playback(&mut self, target: &str);

    /// Terminal directive: host sequential-playback primitive.
    fn play_sequence(&mut self, targets: &[String]);

    /// Whether the external player component can be reached at all.
    fn player_available(&self) -> bool {
        true
    }
}

/// Line-oriented stdout rendition of the host protocol: one directive
/// per line, tab-separated fields.
pub(crate) struct StdoutShell;

impl StdoutShell {
    pub(crate) fn new() -> StdoutShell {
        StdoutShell
    }
}

impl Shell for StdoutShell {
    fn begin_listing(&mut self, category: &str, content: ContentKind) {
        println!("CATEGORY\t{category}");
        println!("CONTENT\t{}", content.label());
    }

    fn add_row(&mut self, row: Row) {
        let kind = if row.is_container { "folder" } else { "playable" };
        let year = row.info.year.map(|year| year.to_string()).unwrap_or_default();
        println!(
            "ITEM\t{kind}\t{}\t{}\t{}\t{year}\t{}",
            row.label, row.target, row.info.artist, row.info.annotation
        );
    }

    fn end_listing(&mut self) {
        println!("END");
    }

    fn notify(&mut self, message: &str) {
        println!("NOTICE\t{message}");
    }

    fn resolve_playback(&mut self, target: &str) {
        println!("PLAY\t{target}");
    }

    fn play_sequence(&mut self, targets: &[String]) {
        println!("PLAYALL\t{}", targets.join("\t"));
    }

    fn player_available(&self) -> bool {
        player_available_from_env(env::var("CORNERCAST_PLAYER_AVAILABLE").ok())
    }
}

// The host advertises player availability through the environment; an
// unset variable means available.
fn player_available_from_env(value: Option<String>) -> bool {
    match value {
        Some(raw) => !matches!(raw.trim(), "0" | "false" | "no"),
        None => true,
    }
}
