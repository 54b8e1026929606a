use std::time::Duration;

/// Published catalog document for Joey's Acoustic Corner.
const DEFAULT_ENDPOINT: &str = "https://mellifluous-tanuki-51d911.netlify.app/episodes.json";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// One entry of the built-in catalog used when the remote document is
/// unreachable or invalid.
#[derive(Debug, Clone)]
pub(crate) struct FallbackEntry {
    pub(crate) title: String,
    pub(crate) url: String,
}

/// Per-invocation configuration, threaded explicitly into the loader and
/// router so tests can point them at a local server and an alternate
/// fallback set.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) endpoint: String,
    pub(crate) timeout: Duration,
    pub(crate) fallback: Vec<FallbackEntry>,
}

impl Config {
    pub(crate) fn new(endpoint: Option<String>, timeout_secs: Option<u64>) -> Config {
        Config {
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout: Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            fallback: default_fallback(),
        }
    }
}

fn default_fallback() -> Vec<FallbackEntry> {
    // Kept in listing order (case-insensitive title), so the fallback
    // menu renders exactly as declared here.
    [
        (
            "Acoustic Corner Sessions, Vol. 1",
            "https://www.youtube.com/watch?v=jAC0rnrVol01",
        ),
        (
            "Joey Live at the Corner (Full Show)",
            "https://youtu.be/jAC0rnrLive1",
        ),
        (
            "Unplugged Favorites",
            "https://www.youtube.com/watch?v=jAC0rnrFavs1",
        ),
    ]
    .into_iter()
    .map(|(title, url)| FallbackEntry {
        title: title.to_string(),
        url: url.to_string(),
    })
    .collect()
}
