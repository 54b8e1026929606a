use log::{info, warn};
use serde_json::Value;

use super::catalog::{self, Episode, Mode, Track};
use super::error::NavError;
use crate::config::{Config, FallbackEntry};
use crate::http;

/// Fetches and parses the remote catalog document. One fetch per
/// navigation request; the document is never cached between requests.
pub(crate) struct CatalogLoader<'a> {
    config: &'a Config,
}

impl<'a> CatalogLoader<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Strict load: the response must be a JSON array at the top level.
    /// Objects, HTML error pages, and parse failures are all
    /// `CatalogUnavailable`; there is no partial or best-effort result.
    pub(crate) fn load(&self) -> Result<Vec<Episode>, NavError> {
        let body = http::get_text(&self.config.endpoint, self.config.timeout, self.config.timeout)
            .map_err(|reason| NavError::CatalogUnavailable { reason })?;

        let parsed: Value =
            serde_json::from_str(&body).map_err(|err| NavError::CatalogUnavailable {
                reason: format!("malformed catalog document: {err}"),
            })?;
        let items = parsed.as_array().ok_or_else(|| NavError::CatalogUnavailable {
            reason: "catalog document is not a top-level array".to_string(),
        })?;

        let episodes = catalog::episodes_from_values(items);
        info!(
            "loaded {} episode(s) from {}",
            episodes.len(),
            self.config.endpoint
        );
        Ok(episodes)
    }

    /// Load with all-or-nothing fallback substitution. On failure the
    /// built-in catalog replaces the remote one wholesale, and the error
    /// is handed back so the caller can surface a transient notice.
    pub(crate) fn load_or_fallback(&self) -> (Vec<Episode>, Option<NavError>) {
        match self.load() {
            Ok(episodes) => (episodes, None),
            Err(err) => {
                warn!("{err}; substituting the built-in fallback catalog");
                (fallback_episodes(&self.config.fallback), Some(err))
            }
        }
    }
}

/// Each fallback pair becomes a single-track fullshow episode, rendered
/// in declared order.
pub(crate) fn fallback_episodes(entries: &[FallbackEntry]) -> Vec<Episode> {
    entries
        .iter()
        .map(|entry| Episode {
            title: entry.title.clone(),
            artist: String::new(),
            year: None,
            mode: Mode::Fullshow,
            tracks: vec![Track {
                title: entry.title.clone(),
                url: entry.url.clone(),
            }],
            encore: None,
            encore_after: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Behavior, TestServer};
    use std::time::Duration;

    fn config_for(server: &TestServer) -> Config {
        let mut config = Config::new(Some(server.base_url()), None);
        config.timeout = Duration::from_millis(200);
        config
    }

    #[test]
    fn loads_a_top_level_array() {
        let server = TestServer::spawn(vec![Behavior::Respond(
            200,
            r#"[{"title":"Show A","mode":"fullshow","tracks":[{"url":"https://youtu.be/abc123"}]}]"#
                .to_string(),
        )]);
        let config = config_for(&server);

        let episodes = CatalogLoader::new(&config).load().expect("load should succeed");
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].title, "Show A");
    }

    #[test]
    fn top_level_object_is_unavailable_not_partial() {
        let server = TestServer::spawn(vec![Behavior::Respond(
            200,
            r#"{"episodes":[{"title":"Wrapped"}]}"#.to_string(),
        )]);
        let config = config_for(&server);

        let err = CatalogLoader::new(&config)
            .load()
            .expect_err("object body must fail");
        assert!(matches!(err, NavError::CatalogUnavailable { .. }));
    }

    #[test]
    fn html_error_page_is_unavailable() {
        let server = TestServer::spawn(vec![Behavior::Respond(
            200,
            "<html><body>Site not found</body></html>".to_string(),
        )]);
        let config = config_for(&server);

        assert!(CatalogLoader::new(&config).load().is_err());
    }

    #[test]
    fn fallback_substitutes_on_http_failure_without_retry() {
        let server = TestServer::spawn(vec![Behavior::Respond(
            404,
            "<html>Not Found</html>".to_string(),
        )]);
        let config = config_for(&server);

        let (episodes, err) = CatalogLoader::new(&config).load_or_fallback();
        assert!(err.is_some());
        assert_eq!(episodes.len(), config.fallback.len());
        assert_eq!(episodes[0].title, config.fallback[0].title);
        assert_eq!(server.request_count(), 1);
    }

    #[test]
    fn fallback_substitutes_on_timeout() {
        let server = TestServer::spawn(vec![Behavior::DelayRespond(
            Duration::from_millis(400),
            200,
            "[]".to_string(),
        )]);
        let mut config = config_for(&server);
        config.timeout = Duration::from_millis(30);

        let (episodes, err) = CatalogLoader::new(&config).load_or_fallback();
        assert!(err.is_some());
        assert_eq!(episodes.len(), config.fallback.len());
    }

    #[test]
    fn fallback_episodes_are_playable_fullshow_singles() {
        let entries = vec![FallbackEntry {
            title: "Backup Session".to_string(),
            url: "https://youtu.be/backup1".to_string(),
        }];

        let episodes = fallback_episodes(&entries);
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].mode, Mode::Fullshow);
        assert_eq!(episodes[0].tracks[0].url, "https://youtu.be/backup1");
    }
}
