use thiserror::Error;

/// Recoverable navigation failures. Every variant is converted into a
/// user-visible notice at the router boundary; none aborts the request.
#[derive(Debug, Error)]
pub(crate) enum NavError {
    #[error("catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    #[error("unplayable link: {url:?}")]
    UnresolvedLink { url: String },

    #[error("episode reference {reference:?} does not match the loaded catalog")]
    BadReference { reference: String },

    #[error("queue has no playable tracks")]
    EmptyQueue,
}

impl NavError {
    /// Notice text shown to the user through the host shell.
    pub(crate) fn notice(&self) -> &'static str {
        match self {
            NavError::CatalogUnavailable { .. } => {
                "Couldn't load the episode catalog; showing built-in sessions."
            }
            NavError::UnresolvedLink { .. } => "Couldn't parse a playable video link.",
            NavError::BadReference { .. } => "Episode not found in the current catalog.",
            NavError::EmptyQueue => "Nothing to play in this queue.",
        }
    }
}
