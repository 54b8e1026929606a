use std::time::Duration;

/// Fetches `url` once with bounded connect/read timeouts and a no-cache
/// hint, so edits to the remote document are observed on the next
/// request. One attempt only: the caller substitutes fallback data on
/// failure instead of retrying inside the host request lifecycle.
pub(crate) fn get_text(
    url: &str,
    connect_timeout: Duration,
    read_timeout: Duration,
) -> Result<String, String> {
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(connect_timeout)
        .timeout_read(read_timeout)
        .timeout_write(read_timeout)
        .build();

    match agent.get(url).set("Cache-Control", "no-cache").call() {
        Ok(response) => match response.into_string() {
            Ok(body) => Ok(body),
            Err(err) => Err(format!("request failed: response decode failed: {err}")),
        },
        Err(ureq::Error::Status(status, response)) => {
            let response_body = response.into_string().ok().unwrap_or_default();
            let body = response_body.trim();
            if body.is_empty() {
                Err(format!("request failed: HTTP status {status}"))
            } else {
                let truncated = body.chars().take(240).collect::<String>();
                Err(format!("request failed: HTTP status {status} ({truncated})"))
            }
        }
        Err(ureq::Error::Transport(err)) => Err(format!("request failed: transport error: {err}")),
    }
}
