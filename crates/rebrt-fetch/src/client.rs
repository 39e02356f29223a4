//! Unauthenticated HTTP GET client.
//!
//! Some upstreams (wttr.in, safebooru, sekai.best behind Cloudflare) answer
//! differently to non-browser agents, so every request carries a fixed desktop
//! Chrome `User-Agent`.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use tracing::debug;

/// `User-Agent` header sent with every request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                              AppleWebKit/537.36 (KHTML, like Gecko) \
                              Chrome/100.0.4896.127 Safari/537.36";

/// Something that can GET a URL and hand back the body text.
///
/// Errors are passed through untouched; the caller decides what the user sees.
pub trait Fetch: Send + Sync {
    /// GET `url` and return the response body as text
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

impl<T: Fetch> Fetch for Arc<T> {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send {
        self.as_ref().fetch(url)
    }
}

/// [`Fetch`] backed by `reqwest`.
///
/// A fresh `reqwest::Client` is built for every request, so no connection
/// outlives the invocation that opened it. No retries and no timeout beyond
/// the transport defaults.
#[derive(Clone, Debug, Default)]
pub struct HttpFetcher;

impl HttpFetcher {
    /// Create a new fetcher
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        let response = client.get(url).send().await?;
        let status = response.status();
        // Error statuses still carry a body the caller may want to inspect
        let body = response.text().await?;

        debug!(%url, %status, body_len = body.len(), "upstream response received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_is_single_line() {
        assert!(!USER_AGENT.contains('\n'));
        assert!(USER_AGENT.starts_with("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit"));
        assert!(USER_AGENT.ends_with("Safari/537.36"));
    }

    #[tokio::test]
    async fn test_unreachable_host_propagates_transport_error() {
        let result = HttpFetcher::new().fetch("http://127.0.0.1:1/").await;
        assert!(matches!(result, Err(crate::FetchError::Transport(_))));
    }
}
