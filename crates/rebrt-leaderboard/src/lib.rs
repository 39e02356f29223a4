//! `ReBRT` leaderboard pipeline
//!
//! Fetches the current event ranking from sekai.best, classifies the response
//! envelope, and renders one page of it as a monospace table.

pub mod envelope;
pub mod render;
pub mod window;

pub use envelope::RankingResponse;
pub use render::{group_thousands, render_rows, NAME_WIDTH};
pub use window::window;

use rebrt_fetch::{read_json, Fetch, FetchError};
use rebrt_types::{EventKind, Page, RankEntry, Region};
use thiserror::Error;
use tracing::{debug, warn};

/// Default sekai.best API root
pub const DEFAULT_API_BASE: &str = "https://api.sekai.best";

/// Default status page linked from the failure notices
pub const DEFAULT_STATUS_URL: &str = "https://status.sekai.best/history/api";

/// Why a leaderboard could not be rendered
#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// Only World Link events have per-chapter rankings
    #[error("no chapter rankings for this event")]
    NoChapterRankings,

    /// The API reported a failure, or could not be reached or decoded
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The API reported success but sent no rankings
    #[error("upstream returned an empty ranking")]
    UpstreamEmptyResult,
}

impl From<FetchError> for LeaderboardError {
    fn from(err: FetchError) -> Self {
        LeaderboardError::UpstreamUnavailable(err.to_string())
    }
}

/// User-facing wording for the leaderboard failure branches
#[derive(Debug, Clone)]
pub struct Notices {
    status_url: String,
}

impl Notices {
    pub fn new(status_url: impl Into<String>) -> Self {
        Self {
            status_url: status_url.into(),
        }
    }

    fn markup(&self) -> String {
        format!("[api.sekai.best]({})", self.status_url)
    }

    pub fn describe(&self, err: &LeaderboardError) -> String {
        match err {
            LeaderboardError::NoChapterRankings => "0_o  **GODDAMN THERE IS NO WL HERE**".to_string(),
            LeaderboardError::UpstreamUnavailable(_) => format!("{} umer nahui :(", self.markup()),
            LeaderboardError::UpstreamEmptyResult => format!("{} issue", self.markup()),
        }
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_URL)
    }
}

/// Leaderboard command backend
pub struct LeaderboardService<F> {
    fetcher: F,
    api_base: String,
    notices: Notices,
}

impl<F: Fetch> LeaderboardService<F> {
    pub fn new(fetcher: F, api_base: impl Into<String>) -> Self {
        Self {
            fetcher,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            notices: Notices::default(),
        }
    }

    pub fn with_notices(mut self, notices: Notices) -> Self {
        self.notices = notices;
        self
    }

    pub fn ranking_url(&self, kind: EventKind, region: Region) -> String {
        format!("{}/event/{}?region={}", self.api_base, kind, region)
    }

    /// Fetch and sort the full ranking
    pub async fn fetch_ranking(
        &self,
        kind: EventKind,
        region: Region,
    ) -> Result<Vec<RankEntry>, LeaderboardError> {
        let url = self.ranking_url(kind, region);
        let body = self.fetcher.fetch(&url).await?;
        let response: RankingResponse = read_json(&body)?;
        debug!(%url, ?kind, %region, "ranking envelope decoded");

        match response {
            RankingResponse::Success(entries) if entries.is_empty() => {
                Err(LeaderboardError::UpstreamEmptyResult)
            }
            RankingResponse::Success(mut entries) => {
                entries.sort_by_key(|entry| entry.rank);
                Ok(entries)
            }
            RankingResponse::NoChapterRankings => Err(LeaderboardError::NoChapterRankings),
            RankingResponse::GenericFailure { message } => Err(
                LeaderboardError::UpstreamUnavailable(message.unwrap_or_else(|| "no message".into())),
            ),
        }
    }

    /// Render one page as a code block
    pub async fn board(
        &self,
        kind: EventKind,
        region: Region,
        page: Page,
    ) -> Result<String, LeaderboardError> {
        let entries = self.fetch_ranking(kind, region).await?;
        Ok(render_rows(window(&entries, page)))
    }

    /// Render one page, or the notice for whatever went wrong
    pub async fn reply(&self, kind: EventKind, region: Region, page: Page) -> String {
        match self.board(kind, region, page).await {
            Ok(board) => board,
            Err(err) => {
                warn!(?kind, %region, error = %err, "leaderboard unavailable");
                self.notices.describe(&err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices() {
        let notices = Notices::default();
        assert_eq!(
            notices.describe(&LeaderboardError::UpstreamEmptyResult),
            "[api.sekai.best](https://status.sekai.best/history/api) issue"
        );
        assert_eq!(
            notices.describe(&LeaderboardError::UpstreamUnavailable("x".into())),
            "[api.sekai.best](https://status.sekai.best/history/api) umer nahui :("
        );
        assert_eq!(
            notices.describe(&LeaderboardError::NoChapterRankings),
            "0_o  **GODDAMN THERE IS NO WL HERE**"
        );
    }

    #[test]
    fn test_ranking_url() {
        let service = LeaderboardService::new(rebrt_fetch::HttpFetcher::new(), "https://api.sekai.best/");
        assert_eq!(
            service.ranking_url(EventKind::LiveLatestChapter, Region::Jp),
            "https://api.sekai.best/event/live_latest_chapter?region=jp"
        );
    }
}
