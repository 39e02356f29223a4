//! Leaderboard pipeline against canned sekai.best responses

use rebrt_fetch::{Fetch, FetchError, HttpFetcher};
use rebrt_leaderboard::{LeaderboardError, LeaderboardService, DEFAULT_API_BASE};
use rebrt_types::{EventKind, Page, Region};
use std::sync::{Arc, Mutex};

/// Returns the same body for every URL and remembers what was asked for
struct Canned {
    body: String,
    requested: Mutex<Vec<String>>,
}

impl Canned {
    fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            requested: Mutex::new(Vec::new()),
        }
    }
}

impl Fetch for Canned {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(url.to_string());
        }
        Ok(self.body.clone())
    }
}

fn service(body: &str) -> LeaderboardService<Canned> {
    LeaderboardService::new(Canned::new(body), DEFAULT_API_BASE)
}

#[tokio::test]
async fn test_rows_sorted_by_rank() {
    let body = r#"{"status":"success","data":{"eventRankings":[
        {"rank":5,"userName":"five","score":5000},
        {"rank":1,"userName":"one","score":1234567},
        {"rank":3,"userName":"three","score":300000},
        {"rank":2,"userName":"a name longer than twenty chars","score":999999},
        {"rank":4,"userName":"four","score":40000}
    ]}}"#;

    let board = service(body)
        .reply(EventKind::Live, Region::En, Page::First)
        .await;

    assert_eq!(
        board,
        "```\n\
         1 'one' 1,234,567\n\
         2 'a name longer than t' 999,999\n\
         3 'three' 300,000\n\
         4 'four' 40,000\n\
         5 'five' 5,000\n\
         ```"
    );
}

#[tokio::test]
async fn test_duplicate_ranks_keep_upstream_order() {
    let body = r#"{"status":"success","data":{"eventRankings":[
        {"rank":2,"userName":"late","score":1},
        {"rank":1,"userName":"x","score":3},
        {"rank":2,"userName":"later","score":1}
    ]}}"#;

    let board = service(body)
        .reply(EventKind::Live, Region::En, Page::First)
        .await;

    assert_eq!(board, "```\n1 'x' 3\n2 'late' 1\n2 'later' 1\n```");
}

#[tokio::test]
async fn test_requests_selected_event_and_region() {
    let fetcher = Arc::new(Canned::new(r#"{"status":"success","data":{"eventRankings":[]}}"#));
    let service = LeaderboardService::new(Arc::clone(&fetcher), "https://api.sekai.best/");

    let _ = service
        .reply(EventKind::LiveLatestChapter, Region::Kr, Page::Second)
        .await;

    let requested = fetcher.requested.lock().map(|r| r.clone()).unwrap_or_default();
    assert_eq!(
        requested,
        vec!["https://api.sekai.best/event/live_latest_chapter?region=kr".to_string()]
    );
}

#[tokio::test]
async fn test_empty_ranking_is_issue_notice() {
    let service = service(r#"{"status":"success","data":{"eventRankings":[]}}"#);

    let err = service
        .board(EventKind::Live, Region::En, Page::First)
        .await
        .unwrap_err();
    assert!(matches!(err, LeaderboardError::UpstreamEmptyResult));

    let reply = service.reply(EventKind::Live, Region::En, Page::First).await;
    assert_eq!(reply, "[api.sekai.best](https://status.sekai.best/history/api) issue");
}

#[tokio::test]
async fn test_no_world_link_notice() {
    let service = service(
        r#"{"status":"error","message":"only world bloom event has chapter rankings"}"#,
    );

    let err = service
        .board(EventKind::LiveLatestChapter, Region::Jp, Page::Second)
        .await
        .unwrap_err();
    assert!(matches!(err, LeaderboardError::NoChapterRankings));

    let reply = service
        .reply(EventKind::LiveLatestChapter, Region::Jp, Page::Second)
        .await;
    assert_eq!(reply, "0_o  **GODDAMN THERE IS NO WL HERE**");
}

#[tokio::test]
async fn test_other_failure_is_unavailable_notice() {
    let service = service(r#"{"status":"error","message":"event not found"}"#);

    let err = service
        .board(EventKind::Live, Region::Cn, Page::Third)
        .await
        .unwrap_err();
    assert!(matches!(err, LeaderboardError::UpstreamUnavailable(_)));

    let reply = service.reply(EventKind::Live, Region::Cn, Page::Third).await;
    assert_eq!(
        reply,
        "[api.sekai.best](https://status.sekai.best/history/api) umer nahui :("
    );
}

#[tokio::test]
async fn test_non_json_body_is_unavailable_notice() {
    let service = service("<html>cloudflare</html>");

    let err = service
        .board(EventKind::Live, Region::En, Page::First)
        .await
        .unwrap_err();
    assert!(matches!(err, LeaderboardError::UpstreamUnavailable(_)));
}

#[tokio::test]
async fn test_page_beyond_ranking_renders_empty_block() {
    let body = r#"{"status":"success","data":{"eventRankings":[
        {"rank":1,"userName":"solo","score":1}
    ]}}"#;

    let board = service(body)
        .reply(EventKind::Live, Region::En, Page::Third)
        .await;

    assert_eq!(board, "```\n```");
}

#[tokio::test]
#[ignore] // Hits the real API: cargo test -- --ignored
async fn test_live_ranking_from_sekai_best() {
    let service = LeaderboardService::new(HttpFetcher::new(), DEFAULT_API_BASE);
    let reply = service.reply(EventKind::Live, Region::En, Page::First).await;
    assert!(!reply.is_empty());
}
