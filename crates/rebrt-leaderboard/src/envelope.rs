//! sekai.best ranking envelope.
//!
//! ```json
//! {"status": "success", "data": {"eventRankings": [{"rank": 1, "userName": "..", "score": 123}]}}
//! {"status": "error", "message": "only world bloom event has chapter rankings"}
//! ```
//!
//! The raw envelope is decoded and immediately classified, so nothing
//! downstream looks at `status` or `message` again.

use rebrt_types::RankEntry;
use serde::{Deserialize, Deserializer};

const SUCCESS: &str = "success";

/// Message sent when chapter rankings are requested outside a World Link event
pub const NO_CHAPTER_RANKINGS: &str = "only world bloom event has chapter rankings";

/// Classified ranking response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingResponse {
    /// Rankings in upstream order, possibly empty
    Success(Vec<RankEntry>),
    /// Chapter rankings asked for outside a World Link event
    NoChapterRankings,
    /// Any other non-success status
    GenericFailure { message: Option<String> },
}

#[derive(Deserialize)]
struct RawEnvelope {
    status: String,
    #[serde(default)]
    data: Option<RawData>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct RawData {
    #[serde(rename = "eventRankings", default)]
    event_rankings: Option<Vec<RawRank>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRank {
    rank: u64,
    user_name: String,
    score: u64,
}

impl From<RawEnvelope> for RankingResponse {
    fn from(raw: RawEnvelope) -> Self {
        if raw.status != SUCCESS {
            return match raw.message {
                Some(message) if message == NO_CHAPTER_RANKINGS => RankingResponse::NoChapterRankings,
                message => RankingResponse::GenericFailure { message },
            };
        }

        let entries = raw
            .data
            .and_then(|data| data.event_rankings)
            .unwrap_or_default()
            .into_iter()
            .map(|r| RankEntry::new(r.rank, r.user_name, r.score))
            .collect();
        RankingResponse::Success(entries)
    }
}

impl<'de> Deserialize<'de> for RankingResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawEnvelope::deserialize(deserializer).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> RankingResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_success() {
        let response = decode(
            r#"{"status":"success","data":{"eventRankings":[
                {"rank":2,"userName":"b","score":10,"userId":"1"},
                {"rank":1,"userName":"a","score":20}
            ]}}"#,
        );
        assert_eq!(
            response,
            RankingResponse::Success(vec![RankEntry::new(2, "b", 10), RankEntry::new(1, "a", 20)])
        );
    }

    #[test]
    fn test_success_without_list_is_empty() {
        assert_eq!(decode(r#"{"status":"success","data":{}}"#), RankingResponse::Success(vec![]));
        assert_eq!(decode(r#"{"status":"success"}"#), RankingResponse::Success(vec![]));
        assert_eq!(
            decode(r#"{"status":"success","data":{"eventRankings":null}}"#),
            RankingResponse::Success(vec![])
        );
    }

    #[test]
    fn test_no_chapter_rankings() {
        let response = decode(r#"{"status":"error","message":"only world bloom event has chapter rankings"}"#);
        assert_eq!(response, RankingResponse::NoChapterRankings);
    }

    #[test]
    fn test_generic_failure() {
        assert_eq!(
            decode(r#"{"status":"error","message":"internal"}"#),
            RankingResponse::GenericFailure {
                message: Some("internal".into())
            }
        );
        assert_eq!(
            decode(r#"{"status":"fail"}"#),
            RankingResponse::GenericFailure { message: None }
        );
    }

    #[test]
    fn test_missing_status_is_decode_error() {
        assert!(serde_json::from_str::<RankingResponse>(r#"{"data":{}}"#).is_err());
    }
}
