use std::fmt;

/// Which ranking list of the current event to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventKind {
    /// Regular event ranking
    #[default]
    Live,
    /// Ranking of the latest World Link chapter
    LiveLatestChapter,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Live => "live",
            EventKind::LiveLatestChapter => "live_latest_chapter",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game server region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    En,
    Kr,
    Jp,
    Tw,
    Cn,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::En => "en",
            Region::Kr => "kr",
            Region::Jp => "jp",
            Region::Tw => "tw",
            Region::Cn => "cn",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three fixed leaderboard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// t1-t50
    First,
    /// t50-t100
    #[default]
    Second,
    /// t100+
    Third,
}

/// A single leaderboard row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub rank: u64,
    pub display_name: String,
    pub score: u64,
}

impl RankEntry {
    pub fn new(rank: u64, display_name: impl Into<String>, score: u64) -> Self {
        Self {
            rank,
            display_name: display_name.into(),
            score,
        }
    }
}
