//! Fixed leaderboard pages.
//!
//! Page 1 is `[0, 50)`, page 2 is `[49, 100)` and page 3 is `[99, ..)`. Pages
//! 1 and 2 share index 49; existing users read the pages that way, keep it.

use rebrt_types::{Page, RankEntry};
use std::ops::Range;

fn bounds(page: Page, len: usize) -> Range<usize> {
    let (start, end) = match page {
        Page::First => (0, 50),
        Page::Second => (49, 100),
        Page::Third => (99, len),
    };
    let end = end.min(len);
    start.min(end)..end
}

/// The entries visible on `page`; empty when the ranking is too short
pub fn window(entries: &[RankEntry], page: Page) -> &[RankEntry] {
    &entries[bounds(page, entries.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(n: u64) -> Vec<RankEntry> {
        (1..=n).map(|rank| RankEntry::new(rank, format!("p{rank}"), rank * 100)).collect()
    }

    #[test]
    fn test_full_ranking_windows() {
        let entries = ranking(120);
        assert_eq!(window(&entries, Page::First).len(), 50);
        assert_eq!(window(&entries, Page::Second).len(), 51);
        assert_eq!(window(&entries, Page::Third).len(), 21);
    }

    #[test]
    fn test_first_and_second_page_share_index_49() {
        let entries = ranking(120);
        let first = window(&entries, Page::First);
        let second = window(&entries, Page::Second);
        assert_eq!(first.last(), second.first());
        assert_eq!(second[0].rank, 50);
    }

    #[test]
    fn test_third_page_starts_at_index_99() {
        let entries = ranking(120);
        assert_eq!(window(&entries, Page::Third)[0].rank, 100);
    }

    #[test]
    fn test_short_ranking_clamps() {
        let entries = ranking(30);
        assert_eq!(window(&entries, Page::First).len(), 30);
        assert!(window(&entries, Page::Second).is_empty());
        assert!(window(&entries, Page::Third).is_empty());
    }

    #[test]
    fn test_empty_ranking() {
        assert!(window(&[], Page::First).is_empty());
        assert!(window(&[], Page::Third).is_empty());
    }
}
