//! Feed Screen State
//!
//! Owns the reel sequence, the liked-only filter, and the index of the reel
//! currently occupying the viewport. The index drives display emphasis only;
//! every operation keeps it inside the bounds of the visible sequence.

use tracing::debug;

use crate::fixtures;
use crate::models::Reel;

/// State for the reel browsing screen
#[derive(Debug, Clone)]
pub struct FeedState {
    reels: Vec<Reel>,
    active_index: usize,
    liked_only: bool,
}

impl FeedState {
    /// Fresh state from the bundled fixtures
    pub fn new() -> Self {
        Self::with_reels(fixtures::reels())
    }

    /// State over a caller-supplied reel sequence
    pub fn with_reels(reels: Vec<Reel>) -> Self {
        Self {
            reels,
            active_index: 0,
            liked_only: false,
        }
    }

    pub fn reels(&self) -> &[Reel] {
        &self.reels
    }

    pub fn liked_only(&self) -> bool {
        self.liked_only
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Reels matching the active filter, in stored order
    pub fn visible_reels(&self) -> Vec<&Reel> {
        if self.liked_only {
            self.reels.iter().filter(|r| r.is_liked).collect()
        } else {
            self.reels.iter().collect()
        }
    }

    pub fn visible_count(&self) -> usize {
        if self.liked_only {
            self.reels.iter().filter(|r| r.is_liked).count()
        } else {
            self.reels.len()
        }
    }

    /// Reel currently in the viewport, if the visible sequence is non-empty
    pub fn active_reel(&self) -> Option<&Reel> {
        self.visible_reels().get(self.active_index).copied()
    }

    /// Flip the like state of the matching reel, moving its counter with it
    ///
    /// Unknown ids match nothing and mutate nothing.
    pub fn toggle_like(&mut self, id: &str) {
        if let Some(reel) = self.reels.iter_mut().find(|r| r.id == id) {
            reel.toggle_like();
            debug!(
                "Reel {} {} ({} likes)",
                reel.id,
                if reel.is_liked { "liked" } else { "unliked" },
                reel.likes
            );
        }
    }

    /// Switch between the full sequence and the liked subsequence
    ///
    /// Always snaps back to the first visible reel: the filtered sequence
    /// has no positional relation to the unfiltered one, so a carried-over
    /// index could point past its end.
    pub fn set_liked_filter(&mut self, liked_only: bool) {
        self.liked_only = liked_only;
        self.active_index = 0;
        debug!("Feed filter set to {}", if liked_only { "liked" } else { "all" });
    }

    /// Adopt a viewport index reported by the pager, clamped to the visible
    /// sequence
    pub fn set_active_index(&mut self, index: usize) {
        let count = self.visible_count();
        self.active_index = if count == 0 { 0 } else { index.min(count - 1) };
    }

    /// Move to the next visible reel, stopping at the end
    pub fn advance(&mut self) {
        self.set_active_index(self.active_index + 1);
    }

    /// Move to the previous visible reel, stopping at the start
    pub fn retreat(&mut self) {
        self.set_active_index(self.active_index.saturating_sub(1));
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toggle_like_twice_restores_state() {
        let mut feed = FeedState::new();
        let before: Vec<(bool, u32)> = feed.reels().iter().map(|r| (r.is_liked, r.likes)).collect();

        for id in ["1", "2", "3"] {
            feed.toggle_like(id);
            feed.toggle_like(id);
        }

        let after: Vec<(bool, u32)> = feed.reels().iter().map(|r| (r.is_liked, r.likes)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_like_adjusts_counter() {
        let mut feed = FeedState::new();

        // Reel "2" starts liked with 3567 likes
        feed.toggle_like("2");
        let villa = &feed.reels()[1];
        assert!(!villa.is_liked);
        assert_eq!(villa.likes, 3566);

        // Other reels untouched
        assert_eq!(feed.reels()[0].likes, 1243);
        assert_eq!(feed.reels()[2].likes, 789);
    }

    #[test]
    fn test_toggle_like_unknown_id_is_a_no_op() {
        let mut feed = FeedState::new();
        let before: Vec<(bool, u32)> = feed.reels().iter().map(|r| (r.is_liked, r.likes)).collect();

        feed.toggle_like("404");

        let after: Vec<(bool, u32)> = feed.reels().iter().map(|r| (r.is_liked, r.likes)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_liked_filter_narrows_visible_reels() {
        let mut feed = FeedState::new();
        assert_eq!(feed.visible_count(), 3);

        feed.set_liked_filter(true);
        let visible = feed.visible_reels();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");

        feed.set_liked_filter(false);
        assert_eq!(feed.visible_count(), 3);
    }

    #[test]
    fn test_filter_switch_always_resets_active_index() {
        let mut feed = FeedState::new();
        feed.set_active_index(2);
        assert_eq!(feed.active_index(), 2);

        feed.set_liked_filter(true);
        assert_eq!(feed.active_index(), 0);

        feed.set_active_index(0);
        feed.set_liked_filter(false);
        assert_eq!(feed.active_index(), 0);
    }

    #[test]
    fn test_active_index_clamps_to_visible_range() {
        let mut feed = FeedState::new();
        feed.set_active_index(99);
        assert_eq!(feed.active_index(), 2);

        feed.set_liked_filter(true);
        feed.set_active_index(5);
        assert_eq!(feed.active_index(), 0);
    }

    #[test]
    fn test_pager_stops_at_bounds() {
        let mut feed = FeedState::new();
        feed.retreat();
        assert_eq!(feed.active_index(), 0);

        feed.advance();
        feed.advance();
        feed.advance();
        feed.advance();
        assert_eq!(feed.active_index(), 2);
    }

    #[test]
    fn test_empty_liked_view_has_no_active_reel() {
        let mut feed = FeedState::new();
        feed.toggle_like("2"); // unlike the only liked reel
        feed.set_liked_filter(true);

        assert_eq!(feed.visible_count(), 0);
        assert!(feed.active_reel().is_none());
        assert_eq!(feed.active_index(), 0);
    }
}
