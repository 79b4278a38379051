//! Visible-count control for the chunk explorer.
//!
//! Decides how many ranked entries are rendered at once. The user picks
//! from a small set of round-number options derived from the filtered
//! total; the chosen count is re-clamped whenever the total changes (for
//! example when search filtering shrinks the list).

use crate::config::{DEFAULT_VISIBLE_CHUNKS, VISIBLE_CHUNK_CANDIDATES};

/// User-controlled bound on how many ranked entries are rendered.
///
/// A stored value of zero is the "show all" sentinel; it is re-resolved
/// against the current total whenever the total changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
    visible: usize,
}

impl DisplayWindow {
    /// Creates a controller with the default visible count.
    pub fn new() -> Self {
        Self {
            visible: DEFAULT_VISIBLE_CHUNKS,
        }
    }

    /// Returns the size options for a given filtered total.
    ///
    /// Candidates 10, 20, 30 strictly below the total, then the exact
    /// total, de-duplicated. Empty when the total is zero.
    pub fn size_options(total: usize) -> Vec<usize> {
        if total == 0 {
            return Vec::new();
        }
        let mut options: Vec<usize> = VISIBLE_CHUNK_CANDIDATES
            .iter()
            .copied()
            .filter(|&candidate| candidate < total)
            .collect();
        options.push(total);
        options
    }

    /// Returns the raw selected count (0 means "show all").
    pub fn selected(&self) -> usize {
        self.visible
    }

    /// Selects an explicit visible count.
    pub fn select(&mut self, count: usize) {
        self.visible = count;
    }

    /// Re-clamps the selection after the total changed.
    ///
    /// A total of zero forces the sentinel; a sentinel selection re-resolves
    /// to the default (or fewer, if the total is smaller); a selection above
    /// the new total clamps down to it.
    pub fn sync_total(&mut self, total: usize) {
        if total == 0 {
            self.visible = 0;
            return;
        }
        if self.visible == 0 {
            self.visible = DEFAULT_VISIBLE_CHUNKS.min(total);
        } else if self.visible > total {
            self.visible = total;
        }
    }

    /// Returns the number of entries to render for the given total.
    pub fn display_count(&self, total: usize) -> usize {
        if total == 0 {
            return 0;
        }
        let chosen = if self.visible == 0 { total } else { self.visible };
        chosen.min(total)
    }

    /// Returns true if some entries are hidden at the current selection.
    pub fn has_hidden(&self, total: usize) -> bool {
        self.display_count(total) < total
    }

    /// Advances to the next larger size option, or the exact total if none
    /// is larger.
    pub fn show_more(&mut self, total: usize) {
        let shown = self.display_count(total);
        let next = Self::size_options(total)
            .into_iter()
            .find(|&option| option > shown);
        self.visible = next.unwrap_or(total);
    }

    /// Restores the default selection (used on reset and new uploads).
    pub fn reset(&mut self) {
        self.visible = DEFAULT_VISIBLE_CHUNKS;
    }
}

impl Default for DisplayWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_options_for_45() {
        assert_eq!(DisplayWindow::size_options(45), [10, 20, 30, 45]);
    }

    #[test]
    fn test_size_options_dedup_exact_candidate() {
        // A total equal to a candidate must not appear twice.
        assert_eq!(DisplayWindow::size_options(30), [10, 20, 30]);
        assert_eq!(DisplayWindow::size_options(10), [10]);
    }

    #[test]
    fn test_size_options_small_and_zero_totals() {
        assert_eq!(DisplayWindow::size_options(5), [5]);
        assert!(DisplayWindow::size_options(0).is_empty());
    }

    #[test]
    fn test_clamps_when_total_shrinks() {
        let mut window = DisplayWindow::new();
        window.select(30);
        window.sync_total(5);
        assert_eq!(window.display_count(5), 5);
    }

    #[test]
    fn test_show_all_sentinel_re_resolves() {
        let mut window = DisplayWindow::new();
        window.select(0);
        assert_eq!(window.display_count(45), 45);

        window.sync_total(45);
        assert_eq!(window.selected(), DEFAULT_VISIBLE_CHUNKS);
        assert_eq!(window.display_count(45), 10);
    }

    #[test]
    fn test_zero_total_forces_sentinel() {
        let mut window = DisplayWindow::new();
        window.sync_total(0);
        assert_eq!(window.display_count(0), 0);

        // A new non-zero total restores the default.
        window.sync_total(7);
        assert_eq!(window.display_count(7), 7);
    }

    #[test]
    fn test_default_shows_at_most_ten() {
        let window = DisplayWindow::new();
        assert_eq!(window.display_count(45), 10);
        assert_eq!(window.display_count(3), 3);
    }

    #[test]
    fn test_show_more_advances_through_options() {
        let mut window = DisplayWindow::new();
        window.show_more(45);
        assert_eq!(window.display_count(45), 20);
        window.show_more(45);
        assert_eq!(window.display_count(45), 30);
        window.show_more(45);
        assert_eq!(window.display_count(45), 45);
        assert!(!window.has_hidden(45));
    }

    #[test]
    fn test_show_more_jumps_to_total_when_no_candidate_left() {
        let mut window = DisplayWindow::new();
        window.select(30);
        window.show_more(32);
        assert_eq!(window.display_count(32), 32);
    }

    #[test]
    fn test_has_hidden() {
        let window = DisplayWindow::new();
        assert!(window.has_hidden(45));
        assert!(!window.has_hidden(10));
        assert!(!window.has_hidden(0));
    }
}
