//! Circular cursor over a loaded [`QuestionSet`].

use crate::models::{QuestionRecord, QuestionSet};
use std::fmt;

/// Outcome of [`NavigationController::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Moved,
    /// Cycled from the last record back to the first.
    Wrapped,
}

/// Display annotation marking where a pool begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolMarker {
    pub pool: String,
}

impl fmt::Display for PoolMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Start of {}", self.pool)
    }
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    items: QuestionSet,
    cursor: usize,
}

impl NavigationController {
    pub fn new(items: QuestionSet) -> Self {
        Self { items, cursor: 0 }
    }

    pub fn current(&self) -> &QuestionRecord {
        &self.items[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &QuestionSet {
        &self.items
    }

    pub fn advance(&mut self) -> Movement {
        self.cursor = (self.cursor + 1) % self.items.len();
        if self.cursor == 0 {
            tracing::debug!(total = self.items.len(), "wrapped to first question");
            Movement::Wrapped
        } else {
            Movement::Moved
        }
    }

    // Wrapping backward past the first record carries no signal.
    pub fn retreat(&mut self) {
        let len = self.items.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    /// Pool-transition marker for the record at `index`.
    pub fn progress_marker(&self, index: usize) -> Option<PoolMarker> {
        let record = self.items.get(index)?;
        let starts_pool = match index.checked_sub(1) {
            None => true,
            Some(prev) => self.items[prev].pool != record.pool,
        };
        starts_pool.then(|| PoolMarker {
            pool: record.pool.clone(),
        })
    }

    /// `"Question X of N"`, with the pool marker appended when present.
    pub fn progress_text(&self) -> String {
        let mut text = format!("Question {} of {}", self.cursor + 1, self.items.len());
        if let Some(marker) = self.progress_marker(self.cursor) {
            text.push_str(&format!(" ({marker})"));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, pool: &str) -> QuestionRecord {
        QuestionRecord {
            id: id.to_string(),
            question: format!("Question {id}?"),
            answer: format!("Answer {id}"),
            pool: pool.to_string(),
        }
    }

    fn controller(ids: &[(&str, &str)]) -> NavigationController {
        let records = ids.iter().map(|(id, pool)| record(id, pool)).collect();
        NavigationController::new(QuestionSet::new(records).unwrap())
    }

    fn sized(len: usize) -> NavigationController {
        let records = (0..len).map(|i| record(&format!("G{i}"), "General")).collect();
        NavigationController::new(QuestionSet::new(records).unwrap())
    }

    #[test]
    fn test_starts_at_first_record() {
        let nav = controller(&[("G1", "General"), ("E1", "Extra")]);
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.current().id, "G1");
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..=6 {
            for start in 0..len {
                let mut nav = sized(len);
                for _ in 0..start {
                    nav.advance();
                }
                assert_eq!(nav.cursor(), start);
                for _ in 0..len {
                    nav.advance();
                }
                assert_eq!(nav.cursor(), start, "len {len} start {start}");
            }
        }
    }

    #[test]
    fn test_retreat_inverts_advance() {
        for len in 1..=6 {
            for start in 0..len {
                let mut nav = sized(len);
                for _ in 0..start {
                    nav.advance();
                }

                nav.advance();
                nav.retreat();
                assert_eq!(nav.cursor(), start);

                nav.retreat();
                nav.advance();
                assert_eq!(nav.cursor(), start);
            }
        }
    }

    #[test]
    fn test_advance_signals_wrap_only_at_end() {
        let mut nav = sized(3);
        assert_eq!(nav.advance(), Movement::Moved);
        assert_eq!(nav.advance(), Movement::Moved);
        assert_eq!(nav.advance(), Movement::Wrapped);
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn test_single_record_always_wraps() {
        let mut nav = sized(1);
        assert_eq!(nav.advance(), Movement::Wrapped);
        assert_eq!(nav.cursor(), 0);
        nav.retreat();
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn test_retreat_from_first_goes_to_last() {
        let mut nav = sized(4);
        nav.retreat();
        assert_eq!(nav.cursor(), 3);
        assert_eq!(nav.current().id, "G3");
    }

    #[test]
    fn test_progress_marker_at_pool_boundaries() {
        let nav = controller(&[
            ("G1", "General"),
            ("G2", "General"),
            ("E1", "Extra"),
            ("E2", "Extra"),
        ]);
        assert_eq!(nav.progress_marker(0).unwrap().to_string(), "Start of General");
        assert!(nav.progress_marker(1).is_none());
        assert_eq!(nav.progress_marker(2).unwrap().to_string(), "Start of Extra");
        assert!(nav.progress_marker(3).is_none());
        assert!(nav.progress_marker(4).is_none());
    }

    #[test]
    fn test_progress_marker_first_record_uses_its_pool() {
        let nav = controller(&[("E1", "Extra"), ("E2", "Extra")]);
        assert_eq!(nav.progress_marker(0).unwrap().pool, "Extra");
    }

    #[test]
    fn test_progress_text() {
        let mut nav = controller(&[("G1", "General"), ("G2", "General"), ("E1", "Extra")]);
        assert_eq!(nav.progress_text(), "Question 1 of 3 (Start of General)");
        nav.advance();
        assert_eq!(nav.progress_text(), "Question 2 of 3");
        nav.advance();
        assert_eq!(nav.progress_text(), "Question 3 of 3 (Start of Extra)");
    }

    #[test]
    fn test_general_then_extra_walkthrough() {
        let mut nav = controller(&[("G1", "General"), ("E1", "Extra")]);
        assert_eq!(nav.current().id, "G1");

        assert_eq!(nav.advance(), Movement::Moved);
        assert_eq!(nav.current().id, "E1");
        assert_eq!(nav.progress_marker(nav.cursor()).unwrap().pool, "Extra");

        assert_eq!(nav.advance(), Movement::Wrapped);
        assert_eq!(nav.current().id, "G1");
    }
}
