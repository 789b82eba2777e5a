//! The base tree state machine.

use sylva_core::{Aging, TreeHistory, Year};

/// A tree that ages through a fixed yearly schedule.
///
/// Construction fixes the schedule; from then on the only mutation is
/// [`Aging::grow`]. The machine has two states: alive while the current
/// age is within the schedule, dead once it reaches the end. The
/// transition is one-directional and monotonic.
#[derive(Clone, Debug)]
pub struct Tree {
    age: Year,
    height: f64,
    history: TreeHistory,
}

impl Tree {
    /// Plant a tree at `Year(0)` with zero height.
    pub fn new(history: TreeHistory) -> Self {
        Self {
            age: Year(0),
            height: 0.0,
            history,
        }
    }

    /// The schedule this tree ages through.
    pub fn history(&self) -> &TreeHistory {
        &self.history
    }
}

impl Aging for Tree {
    fn age(&self) -> Year {
        self.age
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn grow(&mut self) {
        self.age = self.age.next();
        // Past the schedule the counter keeps advancing but height stays
        // frozen at its last scheduled value.
        if let Some(record) = self.history.record_for(self.age) {
            self.height = record.height();
        }
    }

    fn is_dead(&self) -> bool {
        self.age.0 as usize >= self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sylva_core::TreeRecord;

    fn history(heights: &[f64]) -> TreeHistory {
        TreeHistory::new(heights.iter().map(|&h| TreeRecord::new(h)))
    }

    #[test]
    fn starts_alive_at_year_zero() {
        let tree = Tree::new(history(&[1.0, 2.0]));
        assert_eq!(tree.age(), Year(0));
        assert_eq!(tree.height(), 0.0);
        assert!(!tree.is_dead());
    }

    #[test]
    fn dies_when_the_schedule_runs_out() {
        let mut tree = Tree::new(history(&[1.0, 2.0, 3.0]));
        tree.grow();
        tree.grow();
        assert!(!tree.is_dead());
        tree.grow();
        assert!(tree.is_dead());
    }

    #[test]
    fn growing_past_death_freezes_height() {
        let mut tree = Tree::new(history(&[1.0, 2.0]));
        for _ in 0..5 {
            tree.grow();
        }
        assert_eq!(tree.age(), Year(5));
        assert_eq!(tree.height(), 2.0);
        assert!(tree.is_dead());
    }

    #[test]
    fn empty_schedule_means_dead_from_the_start() {
        let tree = Tree::new(TreeHistory::default());
        assert!(tree.is_dead());
    }

    proptest! {
        #[test]
        fn height_tracks_the_schedule(heights in prop::collection::vec(0.0f64..100.0, 1..12)) {
            let mut tree = Tree::new(history(&heights));
            for &expected in &heights {
                tree.grow();
                prop_assert_eq!(tree.height(), expected);
            }
        }

        #[test]
        fn death_coincides_with_schedule_exhaustion(
            heights in prop::collection::vec(0.0f64..100.0, 1..12),
            extra in 0u32..4,
        ) {
            let mut tree = Tree::new(history(&heights));
            for step in 1..=heights.len() {
                prop_assert!(!tree.is_dead());
                tree.grow();
                prop_assert_eq!(tree.age(), Year(step as u32));
            }
            prop_assert!(tree.is_dead());
            let last = tree.height();
            for _ in 0..extra {
                tree.grow();
                prop_assert!(tree.is_dead());
                prop_assert_eq!(tree.height(), last);
            }
        }
    }
}
