//! The apple-bearing tree state machine.

use std::collections::VecDeque;

use sylva_core::{Aging, Apple, HarvestError, TreeHistory, Year};

use crate::tree::Tree;

/// A [`Tree`] that bears apples according to its schedule.
///
/// Each growth step appends that year's harvest, one [`Apple`] per
/// scheduled diameter, behind any apples still unpicked from earlier
/// years. Apples come off the tree in strict FIFO order via
/// [`AppleTree::pick_apple`].
#[derive(Clone, Debug)]
pub struct AppleTree {
    tree: Tree,
    color: String,
    apples: VecDeque<Apple>,
}

impl AppleTree {
    /// Plant an apple tree whose fruit will all have the given color.
    pub fn new(color: impl Into<String>, history: TreeHistory) -> Self {
        Self {
            tree: Tree::new(history),
            color: color.into(),
            apples: VecDeque::new(),
        }
    }

    /// The color of every apple this tree bears.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The schedule this tree ages through.
    pub fn history(&self) -> &TreeHistory {
        self.tree.history()
    }

    /// The apples currently on the tree, oldest first.
    ///
    /// Read-only: removal goes through [`AppleTree::pick_apple`].
    pub fn apples(&self) -> impl ExactSizeIterator<Item = &Apple> {
        self.apples.iter()
    }

    /// Number of apples currently on the tree.
    pub fn apple_count(&self) -> usize {
        self.apples.len()
    }

    /// Whether any apples remain unpicked.
    pub fn has_apples(&self) -> bool {
        !self.apples.is_empty()
    }

    /// Remove and return the oldest unpicked apple.
    ///
    /// Picking is strictly FIFO: apples come off in the order their
    /// diameters were scheduled, year by year. Picking from a bare tree
    /// is a caller precondition violation and reported as
    /// [`HarvestError::NoApples`].
    pub fn pick_apple(&mut self) -> Result<Apple, HarvestError> {
        self.apples.pop_front().ok_or(HarvestError::NoApples)
    }
}

impl Aging for AppleTree {
    fn age(&self) -> Year {
        self.tree.age()
    }

    fn height(&self) -> f64 {
        self.tree.height()
    }

    fn grow(&mut self) {
        self.tree.grow();
        // The harvest lookup is bounded by the schedule: a dead tree's
        // advancing counter finds no record and bears nothing.
        if let Some(record) = self.tree.history().record_for(self.tree.age()) {
            for &diameter in record.harvest() {
                self.apples.push_back(Apple::new(self.color.clone(), diameter));
            }
        }
    }

    fn is_dead(&self) -> bool {
        self.tree.is_dead()
    }
}
