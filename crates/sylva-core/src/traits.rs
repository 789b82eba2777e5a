//! Core abstraction trait for aging state machines.

use crate::year::Year;

/// The aging capability shared by all tree kinds.
///
/// A tree is a one-directional state machine: alive while its age is
/// within its schedule, dead once the schedule is exhausted. Growing
/// advances the year counter by exactly one in either state; only alive
/// transitions update any other state.
pub trait Aging {
    /// Years lived so far.
    fn age(&self) -> Year;

    /// Current height in feet.
    ///
    /// Zero before the first growth step; frozen at its last scheduled
    /// value after death.
    fn height(&self) -> f64;

    /// Advance one year.
    ///
    /// Always increments the year counter, even past death. Growing a
    /// dead tree is a valid no-op on everything but the counter, never
    /// an error.
    fn grow(&mut self);

    /// Whether the schedule is exhausted.
    fn is_dead(&self) -> bool;
}
