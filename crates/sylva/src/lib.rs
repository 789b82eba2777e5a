//! Sylva: a deterministic tree-lifecycle simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Sylva sub-crates. For most users, adding `sylva` as a single
//! dependency is sufficient.
//!
//! A tree ages through a fixed [`prelude::TreeHistory`] schedule: each
//! growth step consults the schedule for that year's height (and, for
//! apple trees, harvest), and the tree dies once the schedule runs out.
//! Everything is single-threaded, in-memory, and replayable: the same
//! schedule always produces the same life.
//!
//! # Quick start
//!
//! ```rust
//! use sylva::prelude::*;
//!
//! let history = TreeHistory::new([
//!     TreeRecord::new(1.0),
//!     TreeRecord::with_harvest(3.0, [2.0, 2.5]),
//! ]);
//! let mut tree = AppleTree::new("red", history);
//!
//! tree.grow();
//! assert!(!tree.has_apples());
//!
//! tree.grow();
//! assert_eq!(tree.apple_count(), 2);
//! assert!(tree.is_dead());
//!
//! let apple = tree.pick_apple().unwrap();
//! assert_eq!(apple.color(), "red");
//! assert_eq!(apple.diameter(), 2.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sylva-core` | Year counter, schedule records, fruit, core traits, errors |
//! | [`tree`] | `sylva-tree` | The [`tree::Tree`] and [`tree::AppleTree`] state machines |
//! | [`report`] | `sylva-report` | The year-by-year life report renderer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and the yearly schedule (`sylva-core`).
///
/// Contains the [`types::Year`] counter, [`types::TreeRecord`] and
/// [`types::TreeHistory`], the [`types::Fruit`] and [`types::Aging`]
/// traits, and [`types::HarvestError`].
pub use sylva_core as types;

/// Tree state machines (`sylva-tree`).
///
/// [`tree::Tree`] ages and dies; [`tree::AppleTree`] additionally bears
/// apples and hands them out FIFO.
pub use sylva_tree as tree;

/// Life-report rendering (`sylva-report`).
///
/// [`report::life_report`] replays a schedule and renders the per-year
/// text report.
pub use sylva_report as report;

/// Common imports for typical Sylva usage.
///
/// ```rust
/// use sylva::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sylva_core::{Aging, Apple, Fruit, Harvest, HarvestError, TreeHistory, TreeRecord, Year};

    // State machines
    pub use sylva_tree::{AppleTree, Tree};

    // Reporting
    pub use sylva_report::life_report;
}
