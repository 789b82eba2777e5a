//! Tree state machines for the Sylva simulation.
//!
//! Provides the two aging machines driven by a [`sylva_core::TreeHistory`]
//! schedule:
//!
//! - [`Tree`] — tracks age and height, dies when the schedule runs out.
//! - [`AppleTree`] — a [`Tree`] that also bears apples per the schedule
//!   and hands them out in strict FIFO order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod apple_tree;
pub mod tree;

pub use apple_tree::AppleTree;
pub use tree::Tree;
