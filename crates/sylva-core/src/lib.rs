//! Core types and traits for the Sylva tree-lifecycle simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! year counter, the yearly schedule ([`TreeHistory`]), the fruit value
//! types, the [`Aging`] capability trait, and the error types shared
//! across the Sylva workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fruit;
pub mod history;
pub mod traits;
pub mod year;

pub use error::HarvestError;
pub use fruit::{Apple, Fruit};
pub use history::{Harvest, TreeHistory, TreeRecord};
pub use traits::Aging;
pub use year::Year;
