//! Life-report rendering for the Sylva simulation.
//!
//! Replays a schedule through a fresh [`sylva_tree::AppleTree`] and
//! renders the per-year text report consumed downstream. The line formats
//! are load-bearing: existing consumers match them verbatim.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod report;

pub use report::life_report;
