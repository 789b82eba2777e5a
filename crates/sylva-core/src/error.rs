//! Error types for the Sylva simulation.

use std::error::Error;
use std::fmt;

/// Errors from harvest operations on an apple tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HarvestError {
    /// An apple was requested while none remain on the tree.
    ///
    /// A caller precondition violation: check `has_apples` first.
    NoApples,
}

impl fmt::Display for HarvestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoApples => write!(f, "no apples available to pick"),
        }
    }
}

impl Error for HarvestError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_precondition() {
        assert_eq!(HarvestError::NoApples.to_string(), "no apples available to pick");
    }
}
