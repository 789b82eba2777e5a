//! Strongly-typed year counter.

use std::fmt;

/// Monotonically increasing count of years a tree has lived.
///
/// `Year(0)` is the pre-first-growth state: the tree exists but has not
/// yet consulted its schedule. Each growth step advances the counter by
/// exactly one, including past death.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(pub u32);

impl Year {
    /// The year reached after one more growth step.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Year {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_one() {
        assert_eq!(Year::default().next(), Year(1));
        assert_eq!(Year(5).next(), Year(6));
    }

    #[test]
    fn displays_bare_count() {
        assert_eq!(Year(4).to_string(), "4");
    }
}
