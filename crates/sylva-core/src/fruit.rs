//! Fruit capability and the apple value type.

/// Capability shared by everything a tree can bear.
///
/// All fruit carries seeds; implementors inherit the provided method.
pub trait Fruit {
    /// Whether this fruit carries seeds. Always true.
    fn has_seeds(&self) -> bool {
        true
    }
}

/// An apple borne by an apple tree.
///
/// Its color is inherited from the bearing tree; its diameter comes from
/// the harvest entry that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Apple {
    color: String,
    diameter: f64,
}

impl Apple {
    /// Create an apple of the given color and diameter.
    pub fn new(color: impl Into<String>, diameter: f64) -> Self {
        Self {
            color: color.into(),
            diameter,
        }
    }

    /// The apple's color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The apple's diameter in inches.
    pub fn diameter(&self) -> f64 {
        self.diameter
    }
}

impl Fruit for Apple {}
