//! Yearly schedule records and the history that orders them.

use smallvec::SmallVec;

use crate::year::Year;

/// Diameter list for one year's harvest.
///
/// Most schedule years bear nothing or a handful of apples, so the list
/// stays inline; bumper years spill to the heap transparently.
pub type Harvest = SmallVec<[f64; 8]>;

/// One year of schedule data for a tree.
///
/// Records the height the tree reaches that year and, for apple trees,
/// the diameters of the apples it bears. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeRecord {
    height: f64,
    harvest: Harvest,
}

impl TreeRecord {
    /// A record with no harvest (a plain or fruitless year).
    pub fn new(height: f64) -> Self {
        Self {
            height,
            harvest: Harvest::new(),
        }
    }

    /// A record bearing one apple per diameter, in the given order.
    pub fn with_harvest(height: f64, diameters: impl IntoIterator<Item = f64>) -> Self {
        Self {
            height,
            harvest: diameters.into_iter().collect(),
        }
    }

    /// The height the tree reaches in this year, in feet.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Diameters of the apples borne this year, in inches.
    ///
    /// Order is significant: it fixes the pick order of the year's
    /// apples.
    pub fn harvest(&self) -> &[f64] {
        &self.harvest
    }
}

/// The deterministic source of truth for what happens in each year of a
/// tree's life.
///
/// Records are ordered by year: the record for [`Year`] `n` (1-based) is
/// stored at index `n - 1`. A history is immutable and exclusively owned
/// by the tree constructed with it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeHistory {
    records: Vec<TreeRecord>,
}

impl TreeHistory {
    /// Build a history from records ordered by year.
    pub fn new(records: impl IntoIterator<Item = TreeRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Number of years the schedule covers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the schedule covers no years at all.
    ///
    /// Intended use always has at least one record; an empty history
    /// simply yields a tree that is dead from the start.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record for the given year.
    ///
    /// Returns `None` at `Year(0)` and once the schedule is exhausted.
    pub fn record_for(&self, year: Year) -> Option<&TreeRecord> {
        let n = year.0 as usize;
        if n == 0 {
            None
        } else {
            self.records.get(n - 1)
        }
    }
}
