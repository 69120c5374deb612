//! Reference just-intonation ratios used as placement candidates.

use crate::ji_ratio::IntervalRatio;

/// The default candidates, minor second through octave, ascending by cents.
pub const DEFAULT_RATIOS: [IntervalRatio; 15] = [
    IntervalRatio::new_const(16, 15, "m2", Some("Db")),
    IntervalRatio::new_const(9, 8, "M2", Some("D")),
    IntervalRatio::new_const(6, 5, "m3", Some("Eb")),
    IntervalRatio::new_const(5, 4, "M3", Some("E")),
    IntervalRatio::new_const(4, 3, "P4", Some("F")),
    IntervalRatio::new_const(11, 8, "11HTT", None),
    IntervalRatio::new_const(7, 5, "l7TT", None),
    IntervalRatio::new_const(10, 7, "g7TT", None),
    IntervalRatio::PERFECT_FIFTH,
    IntervalRatio::new_const(8, 5, "m6", Some("Ab")),
    IntervalRatio::new_const(5, 3, "M6", Some("A")),
    IntervalRatio::new_const(7, 4, "H7", Some("Bbb")),
    IntervalRatio::new_const(9, 5, "m7", Some("Bb")),
    IntervalRatio::new_const(15, 8, "M7", Some("B")),
    IntervalRatio::OCTAVE,
];

/// An ordered, read-only set of candidate ratios.
///
/// The order is the enumeration order used for tie-breaking during placement;
/// it does not need to be sorted by size.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCatalogue {
    ratios: Vec<IntervalRatio>,
}

impl Default for ReferenceCatalogue {
    fn default() -> Self {
        Self {
            ratios: DEFAULT_RATIOS.to_vec(),
        }
    }
}

impl ReferenceCatalogue {
    /// A catalogue of arbitrary ratios. Unison entries are dropped since the root always holds 1:1.
    pub fn new(ratios: impl IntoIterator<Item = IntervalRatio>) -> Self {
        Self {
            ratios: ratios.into_iter().filter(|r| !r.is_unison()).collect(),
        }
    }
    pub fn ratios(&self) -> &[IntervalRatio] {
        &self.ratios
    }
    pub fn len(&self) -> usize {
        self.ratios.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
    /// The first ratio carrying `label`.
    pub fn find(&self, label: &str) -> Option<&IntervalRatio> {
        self.ratios.iter().find(|r| r.label() == label)
    }
}
