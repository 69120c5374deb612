//! Harry Partch's 43-tone just scale.
//!
//! The table below *is* the scale: each degree is an exact ratio, so there is
//! nothing to fit and every step is annotated with its own ratio.

use crate::ji_ratio::IntervalRatio;
use crate::scale::{AnnotatedScale, AnnotatedStep, Scale, ScaleStep};

/// The 43 tones of the octave plus the closing 2:1, ascending.
pub static PARTCH_43: [IntervalRatio; 44] = [
    IntervalRatio::UNISON,
    IntervalRatio::new_const(81, 80, "", None),
    IntervalRatio::new_const(33, 32, "", None),
    IntervalRatio::new_const(21, 20, "", None),
    IntervalRatio::new_const(16, 15, "m2", Some("Db")),
    IntervalRatio::new_const(12, 11, "", None),
    IntervalRatio::new_const(11, 10, "", None),
    IntervalRatio::new_const(10, 9, "", None),
    IntervalRatio::new_const(9, 8, "M2", Some("D")),
    IntervalRatio::new_const(8, 7, "", None),
    IntervalRatio::new_const(7, 6, "", None),
    IntervalRatio::new_const(32, 27, "", None),
    IntervalRatio::new_const(6, 5, "m3", Some("Eb")),
    IntervalRatio::new_const(11, 9, "", None),
    IntervalRatio::new_const(5, 4, "M3", Some("E")),
    IntervalRatio::new_const(14, 11, "", None),
    IntervalRatio::new_const(9, 7, "", None),
    IntervalRatio::new_const(21, 16, "", None),
    IntervalRatio::new_const(4, 3, "P4", Some("F")),
    IntervalRatio::new_const(27, 20, "", None),
    IntervalRatio::new_const(11, 8, "11HTT", None),
    IntervalRatio::new_const(7, 5, "l7TT", None),
    IntervalRatio::new_const(10, 7, "g7TT", None),
    IntervalRatio::new_const(16, 11, "", None),
    IntervalRatio::new_const(40, 27, "", None),
    IntervalRatio::PERFECT_FIFTH,
    IntervalRatio::new_const(32, 21, "", None),
    IntervalRatio::new_const(14, 9, "", None),
    IntervalRatio::new_const(11, 7, "", None),
    IntervalRatio::new_const(8, 5, "m6", Some("Ab")),
    IntervalRatio::new_const(18, 11, "", None),
    IntervalRatio::new_const(5, 3, "M6", Some("A")),
    IntervalRatio::new_const(27, 16, "", None),
    IntervalRatio::new_const(12, 7, "", None),
    IntervalRatio::new_const(7, 4, "H7", Some("Bbb")),
    IntervalRatio::new_const(16, 9, "", None),
    IntervalRatio::new_const(9, 5, "m7", Some("Bb")),
    IntervalRatio::new_const(20, 11, "", None),
    IntervalRatio::new_const(11, 6, "", None),
    IntervalRatio::new_const(15, 8, "M7", Some("B")),
    IntervalRatio::new_const(40, 21, "", None),
    IntervalRatio::new_const(64, 33, "", None),
    IntervalRatio::new_const(160, 81, "", None),
    IntervalRatio::OCTAVE,
];

/// The Partch scale as plain steps, indices 0 to 43.
pub fn partch_scale() -> Scale {
    Scale::from_cents(PARTCH_43.iter().map(|r| r.cents()))
}

/// The Partch scale with every step carrying its own table ratio.
pub fn partch_annotated() -> AnnotatedScale<'static> {
    let steps = PARTCH_43
        .iter()
        .enumerate()
        .map(|(index, ratio)| AnnotatedStep {
            step: ScaleStep::new(index, ratio.cents()),
            ratio: Some(ratio),
        })
        .collect();
    log::info!("generated Partch 43-tone scale");
    AnnotatedScale::new(steps, vec![])
}
