//! Matching reference ratios to generated scale steps.
//!
//! Placement is a greedy, global-best-first assignment. Every round looks at all
//! ratios still pending and all free steps each of them may legally occupy, and
//! commits the single closest pair. A ratio may only land between the already
//! placed ratios that are smaller and larger than it, so assignments never
//! invert pitch order. Placement stops once every ratio is placed or no pending
//! ratio has a free step left in its range.
//!
//! Ties on the cents distance go to the ratio enumerated first (catalogue order
//! among the ratios still pending), then to the lowest step index.
//!
//! # Examples
//!
//! ```
//! use temperaments::catalogue::ReferenceCatalogue;
//! use temperaments::equal::EqualDivision;
//! use temperaments::placement::PlacementEngine;
//!
//! let scale = EqualDivision::new(12, 261.625).generate().unwrap();
//! let catalogue = ReferenceCatalogue::default();
//! let annotated = PlacementEngine::new(&catalogue).place(&scale);
//!
//! let fifth = annotated.step_with_label("P5").unwrap();
//! assert_eq!(fifth.step.index, 7);
//! assert!((fifth.just_error().unwrap() + 1.955).abs() < 1e-3);
//! ```

use crate::catalogue::ReferenceCatalogue;
use crate::interval::Dyad;
use crate::ji_ratio::IntervalRatio;
use crate::scale::{AnnotatedScale, AnnotatedStep, Scale, ScaleStep};

/// The step index range `[start, end]` a ratio may occupy, given what is already placed.
///
/// `start` is the highest placed step whose ratio is strictly smaller than `ratio`
/// (1 if there is none), `end` the lowest placed step whose ratio is strictly larger
/// (the last step if there is none). Both bounds are inclusive; occupied steps
/// inside the range are skipped by the caller.
pub fn valid_range(slots: &[Option<&IntervalRatio>], ratio: &IntervalRatio) -> (usize, usize) {
    let cents = ratio.cents();
    let start = slots
        .iter()
        .rposition(|slot| slot.is_some_and(|placed| placed.cents() < cents))
        .unwrap_or(1);
    let end = slots
        .iter()
        .position(|slot| slot.is_some_and(|placed| placed.cents() > cents))
        .unwrap_or(slots.len().saturating_sub(1));
    (start, end)
}

/// A pending ratio and a free step it could be placed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Position in the pending list.
    pub ratio_idx: usize,
    /// Index of the free step.
    pub step_idx: usize,
    /// `|ratio.cents - step.cents|`
    pub distance: f64,
}

/// The closest (pending ratio, free step) pair over all pending ratios, if any.
///
/// Only finite distances compete, and a later pair must be strictly closer to
/// replace an earlier one.
pub fn next_best_candidate(
    slots: &[Option<&IntervalRatio>],
    steps: &[ScaleStep],
    pending: &[&IntervalRatio],
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (ratio_idx, ratio) in pending.iter().enumerate() {
        let (start, end) = valid_range(slots, ratio);
        for step_idx in start..=end.min(steps.len().saturating_sub(1)) {
            if slots[step_idx].is_some() {
                continue;
            }
            let distance = ratio.distance(&steps[step_idx]);
            let best_distance = best.map_or(f64::INFINITY, |c| c.distance);
            if distance < best_distance {
                best = Some(Candidate {
                    ratio_idx,
                    step_idx,
                    distance,
                });
            }
        }
    }
    best
}

/// Places the ratios of a [`ReferenceCatalogue`] on scales.
#[derive(Debug, Clone, Copy)]
pub struct PlacementEngine<'a> {
    catalogue: &'a ReferenceCatalogue,
}

impl<'a> PlacementEngine<'a> {
    pub fn new(catalogue: &'a ReferenceCatalogue) -> Self {
        Self { catalogue }
    }

    /// Annotates `scale`. The root always receives 1:1 and is never a target.
    pub fn place(&self, scale: &Scale) -> AnnotatedScale<'a> {
        let steps = scale.steps();
        let mut slots: Vec<Option<&'a IntervalRatio>> = vec![None; steps.len()];
        let mut pending: Vec<&'a IntervalRatio> = self.catalogue.ratios().iter().collect();

        if let Some(root) = slots.first_mut() {
            *root = Some(&IntervalRatio::UNISON);
        }

        while !pending.is_empty() {
            let Some(Candidate {
                ratio_idx,
                step_idx,
                distance,
            }) = next_best_candidate(&slots, steps, &pending)
            else {
                break;
            };
            let ratio = pending.remove(ratio_idx);
            log::debug!(
                "placing ratio {} ({:.2}) at step {} ({:.2}), off by {:.2}",
                ratio,
                ratio.cents(),
                step_idx,
                steps[step_idx].cents,
                distance
            );
            slots[step_idx] = Some(ratio);
        }

        for ratio in &pending {
            log::debug!("no free step left for ratio {} ({})", ratio, ratio.label());
        }

        let annotated = steps
            .iter()
            .zip(slots)
            .map(|(&step, ratio)| AnnotatedStep { step, ratio })
            .collect();
        AnnotatedScale::new(annotated, pending)
    }
}
