//! Generated scales and their ratio annotations.
//!
//! A [`Scale`] is produced once by a generator and never mutated afterwards.
//! Placing reference ratios yields a separate [`AnnotatedScale`] which pairs every
//! step with the ratio it was matched to, if any.

use serde::Serialize;

use crate::interval::Dyad;
use crate::ji_ratio::IntervalRatio;

/// One degree of a generated scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleStep {
    /// Position in the scale, 0 is the root.
    pub index: usize,
    /// Offset from the root in cents.
    pub cents: f64,
    /// Absolute pitch in Hz, for families that compute one.
    pub frequency: Option<f64>,
}

impl ScaleStep {
    pub fn new(index: usize, cents: f64) -> Self {
        Self {
            index,
            cents,
            frequency: None,
        }
    }

    pub fn with_frequency(index: usize, cents: f64, frequency: f64) -> Self {
        Self {
            index,
            cents,
            frequency: Some(frequency),
        }
    }
}

impl Dyad for ScaleStep {
    fn cents(&self) -> f64 {
        self.cents
    }
}

/// An ordered sequence of `nb_steps + 1` steps, root through top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    steps: Vec<ScaleStep>,
}

impl Scale {
    /// Builds a scale from pitch offsets, indexing them in the given order.
    pub fn from_cents(cents: impl IntoIterator<Item = f64>) -> Self {
        Self {
            steps: cents
                .into_iter()
                .enumerate()
                .map(|(index, cents)| ScaleStep::new(index, cents))
                .collect(),
        }
    }

    /// Builds a scale from `(cents, frequency)` pairs.
    pub fn from_pitches(pitches: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            steps: pitches
                .into_iter()
                .enumerate()
                .map(|(index, (cents, hz))| ScaleStep::with_frequency(index, cents, hz))
                .collect(),
        }
    }

    /// Number of steps above the root.
    pub fn nb_steps(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
    pub fn steps(&self) -> &[ScaleStep] {
        &self.steps
    }
    pub fn root(&self) -> Option<&ScaleStep> {
        self.steps.first()
    }
    pub fn top(&self) -> Option<&ScaleStep> {
        self.steps.last()
    }
    /// Whether cents never decrease with the step index.
    pub fn is_monotone(&self) -> bool {
        self.steps.windows(2).all(|w| w[0].cents <= w[1].cents)
    }
}

/// A step paired with the reference ratio placed on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotatedStep<'a> {
    pub step: ScaleStep,
    pub ratio: Option<&'a IntervalRatio>,
}

impl AnnotatedStep<'_> {
    /// Deviation of the generated step from its ratio, `None` when nothing was placed here.
    pub fn just_error(&self) -> Option<f64> {
        self.ratio.map(|r| self.step.cents - r.cents())
    }
}

/// Result of annotating a [`Scale`]: one entry per step, plus the candidate ratios that found no slot.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedScale<'a> {
    steps: Vec<AnnotatedStep<'a>>,
    unplaced: Vec<&'a IntervalRatio>,
}

impl<'a> AnnotatedScale<'a> {
    pub fn new(steps: Vec<AnnotatedStep<'a>>, unplaced: Vec<&'a IntervalRatio>) -> Self {
        Self { steps, unplaced }
    }
    pub fn steps(&self) -> &[AnnotatedStep<'a>] {
        &self.steps
    }
    pub fn unplaced(&self) -> &[&'a IntervalRatio] {
        &self.unplaced
    }
    pub fn nb_steps(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
    /// Steps that carry a ratio, in index order.
    pub fn placed(&self) -> impl Iterator<Item = &AnnotatedStep<'a>> {
        self.steps.iter().filter(|s| s.ratio.is_some())
    }
    /// The step holding the ratio labelled `label`.
    pub fn step_with_label(&self, label: &str) -> Option<&AnnotatedStep<'a>> {
        self.placed()
            .find(|s| s.ratio.is_some_and(|r| r.label() == label))
    }
}
