use std::cmp::Ordering;
use std::fmt;

use num_rational::Ratio;
use num_traits::One;
use thiserror::Error;

use crate::interval::Dyad;

// ERRORS

/// Error type for attempts to construct an `IntervalRatio` from a non-positive ratio.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Error)]
#[error("tried to create invalid JI ratio {numer}:{denom}")]
pub struct IllegalJiRatio {
    // Show what the attempt was
    numer: u32,
    denom: u32,
}

// STRUCTS

/// A just-intonation interval `n1:n2` with a short symbolic label such as `"P5"`
/// and an optional note name relative to a C root.
///
/// The cents size is never cached; [`IntervalRatio::cents`] evaluates `1200·log2(n1/n2)` on every call.
///
/// # Examples
///
/// ```
/// use temperaments::ji_ratio::IntervalRatio;
///
/// let fifth = IntervalRatio::try_new(3, 2, "P5", Some("G")).unwrap();
/// assert!((fifth.cents() - 701.955).abs() < 1e-3);
/// assert_eq!(fifth.to_string(), "3:2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalRatio {
    ratio: Ratio<u32>,
    label: &'static str,
    note: Option<&'static str>,
}

impl IntervalRatio {
    /// 1:1, the unison. Always sits on the root of a scale.
    pub const UNISON: IntervalRatio = IntervalRatio::new_const(1, 1, "P1", Some("C"));
    /// 3:2, the perfect fifth.
    pub const PERFECT_FIFTH: IntervalRatio = IntervalRatio::new_const(3, 2, "P5", Some("G"));
    /// 2:1, the octave.
    pub const OCTAVE: IntervalRatio = IntervalRatio::new_const(2, 1, "P8", Some("C"));

    /// Check the input for validity before creating a new `IntervalRatio`.
    /// The stored ratio is reduced to lowest terms.
    pub fn try_new(
        numer: u32,
        denom: u32,
        label: &'static str,
        note: Option<&'static str>,
    ) -> Result<IntervalRatio, IllegalJiRatio> {
        if numer == 0 || denom == 0 {
            Err(IllegalJiRatio { numer, denom })
        } else {
            Ok(IntervalRatio {
                ratio: Ratio::new(numer, denom),
                label,
                note,
            })
        }
    }

    /// Const constructor for the fixed tables. Both terms must be positive and coprime.
    pub const fn new_const(
        numer: u32,
        denom: u32,
        label: &'static str,
        note: Option<&'static str>,
    ) -> IntervalRatio {
        IntervalRatio {
            ratio: Ratio::new_raw(numer, denom),
            label,
            note,
        }
    }

    /// The numerator `n1`.
    #[inline(always)]
    pub fn numer(&self) -> u32 {
        *self.ratio.numer()
    }
    /// The denominator `n2`.
    #[inline(always)]
    pub fn denom(&self) -> u32 {
        *self.ratio.denom()
    }
    /// Short symbolic label, e.g. `"m3"` or `"11HTT"`.
    pub fn label(&self) -> &'static str {
        self.label
    }
    /// Note name of the interval above C, if it has one.
    pub fn note(&self) -> Option<&'static str> {
        self.note
    }
    /// The exact rational value.
    pub fn as_ratio(&self) -> Ratio<u32> {
        self.ratio
    }
    /// Whether this is 1:1.
    pub fn is_unison(&self) -> bool {
        self.ratio.is_one()
    }
    /// Exact comparison of the rational values, ignoring labels.
    pub fn cmp_exact(&self, other: &Self) -> Ordering {
        self.ratio.cmp(&other.ratio)
    }
    /// `1200·log2(n1/n2)`.
    pub fn cents(&self) -> f64 {
        cents_from_ratio(f64::from(self.numer()) / f64::from(self.denom()))
    }
}

impl Dyad for IntervalRatio {
    fn cents(&self) -> f64 {
        IntervalRatio::cents(self)
    }
}

impl fmt::Display for IntervalRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numer(), self.denom())
    }
}

/// Cents size of a linear frequency ratio.
///
/// ```
/// use temperaments::ji_ratio::cents_from_ratio;
///
/// assert_eq!(cents_from_ratio(2.0), 1200.0);
/// assert_eq!(cents_from_ratio(1.0), 0.0);
/// ```
pub fn cents_from_ratio(ratio: f64) -> f64 {
    1200.0 * ratio.log2()
}
