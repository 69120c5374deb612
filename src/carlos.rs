//! Wendy Carlos's non-octave scales and their relatives.
//!
//! A Carlos scale has a single step size chosen so that `w5` steps approximate a
//! 3/2 perfect fifth, `w3maj` steps a 5/4 major third and `w3min` steps a 6/5
//! minor third. Minimizing the squared deviation over the three targets gives
//!
//! ```text
//! step = 1200 · (w5·log2(3/2) + w3maj·log2(5/4) + w3min·log2(6/5)) / (w5² + w3maj² + w3min²)
//! ```
//!
//! The scale does not close at the octave; it simply stacks that step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scale::Scale;

/// How many scale steps are meant to approximate each target interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarlosWeights {
    pub fifths: u32,
    pub major_thirds: u32,
    pub minor_thirds: u32,
}

impl CarlosWeights {
    pub const fn new(fifths: u32, major_thirds: u32, minor_thirds: u32) -> Self {
        Self {
            fifths,
            major_thirds,
            minor_thirds,
        }
    }

    /// The least-squares step size in cents.
    ///
    /// All-zero weights give NaN, which is passed on rather than clamped.
    ///
    /// ```
    /// use temperaments::carlos::CarlosWeights;
    ///
    /// let alpha = CarlosWeights::new(9, 5, 4);
    /// assert!((alpha.step_cents() - 77.965).abs() < 1e-3);
    /// assert!(CarlosWeights::new(0, 0, 0).step_cents().is_nan());
    /// ```
    pub fn step_cents(&self) -> f64 {
        let (w5, w3maj, w3min) = (
            f64::from(self.fifths),
            f64::from(self.major_thirds),
            f64::from(self.minor_thirds),
        );
        let a = w5 * (3.0_f64 / 2.0).log2()
            + w3maj * (5.0_f64 / 4.0).log2()
            + w3min * (6.0_f64 / 5.0).log2();
        let b = w5 * w5 + w3maj * w3maj + w3min * w3min;
        1200.0 * (a / b)
    }
}

/// A Carlos-family scale: `nb_steps + 1` equal steps of the least-squares size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarlosScale {
    pub weights: CarlosWeights,
    pub nb_steps: u32,
}

impl CarlosScale {
    pub fn new(weights: CarlosWeights, nb_steps: u32) -> Self {
        Self { weights, nb_steps }
    }

    /// Step `i` sits at `i · step_cents()`. The root is always 0 cents, even when
    /// the weights are all zero and every other step is NaN.
    pub fn generate(&self) -> Scale {
        let step = self.weights.step_cents();
        if !step.is_finite() {
            log::warn!(
                "Carlos weights {:?} give a step size of {}",
                self.weights,
                step
            );
        }
        log::info!(
            "generated Carlos scale of {} steps of {:.3} cents",
            self.nb_steps,
            step
        );
        let above_root = (1..=self.nb_steps).map(|i| step * f64::from(i));
        Scale::from_cents(std::iter::once(0.0).chain(above_root))
    }
}

/// The named parameterizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarlosVariant {
    /// About 15.39 steps per octave.
    Alpha,
    /// About 18.8 steps per octave.
    Beta,
    /// About 34.19 steps per octave.
    Gamma,
    Delta,
    /// Lands within a quarter cent of 41-EDO.
    Pq41,
    /// Lands within a third of a cent of 53-EDO.
    Pq53,
    /// Lands within about half a cent of 65-EDO.
    Pq65,
}

impl CarlosVariant {
    pub const ALL: [CarlosVariant; 7] = [
        CarlosVariant::Alpha,
        CarlosVariant::Beta,
        CarlosVariant::Gamma,
        CarlosVariant::Delta,
        CarlosVariant::Pq41,
        CarlosVariant::Pq53,
        CarlosVariant::Pq65,
    ];

    pub fn scale(self) -> CarlosScale {
        let (weights, nb_steps) = match self {
            CarlosVariant::Alpha => (CarlosWeights::new(9, 5, 4), 15 + 2),
            CarlosVariant::Beta => (CarlosWeights::new(11, 6, 5), 18 + 2),
            CarlosVariant::Gamma => (CarlosWeights::new(20, 11, 9), 34 + 2),
            CarlosVariant::Delta => (CarlosWeights::new(50, 28, 31), 91 + 2),
            CarlosVariant::Pq41 => (CarlosWeights::new(24, 13, 11), 41 + 2),
            CarlosVariant::Pq53 => (CarlosWeights::new(31, 17, 14), 53 + 2),
            CarlosVariant::Pq65 => (CarlosWeights::new(38, 21, 17), 65 + 2),
        };
        CarlosScale::new(weights, nb_steps)
    }

    pub fn name(self) -> &'static str {
        match self {
            CarlosVariant::Alpha => "Wendy Carlos scale Alpha",
            CarlosVariant::Beta => "Wendy Carlos scale Beta",
            CarlosVariant::Gamma => "Wendy Carlos scale Gamma",
            CarlosVariant::Delta => "Wendy Carlos scale Delta",
            CarlosVariant::Pq41 => "Wendy Carlos scale Pq41EDO",
            CarlosVariant::Pq53 => "Wendy Carlos scale Pq53EDO",
            CarlosVariant::Pq65 => "Wendy Carlos scale Pq65EDO",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            CarlosVariant::Alpha => "a",
            CarlosVariant::Beta => "b",
            CarlosVariant::Gamma => "g",
            CarlosVariant::Delta => "d",
            CarlosVariant::Pq41 => "pq41",
            CarlosVariant::Pq53 => "pq53",
            CarlosVariant::Pq65 => "pq65",
        }
    }
}

impl fmt::Display for CarlosVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for CarlosVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CarlosVariant::ALL
            .into_iter()
            .find(|v| v.short_name() == s)
            .ok_or_else(|| {
                format!("unknown Carlos scale {s:?}, expected a | b | g | d | pq41 | pq53 | pq65")
            })
    }
}
