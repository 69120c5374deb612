//! Equal divisions of the octave.
//!
//! An N-EDO ("N equal divisions of the octave") has N steps of `1200 / N` cents
//! each. Step `i` of N-EDO sits at `1200·i/N` cents and, given the frequency of
//! the root, at `f0·2^(i/N)` Hz.
//!
//! # Examples
//!
//! ```
//! use temperaments::equal::EqualDivision;
//!
//! let scale = EqualDivision::new(12, 261.625).generate().unwrap();
//! assert_eq!(scale.nb_steps(), 12);
//! assert_eq!(scale.steps()[7].cents, 700.0);
//! assert!((scale.steps()[12].frequency.unwrap() - 523.25).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::helpers::ScaleError;
use crate::scale::Scale;

/// `steps` steps of `divisions`-EDO, in cents.
pub fn steps_as_cents(steps: u32, divisions: u32) -> f64 {
    1200.0 / f64::from(divisions) * f64::from(steps)
}

/// Parameters of an equal-division scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EqualDivision {
    /// Number of equal steps per octave.
    pub divisions: u32,
    /// Frequency of the root in Hz.
    pub reference_hz: f64,
}

impl EqualDivision {
    pub fn new(divisions: u32, reference_hz: f64) -> Self {
        Self {
            divisions,
            reference_hz,
        }
    }

    /// Steps `0..=divisions`, each with its frequency.
    ///
    /// Fails with [`ScaleError::ZeroDivisions`] for 0 divisions.
    pub fn generate(&self) -> Result<Scale, ScaleError> {
        if self.divisions == 0 {
            return Err(ScaleError::ZeroDivisions);
        }
        let divisions = f64::from(self.divisions);
        let scale = Scale::from_pitches((0..=self.divisions).map(|i| {
            let cents = steps_as_cents(i, self.divisions);
            let hz = self.reference_hz * (f64::from(i) / divisions).exp2();
            (cents, hz)
        }));
        log::info!(
            "generated {}-EDO from {:.3} Hz",
            self.divisions,
            self.reference_hz
        );
        Ok(scale)
    }
}
