//! Orwell temperament scales.
//!
//! Orwell is generated by a single interval of roughly 271.7 cents: seven of
//! them make a 3/1 twelfth. Stacking the generator and reducing by the octave
//! gives the 9- and 13-note moment-of-symmetry scales.
//!
//! # Examples
//!
//! ```
//! use temperaments::orwell::{Orwell, OrwellGenerator};
//!
//! let scale = Orwell::new(9, OrwellGenerator::Edo { edo: 31, generator_steps: 7 })
//!     .generate()
//!     .unwrap();
//! let cents = scale.steps().iter().map(|s| s.cents.round()).collect::<Vec<_>>();
//! assert_eq!(
//!     cents,
//!     vec![0.0, 155.0, 271.0, 426.0, 542.0, 697.0, 813.0, 968.0, 1084.0, 1200.0]
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equal::steps_as_cents;
use crate::helpers::ScaleError;
use crate::ji_ratio::IntervalRatio;
use crate::scale::Scale;

/// How the generator interval is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum OrwellGenerator {
    /// A 3/1 perfect twelfth divided into 7 equal parts.
    Twelfth,
    /// `generator_steps` steps of `edo`-EDO.
    Edo { edo: u32, generator_steps: u32 },
}

impl OrwellGenerator {
    /// The presets of the usual Orwell tunings, besides the closed form.
    pub const PRESETS: [OrwellGenerator; 3] = [
        OrwellGenerator::Edo {
            edo: 31,
            generator_steps: 7,
        },
        OrwellGenerator::Edo {
            edo: 53,
            generator_steps: 12,
        },
        OrwellGenerator::Edo {
            edo: 84,
            generator_steps: 19,
        },
    ];

    /// Size of the generator in cents.
    pub fn generator_cents(&self) -> f64 {
        match *self {
            OrwellGenerator::Twelfth => (IntervalRatio::PERFECT_FIFTH.cents() + 1200.0) / 7.0,
            OrwellGenerator::Edo {
                edo,
                generator_steps,
            } => steps_as_cents(generator_steps, edo),
        }
    }
}

impl fmt::Display for OrwellGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrwellGenerator::Twelfth => write!(f, "calc"),
            OrwellGenerator::Edo {
                edo,
                generator_steps,
            } => write!(f, "{generator_steps}-{edo}"),
        }
    }
}

impl FromStr for OrwellGenerator {
    type Err = String;

    /// `calc` for the closed form, `<generator_steps>-<edo>` (e.g. `7-31`) otherwise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "calc" {
            return Ok(OrwellGenerator::Twelfth);
        }
        let usage = || format!("unknown Orwell method {s:?}, expected calc | 7-31 | 12-53 | 19-84");
        let (generator_steps, edo) = s.split_once('-').ok_or_else(usage)?;
        let generator_steps = generator_steps.parse().map_err(|_| usage())?;
        let edo = edo.parse().map_err(|_| usage())?;
        Ok(OrwellGenerator::Edo {
            edo,
            generator_steps,
        })
    }
}

/// An Orwell scale of `nb_steps` generated notes closed by the octave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orwell {
    pub nb_steps: u32,
    pub generator: OrwellGenerator,
}

impl Orwell {
    pub fn new(nb_steps: u32, generator: OrwellGenerator) -> Self {
        Self {
            nb_steps,
            generator,
        }
    }

    /// The root, `nb_steps - 1` octave-reduced generator stacks in ascending order, then 1200 cents.
    pub fn generate(&self) -> Result<Scale, ScaleError> {
        if self.nb_steps == 0 {
            return Err(ScaleError::EmptyScale);
        }
        let mut cents = match self.generator {
            OrwellGenerator::Twelfth => self.stack_cents(),
            OrwellGenerator::Edo {
                edo,
                generator_steps,
            } => self.stack_edo_steps(edo, generator_steps)?,
        };
        cents.sort_by(f64::total_cmp);
        cents.push(1200.0);
        log::info!(
            "generated {}-note Orwell scale from a {:.3} cent generator ({})",
            self.nb_steps,
            self.generator.generator_cents(),
            self.generator
        );
        Ok(Scale::from_cents(cents))
    }

    fn stack_cents(&self) -> Vec<f64> {
        let generator = self.generator.generator_cents();
        let mut current = 0.0;
        let mut result = Vec::with_capacity(self.nb_steps as usize + 1);
        for _ in 0..self.nb_steps {
            result.push(current);
            current += generator;
            if current > 1200.0 {
                current -= 1200.0;
            }
        }
        result
    }

    /// Stacks in EDO step space so that no rounding accumulates.
    fn stack_edo_steps(&self, edo: u32, generator_steps: u32) -> Result<Vec<f64>, ScaleError> {
        if edo == 0 {
            return Err(ScaleError::ZeroDivisions);
        }
        let mut current = generator_steps % edo;
        let mut indices = vec![0; self.nb_steps as usize];
        for index in indices.iter_mut().skip(1) {
            *index = current;
            current = (current + generator_steps) % edo;
        }
        Ok(indices
            .into_iter()
            .map(|steps| steps_as_cents(steps, edo))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded(scale: &Scale) -> Vec<f64> {
        scale
            .steps()
            .iter()
            .map(|s| (s.cents * 100.0).round() / 100.0)
            .collect()
    }

    #[test]
    fn test_generator_cents() {
        assert!((OrwellGenerator::Twelfth.generator_cents() - 271.708).abs() < 1e-3);
        let [g31, g53, g84] = OrwellGenerator::PRESETS.map(|g| g.generator_cents());
        assert!((g31 - 270.968).abs() < 1e-3);
        assert!((g53 - 271.698).abs() < 1e-3);
        assert!((g84 - 271.429).abs() < 1e-3);
    }

    #[test]
    fn test_closed_form_9() {
        let scale = Orwell::new(9, OrwellGenerator::Twelfth).generate().unwrap();
        assert_eq!(
            rounded(&scale),
            vec![
                0.0, 158.54, 271.71, 430.25, 543.42, 701.96, 815.12, 973.66, 1086.83, 1200.0
            ]
        );
    }

    #[test]
    fn test_edo_derived_13() {
        let scale = Orwell::new(
            13,
            OrwellGenerator::Edo {
                edo: 53,
                generator_steps: 12,
            },
        )
        .generate()
        .unwrap();
        let in_steps = scale
            .steps()
            .iter()
            .map(|s| (s.cents * 53.0 / 1200.0).round() as u32)
            .collect::<Vec<_>>();
        assert_eq!(
            in_steps,
            vec![0, 2, 7, 12, 14, 19, 24, 26, 31, 36, 38, 43, 48, 53]
        );
    }

    #[test]
    fn test_strictly_increasing() {
        let generators = std::iter::once(OrwellGenerator::Twelfth).chain(OrwellGenerator::PRESETS);
        for generator in generators {
            for nb_steps in [1, 4, 9, 13] {
                let scale = Orwell::new(nb_steps, generator).generate().unwrap();
                assert_eq!(scale.nb_steps(), nb_steps as usize);
                assert_eq!(scale.steps()[0].cents, 0.0);
                assert_eq!(scale.steps()[nb_steps as usize].cents, 1200.0);
                assert!(
                    scale.steps().windows(2).all(|w| w[0].cents < w[1].cents),
                    "{nb_steps} notes of {generator} not increasing"
                );
            }
        }
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Orwell::new(0, OrwellGenerator::Twelfth).generate(),
            Err(ScaleError::EmptyScale)
        );
        let no_edo = OrwellGenerator::Edo {
            edo: 0,
            generator_steps: 7,
        };
        assert_eq!(Orwell::new(9, no_edo).generate(), Err(ScaleError::ZeroDivisions));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("calc".parse::<OrwellGenerator>(), Ok(OrwellGenerator::Twelfth));
        assert_eq!(
            "19-84".parse::<OrwellGenerator>(),
            Ok(OrwellGenerator::Edo {
                edo: 84,
                generator_steps: 19
            })
        );
        assert!("7/31".parse::<OrwellGenerator>().is_err());
        assert!("x-31".parse::<OrwellGenerator>().is_err());
        for generator in OrwellGenerator::PRESETS {
            assert_eq!(generator.to_string().parse::<OrwellGenerator>(), Ok(generator));
        }
    }
}
