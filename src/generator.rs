//! The closed set of scale families and a single entry point per pipeline stage.
//!
//! ```
//! use temperaments::catalogue::ReferenceCatalogue;
//! use temperaments::generator::Generator;
//!
//! let request: Generator = serde_json::from_str(
//!     r#"{"family": "equal_division", "divisions": 19, "reference_hz": 261.625}"#,
//! )
//! .unwrap();
//! let catalogue = ReferenceCatalogue::default();
//! let annotated = request.annotate(&catalogue).unwrap();
//! assert_eq!(annotated.nb_steps(), 19);
//! assert_eq!(annotated.step_with_label("P5").unwrap().step.index, 11);
//! ```

use serde::{Deserialize, Serialize};

use crate::carlos::{CarlosScale, CarlosVariant};
use crate::catalogue::ReferenceCatalogue;
use crate::equal::EqualDivision;
use crate::helpers::ScaleError;
use crate::orwell::Orwell;
use crate::partch::{partch_annotated, partch_scale};
use crate::placement::PlacementEngine;
use crate::scale::{AnnotatedScale, Scale};

/// A scale family together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Generator {
    EqualDivision(EqualDivision),
    /// One of the named Carlos scales.
    CarlosVariant { variant: CarlosVariant },
    /// A Carlos scale with arbitrary weights.
    Carlos(CarlosScale),
    Orwell(Orwell),
    Partch,
}

impl Generator {
    /// The generated steps, root first.
    pub fn generate(&self) -> Result<Scale, ScaleError> {
        match self {
            Generator::EqualDivision(edo) => edo.generate(),
            Generator::CarlosVariant { variant } => Ok(variant.scale().generate()),
            Generator::Carlos(carlos) => Ok(carlos.generate()),
            Generator::Orwell(orwell) => orwell.generate(),
            Generator::Partch => Ok(partch_scale()),
        }
    }

    /// The generated steps annotated with just ratios.
    ///
    /// Tempered families go through [`PlacementEngine`] with `catalogue`.
    /// Partch is already just and annotates itself.
    pub fn annotate<'a>(
        &self,
        catalogue: &'a ReferenceCatalogue,
    ) -> Result<AnnotatedScale<'a>, ScaleError> {
        match self {
            Generator::Partch => Ok(partch_annotated()),
            _ => Ok(PlacementEngine::new(catalogue).place(&self.generate()?)),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Generator::EqualDivision(edo) => format!("{}-EDO", edo.divisions),
            Generator::CarlosVariant { variant } => variant.name().to_string(),
            Generator::Carlos(carlos) => format!(
                "Wendy Carlos scale ({}, {}, {}) x {}",
                carlos.weights.fifths,
                carlos.weights.major_thirds,
                carlos.weights.minor_thirds,
                carlos.nb_steps
            ),
            Generator::Orwell(orwell) => {
                format!("Orwell[{}] ({})", orwell.nb_steps, orwell.generator)
            }
            Generator::Partch => "Partch 43".to_string(),
        }
    }

    /// Whether the family computes frequencies.
    pub fn has_frequencies(&self) -> bool {
        matches!(self, Generator::EqualDivision(_))
    }
}
