use std::cmp::Ordering;

/// Trait for any type representing a concrete interval size above a root.
pub trait Dyad {
    /// The cents size of an interval.
    fn cents(&self) -> f64;

    /// The size of an interval in octaves.
    fn octaves(&self) -> f64 {
        self.cents() / 1200.0
    }

    /// Comparison for dyad sizes (based on logarithmic magnitude in cents).
    fn cmp_dyad(&self, other: &impl Dyad) -> Ordering {
        self.cents().total_cmp(&other.cents())
    }

    /// Absolute distance in cents between two dyads.
    fn distance(&self, other: &impl Dyad) -> f64 {
        (self.cents() - other.cents()).abs()
    }
}

impl Dyad for f64 {
    fn cents(&self) -> f64 {
        *self
    }
}
