use thiserror::Error;

/// "Top-level errors" for scale generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// An equal division of the octave into zero parts
    #[error("cannot divide the octave into 0 equal steps")]
    ZeroDivisions,
    /// A scale with no room for its root
    #[error("a scale needs at least one step")]
    EmptyScale,
}

/// Closeness check for cents values that went through different float paths.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
