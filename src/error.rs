use thiserror::Error;

/// Which pixel axis a scale term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The column axis, scaled by `A`.
    X,
    /// The row axis, scaled by `E`.
    Y,
}

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AffineError {
    /// The linear part of the transform has no inverse.
    #[error("Degenerate transform: determinant is {determinant}")]
    Degenerate { determinant: f64 },

    /// A pixel scale term is zero, so world coordinates cannot be mapped back to pixels.
    #[error("Zero pixel scale along the {axis:?} axis")]
    ZeroScale { axis: Axis },

    /// The mapped pixel position is NaN, infinite or outside the `i64` index range.
    #[error("Pixel position ({col}, {row}) is not a representable pixel index")]
    OutOfRange { col: f64, row: f64 },
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, AffineError>;
