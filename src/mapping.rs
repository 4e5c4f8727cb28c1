//! Conversion between pixel indices `(col, row)` and world coordinates `(x, y)`.
//!
//! Pixel arguments and results are always ordered column first: `col` follows the x axis and
//! `row` follows the y axis.

use crate::affine::Affine;
use crate::error::{AffineError, Axis, Result};

/// How the rotation terms `b` and `d` take part in pixel/world conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mapping {
    /// Only the pixel size and origin are used; `b` and `d` are ignored. Exact for north-up
    /// rasters, wrong for rotated ones.
    #[default]
    AxisAligned,
    /// The complete affine transform, including rotation and shear.
    Full,
}

impl Affine {
    /// World coordinates of the upper-left corner of pixel `(col, row)`.
    ///
    /// Uses [`Mapping::AxisAligned`].
    pub fn xy(&self, col: i64, row: i64) -> (f64, f64) {
        self.xy_with(Mapping::AxisAligned, col, row)
    }

    pub fn xy_with(&self, mapping: Mapping, col: i64, row: i64) -> (f64, f64) {
        let (col, row) = (col as f64, row as f64);
        match mapping {
            Mapping::AxisAligned => (self.a() * col + self.c(), self.e() * row + self.f()),
            Mapping::Full => self.apply(col, row),
        }
    }

    /// The pixel `(col, row)` containing world point `(x, y)`.
    ///
    /// Uses [`Mapping::AxisAligned`]. Positions are floored, so a point on a pixel boundary
    /// belongs to the lower-index pixel. A zero pixel size is not reported: the division
    /// yields an infinite or NaN position which saturates to the `i64` range (NaN to 0). See
    /// [`Affine::try_col_row`] for a checked version.
    pub fn col_row(&self, x: f64, y: f64) -> (i64, i64) {
        self.col_row_with(Mapping::AxisAligned, x, y)
    }

    pub fn col_row_with(&self, mapping: Mapping, x: f64, y: f64) -> (i64, i64) {
        let (col, row) = self.fractional_col_row(mapping, x, y);
        (col as i64, row as i64)
    }

    /// Like [`Affine::col_row`], but fails instead of producing a meaningless index.
    pub fn try_col_row(&self, x: f64, y: f64) -> Result<(i64, i64)> {
        self.try_col_row_with(Mapping::AxisAligned, x, y)
    }

    pub fn try_col_row_with(&self, mapping: Mapping, x: f64, y: f64) -> Result<(i64, i64)> {
        let (col, row) = match mapping {
            Mapping::AxisAligned => {
                if self.a() == 0.0 {
                    log::debug!("pixel width is zero in {:?}", self);
                    return Err(AffineError::ZeroScale { axis: Axis::X });
                }
                if self.e() == 0.0 {
                    log::debug!("pixel height is zero in {:?}", self);
                    return Err(AffineError::ZeroScale { axis: Axis::Y });
                }
                self.fractional_col_row(mapping, x, y)
            }
            Mapping::Full => {
                self.invertible_determinant()?;
                self.fractional_col_row(mapping, x, y)
            }
        };

        if !fits_index(col) || !fits_index(row) {
            log::debug!("({}, {}) maps to unrepresentable pixel ({}, {})", x, y, col, row);
            return Err(AffineError::OutOfRange { col, row });
        }
        Ok((col as i64, row as i64))
    }

    /// Floored pixel position of `(x, y)` before conversion to integers.
    fn fractional_col_row(&self, mapping: Mapping, x: f64, y: f64) -> (f64, f64) {
        let dx = x - self.c();
        let dy = y - self.f();
        let (col, row) = match mapping {
            Mapping::AxisAligned => (dx / self.a(), dy / self.e()),
            Mapping::Full => {
                let det = self.determinant();
                (
                    (self.e() * dx - self.b() * dy) / det,
                    (self.a() * dy - self.d() * dx) / det,
                )
            }
        };
        (col.floor(), row.floor())
    }
}

fn fits_index(v: f64) -> bool {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    v >= i64::MIN as f64 && v < i64::MAX as f64
}
