use std::fmt;
use std::ops::{Mul, MulAssign};

use crate::angle::cos_sin_deg;
use crate::error::{AffineError, Result};

/// A 2D affine transform between pixel space and a spatial reference system.
///
/// The six parameters are the first two rows of a homogeneous 3x3 matrix:
///
/// ```text
/// | x' |   | a  b  c | | x |
/// | y' | = | d  e  f | | y |
/// | 1  |   | 0  0  1 | | 1 |
/// ```
///
/// For a north-up raster `a` is the pixel width, `e` the (usually negative) pixel height and
/// `(c, f)` the upper-left corner of the upper-left pixel. `b` and `d` are the row and column
/// rotation terms, zero unless the raster is rotated or sheared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine(f64, f64, f64, f64, f64, f64);

impl Affine {
    pub fn new(a: f64, b: f64, xoff: f64, d: f64, e: f64, yoff: f64) -> Self {
        Self(a, b, xoff, d, e, yoff)
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    /// A pure offset by `(xoff, yoff)`.
    pub fn translation(xoff: f64, yoff: f64) -> Self {
        Self(1.0, 0.0, xoff, 0.0, 1.0, yoff)
    }

    /// Uniform scaling about the origin.
    pub fn scale(factor: f64) -> Self {
        Self(factor, 0.0, 0.0, 0.0, factor, 0.0)
    }

    /// Counter-clockwise rotation by `angle` degrees about `pivot`.
    ///
    /// Multiples of 90 degrees, negative ones included, give exact 0 and ±1 terms.
    pub fn rotation(angle: f64, pivot: (f64, f64)) -> Self {
        let (ca, sa) = cos_sin_deg(angle);
        let (px, py) = pivot;
        Self(
            ca,
            -sa,
            px - px * ca + py * sa,
            sa,
            ca,
            py - px * sa - py * ca,
        )
    }

    /// Read parameters stored in GDAL geotransform order:
    /// `[origin_x, pixel_width, row_rotation, origin_y, column_rotation, pixel_height]`.
    pub fn from_gdal(gt: [f64; 6]) -> Self {
        Self(gt[1], gt[2], gt[0], gt[4], gt[5], gt[3])
    }

    /// Inverse of [`Affine::from_gdal`].
    pub fn to_gdal(&self) -> [f64; 6] {
        [self.2, self.0, self.1, self.5, self.3, self.4]
    }

    pub fn a(&self) -> f64 {
        self.0
    }

    pub fn b(&self) -> f64 {
        self.1
    }

    pub fn c(&self) -> f64 {
        self.2
    }

    pub fn d(&self) -> f64 {
        self.3
    }

    pub fn e(&self) -> f64 {
        self.4
    }

    pub fn f(&self) -> f64 {
        self.5
    }

    /// Combine two transforms as the matrix product `self * other`.
    ///
    /// The result applies `other` first and `self` second.
    pub fn compose(&self, other: &Affine) -> Affine {
        let Self(sa, sb, sc, sd, se, sf) = *self;
        let Self(oa, ob, oc, od, oe, of) = *other;
        Self(
            sa * oa + sb * od,
            sa * ob + sb * oe,
            sa * oc + sb * of + sc,
            sd * oa + se * od,
            sd * ob + se * oe,
            sd * oc + se * of + sf,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.0 * self.4 - self.1 * self.3
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// True when the transform has no rotation or shear terms.
    pub fn is_rectilinear(&self) -> bool {
        self.1 == 0.0 && self.3 == 0.0
    }

    /// Apply the full transform to a point.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.0 * x + self.1 * y + self.2,
            self.3 * x + self.4 * y + self.5,
        )
    }

    /// The determinant, or an error when the linear part has no inverse.
    pub(crate) fn invertible_determinant(&self) -> Result<f64> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            log::debug!("cannot invert {:?}: determinant is {}", self, det);
            return Err(AffineError::Degenerate { determinant: det });
        }
        Ok(det)
    }

    /// The transform mapping outputs of `self` back to its inputs.
    pub fn inverse(&self) -> Result<Affine> {
        let det = self.invertible_determinant()?;

        let ia = self.4 / det;
        let ib = -self.1 / det;
        let id = -self.3 / det;
        let ie = self.0 / det;
        Ok(Self(
            ia,
            ib,
            -(ia * self.2 + ib * self.5),
            id,
            ie,
            -(id * self.2 + ie * self.5),
        ))
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Affine {
    type Output = Affine;

    fn mul(self, rhs: Affine) -> Affine {
        self.compose(&rhs)
    }
}

/// In-place composition: `t *= other` leaves `t * other` in `t`.
impl MulAssign for Affine {
    fn mul_assign(&mut self, rhs: Affine) {
        *self = self.compose(&rhs);
    }
}

impl fmt::Display for Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|{}, {}, {}|", self.0, self.1, self.2)?;
        writeln!(f, "|{}, {}, {}|", self.3, self.4, self.5)?;
        write!(f, "|0, 0, 1|")
    }
}
