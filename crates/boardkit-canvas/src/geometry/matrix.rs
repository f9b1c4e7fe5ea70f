//! Six-parameter affine transform.
//!
//! A [`Matrix`] maps a point as
//!
//! ```text
//! x' = x * scale_x + y * shear_x + translate_x
//! y' = y * scale_y + x * shear_y + translate_y
//! ```
//!
//! Scale and shear act first; translation is added afterwards. The camera
//! stores its world-to-screen transform this way, and the resize engine
//! expresses every drag as one.

use boardkit_core::GeometryError;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matrix {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub shear_x: f64,
    pub shear_y: f64,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        translate_x: 0.0,
        translate_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        shear_x: 0.0,
        shear_y: 0.0,
    };

    /// Creates a matrix from its six parameters.
    pub fn new(
        translate_x: f64,
        translate_y: f64,
        scale_x: f64,
        scale_y: f64,
        shear_x: f64,
        shear_y: f64,
    ) -> Self {
        Self {
            translate_x,
            translate_y,
            scale_x,
            scale_y,
            shear_x,
            shear_y,
        }
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            translate_x: dx,
            translate_y: dy,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            scale_x: sx,
            scale_y: sy,
            ..Self::IDENTITY
        }
    }

    /// Scale by `(sx, sy)` about `origin`, then translate by `offset`.
    ///
    /// This is how per-item resize deltas are turned into world transforms:
    /// the item scales about its own top-left corner and then moves.
    pub fn scale_about(origin: Point, sx: f64, sy: f64, offset: Point) -> Self {
        Self {
            translate_x: origin.x - origin.x * sx + offset.x,
            translate_y: origin.y - origin.y * sy + offset.y,
            scale_x: sx,
            scale_y: sy,
            shear_x: 0.0,
            shear_y: 0.0,
        }
    }

    /// Maps a point through scale and shear, then translation.
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale_x + point.y * self.shear_x + self.translate_x,
            point.y * self.scale_y + point.x * self.shear_y + self.translate_y,
        )
    }

    /// Returns the matrix that applies `self` first and `next` second.
    ///
    /// `a.compose(&b).apply(p) == b.apply(a.apply(p))`. Composition is not
    /// commutative.
    pub fn compose(&self, next: &Matrix) -> Matrix {
        Matrix {
            scale_x: next.scale_x * self.scale_x + next.shear_x * self.shear_y,
            shear_x: next.scale_x * self.shear_x + next.shear_x * self.scale_y,
            translate_x: next.scale_x * self.translate_x
                + next.shear_x * self.translate_y
                + next.translate_x,
            shear_y: next.shear_y * self.scale_x + next.scale_y * self.shear_y,
            scale_y: next.shear_y * self.shear_x + next.scale_y * self.scale_y,
            translate_y: next.shear_y * self.translate_x
                + next.scale_y * self.translate_y
                + next.translate_y,
        }
    }

    /// Adds a translation after the current transform.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.translate_x += dx;
        self.translate_y += dy;
    }

    /// Multiplies the scale factors in place, leaving translation untouched.
    pub fn scale_by(&mut self, sx: f64, sy: f64) {
        self.scale_x *= sx;
        self.scale_y *= sy;
    }

    pub fn determinant(&self) -> f64 {
        self.scale_x * self.scale_y - self.shear_x * self.shear_y
    }

    /// Algebraic inverse, such that `m.try_inverse()?.apply(m.apply(p)) == p`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] when a field or the determinant
    /// is NaN or infinite, and [`GeometryError::SingularMatrix`] when the
    /// determinant is zero (for example a zero scale with no shear).
    pub fn try_inverse(&self) -> Result<Matrix, GeometryError> {
        if !self.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "matrix field".to_string(),
            });
        }
        let det = self.determinant();
        if !det.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "matrix determinant".to_string(),
            });
        }
        if det == 0.0 {
            return Err(GeometryError::SingularMatrix { determinant: det });
        }

        let scale_x = self.scale_y / det;
        let shear_x = -self.shear_x / det;
        let shear_y = -self.shear_y / det;
        let scale_y = self.scale_x / det;
        Ok(Matrix {
            scale_x,
            scale_y,
            shear_x,
            shear_y,
            translate_x: -(scale_x * self.translate_x + shear_x * self.translate_y),
            translate_y: -(shear_y * self.translate_x + scale_y * self.translate_y),
        })
    }

    /// Inverse, or the identity when the matrix is singular.
    pub fn inverse_or_identity(&self) -> Matrix {
        self.try_inverse().unwrap_or_else(|e| {
            tracing::warn!("{}; using identity", e);
            Matrix::IDENTITY
        })
    }

    pub fn is_finite(&self) -> bool {
        [
            self.translate_x,
            self.translate_y,
            self.scale_x,
            self.scale_y,
            self.shear_x,
            self.shear_y,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3} {:.3} {:.3} | {:.3} {:.3} {:.3}]",
            self.scale_x, self.shear_x, self.translate_x, self.shear_y, self.scale_y, self.translate_y
        )
    }
}
