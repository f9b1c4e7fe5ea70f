//! Minimum bounding rectangle.

use boardkit_core::finite_or_zero;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Matrix, Point};

/// Axis-aligned box described by its four edges.
///
/// `left <= right` and `top <= bottom` always hold: every constructor and
/// mutator normalizes its input, and non-finite edges are coerced to `0.0`.
/// The type is a cheap value, copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mbr {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Mbr {
    /// Creates a box from its edges, swapping them when given inverted.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let (left, right) = ordered(finite_or_zero(left), finite_or_zero(right));
        let (top, bottom) = ordered(finite_or_zero(top), finite_or_zero(bottom));
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a box from its top-left corner and size.
    pub fn from_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    /// Smallest box containing both points.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_point_cloud(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut mbr = Self::from_points(first, first);
        for p in points {
            mbr = mbr.combine([Self::from_points(p, p)].iter());
        }
        Some(mbr)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Corners in the order left-top, right-top, right-bottom, left-bottom.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }

    /// Moves every edge to the given values, normalizing as `new` does.
    pub fn set(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        *self = Self::new(left, top, right, bottom);
    }

    /// Applies `matrix` to all four corners in place and re-derives the edges
    /// from their min/max, so the box never ends up inverted.
    pub fn transform(&mut self, matrix: &Matrix) {
        *self = self.transformed(matrix);
    }

    /// Copying variant of [`Mbr::transform`].
    pub fn transformed(&self, matrix: &Matrix) -> Mbr {
        let corners = self.corners().map(|c| matrix.apply(c));
        Self::from_point_cloud(corners).unwrap_or(*self)
    }

    /// Scales the box's edges by the matrix's scale factors alone.
    ///
    /// Translation and shear are ignored, which is what distinguishes this
    /// from [`Mbr::transform`]: `Mbr(-10, -10, 100, 100)` scaled by
    /// `(2, 3)` becomes `Mbr(-20, -30, 200, 300)`.
    pub fn scale_from_center(&self, matrix: &Matrix) -> Mbr {
        Mbr::new(
            self.left * matrix.scale_x,
            self.top * matrix.scale_y,
            self.right * matrix.scale_x,
            self.bottom * matrix.scale_y,
        )
    }

    /// Union of this box with every box in `others`.
    pub fn combine<'a>(&self, others: impl IntoIterator<Item = &'a Mbr>) -> Mbr {
        others.into_iter().fold(*self, |acc, other| Mbr {
            left: acc.left.min(other.left),
            top: acc.top.min(other.top),
            right: acc.right.max(other.right),
            bottom: acc.bottom.max(other.bottom),
        })
    }

    /// Union of a sequence of boxes, or `None` when it is empty.
    pub fn union_all<'a>(boxes: impl IntoIterator<Item = &'a Mbr>) -> Option<Mbr> {
        let mut boxes = boxes.into_iter();
        let first = *boxes.next()?;
        Some(first.combine(boxes))
    }

    /// Grows the box by `dx` on the left and right and `dy` on the top and
    /// bottom.
    pub fn expanded_by(&self, dx: f64, dy: f64) -> Mbr {
        Mbr::new(
            self.left - dx,
            self.top - dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Closest point lying on the rectangle's boundary.
    ///
    /// Points outside are clamped onto the box. Points inside are projected
    /// onto the nearest edge, preferring top, right, bottom, left on ties.
    pub fn nearest_edge_point_to(&self, point: Point) -> Point {
        let x = point.x.clamp(self.left, self.right);
        let y = point.y.clamp(self.top, self.bottom);
        let inside = x > self.left && x < self.right && y > self.top && y < self.bottom;
        if !inside {
            return Point::new(x, y);
        }

        let candidates = [
            (y - self.top, Point::new(x, self.top)),
            (self.right - x, Point::new(self.right, y)),
            (self.bottom - y, Point::new(x, self.bottom)),
            (x - self.left, Point::new(self.left, y)),
        ];
        candidates
            .iter()
            .fold(candidates[0], |best, c| if c.0 < best.0 { *c } else { best })
            .1
    }

    /// True when `point` is inside the box or on its boundary.
    pub fn is_under_point(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// True when the two boxes overlap on both axes (touching counts).
    pub fn is_enclosed_or_crossed_by(&self, rect: &Mbr) -> bool {
        self.left <= rect.right
            && self.right >= rect.left
            && self.top <= rect.bottom
            && self.bottom >= rect.top
    }

    /// True when this box lies entirely within `rect`.
    pub fn is_enclosed_by(&self, rect: &Mbr) -> bool {
        self.left >= rect.left
            && self.right <= rect.right
            && self.top >= rect.top
            && self.bottom <= rect.bottom
    }

    /// True when the box has no area.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= f64::EPSILON || self.height() <= f64::EPSILON
    }
}

impl Default for Mbr {
    fn default() -> Self {
        Mbr::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl fmt::Display for Mbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mbr({:.2}, {:.2}, {:.2}, {:.2})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

// Deserialization goes through `new` so persisted or scripted boxes are
// normalized like every other box.
impl<'de> Deserialize<'de> for Mbr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Edges {
            left: f64,
            top: f64,
            right: f64,
            bottom: f64,
        }

        let e = Edges::deserialize(deserializer)?;
        Ok(Mbr::new(e.left, e.top, e.right, e.bottom))
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
