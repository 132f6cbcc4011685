//! Plain 2D coordinates and the feature/real point pairs stored in the tree.

use crate::float_types::Real;
use nalgebra::Point2;
use std::fmt;

/// A two-dimensional coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// `true` when neither coordinate is NaN or infinite.
    #[inline]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> Real {
        nalgebra::distance(&self.to_point2(), &other.to_point2())
    }

    #[inline]
    pub fn to_point2(self) -> Point2<Real> {
        Point2::new(self.x, self.y)
    }
}

impl From<(Real, Real)> for Point {
    fn from((x, y): (Real, Real)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2<Real>> for Point {
    fn from(p: Point2<Real>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for Point2<Real> {
    fn from(p: Point) -> Self {
        p.to_point2()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

/// One logical entity seen in two coordinate spaces.
///
/// The tree sorts, splits and navigates on [`DualPoint::feature`]; the
/// [`DualPoint::real`] position only rides along for diagram computation and
/// rendering. The two are never separated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DualPoint {
    pub feature: Point,
    pub real: Point,
}

impl DualPoint {
    pub const fn new(feature: Point, real: Point) -> Self {
        Self { feature, real }
    }

    /// A query target that sits at the same position in both spaces.
    pub const fn coincident(p: Point) -> Self {
        Self { feature: p, real: p }
    }

    pub const fn is_finite(&self) -> bool {
        self.feature.is_finite() && self.real.is_finite()
    }
}

impl fmt::Display for DualPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DualPoint({}, {})", self.feature, self.real)
    }
}

/// Formats a point list the way log messages print it: `[a, b, c]`.
pub(crate) fn display_list(points: &[DualPoint]) -> String {
    let items: Vec<String> = points.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
