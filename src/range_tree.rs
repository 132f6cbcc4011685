//! The owning tree handle: validated construction, queries and rendering.

use crate::errors::BuildError;
use crate::float_types::Real;
use crate::point::{DualPoint, Point};
use crate::tree::{
    DiagramProvider, PrimaryNode, PrimaryTreeBuilder, TreeBuilder, VisualizationSink, query,
};

/// A two-level range tree over dual-coordinate points.
///
/// Built once and read-only afterwards; dropping it frees the whole nested
/// structure.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTree2D<D> {
    root: Option<Box<PrimaryNode<D>>>,
}

impl<D> RangeTree2D<D> {
    /// Builds a tree, rejecting any point with a non-finite coordinate.
    pub fn new<P>(points: &[DualPoint], provider: &P) -> Result<Self, BuildError>
    where
        P: DiagramProvider<Diagram = D>,
    {
        for (index, p) in points.iter().enumerate() {
            if !p.feature.is_finite() {
                return Err(BuildError::InvalidCoordinate { index, point: p.feature });
            }
            if !p.real.is_finite() {
                return Err(BuildError::InvalidCoordinate { index, point: p.real });
            }
        }

        Ok(Self {
            root: PrimaryTreeBuilder::new(provider).build(points),
        })
    }

    /// Zips parallel feature-space and real-space coordinate lists into
    /// [`DualPoint`]s and builds a tree from them.
    ///
    /// ```
    /// # use dual_range_tree::{RangeTree2D, errors::BuildError, tree::NoDiagrams};
    /// let feature = [(0.0, 0.0), (2.0, 1.0)];
    /// let real = [(1.0, 2.0)];
    /// let err = RangeTree2D::from_coordinates(&feature, &real, &NoDiagrams).unwrap_err();
    /// assert_eq!(err, BuildError::MismatchedInputLengths { feature: 2, real: 1 });
    /// ```
    pub fn from_coordinates<P>(
        feature: &[(Real, Real)],
        real: &[(Real, Real)],
        provider: &P,
    ) -> Result<Self, BuildError>
    where
        P: DiagramProvider<Diagram = D>,
    {
        if feature.len() != real.len() {
            return Err(BuildError::MismatchedInputLengths {
                feature: feature.len(),
                real: real.len(),
            });
        }

        let points: Vec<DualPoint> = feature
            .iter()
            .zip(real)
            .map(|(&f, &r)| DualPoint::new(Point::from(f), Point::from(r)))
            .collect();
        Self::new(&points, provider)
    }

    pub fn root(&self) -> Option<&PrimaryNode<D>> {
        self.root.as_deref()
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.len())
    }

    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the primary tree, `None` when empty.
    pub fn height(&self) -> Option<usize> {
        self.root.as_ref().map(|r| r.height())
    }

    /// Nodes visited on the way down to `target`, root first. The target's
    /// feature x must be finite, see [`tree::query`](crate::tree::query).
    pub fn query(&self, target: &DualPoint) -> Vec<&PrimaryNode<D>> {
        query(self.root(), target)
    }

    /// Runs [`query`](Self::query) and hands every visited node's diagram and
    /// y-sorted points to `sink`. Returns the number of visited nodes.
    pub fn query_and_render<S>(&self, target: &DualPoint, sink: &mut S) -> usize
    where
        S: VisualizationSink<D> + ?Sized,
    {
        let visited = self.query(target);
        for node in &visited {
            sink.render(node.diagram.as_ref(), &node.points_by_secondary, Some(target));
        }
        visited.len()
    }
}
