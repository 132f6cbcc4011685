//! Two-level median-split range tree
//!
//! The primary tree splits on feature-space x. Every primary node also owns a
//! secondary tree over the same subset, split on feature-space y, together with
//! the subset sorted by y. Queries walk a single root-to-leaf path of the
//! primary tree (see [`query`]).

pub mod builder;
pub mod node;
pub mod query;
pub mod traits;

pub use builder::{PrimaryTreeBuilder, SecondaryTreeBuilder};
pub use node::{PreOrder, PrimaryNode, SecondaryNode};
pub use query::{nearest_in_leaf, query};
pub use traits::{DiagramProvider, NoDiagrams, TreeBuilder, VisualizationSink};

use crate::float_types::Real;
use crate::point::DualPoint;
use std::cmp::Ordering;

/// Subsets smaller than this never carry a diagram.
pub const MIN_DIAGRAM_POINTS: usize = 4;

/// Feature-space coordinate a tree level sorts and splits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Primary tree key.
    X,
    /// Secondary tree key.
    Y,
}

impl Axis {
    #[inline]
    pub const fn key(self, p: &DualPoint) -> Real {
        match self {
            Axis::X => p.feature.x,
            Axis::Y => p.feature.y,
        }
    }

    /// Compares two points on this axis. Coordinates are validated finite
    /// before a tree is built, so the fallback never decides an ordering.
    #[inline]
    pub fn compare(self, a: &DualPoint, b: &DualPoint) -> Ordering {
        self.key(a)
            .partial_cmp(&self.key(b))
            .unwrap_or(Ordering::Equal)
    }

    /// A fresh copy of `points`, stably sorted ascending on this axis.
    pub fn sorted(self, points: &[DualPoint]) -> Vec<DualPoint> {
        let mut out = points.to_vec();
        out.sort_by(|a, b| self.compare(a, b));
        out
    }
}

/// Splits a sorted subset into its median (element `n / 2`) and the disjoint
/// halves `[0, mid)` and `(mid, n)`. `None` for an empty subset.
pub fn median_split(sorted: &[DualPoint]) -> Option<(DualPoint, &[DualPoint], &[DualPoint])> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    Some((sorted[mid], &sorted[..mid], &sorted[mid + 1..]))
}
