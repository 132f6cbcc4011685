//! Traits at the seams of the range tree: tree building, diagram computation
//! and visualization.

use crate::point::{DualPoint, Point};

/// Builds one (sub)tree per call from an unsorted point subset.
pub trait TreeBuilder {
    type Node;

    /// Returns `None` for an empty subset.
    fn build(&self, points: &[DualPoint]) -> Option<Box<Self::Node>>;
}

/// Computes a planar subdivision over a subset's real-space positions.
///
/// Implementations must never fail the caller: fewer than
/// [`MIN_DIAGRAM_POINTS`](super::MIN_DIAGRAM_POINTS) sites, collinear sites and
/// any other geometric trouble all come back as `None`.
pub trait DiagramProvider {
    type Diagram;

    fn compute(&self, real: &[Point]) -> Option<Self::Diagram>;
}

/// Consumes one visited node at a time for display.
pub trait VisualizationSink<D> {
    /// `diagram` is `None` for nodes without a subdivision; sinks skip those.
    fn render(&mut self, diagram: Option<&D>, points: &[DualPoint], query: Option<&DualPoint>);
}

/// Provider that never produces a diagram.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagrams;

impl DiagramProvider for NoDiagrams {
    type Diagram = ();

    fn compute(&self, _real: &[Point]) -> Option<()> {
        None
    }
}
