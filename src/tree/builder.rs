//! Median-split builders for the primary (feature x) and secondary
//! (feature y) trees

use crate::point::{DualPoint, Point};
use crate::tree::node::{PrimaryNode, SecondaryNode};
use crate::tree::traits::{DiagramProvider, TreeBuilder};
use crate::tree::{Axis, MIN_DIAGRAM_POINTS, median_split};

/// Asks `provider` for a diagram over `subset`, skipping subsets too small to
/// carry one.
fn diagram_for<P: DiagramProvider>(provider: &P, subset: &[DualPoint]) -> Option<P::Diagram> {
    if subset.len() < MIN_DIAGRAM_POINTS {
        return None;
    }
    let real: Vec<Point> = subset.iter().map(|p| p.real).collect();
    provider.compute(&real)
}

/// Builds the primary tree, nesting a secondary tree in every node.
pub struct PrimaryTreeBuilder<'p, P: DiagramProvider> {
    provider: &'p P,
}

impl<'p, P: DiagramProvider> PrimaryTreeBuilder<'p, P> {
    pub const fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// `sorted` must already be ascending by feature x.
    fn build_sorted(&self, sorted: &[DualPoint]) -> Option<Box<PrimaryNode<P::Diagram>>> {
        let (median, below, above) = median_split(sorted)?;

        let left = self.build_sorted(below);
        let right = self.build_sorted(above);

        // A stable y-sort of the x-sorted subset is both the node's point list
        // and the (already sorted) input of its secondary tree.
        let points_by_secondary = Axis::Y.sorted(sorted);
        let secondary =
            SecondaryTreeBuilder::new(self.provider).build_sorted(&points_by_secondary);
        let diagram = diagram_for(self.provider, &points_by_secondary);

        Some(Box::new(PrimaryNode {
            median,
            left,
            right,
            secondary,
            points_by_secondary,
            diagram,
        }))
    }
}

impl<P: DiagramProvider> TreeBuilder for PrimaryTreeBuilder<'_, P> {
    type Node = PrimaryNode<P::Diagram>;

    fn build(&self, points: &[DualPoint]) -> Option<Box<Self::Node>> {
        if points.is_empty() {
            return None;
        }
        let sorted = Axis::X.sorted(points);
        let root = self.build_sorted(&sorted);
        if let Some(root) = root.as_deref() {
            log::debug!(
                "Built primary tree: {} points, height {}, root median {}",
                root.len(),
                root.height(),
                root.median
            );
        }
        root
    }
}

/// Builds a secondary tree. Only ever used for the subset of one primary node.
pub struct SecondaryTreeBuilder<'p, P: DiagramProvider> {
    provider: &'p P,
}

impl<'p, P: DiagramProvider> SecondaryTreeBuilder<'p, P> {
    pub const fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// `sorted` must already be ascending by feature y.
    fn build_sorted(&self, sorted: &[DualPoint]) -> Option<Box<SecondaryNode<P::Diagram>>> {
        let (median, below, above) = median_split(sorted)?;
        Some(Box::new(SecondaryNode {
            median,
            left: self.build_sorted(below),
            right: self.build_sorted(above),
            diagram: diagram_for(self.provider, sorted),
        }))
    }
}

impl<P: DiagramProvider> TreeBuilder for SecondaryTreeBuilder<'_, P> {
    type Node = SecondaryNode<P::Diagram>;

    fn build(&self, points: &[DualPoint]) -> Option<Box<Self::Node>> {
        if points.is_empty() {
            return None;
        }
        self.build_sorted(&Axis::Y.sorted(points))
    }
}
