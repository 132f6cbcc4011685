//! Range tree node data structures

use crate::point::DualPoint;

/// A primary-tree node, keyed on feature-space x.
///
/// Besides its own median, every primary node carries a full view of the
/// subset its build call received: a nested [`SecondaryNode`] tree over that
/// subset and the subset itself sorted by feature-space y.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryNode<D> {
    /// Element `n / 2` of the x-sorted subset.
    pub median: DualPoint,

    /// Points strictly before the median in x order.
    pub left: Option<Box<PrimaryNode<D>>>,

    /// Points strictly after the median in x order.
    pub right: Option<Box<PrimaryNode<D>>>,

    /// Secondary tree over this node's *whole* subset, keyed on feature y.
    pub secondary: Option<Box<SecondaryNode<D>>>,

    /// This node's whole subset, ascending by feature-space y.
    pub points_by_secondary: Vec<DualPoint>,

    /// Planar subdivision over the subset's real-space positions, if one could
    /// be computed.
    pub diagram: Option<D>,
}

/// A secondary-tree node, keyed on feature-space y. No further nesting.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryNode<D> {
    pub median: DualPoint,
    pub left: Option<Box<SecondaryNode<D>>>,
    pub right: Option<Box<SecondaryNode<D>>>,
    pub diagram: Option<D>,
}

impl<D> PrimaryNode<D> {
    /// Number of points (equivalently, primary nodes) in this subtree.
    pub fn len(&self) -> usize {
        self.points_by_secondary.len()
    }

    /// A node always holds at least its median.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of this subtree; a lone leaf has height 0.
    pub fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height() + 1);
        let right = self.right.as_ref().map_or(0, |n| n.height() + 1);
        left.max(right)
    }

    /// Every primary node of this subtree, in pre-order.
    pub fn iter(&self) -> PreOrder<'_, D> {
        PreOrder { stack: vec![self] }
    }
}

impl<D> SecondaryNode<D> {
    /// Number of secondary nodes in this subtree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(current) = stack.pop() {
            count += 1;
            stack.extend(
                [&current.left, &current.right]
                    .iter()
                    .filter_map(|child| child.as_ref().map(|boxed| boxed.as_ref())),
            );
        }
        count
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height() + 1);
        let right = self.right.as_ref().map_or(0, |n| n.height() + 1);
        left.max(right)
    }

    /// Medians of this subtree in in-order, i.e. ascending feature y.
    pub fn in_order(&self) -> Vec<DualPoint> {
        let mut out = Vec::new();
        let mut stack: Vec<&SecondaryNode<D>> = Vec::new();
        let mut current = Some(self);
        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                out.push(node.median);
                current = node.right.as_deref();
            }
        }
        out
    }
}

/// Pre-order iterator over primary nodes, see [`PrimaryNode::iter`].
pub struct PreOrder<'a, D> {
    stack: Vec<&'a PrimaryNode<D>>,
}

impl<'a, D> Iterator for PreOrder<'a, D> {
    type Item = &'a PrimaryNode<D>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // right first so the left subtree comes out first
        if let Some(right) = current.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = current.left.as_deref() {
            self.stack.push(left);
        }
        Some(current)
    }
}
