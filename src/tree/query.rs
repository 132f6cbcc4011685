//! Single-path descent through the primary tree

use crate::point::DualPoint;
use crate::tree::node::PrimaryNode;

/// Walks from `root` towards `target`, returning every node visited in
/// root-to-leaf order.
///
/// At each node the walk goes left when `target.feature.x` is less than or
/// equal to the node's median x and right otherwise. Only x is compared and
/// secondary trees are never consulted, so the result is one path of at most
/// `height + 1` nodes. An absent root gives an empty path.
///
/// `target.feature.x` must be finite. Debug builds panic on NaN or infinity;
/// release builds walk right at every node for NaN.
pub fn query<'a, D>(root: Option<&'a PrimaryNode<D>>, target: &DualPoint) -> Vec<&'a PrimaryNode<D>> {
    debug_assert!(
        target.feature.x.is_finite(),
        "query target {target} has a non-finite feature x"
    );
    let mut visited = Vec::new();
    let mut current = root;

    while let Some(node) = current {
        visited.push(node);
        current = if target.feature.x <= node.median.feature.x {
            node.left.as_deref()
        } else {
            node.right.as_deref()
        };
    }

    log::debug!("Query for {} visited {} nodes", target, visited.len());
    visited
}

/// Nearest point to `target`, by feature-space distance, among the points of
/// the deepest node on `path`.
pub fn nearest_in_leaf<D>(path: &[&PrimaryNode<D>], target: &DualPoint) -> Option<DualPoint> {
    let leaf = path.last()?;
    leaf.points_by_secondary
        .iter()
        .map(|p| (p, p.feature.distance(&target.feature)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(p, _)| *p)
}
