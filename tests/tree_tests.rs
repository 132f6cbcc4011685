mod support;

use dual_range_tree::{
    BuildError, DualPoint, Point, RangeTree2D,
    tree::{Axis, NoDiagrams, PrimaryNode},
};

use crate::support::{
    FEATURE_SPACE, REAL_SPACE, primary_nodes, sample_points, scattered_points, secondary_nodes,
};

/// Subset sizes checked by the property-style tests below.
const SIZES: [usize; 9] = [1, 2, 3, 4, 5, 8, 15, 16, 100];

fn subtree_len<D>(node: &Option<Box<PrimaryNode<D>>>) -> usize {
    node.as_ref().map_or(0, |n| n.len())
}

#[test]
fn node_count_equals_input_size() {
    for (seed, &n) in SIZES.iter().enumerate() {
        let points = scattered_points(n, seed as u64, 10);
        let tree = RangeTree2D::new(&points, &NoDiagrams).unwrap();
        assert_eq!(primary_nodes(tree.root()).len(), n);
        assert_eq!(tree.len(), n);
    }
}

#[test]
fn every_point_lands_in_exactly_one_node() {
    let points = scattered_points(40, 7, 1000);
    let tree = RangeTree2D::new(&points, &NoDiagrams).unwrap();
    let mut medians: Vec<DualPoint> = primary_nodes(tree.root()).iter().map(|n| n.median).collect();
    let mut expected = points.clone();
    let key = |p: &DualPoint| (p.feature.x, p.feature.y, p.real.x, p.real.y);
    medians.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap());
    expected.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap());
    assert_eq!(medians, expected);
}

#[test]
fn each_node_covers_its_whole_subset() {
    for (seed, &n) in SIZES.iter().enumerate() {
        let points = scattered_points(n, 100 + seed as u64, 5);
        let tree = RangeTree2D::new(&points, &NoDiagrams).unwrap();
        for node in primary_nodes(tree.root()) {
            let subset = 1 + subtree_len(&node.left) + subtree_len(&node.right);
            assert_eq!(node.points_by_secondary.len(), subset);
            let secondary = node.secondary.as_ref().expect("non-empty subset has a secondary tree");
            assert_eq!(secondary.len(), subset);
            assert_eq!(secondary.in_order(), node.points_by_secondary);
        }
    }
}

#[test]
fn points_by_secondary_is_sorted_on_y() {
    for (seed, &n) in SIZES.iter().enumerate() {
        let points = scattered_points(n, 200 + seed as u64, 7);
        let tree = RangeTree2D::new(&points, &NoDiagrams).unwrap();
        for node in primary_nodes(tree.root()) {
            assert!(
                node.points_by_secondary
                    .windows(2)
                    .all(|w| w[0].feature.y <= w[1].feature.y)
            );
        }
    }
}

#[test]
fn split_respects_median_on_both_axes() {
    let points = scattered_points(63, 3, 1000);
    let tree = RangeTree2D::new(&points, &NoDiagrams).unwrap();
    for node in primary_nodes(tree.root()) {
        let x = node.median.feature.x;
        if let Some(left) = node.left.as_deref() {
            assert!(left.points_by_secondary.iter().all(|p| p.feature.x <= x));
        }
        if let Some(right) = node.right.as_deref() {
            assert!(right.points_by_secondary.iter().all(|p| p.feature.x >= x));
        }
        // left gets exactly n / 2 points
        assert_eq!(subtree_len(&node.left), node.len() / 2);

        for s in secondary_nodes(node.secondary.as_deref().unwrap()) {
            let y = s.median.feature.y;
            if let Some(left) = s.left.as_deref() {
                assert!(left.in_order().iter().all(|p| p.feature.y <= y));
            }
            if let Some(right) = s.right.as_deref() {
                assert!(right.in_order().iter().all(|p| p.feature.y >= y));
            }
        }
    }
}

#[test]
fn building_twice_gives_identical_trees() {
    let points = scattered_points(50, 11, 4);
    let first = RangeTree2D::new(&points, &NoDiagrams).unwrap();
    let second = RangeTree2D::new(&points, &NoDiagrams).unwrap();
    assert_eq!(first, second);

    let sample = sample_points();
    let a = RangeTree2D::new(&sample, &NoDiagrams).unwrap();
    let b = RangeTree2D::new(&sample, &NoDiagrams).unwrap();
    assert_eq!(a.root().unwrap().median, b.root().unwrap().median);
}

#[test]
fn sample_root_is_eighth_point_in_x_order() {
    let sample = sample_points();
    let tree = RangeTree2D::from_coordinates(&FEATURE_SPACE, &REAL_SPACE, &NoDiagrams).unwrap();
    let root = tree.root().unwrap();

    let by_x = Axis::X.sorted(&sample);
    assert_eq!(root.median, by_x[7]);
    assert_eq!(root.median.feature, Point::new(1.0, 6.0));
    assert_eq!(root.median.real, Point::new(6.0, 7.0));
    assert_eq!(root.len(), 15);
    assert_eq!(tree.height(), Some(3));
}

#[test]
fn mismatched_lengths_build_nothing() {
    let err = RangeTree2D::from_coordinates(&FEATURE_SPACE[..14], &REAL_SPACE, &NoDiagrams).unwrap_err();
    assert_eq!(err, BuildError::MismatchedInputLengths { feature: 14, real: 15 });
}

#[test]
fn no_diagrams_without_a_provider() {
    let tree = RangeTree2D::new(&sample_points(), &NoDiagrams).unwrap();
    assert!(primary_nodes(tree.root()).iter().all(|n| n.diagram.is_none()));
}
