//! Test support library
//! Sample data, a recording sink and tree walkers shared by the integration tests.
#![allow(dead_code)]

use dual_range_tree::{
    DualPoint, Point,
    float_types::Real,
    tree::{PrimaryNode, SecondaryNode, VisualizationSink},
};

pub const REAL_SPACE: [(Real, Real); 15] = [
    (1.0, 2.0), (3.0, 5.0), (4.0, 1.0), (6.0, 7.0), (7.0, 3.0),
    (2.0, 8.0), (8.0, 4.0), (5.0, 6.0), (9.0, 1.0), (0.0, 3.0),
    (3.0, 7.0), (6.0, 2.0), (1.0, 9.0), (4.0, 4.0), (7.0, 5.0),
];

pub const FEATURE_SPACE: [(Real, Real); 15] = [
    (0.0, 0.0), (2.0, 1.0), (3.0, 4.0), (1.0, 6.0), (-1.0, 5.0),
    (-3.0, 3.0), (-2.0, 0.0), (1.0, -2.0), (3.0, -1.0), (4.0, 2.0),
    (5.0, 5.0), (3.0, 7.0), (0.0, 8.0), (-3.0, 6.0), (-4.0, 3.0),
];

/// The sample zipped into dual points, in input order.
pub fn sample_points() -> Vec<DualPoint> {
    FEATURE_SPACE
        .iter()
        .zip(REAL_SPACE.iter())
        .map(|(&f, &r)| DualPoint::new(Point::from(f), Point::from(r)))
        .collect()
}

pub fn sample_target() -> DualPoint {
    DualPoint::coincident(Point::new(4.0, 6.0))
}

/// Deterministic pseudo-random points (64-bit LCG) with integer coordinates
/// in `[0, range)`, so ties on both axes are common.
pub fn scattered_points(n: usize, seed: u64, range: u64) -> Vec<DualPoint> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % range) as Real
    };
    (0..n)
        .map(|_| {
            let feature = Point::new(next(), next());
            let real = Point::new(next(), next());
            DualPoint::new(feature, real)
        })
        .collect()
}

/// Every primary node of the tree, pre-order.
pub fn primary_nodes<D>(root: Option<&PrimaryNode<D>>) -> Vec<&PrimaryNode<D>> {
    root.map(|r| r.iter().collect()).unwrap_or_default()
}

/// Every secondary node of the tree, pre-order.
pub fn secondary_nodes<D>(root: &SecondaryNode<D>) -> Vec<&SecondaryNode<D>> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
    out
}

/// One `render` call as seen by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub had_diagram: bool,
    pub points: Vec<DualPoint>,
    pub query: Option<DualPoint>,
}

/// Sink that remembers every call it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Frame>,
}

impl<D> VisualizationSink<D> for RecordingSink {
    fn render(&mut self, diagram: Option<&D>, points: &[DualPoint], query: Option<&DualPoint>) {
        self.frames.push(Frame {
            had_diagram: diagram.is_some(),
            points: points.to_vec(),
            query: query.copied(),
        });
    }
}

/// Returns `true` if two reals are within `eps`.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
