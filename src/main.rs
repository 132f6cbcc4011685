// main.rs
//
// Builds a range tree from a fixed 15-point sample, queries it once and
// writes the Voronoi diagram of every visited node to `svg/`.

use dual_range_tree::float_types::Real;
use dual_range_tree::io::SvgSink;
use dual_range_tree::tree::{VisualizationSink, nearest_in_leaf};
use dual_range_tree::voronoi::{VoronoiDiagram, VoronoiProvider};
use dual_range_tree::{DualPoint, Point, RangeTree2D};
use std::error::Error;
use std::thread;
use std::time::Duration;

// Randomly distributed, non-collinear
const REAL_SPACE: [(f64, f64); 15] = [
    (1.0, 2.0), (3.0, 5.0), (4.0, 1.0), (6.0, 7.0), (7.0, 3.0),
    (2.0, 8.0), (8.0, 4.0), (5.0, 6.0), (9.0, 1.0), (0.0, 3.0),
    (3.0, 7.0), (6.0, 2.0), (1.0, 9.0), (4.0, 4.0), (7.0, 5.0),
];

// Vertices of a convex-ish polygon
const FEATURE_SPACE: [(f64, f64); 15] = [
    (0.0, 0.0), (2.0, 1.0), (3.0, 4.0), (1.0, 6.0), (-1.0, 5.0),
    (-3.0, 3.0), (-2.0, 0.0), (1.0, -2.0), (3.0, -1.0), (4.0, 2.0),
    (5.0, 5.0), (3.0, 7.0), (0.0, 8.0), (-3.0, 6.0), (-4.0, 3.0),
];

const PAUSE: Duration = Duration::from_secs(2);

/// Gives a human time to look at each frame before the next one is drawn.
struct Paced<S> {
    inner: S,
    pause: Duration,
}

impl<S: VisualizationSink<VoronoiDiagram>> VisualizationSink<VoronoiDiagram> for Paced<S> {
    fn render(&mut self, diagram: Option<&VoronoiDiagram>, points: &[DualPoint], query: Option<&DualPoint>) {
        let drawn = diagram.is_some();
        self.inner.render(diagram, points, query);
        if drawn {
            thread::sleep(self.pause);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let feature: Vec<(Real, Real)> = FEATURE_SPACE.iter().map(|&(x, y)| (x as Real, y as Real)).collect();
    let real: Vec<(Real, Real)> = REAL_SPACE.iter().map(|&(x, y)| (x as Real, y as Real)).collect();
    let tree = RangeTree2D::from_coordinates(&feature, &real, &VoronoiProvider)?;
    log::info!(
        "Built range tree over {} points (height {:?})",
        tree.len(),
        tree.height()
    );

    let target = DualPoint::coincident(Point::new(4.0, 6.0));
    let path = tree.query(&target);
    for (depth, node) in path.iter().enumerate() {
        log::info!("  depth {depth}: median {} ({} points)", node.median, node.len());
    }
    if let Some(nearest) = nearest_in_leaf(&path, &target) {
        log::info!("The nearest point to {target} is {nearest}");
    }

    log::info!("Visualizing Voronoi diagrams of visited subtrees...");
    let mut sink = Paced {
        inner: SvgSink::new("svg")?,
        pause: PAUSE,
    };
    tree.query_and_render(&target, &mut sink);
    log::info!("Wrote {} frames to {}", sink.inner.written().len(), sink.inner.dir().display());

    Ok(())
}
