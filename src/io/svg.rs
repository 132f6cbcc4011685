//! SVG rendering of per-node Voronoi diagrams

use super::RenderError;
use crate::float_types::Real;
use crate::point::{DualPoint, Point, display_list};
use crate::tree::VisualizationSink;
use crate::voronoi::VoronoiDiagram;
use ::svg::Document;
use ::svg::node::element::{Circle, Group, Line, Rectangle};
use std::path::{Path, PathBuf};

const RIDGE_COLOR: &str = "orange";
const POINT_COLOR: &str = "blue";
const QUERY_COLOR: &str = "red";

/// Writes one SVG file per rendered node: `frame_000.svg`, `frame_001.svg`, …
///
/// Ridges are drawn in orange, rays dashed up to the frame edge, Voronoi
/// vertices as small black dots, the node's real-space points in blue and
/// the query's real-space position in red.
#[derive(Debug, Clone)]
pub struct SvgSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl SvgSink {
    /// Creates `dir` (and parents) if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, RenderError> {
        let dir = dir.into();
        if dir.as_os_str().is_empty() {
            return Err(RenderError::MalformedPath("empty output directory".into()));
        }
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Renders and saves the next frame, returning its path.
    pub fn write_frame(
        &mut self,
        diagram: &VoronoiDiagram,
        points: &[DualPoint],
        query: Option<&DualPoint>,
    ) -> Result<PathBuf, RenderError> {
        let path = self.dir.join(format!("frame_{:03}.svg", self.written.len()));
        ::svg::save(&path, &to_document(diagram, points, query))?;
        self.written.push(path.clone());
        Ok(path)
    }
}

impl VisualizationSink<VoronoiDiagram> for SvgSink {
    fn render(&mut self, diagram: Option<&VoronoiDiagram>, points: &[DualPoint], query: Option<&DualPoint>) {
        let Some(diagram) = diagram else {
            log::info!("No Voronoi diagram for subtree with points: {}", display_list(points));
            return;
        };

        log::info!("Visualizing Voronoi diagram for points: {}", display_list(points));
        match self.write_frame(diagram, points, query) {
            Ok(path) => log::info!("Wrote {}", path.display()),
            Err(error) => log::warn!("Could not write SVG frame: {error}"),
        }
    }
}

/// Builds the SVG document for one node without touching the filesystem.
///
/// SVG's y axis points down, so every y coordinate is negated.
pub fn to_document(diagram: &VoronoiDiagram, points: &[DualPoint], query: Option<&DualPoint>) -> Document {
    let (mut min, mut max) = diagram.bounds();
    for p in points.iter().map(|p| p.real).chain(query.map(|q| q.real)) {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    let span = (max.x - min.x).max(max.y - min.y).max(1.0);
    let margin = span * 0.1;
    let stroke = span * 0.005;
    let (x0, y0) = (min.x - margin, -(max.y + margin));
    let (width, height) = (max.x - min.x + 2.0 * margin, max.y - min.y + 2.0 * margin);

    let mut ridges = Group::new()
        .set("stroke", RIDGE_COLOR)
        .set("stroke-width", stroke * 2.0);
    for ridge in diagram.ridges() {
        let (a, b) = diagram.ridge_segment(ridge);
        ridges = ridges.add(segment(a, b));
    }

    // long enough to leave the frame from anywhere inside it
    let ray_length = width + height;
    let mut rays = Group::new()
        .set("stroke", RIDGE_COLOR)
        .set("stroke-width", stroke * 2.0)
        .set("stroke-dasharray", format!("{} {}", stroke * 6.0, stroke * 4.0));
    for ray in diagram.rays() {
        let origin = diagram.vertices()[ray.origin];
        let end = Point::new(
            origin.x + ray.direction.x * ray_length,
            origin.y + ray.direction.y * ray_length,
        );
        rays = rays.add(segment(origin, end));
    }

    let mut vertices = Group::new().set("fill", "black");
    for v in diagram.vertices() {
        vertices = vertices.add(dot(*v, stroke * 2.0));
    }

    let mut sites = Group::new().set("fill", POINT_COLOR);
    for p in points {
        sites = sites.add(dot(p.real, stroke * 3.0));
    }

    let mut document = Document::new()
        .set("viewBox", (x0, y0, width, height))
        .add(
            Rectangle::new()
                .set("x", x0)
                .set("y", y0)
                .set("width", width)
                .set("height", height)
                .set("fill", "white"),
        )
        .add(ridges)
        .add(rays)
        .add(vertices)
        .add(sites);

    if let Some(q) = query {
        document = document.add(dot(q.real, stroke * 5.0).set("fill", QUERY_COLOR));
    }
    document
}

fn segment(a: Point, b: Point) -> Line {
    Line::new()
        .set("x1", a.x)
        .set("y1", -a.y)
        .set("x2", b.x)
        .set("y2", -b.y)
}

fn dot(p: Point, r: Real) -> Circle {
    Circle::new().set("cx", p.x).set("cy", -p.y).set("r", r)
}
