//! Voronoi diagrams derived from a Delaunay triangulation
//!
//! Sites are triangulated with `geo`'s `spade` backend; the diagram is the
//! dual of that triangulation. Every Delaunay triangle contributes its
//! circumcentre as a Voronoi vertex, every interior Delaunay edge a finite
//! ridge between two vertices, and every convex-hull edge an unbounded ray.

use crate::float_types::{Real, tolerance};
use crate::point::Point;
use crate::tree::{DiagramProvider, MIN_DIAGRAM_POINTS};
use geo::{LineString, TriangulateSpade};
use hashbrown::HashMap;
use nalgebra::{Point2, Vector2};

/// A finite Voronoi edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ridge {
    /// Indices into [`VoronoiDiagram::sites`] of the two sites this edge separates.
    pub generators: (usize, usize),
    /// Indices into [`VoronoiDiagram::vertices`].
    pub vertices: (usize, usize),
}

/// An unbounded Voronoi edge between two neighbouring convex-hull sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub generators: (usize, usize),
    /// Index into [`VoronoiDiagram::vertices`] the ray starts from.
    pub origin: usize,
    /// Unit direction pointing away from the hull.
    pub direction: Point,
}

/// Voronoi diagram of a set of sites.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiDiagram {
    sites: Vec<Point>,
    vertices: Vec<Point>,
    ridges: Vec<Ridge>,
    rays: Vec<Ray>,
}

impl VoronoiDiagram {
    /// Sites in the order they were handed to the provider.
    pub fn sites(&self) -> &[Point] {
        &self.sites
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn ridges(&self) -> &[Ridge] {
        &self.ridges
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Bounding box `(min, max)` of all sites and vertices.
    pub fn bounds(&self) -> (Point, Point) {
        let mut min = Point::new(Real::MAX, Real::MAX);
        let mut max = Point::new(Real::MIN, Real::MIN);
        for p in self.sites.iter().chain(&self.vertices) {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Endpoints of a ridge.
    pub fn ridge_segment(&self, ridge: &Ridge) -> (Point, Point) {
        (self.vertices[ridge.vertices.0], self.vertices[ridge.vertices.1])
    }
}

/// [`DiagramProvider`] producing [`VoronoiDiagram`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoronoiProvider;

impl VoronoiProvider {
    pub const fn new() -> Self {
        Self
    }
}

impl DiagramProvider for VoronoiProvider {
    type Diagram = VoronoiDiagram;

    fn compute(&self, real: &[Point]) -> Option<VoronoiDiagram> {
        if real.len() < MIN_DIAGRAM_POINTS {
            return None;
        }

        // only the coordinates matter to an unconstrained triangulation
        let sites: LineString<Real> = real.iter().map(|p| geo::Coord { x: p.x, y: p.y }).collect();
        let triangles = match sites.unconstrained_triangulation() {
            Ok(triangles) => triangles,
            Err(error) => {
                log::warn!(
                    "Voronoi diagram could not be computed for points {}: {error:?}",
                    format_sites(real)
                );
                return None;
            },
        };

        // spade hands back the exact input coordinates, so bit patterns map
        // triangle corners to site indices. Duplicates resolve to the first.
        let site_key = |x: Real, y: Real| (x.to_bits(), y.to_bits());
        let mut site_index = HashMap::with_capacity(real.len());
        for (i, p) in real.iter().enumerate() {
            site_index.entry(site_key(p.x, p.y)).or_insert(i);
        }

        let mut vertices = Vec::with_capacity(triangles.len());
        // Delaunay edge -> (voronoi vertex, site opposite the edge) per adjacent triangle
        let mut edges: HashMap<(usize, usize), Vec<(usize, usize)>> = HashMap::new();

        for triangle in triangles {
            let corners = [triangle.0, triangle.1, triangle.2];
            let Some(ids) = corners
                .iter()
                .map(|c| site_index.get(&site_key(c.x, c.y)).copied())
                .collect::<Option<Vec<usize>>>()
            else {
                continue;
            };

            let Some(center) = circumcenter(
                real[ids[0]].to_point2(),
                real[ids[1]].to_point2(),
                real[ids[2]].to_point2(),
            ) else {
                continue;
            };

            let vertex = vertices.len();
            vertices.push(Point::from(center));
            for (i, j, k) in [(0, 1, 2), (1, 2, 0), (2, 0, 1)] {
                let key = (ids[i].min(ids[j]), ids[i].max(ids[j]));
                edges.entry(key).or_default().push((vertex, ids[k]));
            }
        }

        if vertices.is_empty() {
            log::warn!(
                "Voronoi diagram could not be computed for points {}: sites are collinear or coincident",
                format_sites(real)
            );
            return None;
        }

        let mut edges: Vec<_> = edges.into_iter().collect();
        edges.sort_unstable_by_key(|(key, _)| *key);

        let mut ridges = Vec::new();
        let mut rays = Vec::new();
        for ((a, b), faces) in edges {
            match faces.as_slice() {
                [(v1, _), (v2, _)] => ridges.push(Ridge {
                    generators: (a, b),
                    vertices: (*v1, *v2),
                }),
                [(v, opposite)] => {
                    let direction = outward_normal(
                        real[a].to_point2(),
                        real[b].to_point2(),
                        real[*opposite].to_point2(),
                    );
                    rays.push(Ray {
                        generators: (a, b),
                        origin: *v,
                        direction: Point::new(direction.x, direction.y),
                    });
                },
                _ => {},
            }
        }

        Some(VoronoiDiagram {
            sites: real.to_vec(),
            vertices,
            ridges,
            rays,
        })
    }
}

/// Circumcentre of triangle `abc`, `None` when the triangle is degenerate.
///
/// Degeneracy is judged relative to the edge lengths at `a` (the sine of the
/// angle there), so the same shape is accepted at any scale.
fn circumcenter(a: Point2<Real>, b: Point2<Real>, c: Point2<Real>) -> Option<Point2<Real>> {
    let ab = b - a;
    let ac = c - a;
    let doubled_area = ab.perp(&ac);
    if doubled_area.abs() <= tolerance() * ab.norm() * ac.norm() {
        return None;
    }

    let d = 2.0 * doubled_area;
    let ab2 = ab.norm_squared();
    let ac2 = ac.norm_squared();
    let offset = Vector2::new(ac.y * ab2 - ab.y * ac2, ab.x * ac2 - ac.x * ab2) / d;
    Some(a + offset)
}

/// Unit normal of edge `ab` pointing away from `opposite`.
fn outward_normal(a: Point2<Real>, b: Point2<Real>, opposite: Point2<Real>) -> Vector2<Real> {
    let edge = b - a;
    let normal = Vector2::new(edge.y, -edge.x).normalize();
    if normal.dot(&(opposite - a)) > 0.0 {
        -normal
    } else {
        normal
    }
}

fn format_sites(points: &[Point]) -> String {
    let items: Vec<String> = points.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
