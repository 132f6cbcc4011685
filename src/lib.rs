//! A two-level **range tree** over dual-coordinate points.
//!
//! Every indexed entity has a *feature* position, used to sort, split and
//! navigate the tree, and a *real* position that only the diagram and
//! visualization collaborators look at. The primary tree splits on feature x
//! at the median; each primary node nests a secondary tree over its whole
//! subset, split on feature y, plus the subset sorted by y and an optional
//! planar subdivision (by default a Voronoi diagram) over the subset's real
//! positions.
//!
//! Queries descend a single root-to-leaf path by comparing feature x against
//! each node's median, see [`tree::query`].
//!
//! ```
//! use dual_range_tree::{DualPoint, Point, RangeTree2D, voronoi::VoronoiProvider};
//!
//! let feature = [(0.0, 0.0), (2.0, 1.0), (3.0, 4.0), (1.0, 6.0), (-1.0, 5.0)];
//! let real = [(1.0, 2.0), (3.0, 5.0), (4.0, 1.0), (6.0, 7.0), (7.0, 3.0)];
//! let tree = RangeTree2D::from_coordinates(&feature, &real, &VoronoiProvider).unwrap();
//!
//! let path = tree.query(&DualPoint::coincident(Point::new(4.0, 6.0)));
//! assert_eq!(path[0].median.feature, Point::new(1.0, 6.0));
//! assert!(path[0].diagram.is_some());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **voronoi**: Voronoi diagrams via `geo`'s `spade` triangulation
//! - **svg-io**: write visited nodes' diagrams as SVG files
//! - **bin**: the demo executable and its `env_logger` setup
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod point;
pub mod range_tree;
pub mod tree;

#[cfg(feature = "voronoi")]
pub mod voronoi;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::BuildError;
pub use point::{DualPoint, Point};
pub use range_tree::RangeTree2D;
