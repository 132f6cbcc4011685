//! Visualization sinks

#[cfg(feature = "svg-io")]
pub mod svg;

#[cfg(feature = "svg-io")]
pub use self::svg::SvgSink;

use crate::point::{DualPoint, display_list};
use crate::tree::VisualizationSink;

/// Errors raised while writing rendered frames.
///
/// Sinks log these and carry on; they only reach callers that write frames
/// directly.
#[derive(Debug)]
pub enum RenderError {
    StdIo(std::io::Error),
    MalformedPath(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use RenderError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            MalformedPath(msg) => write!(f, "The path is malformed: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

/// Sink that only logs what it would have drawn.
#[derive(Debug, Clone, Default)]
pub struct LogSink {
    rendered: usize,
    skipped: usize,
}

impl LogSink {
    pub const fn new() -> Self {
        Self { rendered: 0, skipped: 0 }
    }

    /// Nodes that had a diagram.
    pub const fn rendered(&self) -> usize {
        self.rendered
    }

    /// Nodes passed over for lack of a diagram.
    pub const fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<D> VisualizationSink<D> for LogSink {
    fn render(&mut self, diagram: Option<&D>, points: &[DualPoint], query: Option<&DualPoint>) {
        if diagram.is_none() {
            self.skipped += 1;
            log::info!("No diagram for subtree with points: {}", display_list(points));
            return;
        }
        self.rendered += 1;
        match query {
            Some(q) => log::info!(
                "Visualizing diagram for points: {} (query {q})",
                display_list(points)
            ),
            None => log::info!("Visualizing diagram for points: {}", display_list(points)),
        }
    }
}
