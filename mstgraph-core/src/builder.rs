//! Builder utilities for configuring [`GraphSession`] instances.
//!
//! Validates canvas bounds and the pick radius before a session is created
//! so that every live session holds a usable configuration.

use std::ops::Range;

use tracing::warn;

use crate::{Direction, GraphError, Result, session::GraphSession};

/// Default canvas width, in canvas units.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
/// Default canvas height, in canvas units.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;
/// Default number of randomly placed vertices in a new session.
pub const DEFAULT_INITIAL_VERTICES: usize = 10;
/// Default hit-test radius used by [`GraphSession::vertex_at`].
pub const DEFAULT_PICK_RADIUS: f64 = 10.0;
/// Largest vertex count accepted for random placement.
///
/// The complete graph holds `V * (V - 1) / 2` edges, so this keeps a single
/// regeneration around two million edges.
pub const MAX_RANDOM_VERTICES: usize = 2_048;

/// Drawing area used for random vertex placement.
///
/// Random vertices land in the central three quarters of each axis:
/// `[w/8, 7w/8)` horizontally and `[h/8, 7h/8)` vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
}

impl Canvas {
    /// Creates a canvas of the given size.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidConfiguration`] unless both dimensions are
    /// finite and strictly positive with a non-empty placement band.
    ///
    /// # Examples
    /// ```
    /// use mstgraph_core::Canvas;
    ///
    /// let canvas = Canvas::new(800.0, 600.0)?;
    /// assert_eq!(canvas.x_range(), 100.0..700.0);
    /// assert!(Canvas::new(0.0, 600.0).is_err());
    /// # Ok::<(), mstgraph_core::GraphError>(())
    /// ```
    pub fn new(width: f64, height: f64) -> Result<Self> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        ensure_band("width", width)?;
        ensure_band("height", height)?;
        Ok(Self { width, height })
    }

    /// Returns the canvas width.
    #[must_use]
    #[rustfmt::skip]
    pub const fn width(&self) -> f64 { self.width }

    /// Returns the canvas height.
    #[must_use]
    #[rustfmt::skip]
    pub const fn height(&self) -> f64 { self.height }

    /// Horizontal range used for random placement.
    #[must_use]
    pub fn x_range(&self) -> Range<f64> {
        central_band(self.width)
    }

    /// Vertical range used for random placement.
    #[must_use]
    pub fn y_range(&self) -> Range<f64> {
        central_band(self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

// `extent - extent / 8` stays finite for every finite extent.
fn central_band(extent: f64) -> Range<f64> {
    (extent / 8.0)..(extent - extent / 8.0)
}

fn ensure_band(parameter: &'static str, extent: f64) -> Result<()> {
    let band = central_band(extent);
    if band.start.is_finite() && band.end.is_finite() && band.start < band.end {
        return Ok(());
    }
    warn!(parameter, extent, "rejecting canvas without a usable placement band");
    Err(GraphError::InvalidConfiguration {
        parameter,
        reason: "leaves no room for random placement",
    })
}

pub(crate) fn ensure_vertex_count(parameter: &'static str, count: usize) -> Result<()> {
    if count <= MAX_RANDOM_VERTICES {
        return Ok(());
    }
    warn!(parameter, count, "rejecting oversized vertex count");
    Err(GraphError::InvalidConfiguration {
        parameter,
        reason: "must not exceed 2048 vertices",
    })
}

pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    warn!(parameter, value, "rejecting non-positive or non-finite value");
    Err(GraphError::InvalidConfiguration {
        parameter,
        reason: "must be finite and greater than zero",
    })
}

/// Validated configuration held by a running [`GraphSession`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    pub(crate) canvas: Canvas,
    pub(crate) pick_radius: f64,
    pub(crate) initial_vertices: usize,
    pub(crate) initial_direction: Direction,
    pub(crate) seed: Option<u64>,
}

impl SessionConfig {
    /// Returns the canvas used for random placement.
    #[must_use]
    #[rustfmt::skip]
    pub const fn canvas(&self) -> Canvas { self.canvas }

    /// Returns the hit-test radius.
    #[must_use]
    #[rustfmt::skip]
    pub const fn pick_radius(&self) -> f64 { self.pick_radius }

    /// Returns the number of vertices placed when the session started.
    #[must_use]
    #[rustfmt::skip]
    pub const fn initial_vertices(&self) -> usize { self.initial_vertices }

    /// Returns the direction the session started with.
    #[must_use]
    #[rustfmt::skip]
    pub const fn initial_direction(&self) -> Direction { self.initial_direction }

    /// Returns the random seed, if the session is reproducible.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> Option<u64> { self.seed }
}

/// Configures and constructs [`GraphSession`] instances.
///
/// # Examples
/// ```
/// use mstgraph_core::{Direction, SessionBuilder};
///
/// let session = SessionBuilder::new()
///     .with_initial_vertices(4)
///     .with_seed(7)
///     .with_direction(Direction::Maximize)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(session.vertices().len(), 4);
/// assert_eq!(session.spanning_tree().len(), 3);
/// assert_eq!(session.direction(), Direction::Maximize);
/// ```
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    width: f64,
    height: f64,
    pick_radius: f64,
    initial_vertices: usize,
    direction: Direction,
    seed: Option<u64>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            pick_radius: DEFAULT_PICK_RADIUS,
            initial_vertices: DEFAULT_INITIAL_VERTICES,
            direction: Direction::Minimize,
            seed: None,
        }
    }
}

impl SessionBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use mstgraph_core::{Direction, SessionBuilder};
    ///
    /// let builder = SessionBuilder::new();
    /// assert_eq!(builder.initial_vertices(), 10);
    /// assert_eq!(builder.direction(), Direction::Minimize);
    /// assert_eq!(builder.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the canvas size used for random placement.
    #[must_use]
    pub const fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Overrides the number of random vertices placed at start-up.
    #[must_use]
    pub const fn with_initial_vertices(mut self, count: usize) -> Self {
        self.initial_vertices = count;
        self
    }

    /// Returns the configured initial vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn initial_vertices(&self) -> usize { self.initial_vertices }

    /// Seeds the session's random source for reproducible placement.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> Option<u64> { self.seed }

    /// Sets the initial spanning-tree direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Returns the configured direction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn direction(&self) -> Direction { self.direction }

    /// Overrides the hit-test radius.
    #[must_use]
    pub const fn with_pick_radius(mut self, radius: f64) -> Self {
        self.pick_radius = radius;
        self
    }

    /// Validates the configuration and constructs a [`GraphSession`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidConfiguration`] when the canvas
    /// dimensions or the pick radius are not finite and positive, or when the
    /// initial vertex count exceeds [`MAX_RANDOM_VERTICES`].
    ///
    /// # Examples
    /// ```
    /// use mstgraph_core::{GraphErrorCode, SessionBuilder};
    ///
    /// let err = SessionBuilder::new()
    ///     .with_pick_radius(-1.0)
    ///     .build()
    ///     .expect_err("negative radius must be rejected");
    /// assert_eq!(err.code(), GraphErrorCode::InvalidConfiguration);
    /// ```
    pub fn build(self) -> Result<GraphSession> {
        let canvas = Canvas::new(self.width, self.height)?;
        ensure_positive("pick_radius", self.pick_radius)?;
        ensure_vertex_count("initial_vertices", self.initial_vertices)?;
        GraphSession::new(SessionConfig {
            canvas,
            pick_radius: self.pick_radius,
            initial_vertices: self.initial_vertices,
            initial_direction: self.direction,
            seed: self.seed,
        })
    }
}
