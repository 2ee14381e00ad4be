//! Constant-speed Bézier track segments on an integer tile grid.
//!
//! A track is laid out tile by tile. Each [`TrackSegment`] occupies one unit
//! cell of the grid and derives a linear (`straight`) or quadratic (`angle`)
//! [`BezierCurve`] from the cell corners, its [`Rotation`] and its travel
//! direction. Curves can also be built directly from 2 to 4 control points.
//!
//! Bézier curves do not move at constant speed along their native parameter.
//! Every curve therefore samples its own arc length once at construction
//! ([`ArcLengthTable`]) and inverts that table on each query, so that
//! `get_point(0.5)` lies (approximately) halfway along the curve by distance.
//!
//! ```
//! use tile_track::{Rotation, TileShape, TrackSegment, Vector2};
//!
//! let segment = TrackSegment::new((2, 4), TileShape::Angle, Rotation::Deg0, false, 15)?;
//! assert_eq!(segment.get_point(0.0)?, Vector2::new(2.0, 4.0));
//! assert_eq!(segment.get_point(1.0)?, Vector2::new(3.0, 5.0));
//! # Ok::<(), tile_track::CurveError>(())
//! ```

pub mod arc_length;
pub mod bezier;
pub mod error;
pub mod point;
pub mod spline;
pub mod track;
pub mod vector2;

pub use arc_length::ArcLengthTable;
pub use bezier::{BezierCurve, Degree};
pub use error::CurveError;
pub use point::Point;
pub use spline::Spline;
pub use track::{Cell, Rotation, TileShape, TrackSegment};
pub use vector2::Vector2;

/// Scalar type used for coordinates, parameters and lengths.
pub type NativeFloat = f64;

/// Tolerance for comparisons of squared distances in this crate.
pub const EPSILON: NativeFloat = 1e-10;

/// Number of arc-length samples used by [`BezierCurve::with_default_precision`].
pub const DEFAULT_CURVE_PRECISION: usize = 20;

/// Number of arc-length samples used by [`TrackSegment::with_default_precision`].
pub const DEFAULT_TRACK_PRECISION: usize = 15;
