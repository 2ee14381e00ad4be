//! Track segments laid out on a grid of unit tiles.
//!
//! A segment occupies the cell `[col, col + 1] x [row, row + 1]`. Its curve is
//! built from the cell corners
//!
//! ```text
//!   B (x, y+1) ---- C (x+1, y+1)
//!   |                |
//!   A (x, y) ------- D (x+1, y)
//! ```
//!
//! A `straight` segment runs along one edge, an `angle` segment bends around
//! one corner (the middle control point). Rotating by 90° moves every control
//! point one corner further along A -> B -> C -> D.

use core::fmt;
use core::str::FromStr;

use log::debug;
use tinyvec::ArrayVec;

use crate::bezier::BezierCurve;
use crate::error::CurveError;
use crate::spline::Spline;
use crate::vector2::Vector2;
use crate::{NativeFloat, DEFAULT_TRACK_PRECISION};

/// Grid column and row of the tile's lower-left corner.
pub type Cell = (i32, i32);

/// Shape of the track within its tile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TileShape {
    /// Linear curve along one tile edge.
    Straight,
    /// Quadratic curve turning around one tile corner.
    Angle,
}

impl TileShape {
    pub fn as_str(self) -> &'static str {
        match self {
            TileShape::Straight => "straight",
            TileShape::Angle => "angle",
        }
    }
}

impl fmt::Display for TileShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TileShape {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(TileShape::Straight),
            "angle" => Ok(TileShape::Angle),
            other => Err(CurveError::tile(format!("unknown shape `{}`", other))),
        }
    }
}

/// Rotation of a tile in quarter turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    pub fn degrees(self) -> u32 {
        self.quarter_turns() * 90
    }

    pub fn quarter_turns(self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Any number of quarter turns, taken modulo a full turn.
    pub fn from_quarter_turns(turns: u32) -> Self {
        Rotation::ALL[(turns % 4) as usize]
    }

    /// The rotation one quarter turn further, wrapping 270° to 0°.
    pub fn next(self) -> Self {
        Rotation::from_quarter_turns(self.quarter_turns() + 1)
    }
}

impl TryFrom<u32> for Rotation {
    type Error = CurveError;

    /// Only exact multiples of 90 below a full turn are accepted.
    fn try_from(degrees: u32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(CurveError::tile(format!(
                "rotation must be 0, 90, 180 or 270 degrees, got {}",
                other
            ))),
        }
    }
}

/// One tile of track: the curve a moving object follows across a single cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSegment {
    cell: Cell,
    shape: TileShape,
    rotation: Rotation,
    reversed: bool,
    curve: BezierCurve<Vector2>,
}

impl TrackSegment {
    /// Build the segment's curve from the tile table. With `reversed` the
    /// first and last control point swap places, so the object travels the
    /// same path in the opposite direction.
    pub fn new(
        cell: Cell,
        shape: TileShape,
        rotation: Rotation,
        reversed: bool,
        precision: usize,
    ) -> Result<Self, CurveError> {
        let mut points = control_points(cell, shape, rotation);
        if reversed {
            let last = points.len() - 1;
            points.swap(0, last);
        }
        debug!(
            "track segment at {:?}: {} rotated {}°{}",
            cell,
            shape,
            rotation.degrees(),
            if reversed { ", reversed" } else { "" }
        );
        let curve = BezierCurve::new(points.as_slice(), precision)?;

        Ok(TrackSegment {
            cell,
            shape,
            rotation,
            reversed,
            curve,
        })
    }

    /// Build a segment sampled [`DEFAULT_TRACK_PRECISION`] times.
    pub fn with_default_precision(
        cell: Cell,
        shape: TileShape,
        rotation: Rotation,
        reversed: bool,
    ) -> Result<Self, CurveError> {
        Self::new(cell, shape, rotation, reversed, DEFAULT_TRACK_PRECISION)
    }

    /// The same tile travelled in the opposite direction.
    pub fn reversed(&self) -> Result<Self, CurveError> {
        Self::new(
            self.cell,
            self.shape,
            self.rotation,
            !self.reversed,
            self.curve.precision(),
        )
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn shape(&self) -> TileShape {
        self.shape
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn curve(&self) -> &BezierCurve<Vector2> {
        &self.curve
    }

    /// Control points of the curve in travel order, e.g. for drawing handles.
    pub fn handles(&self) -> &[Vector2] {
        self.curve.control_points()
    }

    pub fn length(&self) -> NativeFloat {
        self.curve.length()
    }

    /// Point at arc-length fraction `t` in `[0, 1]` of the segment.
    pub fn get_point(&self, t: NativeFloat) -> Result<Vector2, CurveError> {
        self.curve.get_point(t)
    }
}

impl Spline<Vector2> for TrackSegment {
    fn get_point(&self, t: NativeFloat) -> Result<Vector2, CurveError> {
        TrackSegment::get_point(self, t)
    }

    fn length(&self) -> NativeFloat {
        TrackSegment::length(self)
    }
}

/// Control points (start to end) of a tile before any reversal.
fn control_points(cell: Cell, shape: TileShape, rotation: Rotation) -> ArrayVec<[Vector2; 3]> {
    // corners in floating point so cells at the i32 limits don't overflow
    let (x, y) = (NativeFloat::from(cell.0), NativeFloat::from(cell.1));
    let a = Vector2::new(x, y);
    let b = Vector2::new(x, y + 1.0);
    let c = Vector2::new(x + 1.0, y + 1.0);
    let d = Vector2::new(x + 1.0, y);

    let mut points = ArrayVec::new();
    match (shape, rotation) {
        (TileShape::Angle, Rotation::Deg0) => points.extend_from_slice(&[a, b, c]),
        (TileShape::Angle, Rotation::Deg90) => points.extend_from_slice(&[b, c, d]),
        (TileShape::Angle, Rotation::Deg180) => points.extend_from_slice(&[c, d, a]),
        (TileShape::Angle, Rotation::Deg270) => points.extend_from_slice(&[d, a, b]),
        (TileShape::Straight, Rotation::Deg0) => points.extend_from_slice(&[a, b]),
        (TileShape::Straight, Rotation::Deg90) => points.extend_from_slice(&[b, c]),
        (TileShape::Straight, Rotation::Deg180) => points.extend_from_slice(&[c, d]),
        (TileShape::Straight, Rotation::Deg270) => points.extend_from_slice(&[d, a]),
    }
    points
}
