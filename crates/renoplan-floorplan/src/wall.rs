//! Geometry primitives: sides, walls, and the canonical wall description.
//!
//! A [`Wall`] is a transient view of one side of one room, recomputed on
//! demand and never stored. [`WallMeta`] is the canonical description of a
//! wall's line (constant coordinate plus span range) used to match
//! coincident walls across rooms regardless of which room/side produced it.

use renoplan_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::Room;

/// Tolerance for coordinate coincidence. Positions come from cm-spec
/// derivation or prior mutations, so coincident walls agree to well under
/// this.
pub(crate) const COORD_EPS: f64 = 1e-6;

/// True iff two coordinates coincide.
pub(crate) fn coord_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < COORD_EPS
}

/// One of a room's four sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All four sides, in edge-enumeration order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Right => write!(f, "right"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
        }
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            other => Err(Error::UnknownSide(other.to_string())),
        }
    }
}

/// Orientation of a wall line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The axis a wall's constant coordinate lives on (its travel axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// A wall as a line segment, derived from one side of one room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Wall {
    /// The line segment for one side of a room's rectangle.
    ///
    /// Edges are directed clockwise from the room's top-left corner.
    pub fn for_side(room: &Room, side: Side) -> Wall {
        match side {
            Side::Top => Wall {
                x1: room.x,
                y1: room.y,
                x2: room.right(),
                y2: room.y,
            },
            Side::Right => Wall {
                x1: room.right(),
                y1: room.y,
                x2: room.right(),
                y2: room.bottom(),
            },
            Side::Bottom => Wall {
                x1: room.right(),
                y1: room.bottom(),
                x2: room.x,
                y2: room.bottom(),
            },
            Side::Left => Wall {
                x1: room.x,
                y1: room.bottom(),
                x2: room.x,
                y2: room.y,
            },
        }
    }

    /// The canonical description of this wall's line.
    pub fn meta(&self) -> WallMeta {
        if coord_eq(self.x1, self.x2) {
            WallMeta {
                orientation: Orientation::Vertical,
                axis: Axis::X,
                position: self.x1,
                span_start: self.y1.min(self.y2),
                span_end: self.y1.max(self.y2),
            }
        } else {
            WallMeta {
                orientation: Orientation::Horizontal,
                axis: Axis::Y,
                position: self.y1,
                span_start: self.x1.min(self.x2),
                span_end: self.x1.max(self.x2),
            }
        }
    }
}

/// Canonical orientation/position/span description of a wall line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallMeta {
    pub orientation: Orientation,
    pub axis: Axis,
    /// The constant coordinate of the wall line.
    pub position: f64,
    pub span_start: f64,
    pub span_end: f64,
}

impl WallMeta {
    /// Length of the wall along its span.
    pub fn length(&self) -> f64 {
        self.span_end - self.span_start
    }
}

/// Closed-interval overlap test.
///
/// Touching endpoints count as overlapping; shared-wall detection relies on
/// this at exactly coincident coordinates.
pub fn ranges_overlap(start_a: f64, end_a: f64, start_b: f64, end_b: f64) -> bool {
    start_a.max(start_b) <= end_a.min(end_b)
}
