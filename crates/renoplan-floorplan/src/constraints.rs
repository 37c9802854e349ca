//! Constraint solving for wall edits.
//!
//! Computes the legal `[min, max]` range a wall may move to without leaving
//! the outer building envelope or shrinking any affected room below the
//! configured minimum size, plus the legal length range for the wall-length
//! input.

use tracing::warn;

use crate::config::PlanConfig;
use crate::model::{Floor, Room};
use crate::shared::SharedEdge;
use crate::wall::{coord_eq, Axis, Orientation, Side, WallMeta};

/// Legal positions for a wall move, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionConstraints {
    pub min: f64,
    pub max: f64,
}

impl PositionConstraints {
    /// True when the wall cannot move at all.
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }
}

/// Legal lengths for the selected room's wall, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthConstraints {
    pub min: f64,
    pub max: f64,
}

/// Computes the `[min, max]` positions the wall may move to.
///
/// Walls exactly on an outer boundary edge are immovable and return a
/// single-point range. Otherwise each affected room tightens the range so
/// it keeps at least `min_room_size_px` perpendicular to the travel axis.
///
/// If the rooms are already pathologically small the tightened range can
/// invert; that degenerate case collapses to the wall's current position
/// so callers never see `min > max`.
pub fn position_constraints(
    config: &PlanConfig,
    floor: &Floor,
    meta: &WallMeta,
    affected: &[SharedEdge],
) -> PositionConstraints {
    let outer_min = config.bounds.min_on(meta.axis);
    let outer_max = config.bounds.max_on(meta.axis);

    // Exterior walls cannot move.
    if coord_eq(meta.position, outer_min) || coord_eq(meta.position, outer_max) {
        return PositionConstraints {
            min: meta.position,
            max: meta.position,
        };
    }

    let mut min = outer_min;
    let mut max = outer_max;
    let min_size = config.min_room_size_px;

    for edge in affected {
        let Some(room) = floor.room(&edge.room_id) else {
            continue;
        };
        match edge.side {
            Side::Left => max = max.min(room.right() - min_size),
            Side::Right => min = min.max(room.x + min_size),
            Side::Top => max = max.min(room.bottom() - min_size),
            Side::Bottom => min = min.max(room.y + min_size),
        }
    }

    if min > max {
        warn!(
            position = meta.position,
            min, max, "degenerate wall constraints, pinning wall in place"
        );
        return PositionConstraints {
            min: meta.position,
            max: meta.position,
        };
    }

    PositionConstraints { min, max }
}

/// Computes the `[min, max]` lengths for the selected room's wall.
///
/// The minimum is the configured minimum room size; the maximum is the
/// distance from the room's origin to the outer boundary along the wall's
/// span axis (a vertical wall's length is the room height, a horizontal
/// wall's its width).
pub fn length_constraints(config: &PlanConfig, room: &Room, meta: &WallMeta) -> LengthConstraints {
    let max = match meta.orientation {
        Orientation::Vertical => config.bounds.max_on(Axis::Y) - room.y,
        Orientation::Horizontal => config.bounds.max_on(Axis::X) - room.x,
    };
    LengthConstraints {
        min: config.min_room_size_px,
        max,
    }
}
