//! Shared-wall discovery.
//!
//! Given the canonical description of a wall being edited, finds every room
//! edge on the floor coincident with it. That set is what "locked" editing
//! mode resizes together; "unlocked" mode uses only the originally selected
//! room's edge.

use crate::model::Floor;
use crate::wall::{coord_eq, ranges_overlap, Side, Wall, WallMeta};

/// A room edge that lies on an edited wall's line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedEdge {
    pub room_id: String,
    pub side: Side,
}

/// Every `{room, side}` pair whose edge lies on `meta`'s line.
///
/// An edge matches when its orientation and constant coordinate equal the
/// wall's and its span overlaps the wall's span (closed intervals, so rooms
/// that merely touch at a corner coordinate on the same line also match).
pub fn rooms_sharing_wall(floor: &Floor, meta: &WallMeta) -> Vec<SharedEdge> {
    let mut affected = Vec::new();

    for room in &floor.rooms {
        for side in Side::ALL {
            let candidate = Wall::for_side(room, side).meta();
            if candidate.orientation != meta.orientation {
                continue;
            }
            if !coord_eq(candidate.position, meta.position) {
                continue;
            }
            if ranges_overlap(
                candidate.span_start,
                candidate.span_end,
                meta.span_start,
                meta.span_end,
            ) {
                affected.push(SharedEdge {
                    room_id: room.id.clone(),
                    side,
                });
            }
        }
    }

    affected
}
