//! Wall segment deduplication for rendering.
//!
//! Two adjacent rooms enumerate their shared wall twice, once each and in
//! opposite directions. Rendering wants that line drawn once, so segments
//! are keyed by their four coordinates in both directions and only the
//! first occurrence is kept. Only exact coincident duplicates collapse;
//! partially overlapping edges stay separate entries.

use std::collections::HashSet;

use crate::model::Room;
use crate::wall::{Side, Wall};

/// Canonical key for a directed segment. Coordinates are quantized to
/// 1/1000 px so float noise from prior edits cannot split a shared wall.
fn segment_key(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    format!("{:.3}|{:.3}|{:.3}|{:.3}", x1, y1, x2, y2)
}

/// Builds the unique set of wall segments for a floor's rooms.
///
/// Output order is insertion order: the first-seen room's edge ordering,
/// not sorted.
pub fn wall_segments(rooms: &[Room]) -> Vec<Wall> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut segments = Vec::new();

    for room in rooms {
        for side in Side::ALL {
            let wall = Wall::for_side(room, side);
            let forward = segment_key(wall.x1, wall.y1, wall.x2, wall.y2);
            let reverse = segment_key(wall.x2, wall.y2, wall.x1, wall.y1);
            if seen.contains(&forward) || seen.contains(&reverse) {
                continue;
            }
            seen.insert(forward);
            segments.push(wall);
        }
    }

    segments
}
