//! Wall mutation: applying an approved position or length change.
//!
//! These functions apply unconditionally and write room fields in place.
//! Callers validate and clamp values against the constraint solver first;
//! there is no rollback for a half-applied edit.

use tracing::debug;

use crate::model::{Floor, Room};
use crate::shared::SharedEdge;
use crate::wall::{coord_eq, ranges_overlap, Orientation, Side, WallMeta};

/// Moves a wall to `new_position` across every affected room edge.
///
/// Left/top edges move the room origin and recompute the extent from the
/// preserved opposite edge; right/bottom edges change only the extent.
pub fn apply_wall_position(
    floor: &mut Floor,
    meta: &WallMeta,
    affected: &[SharedEdge],
    new_position: f64,
) {
    debug!(
        floor = %floor.id,
        old = meta.position,
        new = new_position,
        rooms = affected.len(),
        "moving wall"
    );

    for edge in affected {
        let Some(room) = floor.room_mut(&edge.room_id) else {
            continue;
        };
        match edge.side {
            Side::Left => {
                let right = room.right();
                room.x = new_position;
                room.width = right - new_position;
            }
            Side::Right => {
                room.width = new_position - room.x;
            }
            Side::Top => {
                let bottom = room.bottom();
                room.y = new_position;
                room.height = bottom - new_position;
            }
            Side::Bottom => {
                room.height = new_position - room.y;
            }
        }
    }
}

/// Sets the selected room's wall length.
///
/// A vertical wall's length is the room height, a horizontal wall's its
/// width. Length changes are never propagated to other rooms, and openings
/// on the wall are not rescaled: a wall shortened below an opening's span
/// leaves the opening overhanging. That is accepted behavior, surfaced to
/// the user rather than repaired here.
pub fn apply_wall_length(room: &mut Room, meta: &WallMeta, new_length: f64) {
    debug!(room = %room.id, length = new_length, "resizing wall");
    match meta.orientation {
        Orientation::Vertical => room.height = new_length,
        Orientation::Horizontal => room.width = new_length,
    }
}

/// Translates openings that rode on a moved wall.
///
/// An opening follows when both endpoints sit on `old_position` with the
/// wall's orientation and its span overlaps the wall's span. All other
/// openings are untouched.
pub fn update_openings_for_wall_move(
    floor: &mut Floor,
    meta: &WallMeta,
    old_position: f64,
    new_position: f64,
) {
    for opening in &mut floor.openings {
        let on_wall = match meta.orientation {
            Orientation::Vertical => {
                opening.is_vertical()
                    && coord_eq(opening.x1, old_position)
                    && coord_eq(opening.x2, old_position)
            }
            Orientation::Horizontal => {
                opening.is_horizontal()
                    && coord_eq(opening.y1, old_position)
                    && coord_eq(opening.y2, old_position)
            }
        };
        if !on_wall {
            continue;
        }
        let (start, end) = opening.span();
        if !ranges_overlap(start, end, meta.span_start, meta.span_end) {
            continue;
        }
        debug!(opening = %opening.id, new = new_position, "opening follows wall");
        match meta.orientation {
            Orientation::Vertical => {
                opening.x1 = new_position;
                opening.x2 = new_position;
            }
            Orientation::Horizontal => {
                opening.y1 = new_position;
                opening.y2 = new_position;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Opening, OpeningKind, Room};
    use crate::shared::rooms_sharing_wall;
    use crate::wall::{Side, Wall};

    fn floor(rooms: Vec<Room>, openings: Vec<Opening>) -> Floor {
        Floor {
            id: "ground".to_string(),
            name: "Ground".to_string(),
            rooms,
            openings,
        }
    }

    fn door(id: &str, room_id: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> Opening {
        Opening {
            id: id.to_string(),
            kind: OpeningKind::Door,
            room_id: room_id.to_string(),
            label: String::new(),
            x1,
            y1,
            x2,
            y2,
        }
    }

    #[test]
    fn test_right_edge_move_changes_width_only() {
        // Kitchen scenario: right wall at 480 moved to 470 -> width 190.
        let mut f = floor(vec![Room::new("kitchen", "Kitchen", 280.0, 210.0, 200.0, 150.0)], vec![]);
        let meta = Wall::for_side(f.room("kitchen").unwrap(), Side::Right).meta();
        let affected = rooms_sharing_wall(&f, &meta);
        apply_wall_position(&mut f, &meta, &affected, 470.0);
        let room = f.room("kitchen").unwrap();
        assert_eq!(room.x, 280.0);
        assert_eq!(room.width, 190.0);
    }

    #[test]
    fn test_left_edge_move_preserves_right_edge() {
        let mut f = floor(vec![Room::new("a", "A", 100.0, 40.0, 200.0, 150.0)], vec![]);
        let meta = Wall::for_side(f.room("a").unwrap(), Side::Left).meta();
        let affected = rooms_sharing_wall(&f, &meta);
        apply_wall_position(&mut f, &meta, &affected, 120.0);
        let room = f.room("a").unwrap();
        assert_eq!(room.x, 120.0);
        assert_eq!(room.width, 180.0);
        assert_eq!(room.right(), 300.0);
    }

    #[test]
    fn test_shared_wall_move_resizes_both_rooms() {
        let mut f = floor(
            vec![
                Room::new("a", "A", 40.0, 40.0, 200.0, 150.0),
                Room::new("b", "B", 240.0, 40.0, 160.0, 150.0),
            ],
            vec![],
        );
        let meta = Wall::for_side(f.room("a").unwrap(), Side::Right).meta();
        let affected = rooms_sharing_wall(&f, &meta);
        apply_wall_position(&mut f, &meta, &affected, 260.0);
        assert_eq!(f.room("a").unwrap().width, 220.0);
        let b = f.room("b").unwrap();
        assert_eq!(b.x, 260.0);
        assert_eq!(b.width, 140.0);
        assert_eq!(b.right(), 400.0); // non-moved edge stays fixed
    }

    #[test]
    fn test_length_change_vertical_sets_height() {
        let mut room = Room::new("a", "A", 40.0, 40.0, 200.0, 150.0);
        let meta = Wall::for_side(&room, Side::Left).meta();
        apply_wall_length(&mut room, &meta, 130.0);
        assert_eq!(room.height, 130.0);
        assert_eq!(room.width, 200.0);
    }

    #[test]
    fn test_opening_follows_moved_wall() {
        let mut f = floor(
            vec![Room::new("a", "A", 40.0, 40.0, 200.0, 150.0)],
            vec![door("d1", "a", 240.0, 80.0, 240.0, 120.0)],
        );
        let meta = Wall::for_side(f.room("a").unwrap(), Side::Right).meta();
        update_openings_for_wall_move(&mut f, &meta, 240.0, 260.0);
        let opening = &f.openings[0];
        assert_eq!(opening.x1, 260.0);
        assert_eq!(opening.x2, 260.0);
        assert_eq!((opening.y1, opening.y2), (80.0, 120.0)); // span untouched
    }

    #[test]
    fn test_opening_on_other_wall_untouched() {
        let mut f = floor(
            vec![Room::new("a", "A", 40.0, 40.0, 200.0, 150.0)],
            vec![door("d1", "a", 40.0, 80.0, 40.0, 120.0)],
        );
        let meta = Wall::for_side(f.room("a").unwrap(), Side::Right).meta();
        update_openings_for_wall_move(&mut f, &meta, 240.0, 260.0);
        assert_eq!(f.openings[0].x1, 40.0);
    }

    #[test]
    fn test_opening_outside_span_untouched() {
        // Vertical opening at the right x but far outside the wall's span.
        let mut f = floor(
            vec![Room::new("a", "A", 40.0, 40.0, 200.0, 150.0)],
            vec![door("d1", "a", 240.0, 300.0, 240.0, 340.0)],
        );
        let meta = Wall::for_side(f.room("a").unwrap(), Side::Right).meta();
        update_openings_for_wall_move(&mut f, &meta, 240.0, 260.0);
        assert_eq!(f.openings[0].x1, 240.0);
    }
}
