//! Floor-level properties of the geometry engine: segment deduplication,
//! shared-wall discovery, and constraint solving over the built-in plan.

use renoplan_floorplan::constraints::position_constraints;
use renoplan_floorplan::layout::default_plan;
use renoplan_floorplan::mutate::apply_wall_position;
use renoplan_floorplan::segments::wall_segments;
use renoplan_floorplan::shared::rooms_sharing_wall;
use renoplan_floorplan::wall::{Side, Wall};
use renoplan_floorplan::{Floor, PlanConfig, Room};

fn ground() -> Floor {
    default_plan(&PlanConfig::default()).ground
}

#[test]
fn segment_count_never_exceeds_four_per_room() {
    let plan = default_plan(&PlanConfig::default());
    for floor in [&plan.ground, &plan.upper] {
        let segments = wall_segments(&floor.rooms);
        assert!(segments.len() <= floor.rooms.len() * 4);
    }
}

#[test]
fn coincident_edges_appear_exactly_once() {
    // Bedrooms 1 and 2 share their full vertical wall; the segment list
    // must contain that line exactly once.
    let upper = default_plan(&PlanConfig::default()).upper;
    let shared_x = upper.room("bedroom-1").unwrap().right();
    let segments = wall_segments(&upper.rooms);
    let on_line = segments
        .iter()
        .filter(|w| w.x1 == shared_x && w.x2 == shared_x)
        .count();
    assert_eq!(on_line, 1);
}

#[test]
fn shared_wall_symmetry_for_adjacent_rooms() {
    let floor = ground();
    let living = floor.room("living").unwrap();
    let hall = floor.room("hall").unwrap();

    // Living room bottom and hall top are the same line.
    let from_living = rooms_sharing_wall(&floor, &Wall::for_side(living, Side::Bottom).meta());
    let from_hall = rooms_sharing_wall(&floor, &Wall::for_side(hall, Side::Top).meta());
    assert_eq!(from_living, from_hall);
    assert!(from_living.iter().any(|e| e.room_id == "living" && e.side == Side::Bottom));
    assert!(from_living.iter().any(|e| e.room_id == "hall" && e.side == Side::Top));
}

#[test]
fn constraints_bracket_position_for_all_interior_walls() {
    let config = PlanConfig::default();
    let floor = ground();
    for room in &floor.rooms {
        for side in Side::ALL {
            let meta = Wall::for_side(room, side).meta();
            let affected = rooms_sharing_wall(&floor, &meta);
            let c = position_constraints(&config, &floor, &meta, &affected);
            assert!(
                c.min <= meta.position && meta.position <= c.max,
                "wall {side} of {} violates min <= position <= max",
                room.id
            );
        }
    }
}

#[test]
fn exterior_walls_are_immovable() {
    let config = PlanConfig::default();
    let floor = ground();
    let bounds = config.bounds;

    for room in &floor.rooms {
        for side in Side::ALL {
            let meta = Wall::for_side(room, side).meta();
            let on_boundary = meta.position == bounds.x
                || meta.position == bounds.x + bounds.width
                || meta.position == bounds.y
                || meta.position == bounds.y + bounds.height;
            if !on_boundary {
                continue;
            }
            let affected = rooms_sharing_wall(&floor, &meta);
            let c = position_constraints(&config, &floor, &meta, &affected);
            assert_eq!(c.min, meta.position);
            assert_eq!(c.max, meta.position);
        }
    }
}

#[test]
fn kitchen_right_wall_scenario() {
    // Reference scenario: room {x:280, y:210, w:200, h:150}, right wall at
    // 480, minimum room size 60, moved to 470 -> width 190.
    let mut floor = Floor {
        id: "ground".to_string(),
        name: "Ground".to_string(),
        rooms: vec![Room::new("kitchen", "Kitchen", 280.0, 210.0, 200.0, 150.0)],
        openings: Vec::new(),
    };
    let config = PlanConfig::default();
    let meta = Wall::for_side(floor.room("kitchen").unwrap(), Side::Right).meta();
    let affected = rooms_sharing_wall(&floor, &meta);

    let c = position_constraints(&config, &floor, &meta, &affected);
    assert!(c.min <= 470.0 && 470.0 <= c.max);

    apply_wall_position(&mut floor, &meta, &affected, 470.0);
    assert_eq!(floor.room("kitchen").unwrap().width, 190.0);
}

#[test]
fn moving_shared_wall_keeps_opposite_edges_fixed() {
    let mut floor = ground();
    let living = floor.room("living").unwrap();
    let meta = Wall::for_side(living, Side::Bottom).meta();
    let affected = rooms_sharing_wall(&floor, &meta);

    let living_top = floor.room("living").unwrap().y;
    let hall_bottom = floor.room("hall").unwrap().bottom();

    apply_wall_position(&mut floor, &meta, &affected, meta.position + 15.0);

    let living = floor.room("living").unwrap();
    let hall = floor.room("hall").unwrap();
    assert_eq!(living.y, living_top);
    assert_eq!(living.bottom(), meta.position + 15.0);
    assert_eq!(hall.y, meta.position + 15.0);
    assert_eq!(hall.bottom(), hall_bottom);
}
