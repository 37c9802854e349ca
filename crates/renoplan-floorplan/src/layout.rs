//! Floorplan layout derivation.
//!
//! Turns an architectural specification expressed in centimeters (room
//! offsets/sizes plus opening placement rules) into a [`Floor`] in pixel
//! coordinates. The derivation is deterministic: building twice from the
//! same spec yields identical floors.
//!
//! The cm spec is authored statically (see [`default_ground_spec`] /
//! [`default_upper_spec`]); the builder does not validate it beyond what
//! serde enforces. A missing opening dimension produces a degenerate
//! zero-length segment rather than an error.

use serde::{Deserialize, Serialize};

use crate::config::PlanConfig;
use crate::model::{Floor, FloorPlan, Opening, OpeningKind, Room};
use crate::wall::Side;

/// A room in the cm-based architectural spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSpec {
    pub id: String,
    pub name: String,
    pub x_cm: f64,
    pub y_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

/// An opening in the cm-based architectural spec.
///
/// The opening's span along its wall comes from `width_cm` on horizontal
/// sides (top/bottom) and `height_cm` on vertical sides (left/right). With
/// `offset_cm` the span starts that far from the room corner; without it
/// the span is centered on the edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OpeningKind,
    pub room_id: String,
    pub side: Side,
    #[serde(default)]
    pub width_cm: f64,
    #[serde(default)]
    pub height_cm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_cm: Option<f64>,
    #[serde(default)]
    pub label: String,
}

/// A complete per-floor architectural spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorSpec {
    pub id: String,
    pub name: String,
    pub rooms: Vec<RoomSpec>,
    pub openings: Vec<OpeningSpec>,
}

/// Derives a floor in pixel coordinates from a cm spec.
pub fn build_floor(spec: &FloorSpec, config: &PlanConfig) -> Floor {
    let rooms: Vec<Room> = spec.rooms.iter().map(|r| build_room(r, config)).collect();
    let openings = spec
        .openings
        .iter()
        .filter_map(|o| build_opening(o, &rooms, config))
        .collect();
    Floor {
        id: spec.id.clone(),
        name: spec.name.clone(),
        rooms,
        openings,
    }
}

/// Derives both default floors.
pub fn default_plan(config: &PlanConfig) -> FloorPlan {
    FloorPlan {
        ground: build_floor(&default_ground_spec(), config),
        upper: build_floor(&default_upper_spec(), config),
    }
}

fn build_room(spec: &RoomSpec, config: &PlanConfig) -> Room {
    let scale = &config.scale;
    Room {
        id: spec.id.clone(),
        name: spec.name.clone(),
        x: config.bounds.x + scale.cm_to_px(spec.x_cm),
        y: config.bounds.y + scale.cm_to_px(spec.y_cm),
        width: scale.cm_to_px(spec.width_cm),
        height: scale.cm_to_px(spec.height_cm),
    }
}

fn build_opening(spec: &OpeningSpec, rooms: &[Room], config: &PlanConfig) -> Option<Opening> {
    let room = rooms.iter().find(|r| r.id == spec.room_id)?;
    let scale = &config.scale;

    // Span length along the wall, and the room dimension it walks along.
    let (length_cm, room_dim_px) = match spec.side {
        Side::Top | Side::Bottom => (spec.width_cm, room.width),
        Side::Left | Side::Right => (spec.height_cm, room.height),
    };
    let length_px = scale.cm_to_px(length_cm);
    let offset_px = match spec.offset_cm {
        Some(cm) => scale.cm_to_px(cm),
        None => (room_dim_px - length_px) / 2.0,
    };

    let (x1, y1, x2, y2) = match spec.side {
        Side::Top => (room.x + offset_px, room.y, room.x + offset_px + length_px, room.y),
        Side::Bottom => (
            room.x + offset_px,
            room.bottom(),
            room.x + offset_px + length_px,
            room.bottom(),
        ),
        Side::Left => (room.x, room.y + offset_px, room.x, room.y + offset_px + length_px),
        Side::Right => (
            room.right(),
            room.y + offset_px,
            room.right(),
            room.y + offset_px + length_px,
        ),
    };

    Some(Opening {
        id: spec.id.clone(),
        kind: spec.kind,
        room_id: spec.room_id.clone(),
        label: spec.label.clone(),
        x1,
        y1,
        x2,
        y2,
    })
}

fn room_spec(id: &str, name: &str, x_cm: f64, y_cm: f64, width_cm: f64, height_cm: f64) -> RoomSpec {
    RoomSpec {
        id: id.to_string(),
        name: name.to_string(),
        x_cm,
        y_cm,
        width_cm,
        height_cm,
    }
}

fn opening_spec(
    id: &str,
    kind: OpeningKind,
    room_id: &str,
    side: Side,
    width_cm: f64,
    height_cm: f64,
    offset_cm: Option<f64>,
    label: &str,
) -> OpeningSpec {
    OpeningSpec {
        id: id.to_string(),
        kind,
        room_id: room_id.to_string(),
        side,
        width_cm,
        height_cm,
        offset_cm,
        label: label.to_string(),
    }
}

/// The built-in ground floor: a 1040 x 720 cm envelope.
pub fn default_ground_spec() -> FloorSpec {
    FloorSpec {
        id: "ground".to_string(),
        name: "Ground floor".to_string(),
        rooms: vec![
            room_spec("living", "Living room", 0.0, 0.0, 480.0, 420.0),
            room_spec("hall", "Hall", 0.0, 420.0, 480.0, 300.0),
            room_spec("dining", "Dining room", 480.0, 0.0, 560.0, 340.0),
            room_spec("kitchen", "Kitchen", 480.0, 340.0, 400.0, 380.0),
            room_spec("wc", "WC", 880.0, 340.0, 160.0, 380.0),
        ],
        openings: vec![
            opening_spec(
                "door-front",
                OpeningKind::Door,
                "hall",
                Side::Left,
                90.0,
                100.0,
                Some(100.0),
                "Front door",
            ),
            opening_spec(
                "door-living-hall",
                OpeningKind::Door,
                "living",
                Side::Bottom,
                90.0,
                0.0,
                Some(40.0),
                "Living room door",
            ),
            opening_spec(
                "door-dining-kitchen",
                OpeningKind::Door,
                "kitchen",
                Side::Top,
                90.0,
                0.0,
                None,
                "Kitchen door",
            ),
            opening_spec(
                "window-living",
                OpeningKind::Window,
                "living",
                Side::Top,
                190.0,
                130.0,
                Some(60.0),
                "Living room window",
            ),
            opening_spec(
                "window-kitchen",
                OpeningKind::Window,
                "kitchen",
                Side::Bottom,
                190.0,
                130.0,
                None,
                "Kitchen window",
            ),
        ],
    }
}

/// The built-in upper floor.
pub fn default_upper_spec() -> FloorSpec {
    FloorSpec {
        id: "upper".to_string(),
        name: "Upper floor".to_string(),
        rooms: vec![
            room_spec("bedroom-1", "Bedroom 1", 0.0, 0.0, 520.0, 420.0),
            room_spec("bedroom-2", "Bedroom 2", 520.0, 0.0, 520.0, 420.0),
            room_spec("bath", "Bathroom", 0.0, 420.0, 400.0, 300.0),
            room_spec("landing", "Landing", 400.0, 420.0, 640.0, 300.0),
        ],
        openings: vec![
            opening_spec(
                "window-bedroom-1",
                OpeningKind::Window,
                "bedroom-1",
                Side::Top,
                190.0,
                130.0,
                None,
                "Bedroom 1 window",
            ),
            opening_spec(
                "window-bedroom-2",
                OpeningKind::Window,
                "bedroom-2",
                Side::Top,
                190.0,
                130.0,
                Some(80.0),
                "Bedroom 2 window",
            ),
            opening_spec(
                "door-bath",
                OpeningKind::Door,
                "bath",
                Side::Right,
                0.0,
                90.0,
                None,
                "Bathroom door",
            ),
            opening_spec(
                "door-bedroom-1",
                OpeningKind::Door,
                "bedroom-1",
                Side::Bottom,
                90.0,
                0.0,
                Some(300.0),
                "Bedroom 1 door",
            ),
        ],
    }
}
