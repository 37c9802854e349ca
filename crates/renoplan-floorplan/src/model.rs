//! Floorplan data model: rooms, openings, floors, and the persisted plan.
//!
//! These are the only persisted shapes in the engine. Validation happens at
//! the JSON boundary ([`FloorPlan::from_json`]); everything downstream may
//! assume well-formed geometry.

use renoplan_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An axis-aligned rectangular room, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Whether an opening is a door or a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

/// A door or window: a line segment lying on one of its room's four edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OpeningKind,
    #[serde(rename = "roomId")]
    pub room_id: String,
    #[serde(default)]
    pub label: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Opening {
    /// True iff the segment runs along the x axis (lies on a horizontal wall).
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    /// True iff the segment runs along the y axis (lies on a vertical wall).
    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    /// The segment's span along its wall, as (start, end) with start <= end.
    pub fn span(&self) -> (f64, f64) {
        if self.is_vertical() {
            (self.y1.min(self.y2), self.y1.max(self.y2))
        } else {
            (self.x1.min(self.x2), self.x1.max(self.x2))
        }
    }
}

/// One building level: its rooms and openings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: String,
    pub name: String,
    pub rooms: Vec<Room>,
    pub openings: Vec<Opening>,
}

impl Floor {
    /// Looks up a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Looks up a room by id, mutably.
    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == id)
    }

    /// Validates the floor's geometry.
    ///
    /// Rejects non-positive room sizes, duplicate room ids, openings that
    /// reference a missing room, and openings that are not axis-aligned.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for room in &self.rooms {
            if room.width <= 0.0 {
                return Err(Error::InvalidRoom {
                    id: room.id.clone(),
                    reason: "width must be positive".to_string(),
                });
            }
            if room.height <= 0.0 {
                return Err(Error::InvalidRoom {
                    id: room.id.clone(),
                    reason: "height must be positive".to_string(),
                });
            }
            if !seen.insert(room.id.as_str()) {
                return Err(Error::InvalidRoom {
                    id: room.id.clone(),
                    reason: "duplicate room id".to_string(),
                });
            }
        }
        for opening in &self.openings {
            if self.room(&opening.room_id).is_none() {
                return Err(Error::InvalidOpening {
                    id: opening.id.clone(),
                    reason: format!("references unknown room '{}'", opening.room_id),
                });
            }
            if !opening.is_horizontal() && !opening.is_vertical() {
                return Err(Error::InvalidOpening {
                    id: opening.id.clone(),
                    reason: "segment must be axis-aligned".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// The persisted plan: both floors, exactly as stored by the blob store.
///
/// The wire format is `{"ground": Floor, "upper": Floor}` and must
/// round-trip losslessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub ground: Floor,
    pub upper: Floor,
}

impl FloorPlan {
    /// Looks up a floor by id.
    pub fn floor(&self, id: &str) -> Option<&Floor> {
        [&self.ground, &self.upper].into_iter().find(|f| f.id == id)
    }

    /// Looks up a floor by id, mutably.
    pub fn floor_mut(&mut self, id: &str) -> Option<&mut Floor> {
        [&mut self.ground, &mut self.upper]
            .into_iter()
            .find(|f| f.id == id)
    }

    /// Deserializes and validates a plan from its wire format.
    pub fn from_json(json: &str) -> Result<Self> {
        let plan: FloorPlan = serde_json::from_str(json)?;
        plan.ground.validate()?;
        plan.upper.validate()?;
        Ok(plan)
    }

    /// Serializes the plan to its wire format.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
