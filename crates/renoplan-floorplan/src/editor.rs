//! Editor state for UI integration.
//!
//! Sequences the edit cycle the UI drives: select a wall, resolve which
//! rooms share it (locked mode) or keep only the selected edge (unlocked),
//! compute millimeter-valued bounds for the numeric inputs, clamp the
//! submitted value, apply the mutation, and let openings follow. The
//! geometry functions themselves are stateless; only the selection and the
//! plan live here, one edit transaction at a time per floor.

use renoplan_core::units::clamp;
use renoplan_core::{Error, Result};
use tracing::info;

use crate::config::PlanConfig;
use crate::constraints::{length_constraints, position_constraints};
use crate::layout::default_plan;
use crate::model::FloorPlan;
use crate::mutate::{apply_wall_length, apply_wall_position, update_openings_for_wall_move};
use crate::segments::wall_segments;
use crate::shared::{rooms_sharing_wall, SharedEdge};
use crate::wall::{Side, Wall};

/// The wall currently selected for editing.
///
/// Only the room/side reference is stored; the wall segment and its meta
/// are recomputed from the current geometry on every use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallSelection {
    pub floor_id: String,
    pub room_id: String,
    pub side: Side,
}

/// Millimeter-valued range for a numeric input control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MmRange {
    pub min: f64,
    pub max: f64,
    pub current: f64,
}

/// Editor state for the interactive floorplan.
#[derive(Debug, Clone)]
pub struct FloorplanEditor {
    config: PlanConfig,
    plan: FloorPlan,
    selection: Option<WallSelection>,
    locked: bool,
}

impl FloorplanEditor {
    /// Creates an editor over an existing plan.
    pub fn new(config: PlanConfig, plan: FloorPlan) -> Self {
        Self {
            config,
            plan,
            selection: None,
            locked: true,
        }
    }

    /// Creates an editor over the built-in default plan.
    pub fn with_default_plan(config: PlanConfig) -> Self {
        let plan = default_plan(&config);
        Self::new(config, plan)
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    /// Consumes the editor, returning the plan for persistence.
    pub fn into_plan(self) -> FloorPlan {
        self.plan
    }

    /// Replaces the whole plan (e.g. after a store load), dropping any
    /// selection.
    pub fn set_plan(&mut self, plan: FloorPlan) {
        self.plan = plan;
        self.selection = None;
    }

    /// Whether moving a wall repositions all rooms sharing it.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Switches between locked and unlocked editing mode.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn selection(&self) -> Option<&WallSelection> {
        self.selection.as_ref()
    }

    /// Selects a wall by floor, room, and side.
    pub fn select_wall(&mut self, floor_id: &str, room_id: &str, side: Side) -> Result<()> {
        let floor = self
            .plan
            .floor(floor_id)
            .ok_or_else(|| Error::UnknownFloor(floor_id.to_string()))?;
        if floor.room(room_id).is_none() {
            return Err(Error::UnknownRoom {
                floor: floor_id.to_string(),
                room: room_id.to_string(),
            });
        }
        self.selection = Some(WallSelection {
            floor_id: floor_id.to_string(),
            room_id: room_id.to_string(),
            side,
        });
        Ok(())
    }

    /// Clears the selection (e.g. the user clicked an opening instead;
    /// that is "no measurement form", not an error).
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The selected wall segment, recomputed from current geometry.
    pub fn selected_wall(&self) -> Result<Wall> {
        let sel = self.selection.as_ref().ok_or(Error::NoSelection)?;
        let floor = self
            .plan
            .floor(&sel.floor_id)
            .ok_or_else(|| Error::UnknownFloor(sel.floor_id.clone()))?;
        let room = floor.room(&sel.room_id).ok_or_else(|| Error::UnknownRoom {
            floor: sel.floor_id.clone(),
            room: sel.room_id.clone(),
        })?;
        Ok(Wall::for_side(room, sel.side))
    }

    /// The rooms affected by moving the selected wall: every room sharing
    /// the wall in locked mode, only the selected edge in unlocked mode.
    pub fn affected_edges(&self) -> Result<Vec<SharedEdge>> {
        let sel = self.selection.as_ref().ok_or(Error::NoSelection)?;
        if !self.locked {
            return Ok(vec![SharedEdge {
                room_id: sel.room_id.clone(),
                side: sel.side,
            }]);
        }
        let floor = self
            .plan
            .floor(&sel.floor_id)
            .ok_or_else(|| Error::UnknownFloor(sel.floor_id.clone()))?;
        let meta = self.selected_wall()?.meta();
        Ok(rooms_sharing_wall(floor, &meta))
    }

    /// Position bounds for the selected wall, in millimeters for display.
    pub fn position_range_mm(&self) -> Result<MmRange> {
        let sel = self.selection.as_ref().ok_or(Error::NoSelection)?;
        let meta = self.selected_wall()?.meta();
        let affected = self.affected_edges()?;
        let floor = self
            .plan
            .floor(&sel.floor_id)
            .ok_or_else(|| Error::UnknownFloor(sel.floor_id.clone()))?;
        let c = position_constraints(&self.config, floor, &meta, &affected);
        let scale = self.config.scale;
        Ok(MmRange {
            min: scale.to_mm(c.min),
            max: scale.to_mm(c.max),
            current: scale.to_mm(meta.position),
        })
    }

    /// Length bounds for the selected wall, in millimeters for display.
    pub fn length_range_mm(&self) -> Result<MmRange> {
        let sel = self.selection.as_ref().ok_or(Error::NoSelection)?;
        let meta = self.selected_wall()?.meta();
        let floor = self
            .plan
            .floor(&sel.floor_id)
            .ok_or_else(|| Error::UnknownFloor(sel.floor_id.clone()))?;
        let room = floor.room(&sel.room_id).ok_or_else(|| Error::UnknownRoom {
            floor: sel.floor_id.clone(),
            room: sel.room_id.clone(),
        })?;
        let c = length_constraints(&self.config, room, &meta);
        let scale = self.config.scale;
        Ok(MmRange {
            min: scale.to_mm(c.min),
            max: scale.to_mm(c.max),
            current: scale.to_mm(meta.length()),
        })
    }

    /// Applies a new wall position submitted in millimeters.
    ///
    /// The value is clamped into the legal range before the mutator runs,
    /// since the mutator applies unconditionally. Openings riding on the
    /// wall are translated with it.
    pub fn set_wall_position_mm(&mut self, value_mm: f64) -> Result<()> {
        let sel = self.selection.as_ref().ok_or(Error::NoSelection)?.clone();
        let meta = self.selected_wall()?.meta();
        let affected = self.affected_edges()?;

        let floor = self
            .plan
            .floor_mut(&sel.floor_id)
            .ok_or_else(|| Error::UnknownFloor(sel.floor_id.clone()))?;
        let c = position_constraints(&self.config, floor, &meta, &affected);
        let new_position = clamp(self.config.scale.to_px(value_mm), c.min, c.max);

        info!(
            floor = %sel.floor_id,
            room = %sel.room_id,
            side = %sel.side,
            locked = self.locked,
            from = meta.position,
            to = new_position,
            "applying wall position"
        );
        apply_wall_position(floor, &meta, &affected, new_position);
        update_openings_for_wall_move(floor, &meta, meta.position, new_position);
        Ok(())
    }

    /// Applies a new wall length submitted in millimeters.
    ///
    /// Length changes only ever resize the selected room; they are never
    /// propagated across shared walls, and openings on the wall keep their
    /// spans.
    pub fn set_wall_length_mm(&mut self, value_mm: f64) -> Result<()> {
        let sel = self.selection.as_ref().ok_or(Error::NoSelection)?.clone();
        let meta = self.selected_wall()?.meta();

        let floor = self
            .plan
            .floor_mut(&sel.floor_id)
            .ok_or_else(|| Error::UnknownFloor(sel.floor_id.clone()))?;
        let room = floor.room(&sel.room_id).ok_or_else(|| Error::UnknownRoom {
            floor: sel.floor_id.clone(),
            room: sel.room_id.clone(),
        })?;
        let c = length_constraints(&self.config, room, &meta);
        let new_length = clamp(self.config.scale.to_px(value_mm), c.min, c.max);

        let room = floor.room_mut(&sel.room_id).ok_or_else(|| Error::UnknownRoom {
            floor: sel.floor_id.clone(),
            room: sel.room_id.clone(),
        })?;
        info!(room = %sel.room_id, to = new_length, "applying wall length");
        apply_wall_length(room, &meta, new_length);
        Ok(())
    }

    /// The deduplicated wall segments of a floor, for rendering.
    pub fn wall_segments(&self, floor_id: &str) -> Result<Vec<Wall>> {
        let floor = self
            .plan
            .floor(floor_id)
            .ok_or_else(|| Error::UnknownFloor(floor_id.to_string()))?;
        Ok(wall_segments(&floor.rooms))
    }
}
