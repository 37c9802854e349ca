//! Plan configuration: scale, minimum room size, and the outer boundary.

use renoplan_core::units::Scale;
use serde::{Deserialize, Serialize};

use crate::wall::Axis;

/// The fixed outer building envelope, in pixels.
///
/// Walls coincident with its edges are immovable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FloorBounds {
    /// The lower outer bound on the given travel axis.
    pub fn min_on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// The upper outer bound on the given travel axis.
    pub fn max_on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x + self.width,
            Axis::Y => self.y + self.height,
        }
    }
}

/// Configuration for the floorplan engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Pixel/physical-unit conversion scale.
    pub scale: Scale,
    /// Minimum room extent, in pixels, that any wall move must preserve.
    pub min_room_size_px: f64,
    /// The fixed outer building envelope.
    pub bounds: FloorBounds,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            scale: Scale::default(),
            min_room_size_px: 60.0,
            // 1040 cm x 720 cm building at the default 0.5 px/cm,
            // offset by the outer-wall origin.
            bounds: FloorBounds {
                x: 40.0,
                y: 40.0,
                width: 520.0,
                height: 360.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_axes() {
        let bounds = PlanConfig::default().bounds;
        assert_eq!(bounds.min_on(Axis::X), 40.0);
        assert_eq!(bounds.max_on(Axis::X), 560.0);
        assert_eq!(bounds.min_on(Axis::Y), 40.0);
        assert_eq!(bounds.max_on(Axis::Y), 400.0);
    }
}
