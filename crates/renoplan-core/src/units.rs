//! Unit conversion utilities.
//!
//! The floorplan is edited and rendered in pixel space, displayed to the
//! user in millimeters, and authored (in the architectural layout spec)
//! in centimeters. All conversions go through a single [`Scale`] value so
//! the pixel density can be configured in one place.

use serde::{Deserialize, Serialize};

/// Default number of millimeters represented by one pixel.
pub const DEFAULT_MM_PER_PX: f64 = 20.0;

/// Conversion scale between pixel space and physical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    /// Millimeters per pixel.
    pub mm_per_px: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            mm_per_px: DEFAULT_MM_PER_PX,
        }
    }
}

impl Scale {
    /// Creates a scale with the given pixel density.
    pub fn new(mm_per_px: f64) -> Self {
        Self { mm_per_px }
    }

    /// Converts pixels to millimeters, rounded to the nearest integer value.
    ///
    /// Display values are always whole millimeters.
    pub fn to_mm(&self, px: f64) -> f64 {
        (px * self.mm_per_px).round()
    }

    /// Converts millimeters to pixels.
    ///
    /// No rounding: fractional pixel positions are retained for precision
    /// until a later mutation snaps them.
    pub fn to_px(&self, mm: f64) -> f64 {
        mm / self.mm_per_px
    }

    /// Pixels per centimeter.
    pub fn px_per_cm(&self) -> f64 {
        10.0 / self.mm_per_px
    }

    /// Converts centimeters to pixels.
    pub fn cm_to_px(&self, cm: f64) -> f64 {
        cm * self.px_per_cm()
    }

    /// Converts pixels back to centimeters.
    pub fn px_to_cm(&self, px: f64) -> f64 {
        px * self.mm_per_px / 10.0
    }
}

/// Clamps `v` into `[min, max]`.
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

/// Format a millimeter value for display in the edit form.
pub fn format_length_mm(value_mm: f64) -> String {
    format!("{:.0}", value_mm)
}

/// Parse a millimeter string from the edit form.
///
/// Empty input parses as zero, matching a cleared form field.
pub fn parse_length_mm(input: &str) -> std::result::Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }
    input.parse::<f64>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_to_mm_rounds() {
        let scale = Scale::default();
        assert_eq!(scale.to_mm(10.0), 200.0);
        assert_eq!(scale.to_mm(10.04), 201.0);
        assert_eq!(scale.to_mm(0.024), 0.0);
    }

    #[test]
    fn test_mm_to_px_does_not_round() {
        let scale = Scale::default();
        assert_eq!(scale.to_px(200.0), 10.0);
        assert_eq!(scale.to_px(210.0), 10.5);
    }

    #[test]
    fn test_cm_round_trip() {
        let scale = Scale::default();
        // 190 cm -> 95 px -> 190 cm
        let px = scale.cm_to_px(190.0);
        assert_eq!(px, 95.0);
        assert_eq!(scale.px_to_cm(px), 190.0);
    }

    #[test]
    fn test_custom_scale() {
        let scale = Scale::new(10.0);
        assert_eq!(scale.to_mm(10.0), 100.0);
        assert_eq!(scale.px_per_cm(), 1.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_format_and_parse() {
        assert_eq!(format_length_mm(9600.0), "9600");
        assert_eq!(parse_length_mm("9600").unwrap(), 9600.0);
        assert_eq!(parse_length_mm("  9600.5 ").unwrap(), 9600.5);
        assert_eq!(parse_length_mm("").unwrap(), 0.0);
        assert!(parse_length_mm("abc").is_err());
    }
}
