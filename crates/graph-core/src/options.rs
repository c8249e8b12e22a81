// File: crates/graph-core/src/options.rs
// Summary: Surface configuration (axis geometry and point size) with validation.

use crate::error::{PlotError, Result};
use crate::types::{AXIS_LENGTH, AXIS_THICKNESS, POINT_RADIUS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceOptions {
    pub axis_length: f64,
    pub axis_thickness: f64,
    /// Size hint for renderers drawing each sample as a sphere.
    pub point_radius: f64,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            axis_length: AXIS_LENGTH,
            axis_thickness: AXIS_THICKNESS,
            point_radius: POINT_RADIUS,
        }
    }
}

impl SurfaceOptions {
    /// All sizes finite and positive; axes longer than they are thick.
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("axis_length", self.axis_length),
            ("axis_thickness", self.axis_thickness),
            ("point_radius", self.point_radius),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(PlotError::invalid_argument(format!(
                    "{name} must be finite and positive, got {v}"
                )));
            }
        }
        if self.axis_thickness >= self.axis_length {
            return Err(PlotError::invalid_argument(
                "axis_thickness must be smaller than axis_length",
            ));
        }
        Ok(())
    }
}
