// File: crates/graph-core/src/types.rs
// Summary: Shared types and constants (points, default sizes).

/// Default length of each axis indicator, in world units.
pub const AXIS_LENGTH: f64 = 20.0;
/// Default cross-section of each axis indicator, in world units.
pub const AXIS_THICKNESS: f64 = 0.05;
/// Default radius hint for rendered sample points.
pub const POINT_RADIUS: f64 = 0.1;

/// A position in world space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Point on the z = 0 plane, where sampled functions are drawn.
    pub const fn on_plane(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// True when every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f64, f64, f64)> for Point3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3D> for (f64, f64, f64) {
    fn from(p: Point3D) -> Self {
        (p.x, p.y, p.z)
    }
}

/// Box dimensions along x, y and z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent3 {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Extent3 {
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self { width, height, depth }
    }
}
