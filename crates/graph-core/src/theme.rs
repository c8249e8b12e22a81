// File: crates/graph-core/src/theme.rs
// Summary: Color presets mapping axis roles and sample points to RGBA colors.

use crate::axis::AxisRole;

/// 8-bit RGBA color. The core never draws; renderers read these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `#rrggbbaa` form, lowercase.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub x_axis: Rgba,
    pub y_axis: Rgba,
    pub z_axis: Rgba,
    pub point: Rgba,
}

impl Theme {
    /// Pure primaries on the axes and yellow points.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            x_axis: Rgba::rgb(255, 0, 0),
            y_axis: Rgba::rgb(0, 128, 0),
            z_axis: Rgba::rgb(0, 0, 255),
            point: Rgba::rgb(255, 255, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            x_axis: Rgba::rgb(220, 80, 80),
            y_axis: Rgba::rgb(40, 200, 120),
            z_axis: Rgba::rgb(64, 160, 255),
            point: Rgba::rgb(255, 230, 70),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            x_axis: Rgba::rgb(0xff, 0x00, 0x00),
            y_axis: Rgba::rgb(0x00, 0xff, 0x00),
            z_axis: Rgba::rgb(0x00, 0xaa, 0xff),
            point: Rgba::rgb(0xff, 0xff, 0xff),
        }
    }

    pub fn axis_color(&self, role: AxisRole) -> Rgba {
        match role {
            AxisRole::X => self.x_axis,
            AxisRole::Y => self.y_axis,
            AxisRole::Z => self.z_axis,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::classic()
}
