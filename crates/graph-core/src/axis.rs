// File: crates/graph-core/src/axis.rs
// Summary: Reference axis indicators and the fixed three-axis frame.

use crate::types::{Extent3, AXIS_LENGTH, AXIS_THICKNESS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisRole {
    X,
    Y,
    Z,
}

impl AxisRole {
    pub const ALL: [AxisRole; 3] = [AxisRole::X, AxisRole::Y, AxisRole::Z];

    pub const fn index(self) -> usize {
        match self {
            AxisRole::X => 0,
            AxisRole::Y => 1,
            AxisRole::Z => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AxisRole::X => "x",
            AxisRole::Y => "y",
            AxisRole::Z => "z",
        }
    }
}

/// Box-shaped marker centered on the origin, long along its own axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisIndicator {
    role: AxisRole,
    length: f64,
    thickness: f64,
}

impl AxisIndicator {
    pub const fn new(role: AxisRole, length: f64, thickness: f64) -> Self {
        Self { role, length, thickness }
    }

    pub const fn role(&self) -> AxisRole { self.role }
    pub const fn length(&self) -> f64 { self.length }
    pub const fn thickness(&self) -> f64 { self.thickness }

    /// Box dimensions: `length` along the indicator's axis, `thickness` on the other two.
    pub const fn extent(&self) -> Extent3 {
        let (l, t) = (self.length, self.thickness);
        match self.role {
            AxisRole::X => Extent3::new(l, t, t),
            AxisRole::Y => Extent3::new(t, l, t),
            AxisRole::Z => Extent3::new(t, t, l),
        }
    }
}

/// Exactly one indicator per axis, in X, Y, Z order. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisFrame {
    indicators: [AxisIndicator; 3],
}

impl AxisFrame {
    pub fn new(length: f64, thickness: f64) -> Self {
        let indicators = AxisRole::ALL.map(|role| AxisIndicator::new(role, length, thickness));
        Self { indicators }
    }

    pub fn get(&self, role: AxisRole) -> &AxisIndicator {
        &self.indicators[role.index()]
    }

    pub fn indicators(&self) -> &[AxisIndicator] {
        &self.indicators
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AxisIndicator> {
        self.indicators.iter()
    }
}

impl Default for AxisFrame {
    fn default() -> Self {
        Self::new(AXIS_LENGTH, AXIS_THICKNESS)
    }
}

impl<'a> IntoIterator for &'a AxisFrame {
    type Item = &'a AxisIndicator;
    type IntoIter = std::slice::Iter<'a, AxisIndicator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
