//! Named spatial arrangements and the transforms they assign to items.
//!
//! - [`geometry`]: one pure placement function per [`Layout`]
//! - [`LayoutTargets`]: the four index-aligned target tables, built once

pub mod geometry;
mod targets;

use std::fmt;
use std::str::FromStr;

use glam::{EulerRot, Quat, Vec3};
pub use targets::LayoutTargets;

/// Position and orientation of one item in scene space.
///
/// Orientation is an XYZ-order Euler rotation in radians (the rotation
/// matrix is `Rx * Ry * Rz`). Transitions interpolate it componentwise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Scene-space position.
    pub position: Vec3,
    /// Euler rotation (x, y, z) in radians.
    pub orientation: Vec3,
}

impl Transform {
    /// Origin, no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Vec3::ZERO,
    };

    /// Unrotated transform at `position`.
    #[must_use]
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            orientation: Vec3::ZERO,
        }
    }

    /// Orientation as a quaternion.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        let Vec3 { x, y, z } = self.orientation;
        Quat::from_euler(EulerRot::XYZ, x, y, z)
    }

    /// Direction the item's front face (local +Z) points.
    #[must_use]
    pub fn facing(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }
}

/// One of the four target arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// 20-column periodic-table style grid in the z = 0 plane.
    Table,
    /// Fibonacci-like spiral over a sphere, items facing outward.
    Sphere,
    /// Two interleaved helical strands around the y axis.
    Helix,
    /// 5 x 4 slabs stacked along z.
    Grid,
}

impl Layout {
    /// Every layout, in command order.
    pub const ALL: [Self; 4] =
        [Self::Table, Self::Sphere, Self::Helix, Self::Grid];

    /// Command name of this layout.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Sphere => "sphere",
            Self::Helix => "helix",
            Self::Grid => "grid",
        }
    }

    /// Target transform of item `index` out of `total`.
    #[must_use]
    pub fn transform_for(self, index: usize, total: usize) -> Transform {
        match self {
            Self::Table => geometry::table(index, total),
            Self::Sphere => geometry::sphere(index, total),
            Self::Helix => geometry::helix(index, total),
            Self::Grid => geometry::grid(index, total),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a command name matches no layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLayout(pub String);

impl fmt::Display for UnknownLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown layout {:?}", self.0)
    }
}

impl std::error::Error for UnknownLayout {}

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLayout(s.to_owned()))
    }
}
