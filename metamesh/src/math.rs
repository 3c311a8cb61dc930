//! Math helpers shared by the generators
//!
//! Vector arithmetic comes from glam; this module adds shape orientation and
//! bounding boxes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Squared-length threshold below which a cross product is treated as zero
/// (degenerate triangle or undefined direction).
pub const DEGENERATE_EPSILON: f32 = 1e-12;

/// Principal axis a shape is oriented along.
///
/// Generators build their geometry around +Y; the other axes are reached
/// with a cyclic permutation of the coordinates, which is a proper rotation
/// and therefore keeps triangle winding intact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X axis (left/right)
    X,
    /// Y axis (up/down)
    #[default]
    Y,
    /// Z axis (forward/back)
    Z,
}

impl Axis {
    /// Unit vector along this axis
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Rotate a Y-up vector so that +Y lands on this axis
    #[inline]
    pub fn orient(self, v: Vec3) -> Vec3 {
        match self {
            Axis::X => Vec3::new(v.y, v.z, v.x),
            Axis::Y => v,
            Axis::Z => Vec3::new(v.z, v.x, v.y),
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Bounding box of a point set, or `None` when the set is empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orient_maps_up_to_axis() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            assert_eq!(axis.orient(Vec3::Y), axis.unit());
        }
    }

    #[test]
    fn test_orient_preserves_handedness() {
        // A rotation keeps cross products: orient(a) x orient(b) == orient(a x b)
        let a = Vec3::new(0.3, -1.2, 0.7);
        let b = Vec3::new(2.0, 0.5, -0.4);
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let lhs = axis.orient(a).cross(axis.orient(b));
            let rhs = axis.orient(a.cross(b));
            assert!((lhs - rhs).length() < 1e-5, "{axis:?}");
        }
    }

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points([
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-1.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, -4.0),
        ])
        .unwrap();
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -4.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 3.0, 0.5));
        assert_eq!(aabb.size(), Vec3::new(2.0, 5.0, 4.5));
        assert_eq!(aabb.center(), Vec3::new(0.0, 0.5, -1.75));
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }
}
