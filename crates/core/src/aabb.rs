//! Axis-aligned bounding boxes.

use nalgebra::{RealField, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometric tolerance used by all containment and overlap tests.
pub const EPSILON: f64 = 1e-9;

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB3D<S> {
    /// Minimum x coordinate.
    pub min_x: S,
    /// Minimum y coordinate.
    pub min_y: S,
    /// Minimum z coordinate.
    pub min_z: S,
    /// Maximum x coordinate.
    pub max_x: S,
    /// Maximum y coordinate.
    pub max_y: S,
    /// Maximum z coordinate.
    pub max_z: S,
}

impl<S: RealField + Copy> AABB3D<S> {
    /// Creates a new AABB from min/max coordinates.
    pub fn new(min_x: S, min_y: S, min_z: S, max_x: S, max_y: S, max_z: S) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Creates an AABB from its minimum corner and its extent along each axis.
    pub fn from_origin_size(origin: &Vector3<S>, size: &Vector3<S>) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.z,
            origin.x + size.x,
            origin.y + size.y,
            origin.z + size.z,
        )
    }

    /// Returns the width (x dimension) of the AABB.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Returns the depth (y dimension) of the AABB.
    pub fn depth(&self) -> S {
        self.max_y - self.min_y
    }

    /// Returns the height (z dimension) of the AABB.
    pub fn height(&self) -> S {
        self.max_z - self.min_z
    }

    /// Returns the volume of the AABB.
    pub fn volume(&self) -> S {
        self.width() * self.depth() * self.height()
    }

    /// Returns the minimum corner.
    pub fn min_corner(&self) -> Vector3<S> {
        Vector3::new(self.min_x, self.min_y, self.min_z)
    }

    /// Returns the maximum corner.
    pub fn max_corner(&self) -> Vector3<S> {
        Vector3::new(self.max_x, self.max_y, self.max_z)
    }

    /// Checks whether the interiors of two boxes intersect.
    ///
    /// Boxes that only share a face, edge or corner do not overlap.
    pub fn overlaps(&self, other: &Self, eps: S) -> bool {
        let apart_x = self.min_x >= other.max_x - eps || other.min_x >= self.max_x - eps;
        let apart_y = self.min_y >= other.max_y - eps || other.min_y >= self.max_y - eps;
        let apart_z = self.min_z >= other.max_z - eps || other.min_z >= self.max_z - eps;
        !(apart_x || apart_y || apart_z)
    }

    /// Checks whether `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &Self, eps: S) -> bool {
        other.min_x >= self.min_x - eps
            && other.min_y >= self.min_y - eps
            && other.min_z >= self.min_z - eps
            && other.max_x <= self.max_x + eps
            && other.max_y <= self.max_y + eps
            && other.max_z <= self.max_z + eps
    }

    /// Checks whether a point is covered by this box.
    ///
    /// The minimum faces are closed and the maximum faces are open, so a point
    /// sitting on a far face belongs to the space beyond the box.
    pub fn covers_point(&self, point: &Vector3<S>, eps: S) -> bool {
        point.x > self.min_x - eps
            && point.x < self.max_x - eps
            && point.y > self.min_y - eps
            && point.y < self.max_y - eps
            && point.z > self.min_z - eps
            && point.z < self.max_z - eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube(x: f64, y: f64, z: f64, size: f64) -> AABB3D<f64> {
        AABB3D::new(x, y, z, x + size, y + size, z + size)
    }

    #[test]
    fn test_aabb3d_volume() {
        let aabb = AABB3D::new(0.0, 0.0, 0.0, 10.0, 20.0, 30.0);
        assert_relative_eq!(aabb.volume(), 6000.0);
    }

    #[test]
    fn test_from_origin_size() {
        let aabb = AABB3D::from_origin_size(&Vector3::new(1.0, 2.0, 3.0), &Vector3::new(4.0, 5.0, 6.0));
        assert_relative_eq!(aabb.max_x, 5.0);
        assert_relative_eq!(aabb.max_y, 7.0);
        assert_relative_eq!(aabb.max_z, 9.0);
    }

    #[test]
    fn test_overlap_interior() {
        let a = cube(0.0, 0.0, 0.0, 10.0);
        assert!(a.overlaps(&cube(5.0, 5.0, 5.0, 10.0), EPSILON));
        assert!(a.overlaps(&cube(2.0, 2.0, 2.0, 1.0), EPSILON));
    }

    #[test]
    fn test_touching_faces_do_not_overlap() {
        let a = cube(0.0, 0.0, 0.0, 10.0);
        assert!(!a.overlaps(&cube(10.0, 0.0, 0.0, 10.0), EPSILON));
        assert!(!a.overlaps(&cube(0.0, 10.0, 0.0, 10.0), EPSILON));
        assert!(!a.overlaps(&cube(0.0, 0.0, 10.0, 10.0), EPSILON));
        assert!(!a.overlaps(&cube(10.0, 10.0, 10.0, 1.0), EPSILON));
    }

    #[test]
    fn test_contains_box() {
        let pallet = cube(0.0, 0.0, 0.0, 10.0);
        assert!(pallet.contains_box(&cube(0.0, 0.0, 0.0, 10.0), EPSILON));
        assert!(pallet.contains_box(&cube(5.0, 5.0, 5.0, 5.0), EPSILON));
        assert!(!pallet.contains_box(&cube(5.0, 5.0, 5.0, 6.0), EPSILON));
    }

    #[test]
    fn test_covers_point_half_open() {
        let a = cube(0.0, 0.0, 0.0, 10.0);
        assert!(a.covers_point(&Vector3::new(0.0, 0.0, 0.0), EPSILON));
        assert!(a.covers_point(&Vector3::new(5.0, 5.0, 5.0), EPSILON));
        assert!(!a.covers_point(&Vector3::new(10.0, 0.0, 0.0), EPSILON));
        assert!(!a.covers_point(&Vector3::new(0.0, 0.0, 10.0), EPSILON));
    }
}
