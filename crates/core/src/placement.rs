//! Placement representation for positioned items.

use crate::aabb::AABB3D;
use crate::geometry::{ItemInstance, Orientation};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An item's accepted position and orientation inside a pallet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The placed item. Its `orientation` and `pallet` fields are set.
    pub item: ItemInstance,

    /// Minimum corner of the oriented box.
    pub position: Vector3<f64>,

    /// Orientation applied to the item's dimensions.
    pub orientation: Orientation,
}

impl Placement {
    /// Creates a placement, recording the orientation and pallet on the item.
    pub fn new(
        mut item: ItemInstance,
        pallet_index: usize,
        position: Vector3<f64>,
        orientation: Orientation,
    ) -> Self {
        item.orientation = Some(orientation);
        item.pallet = Some(pallet_index);
        Self {
            item,
            position,
            orientation,
        }
    }

    /// Returns the extents of the placed item along the pallet axes.
    pub fn dimensions(&self) -> Vector3<f64> {
        self.orientation.apply(&self.item.dimensions)
    }

    /// Returns the oriented bounding box.
    pub fn aabb(&self) -> AABB3D<f64> {
        AABB3D::from_origin_size(&self.position, &self.dimensions())
    }

    /// Returns the item's label.
    pub fn label(&self) -> &str {
        &self.item.label
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Returns the z coordinate.
    pub fn z(&self) -> f64 {
        self.position.z
    }
}
