//! Pallet specifications.

use nalgebra::Vector3;
use palletpack_core::aabb::AABB3D;
use palletpack_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pallet footprint: the container every orchestrator iteration packs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletSpec {
    /// Dimensions (length, width, height).
    dimensions: Vector3<f64>,

    /// Maximum total load. Overrides the configured capacity when set.
    capacity: Option<f64>,
}

impl PalletSpec {
    /// Creates a pallet with the given dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            dimensions: Vector3::new(length, width, height),
            capacity: None,
        }
    }

    /// Sets the load capacity.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Returns the dimensions (length, width, height).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the length.
    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the load capacity, if set on the pallet.
    pub fn capacity(&self) -> Option<f64> {
        self.capacity
    }

    /// Returns the pallet volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns the pallet's interior as a box anchored at the origin.
    pub fn aabb(&self) -> AABB3D<f64> {
        AABB3D::from_origin_size(&Vector3::zeros(), &self.dimensions)
    }

    /// Checks that the pallet has a positive footprint and capacity.
    pub fn validate(&self) -> Result<()> {
        let dims = [self.dimensions.x, self.dimensions.y, self.dimensions.z];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(Error::InvalidPallet(
                "All dimensions must be positive".into(),
            ));
        }

        if let Some(capacity) = self.capacity {
            if !capacity.is_finite() || capacity <= 0.0 {
                return Err(Error::InvalidPallet("Capacity must be positive".into()));
            }
        }

        Ok(())
    }
}
