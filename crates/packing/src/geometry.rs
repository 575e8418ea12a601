//! Box type specifications.

use nalgebra::Vector3;
use palletpack_core::geometry::{BoxId, Orientation};
use palletpack_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Load each unit contributes when a box spec does not set its own weight.
pub const DEFAULT_UNIT_WEIGHT: f64 = 1.0;

/// A named box shape with a requested quantity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxSpec {
    /// Box type identifier.
    id: BoxId,

    /// Dimensions (length, width, height).
    dimensions: Vector3<f64>,

    /// Number of units requested.
    quantity: usize,

    /// Load per unit, counted against pallet capacity.
    weight: f64,
}

impl BoxSpec {
    /// Creates a box spec with quantity 1 and the default unit weight.
    pub fn new(id: impl Into<BoxId>, length: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            dimensions: Vector3::new(length, width, height),
            quantity: 1,
            weight: DEFAULT_UNIT_WEIGHT,
        }
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, n: usize) -> Self {
        self.quantity = n;
        self
    }

    /// Sets the load per unit.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Returns the identifier.
    pub fn id(&self) -> &BoxId {
        &self.id
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

    /// Returns the requested quantity.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Returns the load per unit.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the volume of one unit.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns the distinct axis-aligned orientations of this box.
    pub fn orientations(&self) -> Vec<Orientation> {
        Orientation::distinct_for(&self.dimensions)
    }

    /// Checks that the spec describes a real box.
    pub fn validate(&self) -> Result<()> {
        let dims = [self.dimensions.x, self.dimensions.y, self.dimensions.z];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(Error::InvalidBox(format!(
                "All dimensions for '{}' must be positive, got {}x{}x{}",
                self.id, dims[0], dims[1], dims[2]
            )));
        }

        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::InvalidBox(format!(
                "Weight for '{}' cannot be negative",
                self.id
            )));
        }

        Ok(())
    }
}
