//! Solver traits and configuration.

use crate::geometry::ItemInstance;
use crate::placement::Placement;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default ceiling on the number of pallets opened per request.
pub const DEFAULT_MAX_PALLETS: usize = 100;

/// Default per-pallet load capacity.
pub const DEFAULT_CAPACITY: f64 = 1000.0;

/// Configuration for multi-pallet packing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackConfig {
    /// Maximum number of pallets to open.
    pub max_pallets: usize,

    /// Per-pallet load capacity, `None` for unlimited.
    /// A capacity set on the pallet itself takes precedence.
    pub capacity: Option<f64>,

    /// Check overlap, bounds and conservation after every pallet.
    pub verify: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            max_pallets: DEFAULT_MAX_PALLETS,
            capacity: Some(DEFAULT_CAPACITY),
            verify: true,
        }
    }
}

impl PackConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pallet cap.
    pub fn with_max_pallets(mut self, max_pallets: usize) -> Self {
        self.max_pallets = max_pallets;
        self
    }

    /// Sets the per-pallet load capacity.
    pub fn with_capacity(mut self, capacity: Option<f64>) -> Self {
        self.capacity = capacity;
        self
    }

    /// Enables or disables invariant verification.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_pallets == 0 {
            return Err(Error::ConfigError(
                "max_pallets must be at least 1".into(),
            ));
        }
        if let Some(capacity) = self.capacity {
            if !(capacity.is_finite() && capacity > 0.0) {
                return Err(Error::ConfigError(format!(
                    "capacity must be a positive number, got {}",
                    capacity
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of packing a single pallet.
#[derive(Debug, Clone, Default)]
pub struct PalletOutcome {
    /// Accepted placements, in acceptance order.
    pub fitted: Vec<Placement>,
    /// Items that did not fit, in the order they were tried.
    pub unfitted: Vec<ItemInstance>,
}

impl PalletOutcome {
    /// Returns the number of items the outcome accounts for.
    pub fn len(&self) -> usize {
        self.fitted.len() + self.unfitted.len()
    }

    /// Returns true if the outcome holds no items.
    pub fn is_empty(&self) -> bool {
        self.fitted.is_empty() && self.unfitted.is_empty()
    }
}

/// Trait for single-pallet placement solvers.
///
/// A solver takes ownership of the items offered to one empty pallet and
/// hands every one of them back, either as a placement or as unfitted.
pub trait PalletSolver {
    /// The container type this solver packs.
    type Container;

    /// Packs `items` into an empty `container` numbered `pallet_index`.
    fn solve_pallet(
        &self,
        container: &Self::Container,
        pallet_index: usize,
        items: Vec<ItemInstance>,
    ) -> Result<PalletOutcome>;
}
