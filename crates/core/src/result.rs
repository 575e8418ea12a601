//! Pack result representation and derived statistics.

use crate::geometry::{BoxId, ItemInstance};
use crate::placement::Placement;
use nalgebra::Vector3;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why the orchestrator stopped opening pallets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// Every item was placed (or there was nothing to place).
    #[default]
    Completed,
    /// A pallet received zero items; the remaining items cannot be placed.
    Stalled,
    /// The pallet cap was reached with items still remaining.
    PalletCapReached,
}

impl Termination {
    /// Returns a short human-readable description.
    pub fn describe(&self) -> &'static str {
        match self {
            Termination::Completed => "all items packed",
            Termination::Stalled => "no items fitted in the last pallet",
            Termination::PalletCapReached => "pallet limit reached",
        }
    }
}

/// A packed pallet: its footprint and the items placed in it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletLoad {
    /// 1-based pallet index.
    pub index: usize,

    /// Display name, `Pallet-{index}`.
    pub name: String,

    /// Pallet dimensions (length, width, height).
    pub dimensions: Vector3<f64>,

    /// Load capacity applied to this pallet.
    pub capacity: Option<f64>,

    /// Placements in the order the solver accepted them.
    pub placements: Vec<Placement>,

    /// Labels of the items offered to this pallet that did not fit.
    pub leftovers: Vec<String>,
}

impl PalletLoad {
    /// Creates an empty pallet.
    pub fn new(index: usize, dimensions: Vector3<f64>, capacity: Option<f64>) -> Self {
        Self {
            index,
            name: format!("Pallet-{}", index),
            dimensions,
            capacity,
            placements: Vec::new(),
            leftovers: Vec::new(),
        }
    }

    /// Returns the pallet volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns the summed volume of the fitted items.
    pub fn occupied_volume(&self) -> f64 {
        self.placements.iter().map(|p| p.item.volume()).fold(0.0, |acc, v| acc + v)
    }

    /// Returns the summed weight of the fitted items.
    pub fn load(&self) -> f64 {
        self.placements.iter().map(|p| p.item.weight).fold(0.0, |acc, w| acc + w)
    }

    /// Returns occupied volume as a percentage of the pallet volume.
    pub fn occupancy_percent(&self) -> f64 {
        let volume = self.volume();
        if volume > 0.0 {
            self.occupied_volume() / volume * 100.0
        } else {
            0.0
        }
    }

    /// Returns the number of fitted items.
    pub fn fitted_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if nothing was placed on this pallet.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Counts fitted items per box type.
    pub fn box_counts(&self) -> BTreeMap<BoxId, usize> {
        let mut counts = BTreeMap::new();
        for p in &self.placements {
            *counts.entry(p.item.box_id.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Result of packing a list of box specs onto pallets.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Pallets in the order they were packed.
    pub pallets: Vec<PalletLoad>,

    /// Items that could not be placed on any pallet.
    pub unfitted: Vec<ItemInstance>,

    /// Why packing stopped.
    pub termination: Termination,
}

impl PackResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of pallets used.
    pub fn pallets_used(&self) -> usize {
        self.pallets.len()
    }

    /// Returns the number of placed item instances.
    pub fn packed_count(&self) -> usize {
        self.pallets.iter().map(PalletLoad::fitted_count).sum()
    }

    /// Returns the number of item instances left unplaced.
    pub fn unpacked_count(&self) -> usize {
        self.unfitted.len()
    }

    /// Returns the total number of item instances the result accounts for.
    pub fn total_items(&self) -> usize {
        self.packed_count() + self.unpacked_count()
    }

    /// Returns true if every item was placed.
    pub fn all_packed(&self) -> bool {
        self.unfitted.is_empty()
    }

    /// Returns the labels of the unplaced items.
    pub fn unfitted_labels(&self) -> Vec<String> {
        self.unfitted.iter().map(|i| i.label.clone()).collect()
    }

    /// Computes the derived statistics.
    pub fn statistics(&self) -> PackStatistics {
        PackStatistics::from(self)
    }
}

/// Statistics for a single pallet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletStats {
    /// 1-based pallet index.
    pub index: usize,
    /// Pallet name.
    pub name: String,
    /// Number of fitted items.
    pub fitted_count: usize,
    /// Fitted items per box type.
    pub box_counts: BTreeMap<BoxId, usize>,
    /// Summed volume of the fitted items.
    pub occupied_volume: f64,
    /// Pallet volume.
    pub pallet_volume: f64,
    /// Occupied volume as a percentage of the pallet volume (unrounded).
    pub occupancy_percent: f64,
}

impl From<&PalletLoad> for PalletStats {
    fn from(pallet: &PalletLoad) -> Self {
        Self {
            index: pallet.index,
            name: pallet.name.clone(),
            fitted_count: pallet.fitted_count(),
            box_counts: pallet.box_counts(),
            occupied_volume: pallet.occupied_volume(),
            pallet_volume: pallet.volume(),
            occupancy_percent: pallet.occupancy_percent(),
        }
    }
}

/// Summary statistics across all pallets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackStatistics {
    /// Per-pallet statistics.
    pub pallets: Vec<PalletStats>,
    /// Total pallets used.
    pub total_pallets: usize,
    /// Total items packed.
    pub total_packed: usize,
    /// Total items left unpacked.
    pub total_unpacked: usize,
    /// Summed fitted volume across all pallets.
    pub total_occupied_volume: f64,
    /// Summed pallet volume across all used pallets.
    pub total_pallet_volume: f64,
    /// Overall volume utilization percentage; 0 when no pallet was used.
    pub utilization_percent: f64,
}

impl From<&PackResult> for PackStatistics {
    fn from(result: &PackResult) -> Self {
        let pallets: Vec<PalletStats> = result.pallets.iter().map(PalletStats::from).collect();
        // Folding from +0.0; an empty f64 sum is -0.0.
        let total_occupied_volume = pallets.iter().fold(0.0, |acc, p| acc + p.occupied_volume);
        let total_pallet_volume = pallets.iter().fold(0.0, |acc, p| acc + p.pallet_volume);
        let utilization_percent = if total_pallet_volume > 0.0 {
            total_occupied_volume / total_pallet_volume * 100.0
        } else {
            0.0
        };

        Self {
            total_pallets: pallets.len(),
            total_packed: pallets.iter().map(|p| p.fitted_count).sum(),
            total_unpacked: result.unfitted.len(),
            total_occupied_volume,
            total_pallet_volume,
            utilization_percent,
            pallets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Orientation;
    use approx::assert_relative_eq;

    fn item(box_id: &str, seq: usize, size: f64) -> ItemInstance {
        ItemInstance::new(box_id, seq, Vector3::new(size, size, size), 1.0)
    }

    fn pallet_with(index: usize, items: Vec<ItemInstance>) -> PalletLoad {
        let mut pallet = PalletLoad::new(index, Vector3::new(10.0, 10.0, 10.0), Some(1000.0));
        let mut x = 0.0;
        for it in items {
            let size = it.dimensions.x;
            pallet
                .placements
                .push(Placement::new(it, index, Vector3::new(x, 0.0, 0.0), Orientation::IDENTITY));
            x += size;
        }
        pallet
    }

    #[test]
    fn test_result_new() {
        let result = PackResult::new();
        assert!(result.pallets.is_empty());
        assert!(result.all_packed());
        assert_eq!(result.termination, Termination::Completed);
    }

    #[test]
    fn test_pallet_naming_and_volume() {
        let pallet = PalletLoad::new(3, Vector3::new(10.0, 10.0, 10.0), None);
        assert_eq!(pallet.name, "Pallet-3");
        assert_relative_eq!(pallet.volume(), 1000.0);
        assert!(pallet.is_empty());
        assert_relative_eq!(pallet.occupancy_percent(), 0.0);
    }

    #[test]
    fn test_box_counts_use_box_id() {
        let pallet = pallet_with(1, vec![item("A", 1, 2.0), item("B-X", 1, 2.0), item("A", 2, 2.0)]);
        let counts = pallet.box_counts();
        assert_eq!(counts.get("A"), Some(&2));
        assert_eq!(counts.get("B-X"), Some(&1));
        assert_relative_eq!(pallet.load(), 3.0);
    }

    #[test]
    fn test_statistics() {
        let mut result = PackResult::new();
        result.pallets.push(pallet_with(1, vec![item("A", 1, 10.0)]));
        result.pallets.push(pallet_with(2, vec![item("C", 1, 5.0)]));
        result.unfitted.push(item("Z", 1, 20.0));

        let stats = result.statistics();
        assert_eq!(stats.total_pallets, 2);
        assert_eq!(stats.total_packed, 2);
        assert_eq!(stats.total_unpacked, 1);
        assert_relative_eq!(stats.pallets[0].occupancy_percent, 100.0);
        assert_relative_eq!(stats.pallets[1].occupancy_percent, 12.5);
        assert_relative_eq!(stats.total_occupied_volume, 1125.0);
        assert_relative_eq!(stats.utilization_percent, 56.25);
        assert_eq!(result.total_items(), 3);
    }

    #[test]
    fn test_statistics_without_pallets() {
        let stats = PackResult::new().statistics();
        assert_eq!(stats.total_pallets, 0);
        assert_relative_eq!(stats.utilization_percent, 0.0);
    }

    #[test]
    fn test_empty_pallet_reports_positive_zero() {
        let mut result = PackResult::new();
        result.pallets.push(PalletLoad::new(1, Vector3::new(10.0, 10.0, 10.0), None));
        result.unfitted.push(item("X", 1, 20.0));
        result.termination = Termination::Stalled;

        let pallet = &result.pallets[0];
        assert!(pallet.occupied_volume().is_sign_positive());
        assert!(pallet.load().is_sign_positive());
        assert!(pallet.occupancy_percent().is_sign_positive());

        let stats = result.statistics();
        assert!(stats.pallets[0].occupied_volume.is_sign_positive());
        assert!(stats.pallets[0].occupancy_percent.is_sign_positive());
        assert!(stats.total_occupied_volume.is_sign_positive());
        assert!(stats.utilization_percent.is_sign_positive());
        assert_eq!(format!("{:.1}", stats.utilization_percent), "0.0");
    }
}
