//! Packing response schema.

use crate::report::{render_breakdown, render_report};
use crate::request::{PackingRequest, RequestError};
use palletpack_core::geometry::BoxId;
use palletpack_core::placement::Placement;
use palletpack_core::result::{PackResult, PackStatistics, PalletLoad, Termination};
use palletpack_core::solver::PackConfig;
use palletpack_packing::PalletPacker;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where one item ended up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementResponse {
    pub label: String,
    pub box_id: BoxId,
    pub position: [f64; 3],
    pub dimensions: [f64; 3],
}

impl From<&Placement> for PlacementResponse {
    fn from(p: &Placement) -> Self {
        let d = p.dimensions();
        Self {
            label: p.label().to_string(),
            box_id: p.item.box_id.clone(),
            position: [p.x(), p.y(), p.z()],
            dimensions: [d.x, d.y, d.z],
        }
    }
}

/// One packed pallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalletResponse {
    pub name: String,
    pub box_counts: BTreeMap<BoxId, usize>,
    pub fitted: Vec<String>,
    pub unfitted: Vec<String>,
    pub occupied_volume: f64,
    pub occupancy_percent: f64,
    pub placements: Vec<PlacementResponse>,
}

impl From<&PalletLoad> for PalletResponse {
    fn from(load: &PalletLoad) -> Self {
        Self {
            name: load.name.clone(),
            box_counts: load.box_counts(),
            fitted: load.placements.iter().map(|p| p.label().to_string()).collect(),
            unfitted: load.leftovers.clone(),
            occupied_volume: load.occupied_volume(),
            occupancy_percent: load.occupancy_percent(),
            placements: load.placements.iter().map(PlacementResponse::from).collect(),
        }
    }
}

/// Everything a caller gets back for a request.
#[derive(Debug, Clone, Serialize)]
pub struct PackingResponse {
    pub total_pallets: usize,
    pub unfitted_count: usize,
    pub pallets: Vec<PalletResponse>,
    pub unfitted_items: Vec<String>,
    pub termination: Termination,
    pub statistics: PackStatistics,
    pub prep_output: String,
    pub report_output: String,
}

impl PackingResponse {
    /// Validates and packs a request.
    pub fn run(request: &PackingRequest, base: PackConfig) -> Result<Self, RequestError> {
        let specs = request.box_specs()?;
        let pallet = request.pallet();
        let config = request.config(base);

        let result = PalletPacker::new(config).pack(&specs, &pallet)?;

        let prep_output = render_breakdown(&specs);
        let report_output = render_report(&result, &pallet);
        Ok(Self::from_result(&result, prep_output, report_output))
    }

    /// Builds the response from a finished pack.
    pub fn from_result(result: &PackResult, prep_output: String, report_output: String) -> Self {
        Self {
            total_pallets: result.pallets_used(),
            unfitted_count: result.unpacked_count(),
            pallets: result.pallets.iter().map(PalletResponse::from).collect(),
            unfitted_items: result.unfitted_labels(),
            termination: result.termination,
            statistics: result.statistics(),
            prep_output,
            report_output,
        }
    }
}
