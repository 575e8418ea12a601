//! Multi-pallet orchestrator.

use crate::boundary::PalletSpec;
use crate::extreme_point::ExtremePointSolver;
use crate::geometry::BoxSpec;
use crate::packing_utils::{expand_items, verify_conservation, verify_pallet};
use palletpack_core::geometry::ItemInstance;
use palletpack_core::result::{PackResult, PalletLoad, Termination};
use palletpack_core::solver::{PackConfig, PalletSolver};
use palletpack_core::{Error, Result};
use std::collections::HashSet;

/// Packs item instances onto successive pallets.
///
/// Each iteration opens a fresh pallet and hands it everything the previous
/// pallet could not take. Packing stops once every item is placed, a pallet
/// receives nothing, or `max_pallets` pallets have been opened.
pub struct PalletPacker<S = ExtremePointSolver> {
    config: PackConfig,
    solver: S,
}

impl PalletPacker<ExtremePointSolver> {
    /// Creates a packer using the extreme point solver.
    pub fn new(config: PackConfig) -> Self {
        let solver = ExtremePointSolver::new(config.clone());
        Self { config, solver }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(PackConfig::default())
    }
}

impl<S> PalletPacker<S>
where
    S: PalletSolver<Container = PalletSpec>,
{
    /// Creates a packer with a custom single-pallet solver.
    pub fn with_solver(config: PackConfig, solver: S) -> Self {
        Self { config, solver }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Expands `specs` into instances and packs them onto pallets.
    pub fn pack(&self, specs: &[BoxSpec], pallet: &PalletSpec) -> Result<PackResult> {
        let items = expand_items(specs)?;
        log::debug!(
            "Total items to pack: {} from {} box types",
            items.len(),
            specs.len()
        );
        for spec in specs {
            log::debug!(
                "  {}: {} boxes ({}x{}x{})",
                spec.id(),
                spec.quantity(),
                spec.length(),
                spec.width(),
                spec.height()
            );
        }
        self.pack_items(items, pallet)
    }

    /// Packs already expanded instances onto pallets.
    pub fn pack_items(&self, items: Vec<ItemInstance>, pallet: &PalletSpec) -> Result<PackResult> {
        self.config.validate()?;
        pallet.validate()?;

        let expected = items.len();
        let offered_labels: HashSet<String> = items.iter().map(|i| i.label.clone()).collect();
        let capacity = pallet.capacity().or(self.config.capacity);

        let mut result = PackResult::new();
        let mut remaining = items;
        let mut pallet_index = 1;
        let mut stalled = false;

        while !remaining.is_empty() && pallet_index <= self.config.max_pallets {
            let offered = remaining.len();
            log::debug!(
                "Packing Pallet {} with {} remaining items",
                pallet_index,
                offered
            );

            let outcome = self.solver.solve_pallet(pallet, pallet_index, remaining)?;
            if outcome.len() != offered {
                return Err(Error::InvariantViolation(format!(
                    "solver returned {} items for pallet {}, expected {}",
                    outcome.len(),
                    pallet_index,
                    offered
                )));
            }

            let mut load = PalletLoad::new(pallet_index, *pallet.dimensions(), capacity);
            load.leftovers = outcome.unfitted.iter().map(|i| i.label.clone()).collect();
            load.placements = outcome.fitted;
            if self.config.verify {
                verify_pallet(pallet, &load)?;
            }

            log::debug!(
                "{}: fitted {}, unfitted {}, box counts {:?}",
                load.name,
                load.fitted_count(),
                load.leftovers.len(),
                load.box_counts()
            );

            stalled = load.is_empty();
            result.pallets.push(load);
            remaining = outcome.unfitted;

            if stalled {
                log::warn!(
                    "No items fitted in pallet {}; stopping with {} items unplaced",
                    pallet_index,
                    remaining.len()
                );
                break;
            }
            pallet_index += 1;
        }

        result.termination = if remaining.is_empty() {
            Termination::Completed
        } else if stalled {
            Termination::Stalled
        } else {
            log::warn!(
                "Pallet limit of {} reached with {} items unplaced",
                self.config.max_pallets,
                remaining.len()
            );
            Termination::PalletCapReached
        };
        result.unfitted = remaining;

        if self.config.verify {
            verify_conservation(&offered_labels, &result)?;
        }

        log::info!(
            "Packed {} of {} items on {} pallets ({})",
            result.packed_count(),
            expected,
            result.pallets_used(),
            result.termination.describe()
        );

        Ok(result)
    }
}
