//! Shared utilities for pallet packing.
//!
//! - [`expand_items`]: turns box specs into individually tracked instances
//! - [`verify_pallet`]: checks the bounds and overlap invariants of one pallet
//! - [`verify_conservation`]: checks that every instance is accounted for once

use crate::boundary::PalletSpec;
use crate::geometry::BoxSpec;
use palletpack_core::aabb::EPSILON;
use palletpack_core::geometry::ItemInstance;
use palletpack_core::result::{PackResult, PalletLoad};
use palletpack_core::{Error, Result};
use std::collections::HashSet;

/// Expands box specs into item instances.
///
/// Instances keep spec order and, within a spec, sequence order
/// `1..=quantity`. A spec with quantity 0 contributes nothing. Any invalid
/// spec rejects the whole list.
pub fn expand_items(specs: &[BoxSpec]) -> Result<Vec<ItemInstance>> {
    let mut seen_ids: HashSet<&str> = HashSet::new();
    for spec in specs {
        spec.validate()?;
        if !seen_ids.insert(spec.id().as_str()) {
            return Err(Error::InvalidBox(format!(
                "Duplicate box id '{}'",
                spec.id()
            )));
        }
    }

    let total: usize = specs.iter().map(BoxSpec::quantity).sum();
    let mut items = Vec::with_capacity(total);
    for spec in specs {
        for sequence in 1..=spec.quantity() {
            items.push(ItemInstance::new(
                spec.id().clone(),
                sequence,
                *spec.dimensions(),
                spec.weight(),
            ));
        }
    }
    Ok(items)
}

/// Verifies that every placement on a pallet is in bounds, overlaps no other
/// placement and that the pallet's load stays within its capacity.
pub fn verify_pallet(pallet: &PalletSpec, load: &PalletLoad) -> Result<()> {
    let bounds = pallet.aabb();
    let boxes: Vec<_> = load.placements.iter().map(|p| p.aabb()).collect();

    for (i, placement) in load.placements.iter().enumerate() {
        if !bounds.contains_box(&boxes[i], EPSILON) {
            return Err(Error::InvariantViolation(format!(
                "{} lies outside {} at ({}, {}, {})",
                placement.label(),
                load.name,
                placement.x(),
                placement.y(),
                placement.z()
            )));
        }

        if placement.item.pallet != Some(load.index) {
            return Err(Error::InvariantViolation(format!(
                "{} is not assigned to {}",
                placement.label(),
                load.name
            )));
        }

        for (j, other) in load.placements.iter().enumerate().skip(i + 1) {
            if boxes[i].overlaps(&boxes[j], EPSILON) {
                return Err(Error::InvariantViolation(format!(
                    "{} overlaps {} in {}",
                    placement.label(),
                    other.label(),
                    load.name
                )));
            }
        }
    }

    if let Some(capacity) = load.capacity {
        let total = load.load();
        if total > capacity + EPSILON {
            return Err(Error::InvariantViolation(format!(
                "{} carries {} which exceeds capacity {}",
                load.name, total, capacity
            )));
        }
    }

    Ok(())
}

/// Verifies that `result` accounts for exactly the `expected` labels, each
/// exactly once across all pallets and the final unfitted list.
pub fn verify_conservation(expected: &HashSet<String>, result: &PackResult) -> Result<()> {
    let accounted = result.total_items();
    if accounted != expected.len() {
        return Err(Error::InvariantViolation(format!(
            "expected {} items, result accounts for {}",
            expected.len(),
            accounted
        )));
    }

    let mut labels: HashSet<&str> = HashSet::with_capacity(expected.len());
    let fitted = result
        .pallets
        .iter()
        .flat_map(|p| p.placements.iter().map(|pl| pl.label()));
    let unfitted = result.unfitted.iter().map(|i| i.label.as_str());
    for label in fitted.chain(unfitted) {
        if !expected.contains(label) {
            return Err(Error::InvariantViolation(format!(
                "item {} was never offered for packing",
                label
            )));
        }
        if !labels.insert(label) {
            return Err(Error::InvariantViolation(format!(
                "item {} appears more than once",
                label
            )));
        }
    }

    Ok(())
}
