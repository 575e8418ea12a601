//! Extreme Point heuristic for single-pallet packing.
//!
//! Items are sorted by decreasing volume and placed first-fit at candidate
//! insertion points. The candidate set starts with the pallet origin; every
//! accepted box contributes up to three new points at its far corners along
//! each axis. Points are always visited bottom-back-left first (increasing
//! z, then y, then x), so the result is fully deterministic.
//!
//! # References
//!
//! - Crainic, T. G., Perboli, G., & Tadei, R. (2008). Extreme point-based heuristics
//!   for three-dimensional bin packing.

use crate::boundary::PalletSpec;
use nalgebra::Vector3;
use palletpack_core::aabb::{AABB3D, EPSILON};
use palletpack_core::geometry::{ItemInstance, Orientation};
use palletpack_core::placement::Placement;
use palletpack_core::solver::{PackConfig, PalletOutcome, PalletSolver};
use palletpack_core::{Error, Result};
use std::cmp::Ordering;

/// Orders candidate points by increasing z, then y, then x.
///
/// Coordinates closer than `EPSILON` compare equal on that axis.
pub fn compare_points(a: &Vector3<f64>, b: &Vector3<f64>) -> Ordering {
    for axis in [2, 1, 0] {
        let (u, v) = (a[axis], b[axis]);
        if (u - v).abs() > EPSILON {
            return u.total_cmp(&v);
        }
    }
    Ordering::Equal
}

/// Candidate insertion points and placed boxes of one pallet.
#[derive(Debug, Clone)]
pub struct ExtremePointSet {
    /// Candidate points, kept sorted by [`compare_points`] and free of duplicates.
    points: Vec<Vector3<f64>>,
    /// Pallet interior.
    container: AABB3D<f64>,
    /// Boxes accepted so far.
    placed: Vec<AABB3D<f64>>,
}

impl ExtremePointSet {
    /// Creates the point set of an empty pallet, seeded with the origin.
    pub fn new(pallet: &PalletSpec) -> Self {
        Self {
            points: vec![Vector3::zeros()],
            container: pallet.aabb(),
            placed: Vec::new(),
        }
    }

    /// Returns the number of candidate points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no candidate point is left.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the candidate points in visiting order.
    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    /// Returns the boxes placed so far.
    pub fn placed_boxes(&self) -> &[AABB3D<f64>] {
        &self.placed
    }

    /// Returns total placed volume.
    pub fn total_volume(&self) -> f64 {
        self.placed.iter().map(AABB3D::volume).fold(0.0, |acc, v| acc + v)
    }

    /// Checks whether a box with extents `dims` can sit at `position`.
    pub fn fits_at(&self, position: &Vector3<f64>, dims: &Vector3<f64>) -> bool {
        let candidate = AABB3D::from_origin_size(position, dims);
        self.container.contains_box(&candidate, EPSILON)
            && !self.placed.iter().any(|b| b.overlaps(&candidate, EPSILON))
    }

    /// Finds the first acceptable (point, orientation) pair.
    ///
    /// Points are visited in comparator order and, at each point, the
    /// orientations in the order given.
    pub fn find_fit(
        &self,
        orientations: &[(Orientation, Vector3<f64>)],
    ) -> Option<(Vector3<f64>, Orientation, Vector3<f64>)> {
        self.points.iter().find_map(|point| {
            orientations
                .iter()
                .find(|(_, dims)| self.fits_at(point, dims))
                .map(|(orientation, dims)| (*point, *orientation, *dims))
        })
    }

    /// Records a box and updates the candidate points.
    ///
    /// Points covered by the new box (including the one it was placed on)
    /// are dropped, then the box's three far-corner points are added.
    pub fn commit(&mut self, position: Vector3<f64>, dims: Vector3<f64>) {
        let placed = AABB3D::from_origin_size(&position, &dims);
        self.points.retain(|p| !placed.covers_point(p, EPSILON));
        self.placed.push(placed);

        let max = placed.max_corner();
        let new_points = [
            Vector3::new(max.x, position.y, position.z),
            Vector3::new(position.x, max.y, position.z),
            Vector3::new(position.x, position.y, max.z),
        ];
        for point in new_points {
            self.insert_point(point);
        }
    }

    /// Adds a point unless it lies on or beyond a far pallet face, inside a
    /// placed box, or on top of an existing point.
    fn insert_point(&mut self, point: Vector3<f64>) {
        let beyond = point.x >= self.container.max_x - EPSILON
            || point.y >= self.container.max_y - EPSILON
            || point.z >= self.container.max_z - EPSILON;
        if beyond {
            return;
        }

        if self.placed.iter().any(|b| b.covers_point(&point, EPSILON)) {
            return;
        }

        match self
            .points
            .binary_search_by(|existing| compare_points(existing, &point))
        {
            Ok(_) => {}
            Err(idx) => self.points.insert(idx, point),
        }
    }
}

/// First-fit-decreasing extreme point solver for a single pallet.
#[derive(Debug, Clone, Default)]
pub struct ExtremePointSolver {
    config: PackConfig,
}

impl ExtremePointSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: PackConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PackConfig {
        &self.config
    }
}

impl PalletSolver for ExtremePointSolver {
    type Container = PalletSpec;

    fn solve_pallet(
        &self,
        pallet: &PalletSpec,
        pallet_index: usize,
        items: Vec<ItemInstance>,
    ) -> Result<PalletOutcome> {
        pallet.validate()?;
        for item in &items {
            let d = item.dimensions;
            if [d.x, d.y, d.z].iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(Error::InvalidBox(format!(
                    "{} has non-positive dimensions {}x{}x{}",
                    item.label, d.x, d.y, d.z
                )));
            }
        }

        let capacity = pallet.capacity().or(self.config.capacity);

        // Stable: equal volumes keep their input order.
        let mut order = items;
        order.sort_by(|a, b| b.volume().total_cmp(&a.volume()));

        let mut eps = ExtremePointSet::new(pallet);
        let mut outcome = PalletOutcome::default();
        let mut load = 0.0;

        for item in order {
            if let Some(max) = capacity {
                if load + item.weight > max + EPSILON {
                    log::trace!("{} exceeds remaining capacity", item.label);
                    outcome.unfitted.push(item);
                    continue;
                }
            }

            let orientations: Vec<(Orientation, Vector3<f64>)> =
                Orientation::distinct_for(&item.dimensions)
                    .into_iter()
                    .map(|o| (o, o.apply(&item.dimensions)))
                    .collect();

            match eps.find_fit(&orientations) {
                Some((position, orientation, dims)) => {
                    eps.commit(position, dims);
                    load += item.weight;
                    outcome
                        .fitted
                        .push(Placement::new(item, pallet_index, position, orientation));
                }
                None => {
                    log::trace!("{} does not fit", item.label);
                    outcome.unfitted.push(item);
                }
            }
        }

        Ok(outcome)
    }
}
