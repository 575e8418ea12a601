//! # Palletpack Packing
//!
//! Multi-pallet box packing for the palletpack engine.
//!
//! Box specs are expanded into individually labelled instances, packed into
//! one pallet at a time by a first-fit-decreasing extreme point solver, and
//! whatever does not fit rolls over to the next pallet.

pub mod boundary;
pub mod extreme_point;
pub mod geometry;
pub mod packer;
pub mod packing_utils;

// Re-exports
pub use boundary::PalletSpec;
pub use extreme_point::{ExtremePointSet, ExtremePointSolver};
pub use geometry::BoxSpec;
pub use packer::PalletPacker;
pub use packing_utils::expand_items;
pub use palletpack_core::{
    Error, PackConfig, PackResult, PackStatistics, PalletLoad, PalletSolver, Placement, Result,
    Termination,
};
