//! # Palletpack
//!
//! Multi-pallet 3D box packing engine.
//!
//! Boxes are expanded into labelled instances, sorted by volume, and loaded
//! onto identical pallets one pallet at a time using extreme point placement.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use palletpack::packing::{BoxSpec, PalletPacker, PalletSpec};
//!
//! let boxes = vec![
//!     BoxSpec::new("A", 10.0, 10.0, 10.0).with_quantity(5),
//!     BoxSpec::new("B", 4.0, 3.0, 2.0).with_quantity(18),
//! ];
//! let pallet = PalletSpec::new(10.0, 10.0, 10.0);
//!
//! let result = PalletPacker::default_config().pack(&boxes, &pallet)?;
//! println!("{} pallets used", result.pallets_used());
//! ```
//!
//! ## Feature Flags
//!
//! - `packing` (default): the extreme point solver and pallet orchestration
//! - `serde`: Serialization support

/// Core types and traits.
pub use palletpack_core as core;

/// Pallet packing algorithms.
#[cfg(feature = "packing")]
pub use palletpack_packing as packing;

// Re-export commonly used types at root level
pub use palletpack_core::{
    Error, PackConfig, PackResult, PackStatistics, PalletLoad, Placement, Result, Termination,
};

#[cfg(feature = "packing")]
pub use palletpack_packing::{BoxSpec, PalletPacker, PalletSpec};
