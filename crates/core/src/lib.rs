//! # Palletpack Core
//!
//! Core types shared by the palletpack packing engine.
//!
//! ## Core Components
//!
//! - **Item types**: `ItemInstance`, `Orientation`
//! - **Geometry**: `AABB3D` with touch-tolerant overlap tests
//! - **Results**: `Placement`, `PalletLoad`, `PackResult`, `PackStatistics`
//! - **Solver trait**: `PalletSolver` and `PackConfig`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod aabb;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use aabb::{AABB3D, EPSILON};
pub use error::{Error, Result};
pub use geometry::{BoxId, ItemInstance, Orientation};
pub use placement::Placement;
pub use result::{PackResult, PackStatistics, PalletLoad, PalletStats, Termination};
pub use solver::{PackConfig, PalletOutcome, PalletSolver, DEFAULT_CAPACITY, DEFAULT_MAX_PALLETS};
