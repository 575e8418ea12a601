//! Command-line front end for palletpack.
//!
//! This crate provides:
//! - The JSON request/response schema exchanged with callers
//! - Request validation ahead of the packing engine
//! - The plain-text pallet report

mod report;
mod request;
mod response;

pub use report::{render_breakdown, render_report};
pub use request::{write_output, BoxInput, PackingRequest, RequestError};
pub use response::{PackingResponse, PalletResponse, PlacementResponse};
