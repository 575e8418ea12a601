//! Packing request schema and validation.

use palletpack_core::solver::PackConfig;
use palletpack_packing::{BoxSpec, PalletSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when reading or running a request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to read request: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    PackError(#[from] palletpack_core::Error),
}

/// Writes rendered output to `path`.
pub fn write_output(path: impl AsRef<Path>, contents: &str) -> Result<(), RequestError> {
    let path = path.as_ref();
    fs::write(path, contents)?;
    log::info!("Output saved to: {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// One box type in a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxInput {
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Signed so that a negative quantity is reported as invalid input
    /// rather than as a JSON type error.
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl BoxInput {
    pub fn new(name: impl Into<String>, length: f64, width: f64, height: f64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            length,
            width,
            height,
            quantity,
            weight: None,
        }
    }
}

/// A packing request: pallet footprint plus the boxes to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingRequest {
    pub pallet_l: f64,
    pub pallet_w: f64,
    pub pallet_h: f64,
    pub boxes: Vec<BoxInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pallets: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
}

impl PackingRequest {
    /// Reads a request from a JSON file, or from stdin when `path` is `-`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let path = path.as_ref();
        let content = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(path)?
        };
        Self::from_json(&content)
    }

    /// Parses a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The sample load: a 10x10x10 pallet with three box types.
    pub fn sample() -> Self {
        Self {
            pallet_l: 10.0,
            pallet_w: 10.0,
            pallet_h: 10.0,
            boxes: vec![
                BoxInput::new("C", 5.0, 5.0, 5.0, 4),
                BoxInput::new("A", 10.0, 10.0, 10.0, 5),
                BoxInput::new("B", 4.0, 3.0, 2.0, 18),
            ],
            max_pallets: None,
            capacity: None,
        }
    }

    /// Rejects malformed requests before they reach the packing engine.
    pub fn validate(&self) -> Result<(), RequestError> {
        for (label, value) in [
            ("pallet_l", self.pallet_l),
            ("pallet_w", self.pallet_w),
            ("pallet_h", self.pallet_h),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RequestError::InvalidRequest(format!(
                    "{} must be positive, got {}",
                    label, value
                )));
            }
        }

        for b in &self.boxes {
            if b.name.trim().is_empty() {
                return Err(RequestError::InvalidRequest("box name must not be empty".into()));
            }
            for (label, value) in [("length", b.length), ("width", b.width), ("height", b.height)] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(RequestError::InvalidRequest(format!(
                        "{} of box '{}' must be positive, got {}",
                        label, b.name, value
                    )));
                }
            }
            if b.quantity < 0 {
                return Err(RequestError::InvalidRequest(format!(
                    "quantity of box '{}' must not be negative, got {}",
                    b.name, b.quantity
                )));
            }
        }

        if self.max_pallets == Some(0) {
            return Err(RequestError::InvalidRequest("max_pallets must be at least 1".into()));
        }

        Ok(())
    }

    /// Converts the boxes to engine box specs.
    pub fn box_specs(&self) -> Result<Vec<BoxSpec>, RequestError> {
        self.validate()?;
        self.boxes
            .iter()
            .map(|b| {
                let quantity = usize::try_from(b.quantity).map_err(|_| {
                    RequestError::InvalidRequest(format!("quantity of box '{}' is out of range", b.name))
                })?;
                let mut spec = BoxSpec::new(b.name.clone(), b.length, b.width, b.height)
                    .with_quantity(quantity);
                if let Some(weight) = b.weight {
                    spec = spec.with_weight(weight);
                }
                Ok(spec)
            })
            .collect()
    }

    /// Returns the pallet footprint.
    pub fn pallet(&self) -> PalletSpec {
        PalletSpec::new(self.pallet_l, self.pallet_w, self.pallet_h)
    }

    /// Applies request-level overrides on top of `base`.
    pub fn config(&self, base: PackConfig) -> PackConfig {
        let mut config = base;
        if let Some(max_pallets) = self.max_pallets {
            config = config.with_max_pallets(max_pallets);
        }
        if let Some(capacity) = self.capacity {
            config = config.with_capacity(Some(capacity));
        }
        config
    }
}
