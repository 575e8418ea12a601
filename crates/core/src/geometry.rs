//! Item instances and axis-aligned orientations.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a box type.
pub type BoxId = String;

/// An axis-aligned orientation: a permutation of the three box dimensions.
///
/// `axes[i]` names which original dimension (0 = length, 1 = width,
/// 2 = height) lies along pallet axis `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    axes: [usize; 3],
}

impl Orientation {
    /// The original orientation.
    pub const IDENTITY: Orientation = Orientation { axes: [0, 1, 2] };

    /// All six axis-aligned orientations in a fixed order.
    pub const ALL: [Orientation; 6] = [
        Orientation { axes: [0, 1, 2] }, // Original
        Orientation { axes: [0, 2, 1] }, // Rotated 90° around X
        Orientation { axes: [1, 0, 2] }, // Rotated 90° around Z
        Orientation { axes: [1, 2, 0] }, // Rotated 90° around X then Z
        Orientation { axes: [2, 0, 1] }, // Rotated 90° around Y
        Orientation { axes: [2, 1, 0] }, // Rotated 90° around Y then X
    ];

    /// Returns the axis permutation.
    pub fn axes(&self) -> [usize; 3] {
        self.axes
    }

    /// Applies this orientation to a set of dimensions.
    pub fn apply(&self, dims: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(dims[self.axes[0]], dims[self.axes[1]], dims[self.axes[2]])
    }

    /// Returns the distinct orientations of a box, in `ALL` order.
    ///
    /// Orientations that yield the same oriented extents are tried only once,
    /// so a cube has one orientation and a square prism has three.
    pub fn distinct_for(dims: &Vector3<f64>) -> Vec<Orientation> {
        let mut seen: Vec<Vector3<f64>> = Vec::with_capacity(6);
        let mut out = Vec::with_capacity(6);
        for orientation in Self::ALL {
            let oriented = orientation.apply(dims);
            if !seen.contains(&oriented) {
                seen.push(oriented);
                out.push(orientation);
            }
        }
        out
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One physical unit derived from a box type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemInstance {
    /// Unique label, `{box_id}-{sequence}`.
    pub label: String,
    /// Identifier of the originating box type.
    pub box_id: BoxId,
    /// 1-based sequence number within the box type.
    pub sequence: usize,
    /// Original dimensions (length, width, height).
    pub dimensions: Vector3<f64>,
    /// Load contributed towards pallet capacity.
    pub weight: f64,
    /// Orientation chosen by the solver, once placed.
    pub orientation: Option<Orientation>,
    /// 1-based index of the pallet holding this item, once placed.
    pub pallet: Option<usize>,
}

impl ItemInstance {
    /// Creates an unplaced instance.
    pub fn new(box_id: impl Into<BoxId>, sequence: usize, dimensions: Vector3<f64>, weight: f64) -> Self {
        let box_id = box_id.into();
        Self {
            label: format!("{}-{}", box_id, sequence),
            box_id,
            sequence,
            dimensions,
            weight,
            orientation: None,
            pallet: None,
        }
    }

    /// Returns the volume of the item.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns true once the item has been assigned to a pallet.
    pub fn is_placed(&self) -> bool {
        self.pallet.is_some()
    }

    /// Returns the extents of the item under its chosen orientation.
    pub fn oriented_dimensions(&self) -> Vector3<f64> {
        self.orientation.unwrap_or_default().apply(&self.dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_orientations_are_permutations() {
        let dims = Vector3::new(10.0, 20.0, 30.0);
        let mut volumes: Vec<f64> = Orientation::ALL
            .iter()
            .map(|o| {
                let d = o.apply(&dims);
                d.x * d.y * d.z
            })
            .collect();
        volumes.dedup();
        assert_eq!(volumes, vec![6000.0]);
    }

    #[test]
    fn test_distinct_orientations() {
        assert_eq!(Orientation::distinct_for(&Vector3::new(10.0, 20.0, 30.0)).len(), 6);
        assert_eq!(Orientation::distinct_for(&Vector3::new(10.0, 10.0, 30.0)).len(), 3);
        assert_eq!(Orientation::distinct_for(&Vector3::new(5.0, 5.0, 5.0)).len(), 1);
    }

    #[test]
    fn test_apply() {
        let dims = Vector3::new(1.0, 2.0, 3.0);
        let rotated = Orientation::ALL[4].apply(&dims);
        assert_eq!(rotated, Vector3::new(3.0, 1.0, 2.0));
    }

    #[test]
    fn test_item_label() {
        let item = ItemInstance::new("B", 7, Vector3::new(4.0, 3.0, 2.0), 1.0);
        assert_eq!(item.label, "B-7");
        assert_eq!(item.box_id, "B");
        assert_eq!(item.volume(), 24.0);
        assert!(!item.is_placed());
        assert_eq!(item.oriented_dimensions(), Vector3::new(4.0, 3.0, 2.0));
    }

    #[test]
    fn test_box_id_with_dash_is_kept_whole() {
        let item = ItemInstance::new("EUR-1", 2, Vector3::new(1.0, 1.0, 1.0), 1.0);
        assert_eq!(item.label, "EUR-1-2");
        assert_eq!(item.box_id, "EUR-1");
    }
}
