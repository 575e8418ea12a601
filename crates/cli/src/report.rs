//! Human-readable pallet report.

use palletpack_core::geometry::ItemInstance;
use palletpack_core::placement::Placement;
use palletpack_core::result::PackResult;
use palletpack_packing::{BoxSpec, PalletSpec};
use std::fmt::Write;

const RULE: &str = "====================";

fn describe_placement(p: &Placement) -> String {
    let d = p.dimensions();
    format!(
        "{} pos({}, {}, {}) dims({}x{}x{}) vol({})",
        p.label(),
        p.x(),
        p.y(),
        p.z(),
        d.x,
        d.y,
        d.z,
        p.item.volume()
    )
}

fn describe_item(item: &ItemInstance) -> String {
    let d = item.dimensions;
    format!("{} ({}x{}x{}) vol({})", item.label, d.x, d.y, d.z, item.volume())
}

/// Renders the box breakdown that precedes packing.
pub fn render_breakdown(specs: &[BoxSpec]) -> String {
    let mut out = String::new();
    let total: usize = specs.iter().map(BoxSpec::quantity).sum();
    let _ = writeln!(out, "Total items to pack: {}", total);
    let _ = writeln!(out, "Box breakdown:");
    for spec in specs {
        let _ = writeln!(
            out,
            "  {}: {} boxes ({}x{}x{})",
            spec.id(),
            spec.quantity(),
            spec.length(),
            spec.width(),
            spec.height()
        );
    }
    out
}

/// Renders the full pallet report.
pub fn render_report(result: &PackResult, pallet: &PalletSpec) -> String {
    let mut out = String::new();
    let stats = result.statistics();

    let _ = writeln!(out, "\n{} FINAL PALLET REPORT {}", RULE, RULE);

    for (load, pallet_stats) in result.pallets.iter().zip(&stats.pallets) {
        let _ = writeln!(out, "\n{}", load.name);
        let _ = writeln!(
            out,
            "Dimensions: {}x{}x{}",
            pallet.length(),
            pallet.width(),
            pallet.height()
        );
        let _ = writeln!(out, "Max Volume: {:.3}", pallet_stats.pallet_volume);

        let _ = writeln!(out, "\nBox counts:");
        for (box_id, count) in &pallet_stats.box_counts {
            let _ = writeln!(out, "   - {}: {}", box_id, count);
        }

        let _ = writeln!(out, "\nVolume occupied: {:.3}", pallet_stats.occupied_volume);
        let _ = writeln!(out, "Occupancy: {:.2}%", pallet_stats.occupancy_percent);

        let _ = writeln!(out, "\nFITTED ITEMS:");
        for p in &load.placements {
            let _ = writeln!(out, "    {}", describe_placement(p));
        }

        let _ = writeln!(out, "\nUNFITTED ITEMS:");
        for label in &load.leftovers {
            let _ = writeln!(out, "    {}", label);
        }

        let _ = writeln!(out, "\n{}", "-".repeat(50));
    }

    let _ = writeln!(out, "\n{} SUMMARY {}", RULE, RULE);
    let _ = writeln!(out, "Total Pallets Used: {}", stats.total_pallets);
    let _ = writeln!(out, "Total Items Packed: {}", stats.total_packed);
    let _ = writeln!(out, "Total Items Unpacked: {}", stats.total_unpacked);
    let _ = writeln!(
        out,
        "Overall Volume Utilization: {:.1}%",
        stats.utilization_percent
    );

    if result.all_packed() {
        let _ = writeln!(out, "\nSUCCESS: All items packed successfully!");
    } else {
        let _ = writeln!(
            out,
            "\nWARNING: {} items could not be packed! ({})",
            result.unpacked_count(),
            result.termination.describe()
        );
        for item in &result.unfitted {
            let _ = writeln!(out, "    {}", describe_item(item));
        }
    }

    out
}
