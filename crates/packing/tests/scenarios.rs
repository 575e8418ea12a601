//! End-to-end packing scenarios and properties.

use approx::assert_relative_eq;
use palletpack_core::aabb::EPSILON;
use palletpack_packing::{BoxSpec, PackConfig, PackResult, PalletPacker, PalletSpec, Termination};
use proptest::prelude::*;

fn cube_pallet() -> PalletSpec {
    PalletSpec::new(10.0, 10.0, 10.0)
}

fn pack(specs: &[BoxSpec], pallet: &PalletSpec, config: PackConfig) -> PackResult {
    PalletPacker::new(config).pack(specs, pallet).unwrap()
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_single_box_fills_single_pallet() {
        let specs = vec![BoxSpec::new("A", 10.0, 10.0, 10.0)];
        let result = pack(&specs, &cube_pallet(), PackConfig::default());

        assert_eq!(result.pallets_used(), 1);
        assert_eq!(result.packed_count(), 1);
        assert_eq!(result.unpacked_count(), 0);
        assert_relative_eq!(result.pallets[0].occupancy_percent(), 100.0);
    }

    #[test]
    fn test_two_full_boxes_use_two_pallets() {
        let specs = vec![BoxSpec::new("A", 10.0, 10.0, 10.0).with_quantity(2)];
        let result = pack(&specs, &cube_pallet(), PackConfig::default());

        assert_eq!(result.pallets_used(), 2);
        assert_eq!(result.pallets[0].fitted_count(), 1);
        assert_eq!(result.pallets[0].leftovers.len(), 1);
        assert_relative_eq!(result.pallets[0].occupancy_percent(), 100.0);
        assert_eq!(result.pallets[1].fitted_count(), 1);
        assert!(result.all_packed());
    }

    #[test]
    fn test_oversized_box_stalls_on_first_pallet() {
        let specs = vec![BoxSpec::new("X", 20.0, 20.0, 20.0)];
        let result = pack(&specs, &cube_pallet(), PackConfig::default());

        assert_eq!(result.pallets_used(), 1);
        assert!(result.pallets[0].is_empty());
        assert_eq!(result.unfitted_labels(), vec!["X-1"]);
        assert_eq!(result.termination, Termination::Stalled);
    }

    #[test]
    fn test_zero_quantity_uses_no_pallets() {
        let specs = vec![BoxSpec::new("Z", 1.0, 1.0, 1.0).with_quantity(0)];
        let result = pack(&specs, &cube_pallet(), PackConfig::default());

        assert_eq!(result.pallets_used(), 0);
        assert_eq!(result.unpacked_count(), 0);
        assert_eq!(result.termination, Termination::Completed);
        assert_relative_eq!(result.statistics().utilization_percent, 0.0);
    }

    #[test]
    fn test_volume_beyond_cap_is_reported_not_raised() {
        // 10 full-pallet cubes against a cap of 3 pallets.
        let specs = vec![BoxSpec::new("A", 10.0, 10.0, 10.0).with_quantity(10)];
        let pallet = cube_pallet();
        let config = PackConfig::new().with_max_pallets(3);
        assert!(10.0 * 1000.0 > 3.0 * pallet.volume());

        let result = pack(&specs, &pallet, config);

        assert_eq!(result.pallets_used(), 3);
        assert_eq!(result.packed_count(), 3);
        assert_eq!(result.unpacked_count(), 7);
        assert_eq!(result.unfitted_labels()[0], "A-4");
        assert_eq!(result.termination, Termination::PalletCapReached);
    }

    #[test]
    fn test_one_item_per_pallet_stops_at_cap() {
        // Each 6-cube needs its own pallet even though total volume is small.
        let specs = vec![BoxSpec::new("M", 6.0, 6.0, 6.0).with_quantity(10)];
        let config = PackConfig::new().with_max_pallets(3);
        let result = pack(&specs, &cube_pallet(), config);

        assert_eq!(result.pallets_used(), 3);
        assert_eq!(result.packed_count(), 3);
        assert_eq!(result.unpacked_count(), 7);
        assert_eq!(result.termination, Termination::PalletCapReached);
    }

    #[test]
    fn test_default_cap_is_one_hundred_pallets() {
        let specs = vec![BoxSpec::new("A", 10.0, 10.0, 10.0).with_quantity(101)];
        let result = pack(&specs, &cube_pallet(), PackConfig::default());

        assert_eq!(result.pallets_used(), 100);
        assert_eq!(result.unfitted_labels(), vec!["A-101"]);
    }

    #[test]
    fn test_sample_load() {
        let specs = vec![
            BoxSpec::new("C", 5.0, 5.0, 5.0).with_quantity(4),
            BoxSpec::new("A", 10.0, 10.0, 10.0).with_quantity(5),
            BoxSpec::new("B", 4.0, 3.0, 2.0).with_quantity(18),
        ];
        let result = pack(&specs, &cube_pallet(), PackConfig::default());

        for pallet in &result.pallets[..5] {
            assert_eq!(pallet.box_counts().get("A"), Some(&1));
            assert_eq!(pallet.fitted_count(), 1);
        }
        assert_eq!(result.pallets[5].box_counts().get("C"), Some(&4));
        assert!(result.all_packed());
        assert_eq!(result.packed_count(), 27);

        let stats = result.statistics();
        assert_eq!(stats.total_packed, 27);
        assert_relative_eq!(stats.total_occupied_volume, 5000.0 + 500.0 + 432.0);
    }

    #[test]
    fn test_statistics_match_pallets() {
        let specs = vec![
            BoxSpec::new("A", 10.0, 10.0, 10.0),
            BoxSpec::new("C", 5.0, 5.0, 5.0),
        ];
        let result = pack(&specs, &cube_pallet(), PackConfig::default());
        let stats = result.statistics();

        assert_eq!(stats.total_pallets, 2);
        assert_relative_eq!(stats.pallets[0].occupancy_percent, 100.0);
        assert_relative_eq!(stats.pallets[1].occupancy_percent, 12.5);
        assert_relative_eq!(stats.utilization_percent, 56.25);
    }
}

fn arb_specs() -> impl Strategy<Value = Vec<BoxSpec>> {
    prop::collection::vec((1u32..=12, 1u32..=12, 1u32..=12, 0usize..=6), 0..=5).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (l, w, h, qty))| {
                BoxSpec::new(format!("T{}", i), l as f64, w as f64, h as f64).with_quantity(qty)
            })
            .collect()
    })
}

fn arb_pallet() -> impl Strategy<Value = PalletSpec> {
    (5u32..=15, 5u32..=15, 5u32..=15)
        .prop_map(|(l, w, h)| PalletSpec::new(l as f64, w as f64, h as f64))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_conservation(specs in arb_specs(), pallet in arb_pallet(), max in 1usize..=8) {
        let expected: usize = specs.iter().map(BoxSpec::quantity).sum();
        let result = pack(&specs, &pallet, PackConfig::new().with_max_pallets(max).with_verify(false));
        prop_assert_eq!(result.packed_count() + result.unpacked_count(), expected);
    }

    #[test]
    fn prop_no_overlap_and_in_bounds(specs in arb_specs(), pallet in arb_pallet()) {
        let result = pack(&specs, &pallet, PackConfig::new().with_verify(false));
        let bounds = pallet.aabb();
        for load in &result.pallets {
            let boxes: Vec<_> = load.placements.iter().map(|p| p.aabb()).collect();
            for (i, a) in boxes.iter().enumerate() {
                prop_assert!(bounds.contains_box(a, EPSILON));
                for b in &boxes[i + 1..] {
                    prop_assert!(!a.overlaps(b, EPSILON));
                }
            }
        }
    }

    #[test]
    fn prop_deterministic(specs in arb_specs(), pallet in arb_pallet()) {
        let first = pack(&specs, &pallet, PackConfig::default());
        let second = pack(&specs, &pallet, PackConfig::default());
        prop_assert_eq!(first.pallets.len(), second.pallets.len());
        for (a, b) in first.pallets.iter().zip(&second.pallets) {
            prop_assert_eq!(&a.placements, &b.placements);
        }
        prop_assert_eq!(first.unfitted, second.unfitted);
    }

    #[test]
    fn prop_terminates_within_cap(specs in arb_specs(), pallet in arb_pallet(), max in 1usize..=8) {
        let result = pack(&specs, &pallet, PackConfig::new().with_max_pallets(max));
        prop_assert!(result.pallets_used() <= max);
    }

    #[test]
    fn prop_stall_is_terminal(specs in arb_specs(), pallet in arb_pallet()) {
        let result = pack(&specs, &pallet, PackConfig::default());
        if let Some(pos) = result.pallets.iter().position(|p| p.is_empty()) {
            prop_assert_eq!(pos, result.pallets.len() - 1);
            prop_assert_eq!(result.termination, Termination::Stalled);
            prop_assert_eq!(result.pallets[pos].leftovers.len(), result.unpacked_count());
        }
    }
}
