// File: crates/prettyplot-core/tests/normalize.rs
// Purpose: Broadcast/route properties of the style normalizer for arbitrary group sizes.

use prettyplot_core::normalize::{resolve_optional, GroupTable};
use prettyplot_core::{AxisGroup, AxisValue, Color, GroupSizes, PlotError, StyleValue};
use proptest::prelude::*;

proptest! {
    #[test]
    fn scalar_broadcasts_to_every_series(left in 0usize..20, right in 0usize..20, v in any::<i32>()) {
        let table = StyleValue::Scalar(v).resolve("colors", GroupSizes::dual(left, right)).unwrap();
        prop_assert_eq!(table.left.len(), left);
        prop_assert_eq!(table.right.len(), right);
        prop_assert!(table.iter().all(|x| *x == v));
    }

    #[test]
    fn per_series_list_splits_at_left_count(list in prop::collection::vec(any::<u16>(), 0..40), cut in 0usize..40) {
        let left = cut.min(list.len());
        let sizes = GroupSizes::dual(left, list.len() - left);
        let table = StyleValue::PerSeries(list.clone()).resolve("markers", sizes).unwrap();
        prop_assert_eq!(&table.left[..], &list[..left]);
        prop_assert_eq!(&table.right[..], &list[left..]);
    }

    #[test]
    fn resolving_a_resolved_table_is_identity(left in prop::collection::vec(any::<u8>(), 0..10),
                                              right in prop::collection::vec(any::<u8>(), 0..10)) {
        let table = GroupTable { left, right };
        let again = table.to_style_value().resolve("alphas", table.sizes()).unwrap();
        prop_assert_eq!(again, table);
    }

    #[test]
    fn wrong_length_list_is_a_shape_error(n in 1usize..20, extra in 1usize..5) {
        let list = vec![0u8; n + extra];
        let err = StyleValue::PerSeries(list).resolve("linestyles", GroupSizes::single(n)).unwrap_err();
        prop_assert!(err.is_configuration());
    }
}

#[test]
fn two_series_one_color_are_both_that_color() {
    let red: Color = "red".parse().unwrap();
    let table = StyleValue::Scalar(red).resolve("colors", GroupSizes::single(2)).unwrap();
    assert_eq!(table.left, vec![red, red]);
    assert!(table.right.is_empty());
}

#[test]
fn per_group_colors_follow_their_axis() {
    let c = |s: &str| s.parse::<Color>().unwrap();
    let value = StyleValue::PerGroup(vec![c("blue"), c("green")], vec![c("black")]);
    let table = value.resolve("colors", GroupSizes::dual(2, 1)).unwrap();
    assert_eq!(table.group(AxisGroup::Left), &[c("blue"), c("green")]);
    assert_eq!(table.group(AxisGroup::Right), &[c("black")]);
}

#[test]
fn per_group_length_mismatch_names_the_group() {
    let value = StyleValue::PerGroup(vec!["o", "s"], vec![]);
    let err = value.resolve("markers", GroupSizes::dual(2, 1)).unwrap_err();
    match err {
        PlotError::ShapeMismatch { option, group, expected, found } => {
            assert_eq!((option, group, expected, found), ("markers", AxisGroup::Right, 1, 0));
        }
        other => panic!("expected a shape mismatch, got {other}"),
    }
}

#[test]
fn omitted_options_resolve_to_none() {
    let table = resolve_optional::<Color>(None, "colors", GroupSizes::dual(2, 2)).unwrap();
    assert_eq!(table.len(), 4);
    assert!(table.iter().all(Option::is_none));
}

#[test]
fn axis_values_split_or_share() {
    let both = AxisValue::Both(true);
    assert_eq!((both.left(), both.right()), (true, true));
    let split = AxisValue::Split(false, true);
    assert_eq!(split.get(AxisGroup::Right), true);
    assert!(split.is_split());
}

#[test]
fn json_shapes_pick_the_matching_variant() {
    let scalar: StyleValue<Color> = serde_json::from_str(r#""red""#).unwrap();
    assert!(matches!(scalar, StyleValue::Scalar(_)));
    let flat: StyleValue<Color> = serde_json::from_str(r#"["red", "C1"]"#).unwrap();
    assert!(matches!(flat, StyleValue::PerSeries(ref v) if v.len() == 2));
    let nested: StyleValue<Color> = serde_json::from_str(r#"[["red"], ["k", "b"]]"#).unwrap();
    assert!(matches!(nested, StyleValue::PerGroup(ref l, ref r) if l.len() == 1 && r.len() == 2));
}
