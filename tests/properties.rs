use proptest::prelude::*;
use window_analytics::{
    count_windows_below, count_windows_below_naive, count_windows_below_two_pointer,
    enumerate_windows, longest_unique_run, longest_unique_run_naive, minimal_window_at_least,
    minimal_window_at_least_naive, minimal_window_at_least_two_pointer, window_reduce,
    window_sums, window_sums_naive, ReduceKind, SequenceView, WindowError, WindowValue,
};

fn non_negative_sequence() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..50, 0..40)
}

fn signed_sequence() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1_000_000i32..1_000_000, 0..40)
}

/// Short decimals that do not add up exactly in binary, with the odd NaN.
fn float_sequence() -> impl Strategy<Value = Vec<f64>> {
    let reading = prop_oneof![
        20 => (0u32..20).prop_map(|tenths| tenths as f64 / 10.0),
        1 => Just(f64::NAN),
    ];
    prop::collection::vec(reading, 0..30)
}

proptest! {
    /// Incremental sums equal per-window direct scans, exactly, for integers.
    #[test]
    fn incremental_sums_match_direct_scan(data in signed_sequence(), length in 1usize..45) {
        let view = SequenceView::from(&data);
        let incremental = window_sums(view, length).unwrap();
        prop_assert_eq!(&incremental, &window_sums_naive(view, length).unwrap());

        let reduced: Vec<i64> = window_reduce(view, length, ReduceKind::Sum)
            .unwrap()
            .into_iter()
            .map(|result| match result.value {
                WindowValue::Sum(sum) => sum,
                other => panic!("unexpected value {:?}", other),
            })
            .collect();
        prop_assert_eq!(incremental, reduced);
    }

    /// Extreme elements never wrap in the widened accumulator.
    #[test]
    fn wide_accumulator_avoids_overflow(len in 1usize..30, length in 1usize..30) {
        let data = vec![i32::MAX; len];
        let view = SequenceView::from(&data);
        for sum in window_sums(view, length).unwrap() {
            prop_assert_eq!(sum, i32::MAX as i64 * length as i64);
        }
    }

    #[test]
    fn float_sums_match_within_tolerance(
        data in prop::collection::vec(-1.0e6f64..1.0e6, 0..40),
        length in 1usize..10,
    ) {
        let view = SequenceView::from(&data);
        let fast = window_sums(view, length).unwrap();
        let slow = window_sums_naive(view, length).unwrap();
        prop_assert_eq!(fast.len(), slow.len());
        for (a, b) in fast.iter().zip(slow.iter()) {
            prop_assert!((a - b).abs() <= 1e-6 * (1.0 + b.abs()));
        }
    }

    /// Step-1 enumeration yields max(0, n - length + 1) windows.
    #[test]
    fn window_count_invariant(data in signed_sequence(), length in 1usize..45) {
        let windows = enumerate_windows(SequenceView::from(&data), length, 1).unwrap();
        let expected = (data.len() + 1).saturating_sub(length);
        prop_assert_eq!(windows.iter().count(), expected);
        prop_assert_eq!(windows.count(), expected);
    }

    #[test]
    fn stepped_windows_fit_and_are_evenly_spaced(
        data in signed_sequence(),
        length in 1usize..10,
        step in 1usize..10,
    ) {
        let windows = enumerate_windows(SequenceView::from(&data), length, step).unwrap();
        for (index, window) in windows.iter().enumerate() {
            prop_assert_eq!(window.start(), index * step);
            prop_assert!(window.end() <= data.len());
        }
    }

    /// Smaller targets never need longer windows.
    #[test]
    fn minimal_window_is_monotone_in_target(data in non_negative_sequence(), target in 0u64..200) {
        let view = SequenceView::from(&data);
        let larger = minimal_window_at_least(view, target + 1);
        let smaller = minimal_window_at_least(view, target);
        if let Some(length) = larger.length() {
            prop_assert!(smaller.length().map_or(false, |shorter| shorter <= length));
        }
    }

    #[test]
    fn minimal_window_two_pointer_agrees_with_naive(
        data in non_negative_sequence(),
        target in 0u64..300,
    ) {
        let view = SequenceView::from(&data);
        let naive = minimal_window_at_least_naive(view, target);
        let fast = minimal_window_at_least_two_pointer(view, target).unwrap();
        prop_assert_eq!(naive.length(), fast.length());
        if let Some(window) = fast.window() {
            let sum: u64 = data[window.range()].iter().map(|&v| v as u64).sum();
            prop_assert!(sum >= target);
        }
    }

    #[test]
    fn count_below_two_pointer_agrees_with_naive(
        data in non_negative_sequence(),
        target in 0u64..300,
    ) {
        let view = SequenceView::from(&data);
        prop_assert_eq!(
            count_windows_below_naive(view, target),
            count_windows_below_two_pointer(view, target).unwrap()
        );
    }

    /// With negatives the default entry points must match the naive scans.
    #[test]
    fn signed_input_uses_naive_results(data in signed_sequence(), target in -2_000_000i64..2_000_000) {
        let view = SequenceView::from(&data);
        prop_assert_eq!(
            minimal_window_at_least(view, target).length(),
            minimal_window_at_least_naive(view, target).length()
        );
        prop_assert_eq!(
            count_windows_below(view, target),
            count_windows_below_naive(view, target)
        );
    }

    /// Float input always gets the naive answer, NaN included.
    #[test]
    fn float_search_matches_naive_scan(data in float_sequence(), tenths in 0u32..40) {
        let target = tenths as f64 / 10.0;
        let view = SequenceView::from(&data);

        let found = minimal_window_at_least(view, target);
        prop_assert_eq!(found, minimal_window_at_least_naive(view, target));
        if let Some(window) = found.window() {
            let sum = data[window.range()].iter().fold(0.0, |total, &value| total + value);
            prop_assert!(sum >= target);
        }
        prop_assert_eq!(
            count_windows_below(view, target),
            count_windows_below_naive(view, target)
        );
        prop_assert_eq!(
            count_windows_below_two_pointer(view, target),
            Err(WindowError::InexactAccumulator)
        );
    }

    #[test]
    fn longest_run_variants_agree(data in prop::collection::vec(0u8..12, 0..60)) {
        let view = SequenceView::from(&data);
        let fast = longest_unique_run(view);
        let naive = longest_unique_run_naive(view);
        prop_assert_eq!(fast.length, naive.length);

        let run = &data[fast.start..fast.start + fast.length];
        let mut sorted = run.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), run.len());
    }

    /// Run length is bounded by n, equals n iff all distinct, and 0 iff empty.
    #[test]
    fn longest_run_bounds(data in prop::collection::vec(0u16..30, 0..30)) {
        let run = longest_unique_run(SequenceView::from(&data));
        prop_assert!(run.length <= data.len());

        let mut distinct = data.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(run.length == data.len(), distinct.len() == data.len());
        prop_assert_eq!(run.length == 0, data.is_empty());
    }
}
