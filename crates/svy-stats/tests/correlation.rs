//! Tests for the Pearson correlation step.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use svy_stats::{StatsError, correlation_pairs, pearson};

fn frame(columns: Vec<(&str, Vec<f64>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

#[test]
fn perfect_negative_relation_is_exactly_minus_one() {
    let r = pearson(&[1.0, 2.0, 3.0, 4.0], &[5.0, 4.0, 3.0, 2.0]).expect("correlation");
    assert!((r - (-1.0)).abs() < 1e-12, "r = {r}");
}

#[test]
fn self_correlation_is_one() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let r = pearson(&x, &x).expect("correlation");
    assert!((r - 1.0).abs() < 1e-12);
}

#[test]
fn correlation_is_symmetric() {
    let x = [1.0, 3.0, 2.0, 5.0, 4.0];
    let y = [2.0, 1.0, 4.0, 3.0, 5.0];
    let xy = pearson(&x, &y).expect("correlation");
    let yx = pearson(&y, &x).expect("correlation");
    assert!((xy - yx).abs() < 1e-12);
}

#[test]
fn zero_variance_is_a_distinguishable_error() {
    let flat = [3.0, 3.0, 3.0];
    let varying = [1.0, 2.0, 3.0];
    let error = pearson(&flat, &varying).expect_err("zero variance");
    assert!(matches!(error, StatsError::ZeroVariance { .. }));

    let error = pearson(&varying, &flat).expect_err("zero variance");
    assert!(matches!(error, StatsError::ZeroVariance { .. }));
}

#[test]
fn fewer_than_two_rows_is_insufficient_data() {
    let error = pearson(&[1.0], &[2.0]).expect_err("single row");
    assert!(matches!(
        error,
        StatsError::InsufficientData {
            needed: 2,
            actual: 1
        }
    ));
}

#[test]
fn mismatched_lengths_are_rejected() {
    let error = pearson(&[1.0, 2.0], &[1.0]).expect_err("length mismatch");
    assert!(matches!(error, StatsError::LengthMismatch { .. }));
}

#[test]
fn pairs_come_out_in_reporting_order() {
    let df = frame(vec![
        ("Life_Satisfaction", vec![6.0, 5.0, 7.0, 4.0]),
        ("Mental_Health", vec![4.0, 3.0, 5.0, 2.0]),
        ("Ethnic_Identity", vec![3.0, 2.0, 4.0, 1.0]),
        ("Discrimination", vec![1.0, 2.0, 1.0, 3.0]),
    ]);
    let set = correlation_pairs(&df).expect("pairs");
    let labels: Vec<&str> = set.entries.iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Discrimination & Mental Health",
            "Discrimination & Life Satisfaction",
            "Ethnic Identity & Life Satisfaction",
            "Ethnic Identity & Mental Health",
        ]
    );
    for entry in &set.entries {
        assert!((-1.0..=1.0).contains(&entry.coefficient));
    }
}

#[test]
fn pairs_surface_the_flat_column_by_name() {
    let df = frame(vec![
        ("Life_Satisfaction", vec![6.0, 5.0, 7.0]),
        ("Mental_Health", vec![4.0, 3.0, 5.0]),
        ("Ethnic_Identity", vec![2.0, 2.0, 2.0]),
        ("Discrimination", vec![1.0, 2.0, 3.0]),
    ]);
    let error = correlation_pairs(&df).expect_err("flat column");
    match error {
        StatsError::ZeroVariance { variable } => assert_eq!(variable, "Ethnic_Identity"),
        other => panic!("expected zero variance, got {other}"),
    }
}

#[test]
fn pairs_with_one_row_are_insufficient() {
    let df = frame(vec![
        ("Life_Satisfaction", vec![6.0]),
        ("Mental_Health", vec![4.0]),
        ("Ethnic_Identity", vec![2.0]),
        ("Discrimination", vec![1.0]),
    ]);
    let error = correlation_pairs(&df).expect_err("single row");
    assert!(matches!(error, StatsError::InsufficientData { .. }));
}

mod properties {
    use super::pearson;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn coefficient_stays_bounded(n in 3..=30usize, seed in 0..500u32) {
            let x: Vec<f64> = (0..n)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
                .collect();
            let y: Vec<f64> = (0..n)
                .map(|i| ((i as f64 + f64::from(seed) + 1.0) * 0.53).sin() * 10.0)
                .collect();
            let r = pearson(&x, &y).expect("valid input");
            prop_assert!((-1.0..=1.0).contains(&r), "r = {} outside [-1, 1]", r);
        }

        #[test]
        fn coefficient_is_symmetric(n in 3..=30usize, seed in 0..500u32) {
            let x: Vec<f64> = (0..n)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.71).sin() * 5.0)
                .collect();
            let y: Vec<f64> = (0..n)
                .map(|i| ((i as f64 * 1.3 + f64::from(seed)) * 0.29).cos() * 5.0)
                .collect();
            let xy = pearson(&x, &y).expect("valid input");
            let yx = pearson(&y, &x).expect("valid input");
            prop_assert!((xy - yx).abs() < 1e-12);
        }
    }
}
