//! Tests for the OLS regression step.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use svy_stats::{INTERCEPT, StatsError, fit_ols};

fn frame(columns: Vec<(&str, Vec<f64>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

#[test]
fn exact_linear_relation_recovers_slope_and_intercept() {
    let df = frame(vec![
        ("Discrimination", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ("Mental_Health", vec![2.0, 4.0, 6.0, 8.0, 10.0]),
    ]);
    let summary = fit_ols(&df, "Mental_Health", &["Discrimination"]).expect("fit");

    let slope = summary.term("Discrimination").expect("slope term");
    assert!((slope.estimate - 2.0).abs() < 1e-10, "slope = {}", slope.estimate);
    let intercept = summary.term(INTERCEPT).expect("intercept term");
    assert!(intercept.estimate.abs() < 1e-10, "intercept = {}", intercept.estimate);
    assert!((summary.r_squared - 1.0).abs() < 1e-10);
}

#[test]
fn two_predictors_are_recovered_exactly() {
    let x1 = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let x2 = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
    let y: Vec<f64> = x1
        .iter()
        .zip(x2.iter())
        .map(|(a, b)| 1.0 + 2.0 * a - 0.5 * b)
        .collect();
    let df = frame(vec![
        ("Discrimination", x1),
        ("Ethnic_Identity", x2),
        ("Mental_Health", y),
    ]);
    let summary = fit_ols(&df, "Mental_Health", &["Discrimination", "Ethnic_Identity"])
        .expect("fit");

    assert!((summary.term(INTERCEPT).unwrap().estimate - 1.0).abs() < 1e-9);
    assert!((summary.term("Discrimination").unwrap().estimate - 2.0).abs() < 1e-9);
    assert!((summary.term("Ethnic_Identity").unwrap().estimate - (-0.5)).abs() < 1e-9);
    assert!((summary.r_squared - 1.0).abs() < 1e-9);
}

#[test]
fn residuals_sum_to_zero_with_intercept() {
    let df = frame(vec![
        ("Discrimination", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ("Ethnic_Identity", vec![2.0, 4.0, 1.0, 3.0, 2.0]),
        ("Mental_Health", vec![4.0, 3.0, 5.0, 2.0, 4.0]),
    ]);
    let summary = fit_ols(&df, "Mental_Health", &["Discrimination", "Ethnic_Identity"])
        .expect("fit");
    assert!(summary.residual_sum.abs() < 1e-9, "sum = {}", summary.residual_sum);
}

#[test]
fn diagnostics_match_hand_computed_simple_regression() {
    // x = [1, 2, 3], y = [1, 2, 4]: b1 = 1.5, b0 = -2/3, SSE = 1/6,
    // se(b1) = sqrt(1/12), t = 5.196, R^2 = 27/28, F = 27.
    let df = frame(vec![
        ("Discrimination", vec![1.0, 2.0, 3.0]),
        ("Mental_Health", vec![1.0, 2.0, 4.0]),
    ]);
    let summary = fit_ols(&df, "Mental_Health", &["Discrimination"]).expect("fit");

    let slope = summary.term("Discrimination").expect("slope");
    assert!((slope.estimate - 1.5).abs() < 1e-10);
    assert!((summary.term(INTERCEPT).unwrap().estimate - (-2.0 / 3.0)).abs() < 1e-10);
    assert!((slope.std_error - (1.0f64 / 12.0).sqrt()).abs() < 1e-10);
    assert!((slope.t_value - 5.196152).abs() < 1e-5);
    assert!((summary.r_squared - 27.0 / 28.0).abs() < 1e-10);
    assert!((summary.f_statistic - 27.0).abs() < 1e-8);
    // F(1, df) is t(df) squared, so the model p-value equals the slope's.
    assert!((summary.f_pvalue - slope.p_value).abs() < 1e-10);
    assert_eq!(summary.nobs, 3);
    assert_eq!(summary.df_resid, 1);
}

#[test]
fn p_values_and_r_squared_stay_in_range() {
    let df = frame(vec![
        ("Discrimination", vec![1.0, 3.0, 2.0, 5.0, 4.0, 2.5, 3.5]),
        ("Ethnic_Identity", vec![2.0, 1.0, 4.0, 3.0, 5.0, 2.0, 1.5]),
        ("Mental_Health", vec![4.0, 3.0, 5.0, 1.0, 4.0, 2.0, 3.0]),
    ]);
    let summary = fit_ols(&df, "Mental_Health", &["Discrimination", "Ethnic_Identity"])
        .expect("fit");
    assert!((0.0..=1.0).contains(&summary.r_squared));
    assert!(summary.adj_r_squared <= summary.r_squared);
    assert!((0.0..=1.0).contains(&summary.f_pvalue));
    for term in &summary.terms {
        assert!((0.0..=1.0).contains(&term.p_value), "term {}", term.name);
        assert!(term.std_error >= 0.0);
    }
}

#[test]
fn constant_predictor_makes_the_model_singular() {
    let df = frame(vec![
        ("Discrimination", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ("Ethnic_Identity", vec![2.0, 2.0, 2.0, 2.0, 2.0]),
        ("Mental_Health", vec![2.0, 4.0, 6.0, 8.0, 10.0]),
    ]);
    let error = fit_ols(&df, "Mental_Health", &["Discrimination", "Ethnic_Identity"])
        .expect_err("collinear with intercept");
    assert!(matches!(error, StatsError::Singular));
}

#[test]
fn too_few_rows_is_insufficient_data() {
    let df = frame(vec![
        ("Discrimination", vec![1.0, 2.0, 3.0]),
        ("Ethnic_Identity", vec![2.0, 1.0, 3.0]),
        ("Mental_Health", vec![4.0, 3.0, 5.0]),
    ]);
    let error = fit_ols(&df, "Mental_Health", &["Discrimination", "Ethnic_Identity"])
        .expect_err("3 rows, 3 parameters");
    assert!(matches!(error, StatsError::InsufficientData { .. }));
}

#[test]
fn flat_response_is_zero_variance() {
    let df = frame(vec![
        ("Discrimination", vec![1.0, 2.0, 3.0, 4.0]),
        ("Mental_Health", vec![3.0, 3.0, 3.0, 3.0]),
    ]);
    let error = fit_ols(&df, "Mental_Health", &["Discrimination"]).expect_err("flat response");
    match error {
        StatsError::ZeroVariance { variable } => assert_eq!(variable, "Mental_Health"),
        other => panic!("expected zero variance, got {other}"),
    }
}

#[test]
fn missing_column_is_reported() {
    let df = frame(vec![("Mental_Health", vec![1.0, 2.0, 3.0])]);
    let error = fit_ols(&df, "Mental_Health", &["Discrimination"]).expect_err("missing column");
    assert!(matches!(error, StatsError::MissingColumn { .. }));
}

mod properties {
    use super::{fit_ols, frame};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn residual_sum_vanishes_for_arbitrary_data(n in 5..=25usize, seed in 0..200u32) {
            let x1: Vec<f64> = (0..n)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 4.0)
                .collect();
            let x2: Vec<f64> = (0..n)
                .map(|i| ((i as f64 * 1.7 + f64::from(seed)) * 0.53).cos() * 4.0)
                .collect();
            let y: Vec<f64> = (0..n)
                .map(|i| ((i as f64 + f64::from(seed) + 2.0) * 0.61).sin() * 3.0 + 3.0)
                .collect();
            let df = frame(vec![
                ("Discrimination", x1),
                ("Ethnic_Identity", x2),
                ("Mental_Health", y),
            ]);
            if let Ok(summary) =
                fit_ols(&df, "Mental_Health", &["Discrimination", "Ethnic_Identity"])
            {
                prop_assert!(summary.residual_sum.abs() < 1e-7);
                prop_assert!(summary.r_squared >= -1e-12 && summary.r_squared <= 1.0 + 1e-12);
            }
        }
    }
}
