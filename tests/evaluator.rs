use polars::prelude::*;
use treebag::prelude::*;


fn alternating_sample() -> Sample {
    let x = Series::new("x", &[1f64, 2f64, 3f64, 4f64]);
    let target = Series::new("y", &[-1f64, 1f64, -1f64, 1f64]);
    let df = DataFrame::new(vec![x]).unwrap();
    Sample::from_dataframe(df, target).unwrap()
}


#[test]
fn zero_predictor_under_log_loss() {
    let sample = alternating_sample();
    sample.is_valid_binary_instance();

    // A trainer that never received an update
    // yields the always-zero predictor.
    let tree = SortingTreeBuilder::new().build().unwrap();
    let bagging = BaggingBuilder::new(tree).build().unwrap();
    let f = bagging.predictor();

    let mut evaluator = BinaryEvaluator::new(Loss::Log);
    let record = evaluator.evaluate(&sample, &f);

    // A prediction of 0 counts as +1,
    // so both -1 examples are misclassified.
    assert!((record.error_rate - 0.5f64).abs() < 1e-12);

    let expected = 4f64 * std::f64::consts::LN_2;
    assert!((record.total_loss - expected).abs() < 1e-12);
}


#[test]
fn weighted_squared_loss_totals() {
    let x = Series::new("x", &[1f64, 2f64]);
    let target = Series::new("y", &[1f64, -1f64]);
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, target)
        .unwrap()
        .with_weights(vec![2f64, 1f64]);

    let f: Ensemble<TreePredictor> = Ensemble::new();
    let mut evaluator = BinaryEvaluator::new(Loss::Squared);
    let record = evaluator.evaluate(&sample, &f);

    // Squared loss of a zero prediction is 1/2 per unit weight.
    assert!((record.total_loss - 1.5f64).abs() < 1e-12);
    // Only the -1 example (weight 1 of 3) is misclassified.
    assert!((record.error_rate - 1f64 / 3f64).abs() < 1e-12);
}


#[test]
fn a_perfect_predictor_scores_zero_error() {
    let x = Series::new("x", &[1f64, 2f64, 3f64, 4f64]);
    let target = Series::new("y", &[-1f64, -1f64, 1f64, 1f64]);
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, target).unwrap();

    let tree = SortingTreeBuilder::new()
        .max_depth(1)
        .build()
        .unwrap();
    let indices = (0..4).collect::<Vec<_>>();
    let f = tree.induce(&sample, &indices);

    let mut evaluator = BinaryEvaluator::new(Loss::Squared);
    let record = evaluator.evaluate(&sample, &f);

    assert_eq!(record.error_rate, 0f64);
    assert_eq!(record.total_loss, 0f64);
}


#[test]
fn display_renders_every_pass() {
    let sample = alternating_sample();

    let f: Ensemble<TreePredictor> = Ensemble::new();
    let mut evaluator = BinaryEvaluator::new(Loss::Log);
    evaluator.evaluate(&sample, &f);
    evaluator.evaluate(&sample, &f);

    let rendered = format!("{evaluator}");
    assert!(rendered.contains("Binary classification evaluation"));
    assert!(rendered.contains("Log loss"));
    assert!(rendered.contains("- pass 1:"));
    assert!(rendered.contains("- pass 2:"));
    assert!(rendered.contains("error 0.50000"));

    assert_eq!(evaluator.records().len(), 2);
    assert_eq!(evaluator.error_rate(), Some(0.5f64));
}
