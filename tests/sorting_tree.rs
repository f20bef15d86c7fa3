use polars::prelude::*;
use treebag::prelude::*;


/// Four examples on a single feature with a clean boundary
/// between the 2nd and the 3rd example.
fn step_sample() -> Sample {
    let x = Series::new("x", &[1f64, 2f64, 3f64, 4f64]);
    let target = Series::new("y", &[0f64, 0f64, 1f64, 1f64]);
    let df = DataFrame::new(vec![x]).unwrap();
    Sample::from_dataframe(df, target).unwrap()
}


fn all_indices(sample: &Sample) -> Vec<usize> {
    (0..sample.shape().0).collect()
}


#[test]
fn recovers_known_split() {
    let sample = step_sample();

    let tree = SortingTreeBuilder::new()
        .max_depth(1)
        .min_examples_per_leaf(1)
        .min_gain(0.0)
        .loss(Loss::Squared)
        .build()
        .unwrap();

    let f = tree.induce(&sample, &all_indices(&sample));
    let predictions = f.predict_all(&sample);

    assert_eq!(predictions, vec![0f64, 0f64, 1f64, 1f64]);
}


#[test]
fn threshold_is_the_last_left_value() {
    let sample = step_sample();

    let tree = SortingTreeBuilder::new()
        .max_depth(1)
        .build()
        .unwrap();
    let f = tree.induce(&sample, &all_indices(&sample));

    // Probes tightly around the boundary: `x <= 2` goes left.
    let x = Series::new("x", &[2f64, 2.000001f64, 2.5f64]);
    let target = Series::new("y", &[0f64, 0f64, 0f64]);
    let probe = Sample::from_dataframe(
        DataFrame::new(vec![x]).unwrap(), target,
    ).unwrap();

    assert_eq!(f.predict(&probe, 0), 0f64);
    assert_eq!(f.predict(&probe, 1), 1f64);
    assert_eq!(f.predict(&probe, 2), 1f64);
}


#[test]
fn depth_zero_yields_the_loss_minimizing_constant() {
    let sample = step_sample();

    let tree = SortingTreeBuilder::new()
        .max_depth(0)
        .build()
        .unwrap();
    let f = tree.induce(&sample, &all_indices(&sample));

    for row in 0..4 {
        assert_eq!(f.predict(&sample, row), 0.5f64);
    }
}


#[test]
fn induction_is_deterministic() {
    let x1 = Series::new("a", &[3f64, 1f64, 4f64, 1f64, 5f64, 9f64]);
    let x2 = Series::new("b", &[3f64, 1f64, 4f64, 1f64, 5f64, 9f64]);
    let target = Series::new("y", &[1f64, -1f64, 1f64, -1f64, 1f64, 1f64]);
    let df = DataFrame::new(vec![x1, x2]).unwrap();
    let sample = Sample::from_dataframe(df, target).unwrap();

    let tree = SortingTreeBuilder::new()
        .max_depth(3)
        .build()
        .unwrap();

    // Both feature columns are identical, so every split of the
    // second one ties with the first; the tie-breaking rule must
    // resolve them identically on every run.
    let indices = all_indices(&sample);
    let f = tree.induce(&sample, &indices);
    let g = tree.induce(&sample, &indices);

    assert_eq!(f, g);
}


#[test]
fn beats_the_best_constant_prediction() {
    let x = Series::new(
        "x", &[0.3f64, 1.2, 2.7, 3.1, 4.9, 5.5, 6.0, 7.8],
    );
    let target = Series::new(
        "y", &[0.1f64, 0.3, 0.2, 0.9, 1.1, 0.8, 1.2, 1.0],
    );
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, target).unwrap();

    let tree = SortingTreeBuilder::new()
        .max_depth(2)
        .min_gain(0.0)
        .build()
        .unwrap();
    let f = tree.induce(&sample, &all_indices(&sample));

    let target = sample.target();
    let n_sample = sample.shape().0;

    let mean = target.iter().sum::<f64>() / n_sample as f64;
    let constant_loss = target.iter()
        .map(|y| 0.5f64 * (mean - y).powi(2))
        .sum::<f64>();

    let tree_loss = f.predict_all(&sample)
        .into_iter()
        .zip(target)
        .map(|(p, y)| 0.5f64 * (p - y).powi(2))
        .sum::<f64>();

    assert!(tree_loss < constant_loss);
}


#[test]
fn large_min_gain_blocks_every_split() {
    let sample = step_sample();

    let tree = SortingTreeBuilder::new()
        .max_depth(5)
        .min_gain(1e9)
        .build()
        .unwrap();
    let f = tree.induce(&sample, &all_indices(&sample));

    for row in 0..4 {
        assert_eq!(f.predict(&sample, row), 0.5f64);
    }
}


#[test]
fn min_examples_per_leaf_restricts_the_boundary() {
    let x = Series::new("x", &[1f64, 2f64, 3f64, 4f64]);
    let target = Series::new("y", &[0f64, 0f64, 0f64, 1f64]);
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, target).unwrap();

    let tree = SortingTreeBuilder::new()
        .max_depth(1)
        .min_examples_per_leaf(2)
        .build()
        .unwrap();
    let f = tree.induce(&sample, &all_indices(&sample));

    // The best unrestricted boundary (x <= 3) leaves a single
    // example on the right, so the split lands on x <= 2 instead.
    let predictions = f.predict_all(&sample);
    assert_eq!(predictions, vec![0f64, 0f64, 0.5f64, 0.5f64]);
}


#[test]
fn leaf_outputs_respect_example_weights() {
    let x = Series::new("x", &[1f64, 2f64, 3f64, 4f64]);
    let target = Series::new("y", &[0f64, 0f64, 1f64, 1f64]);
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, target)
        .unwrap()
        .with_weights(vec![1f64, 1f64, 1f64, 3f64]);

    let tree = SortingTreeBuilder::new()
        .max_depth(0)
        .build()
        .unwrap();
    let f = tree.induce(&sample, &all_indices(&sample));

    let expected = 4f64 / 6f64;
    assert!((f.predict(&sample, 0) - expected).abs() < 1e-12);
}


#[test]
fn constant_features_fall_back_to_a_leaf() {
    let x = Series::new("x", &[7f64, 7f64, 7f64, 7f64]);
    let target = Series::new("y", &[0f64, 1f64, 0f64, 1f64]);
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, target).unwrap();

    let tree = SortingTreeBuilder::new()
        .max_depth(4)
        .build()
        .unwrap();
    let f = tree.induce(&sample, &all_indices(&sample));

    for row in 0..4 {
        assert_eq!(f.predict(&sample, row), 0.5f64);
    }
}


#[test]
fn log_loss_leaves_are_newton_steps() {
    let x = Series::new("x", &[1f64, 2f64, 3f64, 4f64]);
    let target = Series::new("y", &[-1f64, -1f64, 1f64, 1f64]);
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, target).unwrap();

    let tree = SortingTreeBuilder::new()
        .max_depth(1)
        .loss(Loss::Log)
        .build()
        .unwrap();
    let f = tree.induce(&sample, &all_indices(&sample));

    // Each side is label-pure, so the single Newton step from 0
    // lands on 2 * (weighted mean label).
    let predictions = f.predict_all(&sample);
    assert_eq!(predictions, vec![-2f64, -2f64, 2f64, 2f64]);
}


#[test]
fn bootstrap_multisets_count_duplicates() {
    let sample = step_sample();

    let tree = SortingTreeBuilder::new()
        .max_depth(0)
        .build()
        .unwrap();

    // Example 3 (label 1) appears once among three draws.
    let f = tree.induce(&sample, &[0, 0, 3]);
    assert!((f.predict(&sample, 0) - 1f64 / 3f64).abs() < 1e-12);
}


#[test]
fn reports_its_configuration() {
    let tree = SortingTreeBuilder::new()
        .max_depth(2)
        .loss(Loss::Log)
        .build()
        .unwrap();

    assert_eq!(tree.name(), "Sorting Tree");

    let info = tree.info().unwrap();
    assert!(info.iter().any(|(k, v)| *k == "Max depth" && v == "2"));
    assert!(info.iter().any(|(k, v)| *k == "Loss" && v == "Log loss"));

    let banner = format!("{tree}");
    assert!(banner.contains("# Sorting Tree"));
    assert!(banner.contains("Log loss"));
}


#[test]
fn dumps_a_dot_file() {
    let sample = step_sample();

    let tree = SortingTreeBuilder::new()
        .max_depth(1)
        .build()
        .unwrap();
    let f = tree.induce(&sample, &all_indices(&sample));

    let mut path = std::env::temp_dir();
    path.push("treebag_tree_test.dot");

    f.to_dot_file(&path).unwrap();
    let rendered = std::fs::read_to_string(&path).unwrap();
    assert!(rendered.starts_with("graph TreePredictor {"));
    assert!(rendered.contains("x[0] <= 2.00 ?"));

    std::fs::remove_file(&path).ok();
}


#[test]
fn builder_rejects_invalid_hyperparameters() {
    let zero_leaf = SortingTreeBuilder::new()
        .min_examples_per_leaf(0)
        .build();
    assert!(matches!(zero_leaf, Err(TrainError::InvalidConfig(_))));

    let negative_gain = SortingTreeBuilder::new()
        .min_gain(-0.5)
        .build();
    assert!(matches!(negative_gain, Err(TrainError::InvalidConfig(_))));
}
