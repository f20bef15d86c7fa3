//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample)
{
    let (n_sample, n_feature) = sample.shape();

    // `target` has the same length as every feature column,
    // so checking `n_sample` suffices.
    assert!(n_sample > 0);

    assert!(n_feature > 0);
}


/// Check whether the given index set refers into the sample.
#[inline(always)]
pub(crate) fn check_indices(indices: &[usize], n_sample: usize) {
    assert!(!indices.is_empty());
    assert!(
        indices.iter().all(|&i| i < n_sample),
        "index out of range for a sample of {n_sample} examples"
    );
}
