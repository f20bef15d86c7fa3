//! Provides the bootstrap aggregation ("bagging") trainer.
use colored::Colorize;
use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{Ensemble, Sample};
use crate::common::error::TrainError;
use crate::common::utils;
use crate::tree::core::BaseLearner;
use crate::trainer::core::IncrementalTrainer;


const WIDTH: usize = 4;


/// The ensemble weighting policy.
/// Fixed when the trainer is built;
/// every snapshot returned by
/// [`Bagging::predictor`](IncrementalTrainer::predictor)
/// materializes its weights under the same policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Weighting {
    /// Every member gets weight `1/k`
    /// where `k` is the current number of members,
    /// so the ensemble predicts the plain average.
    Uniform,

    /// Every member gets the given fixed weight.
    Constant(f64),
}


/// The bagging trainer.
/// `Bagging` repeatedly draws bootstrap samples
/// (index multisets drawn with replacement,
/// no example data is copied)
/// from the training sample with its own persistent random generator,
/// hands each one to the base learner,
/// and appends the resulting predictors to an [`Ensemble`].
///
/// Training is incremental:
/// every call to `update` strictly grows the ensemble
/// and advances the random generator,
/// so reproducibility is fully captured by
/// the seed and the sequence of update calls.
///
/// `Bagging` is constructed by
/// [`BaggingBuilder`](crate::trainer::BaggingBuilder).
///
/// # Example
/// ```no_run
/// use treebag::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let tree = SortingTreeBuilder::new()
///     .max_depth(3)
///     .loss(Loss::Log)
///     .build()
///     .unwrap();
///
/// let mut bagging = BaggingBuilder::new(tree)
///     .trees_per_update(100)
///     .build()
///     .unwrap();
///
/// bagging.update(&sample).unwrap();
/// let f = bagging.predictor();
///
/// let predictions = f.predict_all(&sample);
/// ```
pub struct Bagging<B: BaseLearner> {
    // The base learner invoked once per bootstrap sample.
    base: B,

    // The number of trees appended per update call.
    trees_per_update: usize,

    // Bootstrap sample size; `None` means the sample size
    // of the training data, taken at update time.
    sample_size: Option<usize>,

    // Ensemble weighting policy.
    weighting: Weighting,

    // Persistent random generator.
    // Its state advances across update calls and is the only
    // source of randomness in the trainer.
    rng: StdRng,

    verbose: bool,

    // Feature dimension observed on the first update.
    n_feature: Option<usize>,

    // Predictors accumulated so far, in training order.
    members: Vec<B::Predictor>,
}


impl<B: BaseLearner> Bagging<B> {
    /// Initialize `Bagging`.
    /// This method is called only via `BaggingBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        base: B,
        trees_per_update: usize,
        sample_size: Option<usize>,
        weighting: Weighting,
        rng: StdRng,
        verbose: bool,
    ) -> Self
    {
        Self {
            base,
            trees_per_update,
            sample_size,
            weighting,
            rng,
            verbose,

            n_feature: None,
            members: Vec::new(),
        }
    }


    /// Returns the number of members trained so far.
    pub fn n_members(&self) -> usize {
        self.members.len()
    }


    /// Draw one bootstrap sample: `size` indices drawn
    /// with replacement from `0..n_sample`.
    fn bootstrap(&mut self, n_sample: usize, size: usize) -> Vec<usize> {
        (0..size)
            .map(|_| self.rng.gen_range(0..n_sample))
            .collect::<Vec<_>>()
    }
}


impl<B> IncrementalTrainer for Bagging<B>
    where B: BaseLearner,
          B::Predictor: Clone,
{
    type Predictor = Ensemble<B::Predictor>;


    fn name(&self) -> &str {
        "Bagging"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let sample_size = match self.sample_size {
            Some(size) => format!("{size}"),
            None => "# of examples".to_string(),
        };
        let mut info = Vec::from([
            ("# of trees per update", format!("{}", self.trees_per_update)),
            ("Bootstrap sample size", sample_size),
            ("Weighting", format!("{:?}", self.weighting)),
            ("Base learner", self.base.name().to_string()),
        ]);
        if let Some(base_info) = self.base.info() {
            info.extend(base_info);
        }
        Some(info)
    }


    fn update(&mut self, sample: &Sample) -> Result<(), TrainError> {
        let (n_sample, n_feature) = sample.shape();

        // Input checks come first so that a failed call
        // leaves the trainer untouched.
        if n_sample == 0 {
            return Err(TrainError::EmptySample);
        }
        if let Some(expected) = self.n_feature {
            if expected != n_feature {
                return Err(TrainError::DimensionMismatch {
                    expected,
                    got: n_feature,
                });
            }
        }

        let size = self.sample_size.unwrap_or(n_sample);

        for _ in 0..self.trees_per_update {
            let indices = self.bootstrap(n_sample, size);
            let h = self.base.induce(sample, &indices);
            self.members.push(h);

            if self.verbose {
                let k = self.members.len();
                println!(
                    "{}    {}",
                    format!("  [{k: >WIDTH$}'th tree]").bold().green(),
                    format!("[BOOTSTRAP {size: >WIDTH$} draws]").bold().yellow(),
                );
            }
        }

        self.n_feature = Some(n_feature);
        Ok(())
    }


    fn predictor(&self) -> Self::Predictor {
        let k = self.members.len();
        let mut weights = match self.weighting {
            Weighting::Uniform => vec![1f64; k],
            Weighting::Constant(c) => vec![c; k],
        };
        if matches!(self.weighting, Weighting::Uniform) {
            utils::normalize(&mut weights[..]);
        }

        Ensemble::from_slices(&weights[..], &self.members[..])
    }
}
