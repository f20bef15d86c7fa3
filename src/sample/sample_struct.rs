use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::collections::{HashMap, HashSet};
use std::ops::Index;

use polars::prelude::*;
use rayon::prelude::*;
use super::feature_struct::*;


/// Struct `Sample` holds a batch sample in dense format.
/// Each example is a triple of a feature vector, a target value,
/// and a non-negative weight.
/// Weights default to `1` for every example
/// unless a weight column is designated via [`Sample::set_weight`]
/// or supplied via [`Sample::with_weights`].
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) weight: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    /// All example weights are set to `1`.
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> io::Result<Self>
    {
        let (n_sample, n_feature) = data.shape();
        let target = target.f64()
            .expect("The target is not a dtype f64")
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .unwrap();

        let features = data.get_columns()
            .into_par_iter()
            .map(Feature::from_series)
            .collect::<Vec<_>>();

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let weight = vec![1f64; n_sample];

        let sample = Self {
            name_to_index, features, target, weight, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Read a CSV format file to `Sample` type.
    /// The target column is not designated here;
    /// use [`Sample::set_target`] afterwards.
    pub fn from_csv<P>(file: P, mut has_header: bool) -> io::Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let mut features = Vec::new();
        if has_header {
            let line = lines.next().unwrap();
            features = line?.split(',')
                .map(Feature::new)
                .collect::<Vec<_>>();
        }
        let mut n_sample = 0_usize;

        // For each line of the file
        for line in lines {
            let line = line?;

            // If the header does not exist, construct a dummy header.
            if !has_header {
                let xs = line.split(',')
                    .map(|x| x.trim().parse::<f64>().unwrap())
                    .collect::<Vec<_>>();

                let n_feature = xs.len();
                features = (1..=n_feature).map(|i| {
                        let name = format!("Feat. [{i}]");
                        Feature::new(name)
                    })
                    .collect::<Vec<_>>();

                for (feat, x) in features.iter_mut().zip(xs) {
                    feat.append(x);
                }

                has_header = true;
                n_sample += 1;
                continue;
            }

            line.split(',')
                .map(|x| x.trim().parse::<f64>().unwrap())
                .enumerate()
                .for_each(|(i, x)| {
                    features[i].append(x);
                });

            n_sample += 1;
        }

        let n_feature = features.len();
        let target = Vec::with_capacity(0);
        let weight = vec![1f64; n_sample];

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let sample = Self {
            name_to_index, features, target, weight, n_sample, n_feature,
        };

        Ok(sample)
    }


    /// Returns a slice over the target values.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns a slice over the example weights.
    pub fn weight(&self) -> &[f64] {
        &self.weight[..]
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the `j`-th feature column.
    pub fn feature(&self, j: usize) -> &Feature {
        &self.features[j]
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Self {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .expect("The target column does not exist");


        let target = self.features.remove(pos).into_values();
        self.target = target;
        self.n_feature -= 1;


        self.rebuild_name_index();
        self
    }


    /// Set the feature of name `weight` to `self.weight`.
    /// Weights must be non-negative;
    /// this method panics when a negative weight is found.
    pub fn set_weight<S: AsRef<str>>(mut self, weight: S) -> Self {
        let weight = weight.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == weight)
            .expect("The weight column does not exist");


        let weight = self.features.remove(pos).into_values();
        if weight.iter().any(|w| !w.is_finite() || *w < 0f64) {
            panic!("Example weights must be finite and non-negative");
        }
        self.weight = weight;
        self.n_feature -= 1;


        self.rebuild_name_index();
        self
    }


    /// Replace the example weights by the given vector.
    /// This method panics when the length of the given vector is
    /// not equal to the number of examples,
    /// or when a weight is negative.
    pub fn with_weights(mut self, weight: Vec<f64>) -> Self {
        if weight.len() != self.n_sample {
            panic!(
                "The number of weights is \
                 not equal to the number of examples"
            );
        }
        if weight.iter().any(|w| !w.is_finite() || *w < 0f64) {
            panic!("Example weights must be finite and non-negative");
        }
        self.weight = weight;
        self
    }


    fn rebuild_name_index(&mut self) {
        self.name_to_index = self.features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect();
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target[idx];

        (x, y)
    }


    fn target_is_specified(&self) {
        let n_sample = self.shape().0;

        if n_sample != self.target.len() {
            panic!(
                "The target column is not specified.\n\
                 Use `Sample::set_target(\"Column Name\")`."
            );
        }
    }


    /// Check whether `self` is
    /// a training set for binary classification or not.
    pub fn is_valid_binary_instance(&self) {
        // Check whether the target column is specified.
        self.target_is_specified();


        // Check whether the target values take exactly 2 kinds.
        let set = self.target.iter()
            .copied()
            .map(|yi| yi as i32)
            .collect::<HashSet<_>>();
        let n_label = set.len();
        if n_label != 2 {
            panic!(
                "The target values take {n_label} kinds. \
                 Expected 2 kinds."
            );
        }


        // Check whether the target values take +1 or -1.
        let is_pm = set.iter().all(|y| y.eq(&1) || y.eq(&-1));
        if !is_pm {
            let line = set.iter()
                .map(|y| y.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "Warning: the target values take values not in [-1.0, 1.0].\n\
                 Currently, the labels are: [{line}]."
            );
        }
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name).unwrap();
        &self.features[k]
    }
}
