use polars::prelude::*;
use std::ops::Index;
use std::slice::Iter;

const BUF_SIZE: usize = 256;


/// Dense representation of a feature (a single column of the sample).
/// A feature of a sample with `n` examples holds exactly `n` values.
#[derive(Debug, Clone)]
pub struct Feature {
    /// Feature name
    pub name: String,
    /// Feature values, one per example.
    pub values: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature with `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::with_capacity(BUF_SIZE),
        }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns an iterator over feature values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.values.iter()
    }


    /// Convert `polars::Series` into `Feature`.
    pub(crate) fn from_series(series: &Series) -> Self {
        let name = series.name().to_string();

        let values = series.f64()
            .expect("The series is not a dtype f64")
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .unwrap();

        Self { name, values, }
    }


    /// Append an example to this feature.
    pub fn append(&mut self, x: f64) {
        self.values.push(x);
    }


    /// Returns the number of items in `self.values`.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if `self.len()` is equals to `0`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    pub(crate) fn into_values(self) -> Vec<f64> {
        self.values
    }
}


impl Index<usize> for Feature {
    type Output = f64;


    fn index(&self, row: usize) -> &Self::Output {
        &self.values[row]
    }
}
