use serde::{Serialize, Deserialize};

use crate::{Regressor, Sample};
use crate::tree::node::*;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Decision tree predictor.
/// This struct is just a wrapper of `Node`,
/// immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreePredictor {
    root: Node,
}


impl From<Node> for TreePredictor {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Regressor for TreePredictor {
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        self.root.predict(sample, row)
    }
}


impl TreePredictor {
    /// Write the current tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph TreePredictor {")?;


        let info = self.root.to_dot_info(0).0;
        info.into_iter()
            .for_each(|row| {
                f.write_all(row.as_bytes()).unwrap();
            });

        f.write_all(b"}")?;

        Ok(())
    }
}
