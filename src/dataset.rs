use anyhow::{anyhow, Result};
use csv::{ReaderBuilder, Trim};
use ndarray::{Array2, ArrayView2};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ClusterError;
use crate::kmeans::{self, Clustering};

/// Points loaded from comma separated text, one point per row.
#[derive(Debug, Clone)]
pub struct DataSet {
    pub data: Array2<f64>,
}

impl DataSet {
    /// Read a comma separated file into a DataSet
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)
            .map_err(|e| anyhow!("Failed to open {:?}: {}", path.as_ref(), e))?;
        Self::from_reader(file).map_err(|e| anyhow!("{:?}: {}", path.as_ref(), e))
    }

    /// Parse one point per line. Blank lines are skipped; every other line
    /// must hold the same number of numeric fields as the first point.
    /// Input without any point yields an empty (0 x 0) DataSet.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(reader);

        let mut flat: Vec<f64> = Vec::new();
        let mut nrows = 0;
        let mut ncols = 0;

        for result in rdr.records() {
            let record = result.map_err(|e| anyhow!("Error reading points: {}", e))?;
            if record.len() == 1 && record[0].is_empty() {
                continue;
            }
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if nrows == 0 {
                ncols = record.len();
            } else if record.len() != ncols {
                return Err(anyhow!(
                    "Line {} has {} coordinates, expected {}",
                    line,
                    record.len(),
                    ncols
                ));
            }

            for field in record.iter() {
                let value = field
                    .parse::<f64>()
                    .map_err(|e| anyhow!("Line {}: {:?} is not a number: {}", line, field, e))?;
                flat.push(value);
            }
            nrows += 1;
        }

        // No points is not a parse error; cluster-count validation rejects it.
        let data = Array2::from_shape_vec((nrows, ncols), flat)?;
        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Dimensionality of every point.
    pub fn dims(&self) -> usize {
        self.data.ncols()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// K-means centroids of all points.
    pub fn kmeans(&self, k: usize, max_iter: usize) -> Result<Array2<f64>, ClusterError> {
        kmeans::kmeans(k, self.view(), max_iter)
    }

    pub fn fit(&self, k: usize, max_iter: usize) -> Result<Clustering, ClusterError> {
        kmeans::fit(k, self.view(), max_iter)
    }
}
