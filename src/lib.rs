//! Deterministic Lloyd's K-means.
//!
//! Points are read as comma separated lines into a [`DataSet`], clustered with
//! [`kmeans`] (centroids seeded from the first K points) and rendered with
//! [`write_centroids`], four decimals per coordinate.

pub mod dataset;
pub mod distance;
pub mod error;
pub mod kmeans;
pub mod output;

pub use dataset::DataSet;
pub use error::ClusterError;
pub use kmeans::{fit, kmeans, validate, Clustering, DEFAULT_MAX_ITER, EPSILON, MAX_ITER_LIMIT};
pub use output::{format_centroid, write_centroids};
