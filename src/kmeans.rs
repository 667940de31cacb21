//! Lloyd's K-means clusterer.
//!
//! Centroids are seeded with the first K points in input order, so a run is
//! fully determined by its inputs. Each round assigns every point to its
//! nearest centroid (lowest index wins ties) and replaces every non-empty
//! cluster's centroid with the mean of its points. Empty clusters keep their
//! previous centroid. The loop stops as soon as no centroid moved by
//! [`EPSILON`] or more, or after `max_iter` rounds.

use log::{debug, info};
use ndarray::{s, Array2, ArrayView2};

use crate::distance::euclidean;
use crate::error::ClusterError;

/// Per-centroid movement below which a round counts as converged.
pub const EPSILON: f64 = 1e-3;

/// Iteration cap used by the command line when none is given.
pub const DEFAULT_MAX_ITER: usize = 400;

/// Exclusive upper bound on the iteration cap.
pub const MAX_ITER_LIMIT: usize = 1000;

/// Outcome of a clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// K x D matrix, one centroid per row, in seed order.
    pub centroids: Array2<f64>,
    /// Cluster index of every point as used by the last update phase.
    pub assignments: Vec<usize>,
    /// Number of completed rounds.
    pub iterations: usize,
    pub converged: bool,
}

/// Check the run parameters. The checks run in a fixed order and the first
/// failing one is reported.
pub fn validate(k: usize, n_points: usize, max_iter: usize) -> Result<(), ClusterError> {
    if k <= 1 {
        return Err(ClusterError::invalid_cluster_count(format!(
            "K must be greater than 1, got {}",
            k
        )));
    }
    if k >= n_points {
        return Err(ClusterError::invalid_cluster_count(format!(
            "K ({}) must be less than the number of points ({})",
            k, n_points
        )));
    }
    if max_iter <= 1 {
        return Err(ClusterError::invalid_iteration_count(format!(
            "must be greater than 1, got {}",
            max_iter
        )));
    }
    if max_iter >= MAX_ITER_LIMIT {
        return Err(ClusterError::invalid_iteration_count(format!(
            "must be less than {}, got {}",
            MAX_ITER_LIMIT, max_iter
        )));
    }
    Ok(())
}

/// Cluster `points` (one point per row) into `k` groups and return the K
/// centroids.
pub fn kmeans(k: usize, points: ArrayView2<f64>, max_iter: usize) -> Result<Array2<f64>, ClusterError> {
    fit(k, points, max_iter).map(|c| c.centroids)
}

/// Same as [`kmeans`], but also reports assignments and convergence.
pub fn fit(k: usize, points: ArrayView2<f64>, max_iter: usize) -> Result<Clustering, ClusterError> {
    validate(k, points.nrows(), max_iter)?;

    // Two K x D buffers: `previous` holds the centroids a round starts from,
    // `current` receives the updated ones. They trade places after each round.
    let mut previous = points.slice(s![..k, ..]).to_owned();
    let mut current = Array2::<f64>::zeros(previous.raw_dim());
    let mut assignments = vec![0usize; points.nrows()];
    let mut counts = vec![0usize; k];

    for round in 0..max_iter {
        lloyd_step(points, previous.view(), &mut current, &mut assignments, &mut counts);

        let shifts = centroid_shifts(previous.view(), current.view());
        debug!(
            "Round {}: largest centroid shift {:.6}",
            round + 1,
            shifts.iter().cloned().fold(0.0, f64::max)
        );

        if shifts.iter().all(|&d| d < EPSILON) {
            info!("Converged after {} iterations", round + 1);
            return Ok(Clustering {
                centroids: current,
                assignments,
                iterations: round + 1,
                converged: true,
            });
        }
        std::mem::swap(&mut previous, &mut current);
    }

    info!("Stopped after {} iterations without converging", max_iter);
    Ok(Clustering {
        centroids: previous,
        assignments,
        iterations: max_iter,
        converged: false,
    })
}

/// One assignment + update round from `previous` into `current`.
fn lloyd_step(
    points: ArrayView2<f64>,
    previous: ArrayView2<f64>,
    current: &mut Array2<f64>,
    assignments: &mut [usize],
    counts: &mut [usize],
) {
    // Step 1: assign points to the nearest centroid
    for (i, point) in points.outer_iter().enumerate() {
        let mut best_cluster = 0;
        let mut best_dist = f64::INFINITY;
        for (ci, centroid) in previous.outer_iter().enumerate() {
            let dist = euclidean(point, centroid);
            if dist < best_dist {
                best_dist = dist;
                best_cluster = ci;
            }
        }
        assignments[i] = best_cluster;
    }

    // Step 2: update centroids as mean of assigned points
    current.fill(0.0);
    counts.fill(0);
    for (point, &c) in points.outer_iter().zip(assignments.iter()) {
        let mut sum = current.row_mut(c);
        sum += &point;
        counts[c] += 1;
    }
    for (ci, mut centroid) in current.outer_iter_mut().enumerate() {
        if counts[ci] > 0 {
            let n = counts[ci] as f64;
            centroid.mapv_inplace(|x| x / n);
        } else {
            debug!("Cluster {} is empty, keeping its centroid", ci);
            centroid.assign(&previous.row(ci));
        }
    }
}

fn centroid_shifts(previous: ArrayView2<f64>, current: ArrayView2<f64>) -> Vec<f64> {
    previous
        .outer_iter()
        .zip(current.outer_iter())
        .map(|(p, c)| euclidean(p, c))
        .collect()
}
