use ndarray::{ArrayView1, ArrayView2};
use std::io::{self, Write};

/// Coordinates with exactly four decimals, joined by commas.
pub fn format_centroid(centroid: ArrayView1<f64>) -> String {
    centroid
        .iter()
        .map(|c| format!("{:.4}", c))
        .collect::<Vec<_>>()
        .join(",")
}

/// Write one centroid per line, in row order.
pub fn write_centroids<W: Write>(mut out: W, centroids: ArrayView2<f64>) -> io::Result<()> {
    for centroid in centroids.outer_iter() {
        writeln!(out, "{}", format_centroid(centroid))?;
    }
    out.flush()
}
