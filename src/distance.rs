use ndarray::ArrayView1;

/// Euclidean distance between two points of equal dimensionality.
#[inline]
pub fn euclidean(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_euclidean_3d() {
        let a = array![0.0, 0.0, 0.0];
        let b = array![0.0, 3.0, 4.0];
        assert_eq!(euclidean(a.view(), b.view()), 5.0);
    }

    #[test]
    fn test_euclidean_1d_and_symmetry() {
        let a = array![-2.5];
        let b = array![1.5];
        assert_abs_diff_eq!(euclidean(a.view(), b.view()), 4.0);
        assert_abs_diff_eq!(
            euclidean(a.view(), b.view()),
            euclidean(b.view(), a.view())
        );
    }

    #[test]
    fn test_euclidean_identical_points() {
        let a = array![1.25, -7.0, 3.5, 0.0];
        assert_eq!(euclidean(a.view(), a.view()), 0.0);
    }
}
