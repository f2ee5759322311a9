//! Feature preparation: bias augmentation and polynomial expansion of raw feature rows.

use crate::error::{PerceptronError, Result};
use num_traits::Float;

/// Prefixes every row with a constant `1.0` so the first weight acts as the bias.
pub fn add_bias_column<F: Float>(rows: &[Vec<F>]) -> Vec<Vec<F>> {
    rows.iter()
        .map(|row| {
            let mut augmented = Vec::with_capacity(row.len() + 1);
            augmented.push(F::one());
            augmented.extend_from_slice(row);
            augmented
        })
        .collect()
}

/// Expands rows into all monomials of the input features up to `degree`.
///
/// Output columns are ordered by total degree, then lexicographically by the
/// combination of feature indices. For inputs `[a, b]` and degree 2 with bias:
/// `[1, a, b, a², ab, b²]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialFeatures {
    degree: usize,
    include_bias: bool,
}

impl PolynomialFeatures {
    pub fn new(degree: usize, include_bias: bool) -> Result<Self> {
        if degree == 0 {
            return Err(PerceptronError::InvalidConfig(
                "polynomial degree must be at least 1".to_string(),
            ));
        }
        Ok(PolynomialFeatures { degree, include_bias })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of output columns for rows with `n_input` features.
    pub fn n_output_features(&self, n_input: usize) -> usize {
        self.combinations(n_input).len()
    }

    /// Expands every row. All rows must have the same width.
    pub fn transform<F: Float>(&self, rows: &[Vec<F>]) -> Result<Vec<Vec<F>>> {
        let n_input = match rows.first() {
            Some(row) => row.len(),
            None => return Ok(Vec::new()),
        };
        let combinations = self.combinations(n_input);
        rows.iter()
            .map(|row| {
                if row.len() != n_input {
                    return Err(PerceptronError::DimensionMismatch {
                        expected: n_input,
                        found: row.len(),
                    });
                }
                Ok(combinations
                    .iter()
                    .map(|indices| indices.iter().fold(F::one(), |acc, &i| acc * row[i]))
                    .collect())
            })
            .collect()
    }

    fn combinations(&self, n_input: usize) -> Vec<Vec<usize>> {
        let start = if self.include_bias { 0 } else { 1 };
        let mut out = Vec::new();
        for degree in start..=self.degree {
            let mut current = Vec::with_capacity(degree);
            push_combinations(n_input, degree, 0, &mut current, &mut out);
        }
        out
    }
}

// Combinations with replacement of `0..n_input`, length `remaining`, in lexicographic order.
fn push_combinations(
    n_input: usize,
    remaining: usize,
    first: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if remaining == 0 {
        out.push(current.clone());
        return;
    }
    for index in first..n_input {
        current.push(index);
        push_combinations(n_input, remaining - 1, index, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_bias_column() {
        let rows = vec![vec![2.0, 3.0], vec![-1.0, 0.5]];
        assert_eq!(
            add_bias_column(&rows),
            vec![vec![1.0, 2.0, 3.0], vec![1.0, -1.0, 0.5]]
        );
        assert!(add_bias_column::<f64>(&[]).is_empty());
    }

    #[test]
    fn test_polynomial_degree_two_with_bias() {
        let poly = PolynomialFeatures::new(2, true).unwrap();
        let expanded = poly.transform(&[vec![2.0, 3.0]]).unwrap();
        assert_eq!(expanded, vec![vec![1.0, 2.0, 3.0, 4.0, 6.0, 9.0]]);
        assert_eq!(poly.n_output_features(2), 6);
    }

    #[test]
    fn test_polynomial_expands_each_row_independently() {
        let poly = PolynomialFeatures::new(2, false).unwrap();
        let expanded = poly.transform(&[vec![1.0, -1.0], vec![0.5, 2.0]]).unwrap();
        assert_eq!(
            expanded,
            vec![
                vec![1.0, -1.0, 1.0, -1.0, 1.0],
                vec![0.5, 2.0, 0.25, 1.0, 4.0],
            ]
        );
        assert!(poly.transform::<f64>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_polynomial_without_bias() {
        let poly = PolynomialFeatures::new(3, false).unwrap();
        let expanded = poly.transform(&[vec![2.0_f32]]).unwrap();
        assert_eq!(expanded, vec![vec![2.0, 4.0, 8.0]]);
    }

    #[test]
    fn test_polynomial_output_width() {
        let poly = PolynomialFeatures::new(3, true).unwrap();
        // C(n + d, d) for n = 3, d = 3
        assert_eq!(poly.n_output_features(3), 20);
        let poly = PolynomialFeatures::new(1, false).unwrap();
        assert_eq!(poly.n_output_features(5), 5);
    }

    #[test]
    fn test_polynomial_rejects_zero_degree_and_ragged_rows() {
        assert!(matches!(
            PolynomialFeatures::new(0, true),
            Err(PerceptronError::InvalidConfig(_))
        ));
        let poly = PolynomialFeatures::new(2, true).unwrap();
        assert!(matches!(
            poly.transform(&[vec![1.0, 2.0], vec![1.0]]),
            Err(PerceptronError::DimensionMismatch { expected: 2, found: 1 })
        ));
    }
}
