//! This module contains the data structures shared by training, prediction and I/O.

use crate::error::{PerceptronError, Result};
use num_traits::Float;

/// A binary class label. The perceptron works with the signed encoding -1 / +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Thresholds a net input with the step rule. Zero net input is `Positive`.
    pub fn from_net_input<F: Float>(net_input: F) -> Self {
        if net_input >= F::zero() {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    /// The signed value of the label, -1 or +1.
    pub fn sign<F: Float>(self) -> F {
        match self {
            Label::Positive => F::one(),
            Label::Negative => -F::one(),
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            Label::Positive => 1,
            Label::Negative => -1,
        }
    }
}

impl TryFrom<f64> for Label {
    type Error = PerceptronError;

    fn try_from(value: f64) -> Result<Self> {
        if value == 1.0 {
            Ok(Label::Positive)
        } else if value == -1.0 {
            Ok(Label::Negative)
        } else {
            Err(PerceptronError::InvalidLabel(value))
        }
    }
}

/// Represents a single data point, with features and a label.
///
/// - `F`: The type of the features (e.g., `f32`, `f64`).
/// - `L`: The type of the label, [`Label`] for everything in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint<F, L> {
    pub features: Vec<F>,
    pub label: L,
}

impl<F, L> DataPoint<F, L> {
    pub fn new(features: Vec<F>, label: L) -> Self {
        DataPoint { features, label }
    }
}

/// A design matrix together with its aligned label vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F> {
    pub samples: Vec<Vec<F>>,
    pub labels: Vec<Label>,
}

impl<F: Float> Dataset<F> {
    /// Builds a dataset and checks it is usable for training.
    pub fn new(samples: Vec<Vec<F>>, labels: Vec<Label>) -> Result<Self> {
        validate_design_matrix(&samples, &labels)?;
        Ok(Dataset { samples, labels })
    }

    pub fn from_points(points: Vec<DataPoint<F, Label>>) -> Result<Self> {
        let (samples, labels) = points
            .into_iter()
            .map(|point| (point.features, point.label))
            .unzip();
        Self::new(samples, labels)
    }

    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    /// Width of one row, bias column included if present.
    pub fn n_features(&self) -> usize {
        self.samples.first().map_or(0, |row| row.len())
    }

    /// Replaces the design matrix, keeping the labels. Used after feature preparation.
    pub fn map_samples(self, transform: impl FnOnce(Vec<Vec<F>>) -> Vec<Vec<F>>) -> Result<Self> {
        Self::new(transform(self.samples), self.labels)
    }

    /// Iterates `(features, label)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&[F], Label)> + '_ {
        self.samples
            .iter()
            .zip(self.labels.iter())
            .map(|(features, &label)| (features.as_slice(), label))
    }
}

/// Checks that `samples` is a non-empty rectangular matrix of finite values
/// with one label per row. Returns the row width.
pub fn validate_design_matrix<F: Float>(samples: &[Vec<F>], labels: &[Label]) -> Result<usize> {
    let n_features = match samples.first() {
        Some(row) if !row.is_empty() => row.len(),
        _ => return Err(PerceptronError::EmptyDataset),
    };
    if samples.len() != labels.len() {
        return Err(PerceptronError::LengthMismatch {
            samples: samples.len(),
            labels: labels.len(),
        });
    }
    for (row_idx, row) in samples.iter().enumerate() {
        if row.len() != n_features {
            return Err(PerceptronError::DimensionMismatch {
                expected: n_features,
                found: row.len(),
            });
        }
        if let Some(column) = row.iter().position(|v| !v.is_finite()) {
            return Err(PerceptronError::NonFiniteValue { row: row_idx, column });
        }
    }
    Ok(n_features)
}
