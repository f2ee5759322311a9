//! Training diagnostics exposed as data: the misclassification curve and the
//! 2-D decision boundary line.

use super::trainer::Perceptron;
use crate::error::{PerceptronError, Result};
use num_traits::Float;
use std::fmt::{self, Debug, Display};

/// `(epoch, misclassifications)` for every epoch of the last fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisclassificationCurve {
    pub points: Vec<(usize, usize)>,
}

impl MisclassificationCurve {
    pub fn from_trainer<F: Float + Debug>(perceptron: &Perceptron<F>) -> Result<Self> {
        let history = perceptron
            .history()
            .ok_or(PerceptronError::HistoryUnavailable)?;
        let points = history
            .records()
            .iter()
            .map(|r| (r.epoch, r.misclassifications))
            .collect();
        Ok(MisclassificationCurve { points })
    }

    pub fn max_errors(&self) -> usize {
        self.points.iter().map(|&(_, errors)| errors).max().unwrap_or(0)
    }
}

impl Display for MisclassificationCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "epoch\terrors")?;
        for (epoch, errors) in &self.points {
            // epochs are printed 1-based to match the usual plot axis
            writeln!(f, "{}\t{}", epoch + 1, errors)?;
        }
        Ok(())
    }
}

/// The line `bias + w1·x1 + w2·x2 = 0` of a perceptron trained on two
/// bias-augmented features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionBoundary<F> {
    pub bias: F,
    pub w1: F,
    pub w2: F,
}

impl<F: Float + Debug> DecisionBoundary<F> {
    pub fn from_trainer(perceptron: &Perceptron<F>) -> Result<Self> {
        if perceptron.history().is_none() {
            return Err(PerceptronError::HistoryUnavailable);
        }
        let weights = perceptron.weights().ok_or(PerceptronError::HistoryUnavailable)?;
        Self::from_weights(weights)
    }

    /// Expects exactly `[bias, w1, w2]`.
    pub fn from_weights(weights: &[F]) -> Result<Self> {
        match *weights {
            [bias, w1, w2] => Ok(DecisionBoundary { bias, w1, w2 }),
            _ => Err(PerceptronError::DimensionMismatch {
                expected: 3,
                found: weights.len(),
            }),
        }
    }

    /// `x2` on the boundary at `x1`. `None` when the line is vertical (`w2 == 0`).
    pub fn x2_at(&self, x1: F) -> Option<F> {
        if self.w2 == F::zero() {
            return None;
        }
        Some(-(self.bias + self.w1 * x1) / self.w2)
    }

    /// `x1` where the line crosses the x1 axis. `None` when `w1 == 0`.
    pub fn x1_intercept(&self) -> Option<F> {
        if self.w1 == F::zero() {
            return None;
        }
        Some(-self.bias / self.w1)
    }
}
