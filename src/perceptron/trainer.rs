//! Mistake-driven perceptron: online fit loop and step-rule prediction.

use super::config::PerceptronConfig;
use super::history::TrainingHistory;
use crate::common_types::{validate_design_matrix, Dataset, Label};
use crate::error::{PerceptronError, Result};
use num_traits::Float;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt::Debug;
use tracing::{debug, info, warn};

/// Perceptron binary classifier.
///
/// The trainer starts unfitted. [`Perceptron::fit`] draws fresh random weights,
/// runs every configured epoch over the samples in order, and updates the
/// weights after each mistake. Afterwards the final weights and one
/// [`super::history::EpochRecord`] per epoch are available.
///
/// The first column of the design matrix is expected to be the constant bias
/// feature (see [`crate::features::add_bias_column`]); the trainer itself does
/// not treat any column specially.
#[derive(Debug, Clone)]
pub struct Perceptron<F> {
    config: PerceptronConfig<F>,
    weights: Option<Vec<F>>,
    history: Option<TrainingHistory<F>>,
}

impl<F> Perceptron<F>
where
    F: Float + Debug,
{
    pub fn new(config: PerceptronConfig<F>) -> Result<Self> {
        config.validate()?;
        Ok(Perceptron {
            config,
            weights: None,
            history: None,
        })
    }

    pub fn config(&self) -> &PerceptronConfig<F> {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }

    /// Final weights of the last fit, `None` before the first fit.
    pub fn weights(&self) -> Option<&[F]> {
        self.weights.as_deref()
    }

    pub fn history(&self) -> Option<&TrainingHistory<F>> {
        self.history.as_ref()
    }

    /// Linear score `w · x` before thresholding.
    pub fn net_input(weights: &[F], sample: &[F]) -> F {
        weights
            .iter()
            .zip(sample.iter())
            .fold(F::zero(), |acc, (&w, &x)| acc + w * x)
    }

    /// Trains on `samples` (n × p) and `labels` (length n).
    ///
    /// All epochs run even once an epoch finishes without mistakes. On invalid
    /// input an error is returned and any previous fit is kept.
    pub fn fit(&mut self, samples: &[Vec<F>], labels: &[Label]) -> Result<&mut Self> {
        let n_features = validate_design_matrix(samples, labels)?;
        let learning_rate = self.config.learning_rate;
        let mut weights = self.initial_weights(n_features)?;
        let mut history = TrainingHistory::with_capacity(self.config.epochs);

        for epoch in 0..self.config.epochs {
            let mut misclassifications = 0;
            for (sample, &label) in samples.iter().zip(labels.iter()) {
                let prediction = Label::from_net_input(Self::net_input(&weights, sample));
                let target: F = label.sign();
                let predicted: F = prediction.sign();
                if target * predicted <= F::zero() {
                    let step = learning_rate * (target - predicted);
                    for (w, &x) in weights.iter_mut().zip(sample.iter()) {
                        *w = *w + step * x;
                    }
                    misclassifications += 1;
                }
            }
            debug!(epoch, misclassifications, "perceptron epoch finished");
            history.push(&weights, misclassifications);
        }

        let final_errors = history.last().map_or(0, |r| r.misclassifications);
        info!(
            epochs = history.len(),
            samples = samples.len(),
            final_errors,
            converged_epoch = ?history.converged_epoch(),
            "perceptron fit complete"
        );
        if final_errors > 0 {
            warn!(final_errors, "last epoch still misclassified samples");
        }

        self.weights = Some(weights);
        self.history = Some(history);
        Ok(self)
    }

    pub fn fit_dataset(&mut self, dataset: &Dataset<F>) -> Result<&mut Self> {
        self.fit(&dataset.samples, &dataset.labels)
    }

    /// Classifies one sample. Zero net input is classified as [`Label::Positive`].
    ///
    /// `weights` overrides the fitted weights; without it the trainer must
    /// have been fitted, otherwise [`PerceptronError::NotFitted`] is returned.
    pub fn predict(&self, sample: &[F], weights: Option<&[F]>) -> Result<Label> {
        let weights = weights
            .or(self.weights.as_deref())
            .ok_or(PerceptronError::NotFitted)?;
        if weights.len() != sample.len() {
            return Err(PerceptronError::DimensionMismatch {
                expected: weights.len(),
                found: sample.len(),
            });
        }
        Ok(Label::from_net_input(Self::net_input(weights, sample)))
    }

    /// Classifies every row with the fitted weights.
    pub fn predict_batch(&self, samples: &[Vec<F>]) -> Result<Vec<Label>> {
        samples.iter().map(|sample| self.predict(sample, None)).collect()
    }

    /// Fraction of samples whose predicted label matches the given one.
    pub fn score(&self, samples: &[Vec<F>], labels: &[Label]) -> Result<f64> {
        validate_design_matrix(samples, labels)?;
        let predictions = self.predict_batch(samples)?;
        let correct = predictions
            .iter()
            .zip(labels.iter())
            .filter(|(predicted, actual)| predicted == actual)
            .count();
        Ok(correct as f64 / labels.len() as f64)
    }

    fn initial_weights(&self, n_features: usize) -> Result<Vec<F>> {
        let scale = self.config.init_scale.to_f64().ok_or_else(|| {
            PerceptronError::InvalidConfig(format!(
                "init_scale {:?} is not representable as f64",
                self.config.init_scale
            ))
        })?;
        if scale == 0.0 {
            return Ok(vec![F::zero(); n_features]);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        (0..n_features)
            .map(|_| {
                let draw = rng.gen_range(-scale..=scale);
                F::from(draw).ok_or_else(|| {
                    PerceptronError::InvalidConfig(format!(
                        "initial weight {} is not representable in the feature type",
                        draw
                    ))
                })
            })
            .collect()
    }
}
