use crate::error::{PerceptronError, Result};
use num_traits::Float;
use std::fmt::Debug;

/// Hyperparameters of the mistake-driven perceptron.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerceptronConfig<F> {
    /// Step size applied to each mistake-driven update.
    pub learning_rate: F,
    /// Number of full passes over the training data. Always run to completion.
    pub epochs: usize,
    /// Seed for the initial weights.
    pub seed: u64,
    /// Initial weights are drawn uniformly from `[-init_scale, init_scale]`.
    pub init_scale: F,
}

impl PerceptronConfig<f64> {
    pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
    pub const DEFAULT_EPOCHS: usize = 50;
    pub const DEFAULT_SEED: u64 = 1;
    pub const DEFAULT_INIT_SCALE: f64 = 0.01;
}

impl Default for PerceptronConfig<f64> {
    fn default() -> Self {
        PerceptronConfig {
            learning_rate: Self::DEFAULT_LEARNING_RATE,
            epochs: Self::DEFAULT_EPOCHS,
            seed: Self::DEFAULT_SEED,
            init_scale: Self::DEFAULT_INIT_SCALE,
        }
    }
}

impl<F: Float + Debug> PerceptronConfig<F> {
    pub fn new(learning_rate: F, epochs: usize, seed: u64, init_scale: F) -> Self {
        PerceptronConfig { learning_rate, epochs, seed, init_scale }
    }

    pub fn with_learning_rate(mut self, learning_rate: F) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_init_scale(mut self, init_scale: F) -> Self {
        self.init_scale = init_scale;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= F::zero() {
            return Err(PerceptronError::InvalidConfig(format!(
                "learning_rate must be finite and strictly positive, got {:?}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(PerceptronError::InvalidConfig(
                "epochs must be greater than 0".to_string(),
            ));
        }
        if !self.init_scale.is_finite() || self.init_scale < F::zero() {
            return Err(PerceptronError::InvalidConfig(format!(
                "init_scale must be finite and non-negative, got {:?}",
                self.init_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PerceptronConfig::default();
        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.epochs, 50);
        assert_eq!(config.seed, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = PerceptronConfig::default()
            .with_learning_rate(0.1)
            .with_epochs(10)
            .with_seed(42)
            .with_init_scale(0.0);
        assert_eq!(config, PerceptronConfig::new(0.1, 10, 42, 0.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_learning_rate() {
        for lr in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = PerceptronConfig::default().with_learning_rate(lr);
            assert!(matches!(config.validate(), Err(PerceptronError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_invalid_epochs_and_init_scale() {
        let config = PerceptronConfig::default().with_epochs(0);
        assert!(matches!(config.validate(), Err(PerceptronError::InvalidConfig(_))));
        let config = PerceptronConfig::default().with_init_scale(-0.1);
        assert!(matches!(config.validate(), Err(PerceptronError::InvalidConfig(_))));
    }
}
