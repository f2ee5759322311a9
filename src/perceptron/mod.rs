pub mod config;
pub mod diagnostics;
pub mod history;
pub mod trainer;

pub use config::PerceptronConfig;
pub use diagnostics::{DecisionBoundary, MisclassificationCurve};
pub use history::{EpochRecord, TrainingHistory};
pub use trainer::Perceptron;
