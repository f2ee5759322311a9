//! Error type shared by the trainer, feature preparation and CSV I/O.

use thiserror::Error;

/// Everything that can go wrong while preparing data, fitting or predicting.
#[derive(Debug, Error)]
pub enum PerceptronError {
    /// `predict` was called on an unfitted trainer without explicit weights.
    #[error("perceptron has not been fitted; call fit() or pass weights explicitly")]
    NotFitted,

    /// Diagnostics were requested before any training history exists.
    #[error("no training history available; call fit() before requesting diagnostics")]
    HistoryUnavailable,

    #[error("dataset must contain at least one sample with at least one feature")]
    EmptyDataset,

    #[error("design matrix has {samples} rows but {labels} labels were given")]
    LengthMismatch { samples: usize, labels: usize },

    #[error("expected {expected} values, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("non-finite value at row {row}, column {column}")]
    NonFiniteValue { row: usize, column: usize },

    #[error("label must be -1 or +1, got {0}")]
    InvalidLabel(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// `row` is the 1-based line of the offending record in the CSV input.
    #[error("row {row}: cannot parse {value:?} as a number")]
    Parse { row: u64, value: String },

    #[error("row {row}: label must be -1 or +1, got {value}")]
    InvalidRowLabel { row: u64, value: f64 },

    #[error("row {row}: expected at least 2 fields (features then label), found {found}")]
    ShortRow { row: u64, found: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
