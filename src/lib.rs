// Declare the library modules
pub mod common_types;
pub mod csv_io;
pub mod error;
pub mod features;
pub mod perceptron;

pub use common_types::{DataPoint, Dataset, Label};
pub use error::{PerceptronError, Result};
pub use perceptron::{
    DecisionBoundary, EpochRecord, MisclassificationCurve, Perceptron, PerceptronConfig,
    TrainingHistory,
};

#[cfg(feature = "python")]
mod python {
    use crate::common_types::Label;
    use crate::error::PerceptronError;
    use crate::features;
    use crate::perceptron::{Perceptron, PerceptronConfig};
    use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
    use pyo3::prelude::*;

    impl From<PerceptronError> for PyErr {
        fn from(err: PerceptronError) -> PyErr {
            match err {
                PerceptronError::NotFitted | PerceptronError::HistoryUnavailable => {
                    PyRuntimeError::new_err(err.to_string())
                }
                PerceptronError::Io(_) => PyIOError::new_err(err.to_string()),
                _ => PyValueError::new_err(err.to_string()),
            }
        }
    }

    fn labels_from_py(y: &[f64]) -> PyResult<Vec<Label>> {
        Ok(y.iter()
            .map(|&value| Label::try_from(value))
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Python-facing wrapper around the f64 perceptron.
    #[pyclass(name = "Perceptron")]
    struct PyPerceptron {
        inner: Perceptron<f64>,
    }

    #[pymethods]
    impl PyPerceptron {
        #[new]
        #[pyo3(signature = (learning_rate = 0.01, epochs = 50, seed = 1))]
        fn new(learning_rate: f64, epochs: usize, seed: u64) -> PyResult<Self> {
            let config = PerceptronConfig::default()
                .with_learning_rate(learning_rate)
                .with_epochs(epochs)
                .with_seed(seed);
            Ok(PyPerceptron { inner: Perceptron::new(config)? })
        }

        /// Fits on a bias-augmented design matrix and returns self for chaining.
        fn fit(mut slf: PyRefMut<'_, Self>, x: Vec<Vec<f64>>, y: Vec<f64>) -> PyResult<PyRefMut<'_, Self>> {
            let labels = labels_from_py(&y)?;
            slf.inner.fit(&x, &labels)?;
            Ok(slf)
        }

        #[pyo3(signature = (sample, weights = None))]
        fn predict(&self, sample: Vec<f64>, weights: Option<Vec<f64>>) -> PyResult<i32> {
            let label = self.inner.predict(&sample, weights.as_deref())?;
            Ok(label.as_i32())
        }

        fn predict_batch(&self, x: Vec<Vec<f64>>) -> PyResult<Vec<i32>> {
            let labels = self.inner.predict_batch(&x)?;
            Ok(labels.into_iter().map(Label::as_i32).collect())
        }

        fn score(&self, x: Vec<Vec<f64>>, y: Vec<f64>) -> PyResult<f64> {
            let labels = labels_from_py(&y)?;
            Ok(self.inner.score(&x, &labels)?)
        }

        #[getter]
        fn weights(&self) -> Option<Vec<f64>> {
            self.inner.weights().map(|w| w.to_vec())
        }

        #[getter]
        fn errors(&self) -> PyResult<Vec<usize>> {
            let history = self.inner.history().ok_or(PerceptronError::HistoryUnavailable)?;
            Ok(history.misclassifications())
        }

        #[getter]
        fn weight_history(&self) -> PyResult<Vec<Vec<f64>>> {
            let history = self.inner.history().ok_or(PerceptronError::HistoryUnavailable)?;
            Ok(history.weights().into_iter().map(|w| w.to_vec()).collect())
        }
    }

    /// Loads a headerless CSV and returns `(X, y)` with labels as +1/-1.
    #[pyfunction]
    fn load_dataset(path: &str) -> PyResult<(Vec<Vec<f64>>, Vec<i32>)> {
        let dataset = crate::csv_io::load_dataset(path)?;
        let labels = dataset.labels.iter().map(|l| l.as_i32()).collect();
        Ok((dataset.samples, labels))
    }

    #[pyfunction]
    fn add_bias_column(rows: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
        features::add_bias_column(&rows)
    }

    /// Expands rows into monomials up to `degree`, bias column first when `include_bias`.
    #[pyfunction]
    #[pyo3(signature = (rows, degree, include_bias = true))]
    fn polynomial_features(rows: Vec<Vec<f64>>, degree: usize, include_bias: bool) -> PyResult<Vec<Vec<f64>>> {
        let poly = features::PolynomialFeatures::new(degree, include_bias)?;
        Ok(poly.transform(&rows)?)
    }

    /// A Python module implemented in Rust. The name of this function must match
    /// the `lib.name` in `Cargo.toml`.
    #[pymodule]
    fn perceptron_rs(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(load_dataset, m)?)?;
        m.add_function(wrap_pyfunction!(add_bias_column, m)?)?;
        m.add_function(wrap_pyfunction!(polynomial_features, m)?)?;
        m.add_class::<PyPerceptron>()?;
        Ok(())
    }
}
