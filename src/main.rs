use anyhow::Context;
use perceptron_rs::csv_io::{load_dataset, save_weight_history};
use perceptron_rs::features::add_bias_column;
use perceptron_rs::{Label, MisclassificationCurve, Perceptron, PerceptronConfig};
use std::path::Path;
use tracing::{info, Level};

const DATA_PATH: &str = "data/perceptron_toy_data.csv";
const HISTORY_FILE: &str = "weight_history.csv";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let data_path = Path::new(DATA_PATH);
    let dataset = load_dataset(data_path)
        .with_context(|| format!("failed to load training data from {}", data_path.display()))?;
    let dataset = dataset.map_samples(|rows| add_bias_column(&rows))?;
    let positives = dataset
        .iter()
        .filter(|&(_, label)| label == Label::Positive)
        .count();
    info!(
        samples = dataset.n_samples(),
        features = dataset.n_features(),
        positives,
        negatives = dataset.n_samples() - positives,
        "training data ready"
    );

    let mut perceptron = Perceptron::new(PerceptronConfig::default())?;
    perceptron.fit_dataset(&dataset)?;

    let accuracy = perceptron.score(&dataset.samples, &dataset.labels)?;
    let weights = perceptron.weights().unwrap_or_default();
    info!(accuracy, ?weights, "training accuracy");

    let history_path = data_path.with_file_name(HISTORY_FILE);
    if let Some(history) = perceptron.history() {
        save_weight_history(&history_path, history)
            .with_context(|| format!("failed to write {}", history_path.display()))?;
        info!(path = %history_path.display(), epochs = history.len(), "wrote weight history");
    }

    let curve = MisclassificationCurve::from_trainer(&perceptron)?;
    info!(peak_errors = curve.max_errors(), "misclassification curve");
    print!("{}", curve);
    Ok(())
}
