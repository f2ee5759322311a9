//! CSV input of labeled samples and CSV output of the per-epoch weight history.
//!
//! Input rows carry no header: every column but the last is a feature and the
//! last column is the label, `1` or `-1`.

use crate::common_types::{Dataset, Label};
use crate::error::{PerceptronError, Result};
use crate::perceptron::history::TrainingHistory;
use num_traits::Float;
use std::fmt::Display;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset<f64>> {
    let path = path.as_ref();
    let dataset = read_dataset(File::open(path)?)?;
    debug!(
        path = %path.display(),
        samples = dataset.n_samples(),
        features = dataset.n_features(),
        "loaded dataset"
    );
    Ok(dataset)
}

pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    let mut labels = Vec::new();
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record)? {
        let row = record.position().map_or(0, |position| position.line());
        let values = record
            .iter()
            .map(|field| {
                field.parse::<f64>().map_err(|_| PerceptronError::Parse {
                    row,
                    value: field.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        match values.split_last() {
            Some((&label, features)) if !features.is_empty() => {
                let label = Label::try_from(label)
                    .map_err(|_| PerceptronError::InvalidRowLabel { row, value: label })?;
                labels.push(label);
                samples.push(features.to_vec());
            }
            _ => {
                return Err(PerceptronError::ShortRow {
                    row,
                    found: values.len(),
                })
            }
        }
    }
    Dataset::new(samples, labels)
}

pub fn save_weight_history<F: Float + Display>(
    path: impl AsRef<Path>,
    history: &TrainingHistory<F>,
) -> Result<()> {
    write_weight_history(File::create(path)?, history)
}

/// Writes a `bias,w1,...` header followed by one row of weights per epoch.
/// An empty history produces an empty file.
pub fn write_weight_history<W: Write, F: Float + Display>(
    writer: W,
    history: &TrainingHistory<F>,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    if let Some(first) = history.records().first() {
        let header = std::iter::once("bias".to_string())
            .chain((1..first.weights.len()).map(|i| format!("w{}", i)));
        writer.write_record(header)?;
        for record in history.records() {
            writer.write_record(record.weights.iter().map(|w| w.to_string()))?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_dataset_two_features() {
        let csv = "1.5, 2.0, 1\n-0.5,-1.0,-1\n3,4,+1\n";
        let dataset = read_dataset(Cursor::new(csv)).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
        assert_eq!(dataset.samples[0], vec![1.5, 2.0]);
        assert_eq!(
            dataset.labels,
            vec![Label::Positive, Label::Negative, Label::Positive]
        );
    }

    #[test]
    fn test_read_dataset_rejects_bad_label() {
        let result = read_dataset(Cursor::new("1,2,1\n3,4,0\n"));
        assert!(matches!(
            result,
            Err(PerceptronError::InvalidRowLabel { row: 2, value }) if value == 0.0
        ));
    }

    #[test]
    fn test_bad_label_reports_its_line() {
        let result = read_dataset(Cursor::new("1,2,1\n3,4,1\n5,6,2\n"));
        match result {
            Err(err @ PerceptronError::InvalidRowLabel { .. }) => {
                assert_eq!(err.to_string(), "row 3: label must be -1 or +1, got 2");
            }
            other => panic!("expected label error, got {:?}", other),
        }
    }

    #[test]
    fn test_rows_follow_file_lines_across_blank_lines() {
        let result = read_dataset(Cursor::new("1,2,1\n\n3,x,1\n"));
        assert!(matches!(
            result,
            Err(PerceptronError::Parse { row: 3, ref value }) if value == "x"
        ));
        let result = read_dataset(Cursor::new("1,,1\n"));
        assert!(matches!(
            result,
            Err(PerceptronError::Parse { row: 1, ref value }) if value.is_empty()
        ));
    }

    #[test]
    fn test_read_dataset_rejects_non_numeric_field() {
        let result = read_dataset(Cursor::new("1,2,1\n3,abc,-1\n"));
        match result {
            Err(PerceptronError::Parse { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_dataset_rejects_ragged_rows() {
        let result = read_dataset(Cursor::new("1,2,1\n3,-1\n"));
        assert!(matches!(result, Err(PerceptronError::Csv(_))));
    }

    #[test]
    fn test_read_dataset_rejects_empty_and_label_only_input() {
        assert!(matches!(
            read_dataset(Cursor::new("")),
            Err(PerceptronError::EmptyDataset)
        ));
        assert!(matches!(
            read_dataset(Cursor::new("1\n2,3,1\n")),
            Err(PerceptronError::ShortRow { row: 1, found: 1 })
        ));
    }

    #[test]
    fn test_write_weight_history() {
        let mut history = TrainingHistory::with_capacity(2);
        history.push(&[0.5, -1.0, 2.0], 2);
        history.push(&[0.25, 1.0, 2.0], 0);

        let mut out = Vec::new();
        write_weight_history(&mut out, &history).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "bias,w1,w2\n0.5,-1,2\n0.25,1,2\n");
    }

    #[test]
    fn test_write_empty_history() {
        let history: TrainingHistory<f64> = TrainingHistory::with_capacity(0);
        let mut out = Vec::new();
        write_weight_history(&mut out, &history).unwrap();
        assert!(out.is_empty());
    }
}
