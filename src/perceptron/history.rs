//! Per-epoch record of weights and mistakes built up by a single call to `fit`.

/// State at the end of one epoch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpochRecord<F> {
    /// 0-based epoch index.
    pub epoch: usize,
    /// Snapshot of the weight vector after the last update of the epoch.
    pub weights: Vec<F>,
    /// Samples misclassified during the epoch, judged with the weights as they
    /// stood when each sample was visited.
    pub misclassifications: usize,
}

/// Append-only sequence of [`EpochRecord`]s, one per training epoch.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingHistory<F> {
    records: Vec<EpochRecord<F>>,
}

impl<F: Clone> TrainingHistory<F> {
    pub fn with_capacity(epochs: usize) -> Self {
        TrainingHistory { records: Vec::with_capacity(epochs) }
    }

    pub(crate) fn push(&mut self, weights: &[F], misclassifications: usize) {
        let epoch = self.records.len();
        self.records.push(EpochRecord {
            epoch,
            weights: weights.to_vec(),
            misclassifications,
        });
    }

    pub fn records(&self) -> &[EpochRecord<F>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&EpochRecord<F>> {
        self.records.last()
    }

    /// Misclassification count of every epoch, in order.
    pub fn misclassifications(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.misclassifications).collect()
    }

    /// Weight snapshot of every epoch, in order.
    pub fn weights(&self) -> Vec<&[F]> {
        self.records.iter().map(|r| r.weights.as_slice()).collect()
    }

    /// First epoch that finished without a single mistake.
    pub fn converged_epoch(&self) -> Option<usize> {
        self.records
            .iter()
            .find(|r| r.misclassifications == 0)
            .map(|r| r.epoch)
    }
}
