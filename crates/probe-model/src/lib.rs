//! Word representation models for structural probes.
//!
//! [`DiskModel`] passes pre-computed embeddings straight through;
//! [`TrainableModel`] is the slot for a learned encoder. [`build_model`] picks
//! one from the `[model]` config section.

use candle_core::Tensor;
use probe_core::{ModelConfig, ModelKind, Result, WordRepresentation};

pub mod device;
pub mod disk;
pub mod trainable;

pub use device::select_device;
pub use disk::DiskModel;
pub use trainable::TrainableModel;

/// A configured model over tensor batches of shape `(batch, seq_len, hidden_dim)`.
#[derive(Debug, Clone)]
pub enum Model {
    Disk(DiskModel),
    Trainable(TrainableModel),
}

impl Model {
    pub fn kind(&self) -> ModelKind {
        match self {
            Model::Disk(_) => ModelKind::Disk,
            Model::Trainable(_) => ModelKind::Trainable,
        }
    }
}

impl WordRepresentation<Tensor> for Model {
    type Output = Tensor;

    fn describe(&self) -> &'static str {
        self.kind().as_str()
    }

    fn forward(&self, batch: Tensor) -> Result<Tensor> {
        tracing::debug!(model = self.describe(), dims = ?batch.dims(), "forward");
        match self {
            Model::Disk(m) => m.forward(batch),
            Model::Trainable(m) => m.forward(batch),
        }
    }
}

pub fn build_model(config: &ModelConfig) -> Model {
    tracing::info!(kind = %config.kind, hidden_dim = config.hidden_dim, "building word representation model");
    match config.kind {
        ModelKind::Disk => Model::Disk(DiskModel::new(config)),
        ModelKind::Trainable => Model::Trainable(TrainableModel::new(config, config.trainable.clone())),
    }
}
