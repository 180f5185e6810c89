use candle_core::Tensor;
use probe_core::{ModelConfig, TrainableOptions, WordRepresentation};

/// Extension point for a learned encoder that maps token ids to word vectors.
///
/// Construction always succeeds and keeps nothing. No encoder exists yet, so
/// `forward` falls through to the trait default and reports `NotImplemented`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainableModel;

impl TrainableModel {
    pub fn new(_config: &ModelConfig, _options: TrainableOptions) -> Self { Self }
}

impl WordRepresentation<Tensor> for TrainableModel {
    type Output = Tensor;

    fn describe(&self) -> &'static str { "trainable" }
}
