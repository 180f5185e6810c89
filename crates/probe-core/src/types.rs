//! Configuration types shared by every word representation model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which representation model an experiment runs.
///
/// Parsing is case-insensitive and also accepts the experiment names used by
/// older probe configs (`ELMo-disk`, `BERT-base-disk`, ...), all of which
/// read vectors from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ModelKind {
    #[default]
    Disk,
    Trainable,
}

impl ModelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Disk => "disk",
            ModelKind::Trainable => "trainable",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disk" | "elmo-disk" | "bert-disk" | "bert-base-disk" | "bert-large-disk" => {
                Ok(ModelKind::Disk)
            }
            "trainable" => Ok(ModelKind::Trainable),
            other => Err(Error::InvalidConfig(format!("unknown model kind '{other}'"))),
        }
    }
}

impl TryFrom<String> for ModelKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Options for the trainable encoder.
///
/// Nothing is recognised yet; unknown keys are accepted and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainableOptions {}

/// The `[model]` section of an experiment config.
///
/// Every field has a default and unknown keys are ignored, so a partial or
/// over-full section still deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub kind: ModelKind,
    /// Width of the word vectors the pipeline expects. Not checked by the
    /// models themselves.
    pub hidden_dim: usize,
    pub trainable: TrainableOptions,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { kind: ModelKind::Disk, hidden_dim: 1024, trainable: TrainableOptions::default() }
    }
}
