use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// `forward` was called on a model that never supplied one. The caller
    /// wired up the wrong type; do not retry.
    #[error("{model} does not implement forward; use one of the implementing models")]
    NotImplemented { model: &'static str },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Error::NotImplemented { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
