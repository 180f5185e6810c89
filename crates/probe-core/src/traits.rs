use crate::error::{Error, Result};

/// A model that assigns a single vector to each word in a batch.
///
/// `B` is whatever the upstream loader hands over: precomputed vectors for
/// disk-backed models, token ids for an encoder. Implementors that do not
/// override [`forward`](WordRepresentation::forward) behave as an abstract
/// model and fail every call with [`Error::NotImplemented`].
///
/// Calls carry no per-call state, so one instance may be shared across
/// threads and invoked concurrently.
pub trait WordRepresentation<B>: Send + Sync {
    type Output;

    /// Name used in logs and errors.
    fn describe(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Assigns a vector to each word in `batch`.
    fn forward(&self, _batch: B) -> Result<Self::Output> {
        Err(Error::NotImplemented { model: self.describe() })
    }
}
