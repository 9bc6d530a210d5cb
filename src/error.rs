use thiserror::Error;

/// Errors surfaced by the revocation store.
#[derive(Debug, Error)]
pub enum BlacklistError {
    /// The store endpoint is misconfigured or the shared connection could not
    /// be established. Surfaced immediately, never retried at this layer.
    #[error("revocation store unavailable: {0}")]
    StoreUnavailable(#[source] redis::RedisError),

    /// A store command failed after a connection was obtained. Propagated
    /// unchanged so callers can decide how to react.
    #[error(transparent)]
    Store(#[from] redis::RedisError),
}

impl BlacklistError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, BlacklistError::StoreUnavailable(_))
    }
}
