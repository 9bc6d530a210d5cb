use async_trait::async_trait;

use crate::error::BlacklistError;

/// Outgoing port for the token blacklist.
///
/// The authentication use cases depend on this trait; the Redis adapter in
/// [`crate::redis_store`] is the production implementation.
#[async_trait]
pub trait TokenBlacklistRepository: Send + Sync {
    /// Mark a token's JTI as revoked for `ttl_seconds`.
    ///
    /// The TTL should be the remaining validity window of the token; the
    /// store evicts the entry on its own once it elapses.
    async fn add_to_blacklist(&self, jti: &str, ttl_seconds: u64) -> Result<(), BlacklistError>;

    /// Return whether a token's JTI is currently revoked.
    async fn is_blacklisted(&self, jti: &str) -> Result<bool, BlacklistError>;
}
