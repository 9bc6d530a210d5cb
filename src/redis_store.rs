use std::sync::Arc;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::config::Settings;
use crate::error::BlacklistError;
use crate::ports::TokenBlacklistRepository;

const KEY_PREFIX: &str = "blacklist:";
const MARKER: &str = "1";

/// Redis-backed implementation of `TokenBlacklistRepository`.
///
/// Revoked JTIs are stored as `blacklist:{jti}` keys with a TTL equal to the
/// token's remaining validity window. Redis TTL is the single source of
/// cleanup; no in-process state is kept besides the shared connection.
///
/// A single multiplexed connection is established lazily on first use and
/// shared by every caller for the lifetime of the repository. The `OnceCell`
/// guard makes concurrent first callers agree on one connection instead of
/// racing two into existence.
#[derive(Debug)]
pub struct RedisTokenBlacklistRepository {
    client: Arc<Client>,
    connection: OnceCell<MultiplexedConnection>,
}

impl RedisTokenBlacklistRepository {
    /// Create a repository for the given endpoint URL.
    ///
    /// The URL is validated here, so a misconfigured endpoint surfaces as
    /// `StoreUnavailable` at construction rather than on the first call.
    /// No connection is attempted yet.
    pub fn new(redis_url: &str) -> Result<Self, BlacklistError> {
        let client = Client::open(redis_url).map_err(BlacklistError::StoreUnavailable)?;

        Ok(Self {
            client: Arc::new(client),
            connection: OnceCell::new(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, BlacklistError> {
        Self::new(&settings.redis_url)
    }

    /// Generate the Redis key for a revoked JTI.
    fn key(jti: &str) -> String {
        format!("{KEY_PREFIX}{jti}")
    }

    /// Clone of the shared connection, established on the first call.
    ///
    /// The multiplexed connection is cheap to clone and safe for concurrent
    /// use; pooling and pipelining are the redis crate's responsibility.
    async fn connection(&self) -> Result<MultiplexedConnection, BlacklistError> {
        let conn = self
            .connection
            .get_or_try_init(|| async {
                let conn = self.client.get_multiplexed_async_connection().await?;
                debug!("connected to revocation store");
                Ok::<_, redis::RedisError>(conn)
            })
            .await
            .map_err(BlacklistError::StoreUnavailable)?;

        Ok(conn.clone())
    }
}

#[async_trait]
impl TokenBlacklistRepository for RedisTokenBlacklistRepository {
    async fn add_to_blacklist(&self, jti: &str, ttl_seconds: u64) -> Result<(), BlacklistError> {
        let mut conn = self.connection().await?;

        let _: () = conn.set_ex(Self::key(jti), MARKER, ttl_seconds).await?;
        debug!(%jti, ttl_seconds, "token blacklisted");

        Ok(())
    }

    async fn is_blacklisted(&self, jti: &str) -> Result<bool, BlacklistError> {
        let mut conn = self.connection().await?;

        let exists: bool = conn.exists(Self::key(jti)).await?;

        Ok(exists)
    }
}
