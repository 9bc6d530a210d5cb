//! Redis-backed token revocation store.
//!
//! The authentication layer calls [`TokenBlacklistRepository::add_to_blacklist`]
//! when a token is revoked and [`TokenBlacklistRepository::is_blacklisted`]
//! when a token is validated. Revoked JTIs live entirely in Redis under
//! `blacklist:{jti}` keys with a store-enforced TTL, so entries disappear on
//! their own once the token would have expired anyway.
//!
//! This crate takes no position on whether a failed revocation check should
//! fail open or fail closed; errors are surfaced and the caller decides.

pub mod config;
pub mod error;
pub mod ports;
pub mod redis_store;

pub use config::Settings;
pub use error::BlacklistError;
pub use ports::TokenBlacklistRepository;
pub use redis_store::RedisTokenBlacklistRepository;
