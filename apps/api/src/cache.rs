//! Result Cache — content-addressed memoization of parsed resume records.

use redis::AsyncCommands;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::parser::ResumeRecord;

/// Time-to-live for cached parse results.
pub const CACHE_TTL_SECS: u64 = 86_400;

/// Lowercase hex SHA-256 digest of the raw upload bytes, used as cache key.
pub fn content_hash(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Redis-backed cache for parse results.
///
/// The cache is an optional accelerator: when Redis is not configured or
/// the client cannot be created, every lookup misses and every store is a
/// no-op. No request ever fails because of the cache.
#[derive(Clone)]
pub struct ResultCache {
    client: Option<redis::Client>,
}

impl ResultCache {
    /// Builds a cache from an optional connection string. Any failure to
    /// create the client degrades to a disabled cache.
    pub fn connect(url: Option<&str>) -> Self {
        let client = match url {
            Some(url) => match redis::Client::open(url) {
                Ok(client) => Some(client),
                Err(e) => {
                    warn!("Redis unavailable, caching disabled: {e}");
                    None
                }
            },
            None => {
                warn!("REDIS_URL not set, caching disabled");
                None
            }
        };
        Self { client }
    }

    pub fn disabled() -> Self {
        Self { client: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Looks up a cached record by content hash.
    ///
    /// A stored value that fails to deserialize is evicted and reported as
    /// a miss; connection failures are also a miss.
    pub async fn lookup(&self, hash: &str) -> Option<ResumeRecord> {
        let client = self.client.as_ref()?;
        let mut conn = match client.get_multiplexed_async_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("cache lookup skipped: {e}");
                return None;
            }
        };
        let raw: Option<String> = match conn.get(hash).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("cache lookup failed: {e}");
                return None;
            }
        };
        let raw = raw?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("evicting corrupt cache entry {hash}: {e}");
                let _: Result<(), redis::RedisError> = conn.del(hash).await;
                None
            }
        }
    }

    /// Stores a record with the standard TTL, overwriting any existing
    /// entry. Failures are logged and swallowed.
    pub async fn store(&self, hash: &str, record: &ResumeRecord) {
        let Some(client) = self.client.as_ref() else {
            return;
        };
        let payload = match serde_json::to_string(record) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("cache store skipped, serialization failed: {e}");
                return;
            }
        };
        match client.get_multiplexed_async_connection().await {
            Ok(mut conn) => {
                if let Err(e) = conn
                    .set_ex::<_, _, ()>(hash, payload, CACHE_TTL_SECS)
                    .await
                {
                    warn!("cache store failed: {e}");
                } else {
                    debug!("cached parse result for {hash}");
                }
            }
            Err(e) => warn!("cache store skipped: {e}"),
        }
    }
}
