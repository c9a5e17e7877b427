//! Caching layer for geocoding lookups.
//!
//! Place names resolve to the same coordinates for a long time, and the
//! public Nominatim instance asks clients to keep request rates low, so
//! successful lookups are kept for an hour by default. Failures are never
//! cached: a transient network error should not pin "not found".
//!
//! This sits outside the planner. The planner itself never caches.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::GeocodeResult;
use crate::geo::Coordinate;
use crate::geocoding::{GeocodeError, Geocoder, normalize_query};

/// Reverse lookups are keyed on coordinates rounded to this many decimals
/// (about a metre).
const REVERSE_KEY_DECIMALS: i32 = 5;

/// Cache key for reverse lookups: scaled, rounded (latitude, longitude).
type ReverseKey = (i64, i64);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries per direction.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 1000,
        }
    }
}

/// Geocoder with caching.
///
/// Wraps any [`Geocoder`] and caches successful forward and reverse lookups.
pub struct CachedGeocoder<G> {
    inner: G,
    forward: MokaCache<String, GeocodeResult>,
    reverse: MokaCache<ReverseKey, GeocodeResult>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    /// Create a new cached geocoder.
    pub fn new(inner: G, config: &CacheConfig) -> Self {
        let forward = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();
        let reverse = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            inner,
            forward,
            reverse,
        }
    }

    /// Get cache statistics (forward + reverse entries).
    pub fn entry_count(&self) -> u64 {
        self.forward.entry_count() + self.reverse.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.forward.invalidate_all();
        self.reverse.invalidate_all();
    }
}

fn forward_key(query: &str) -> Result<String, GeocodeError> {
    Ok(normalize_query(query)?.to_lowercase())
}

fn reverse_key(coordinate: Coordinate) -> ReverseKey {
    let scale = 10f64.powi(REVERSE_KEY_DECIMALS);
    (
        (coordinate.latitude() * scale).round() as i64,
        (coordinate.longitude() * scale).round() as i64,
    )
}

impl<G: Geocoder + Sync> Geocoder for CachedGeocoder<G> {
    async fn geocode(&self, query: &str) -> Result<GeocodeResult, GeocodeError> {
        let key = forward_key(query)?;

        // Try cache first
        if let Some(cached) = self.forward.get(&key).await {
            return Ok(cached);
        }

        let result = self.inner.geocode(query).await?;
        self.forward.insert(key, result.clone()).await;
        Ok(result)
    }

    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<GeocodeResult, GeocodeError> {
        let key = reverse_key(coordinate);

        if let Some(cached) = self.reverse.get(&key).await {
            return Ok(cached);
        }

        let result = self.inner.reverse_geocode(coordinate).await?;
        self.reverse.insert(key, result.clone()).await;
        Ok(result)
    }
}
