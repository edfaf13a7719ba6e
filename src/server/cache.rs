//! Per-user memoization of page data.
//!
//! Read endpoints store their backend answers keyed by the session user and the client page
//! path they feed. Mutations revalidate the affected pages so the next read goes back to the
//! backend. The cache never holds authoritative data: when it cannot be read the backend is
//! asked instead.

use std::{
    collections::HashMap,
    future::Future,
    sync::{Arc, RwLock},
    time::{Duration, Instant},
};

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::server::error::{cache::CacheError, Error};

/// Page listing the user's bikes
pub const HOME_PATH: &str = "/";

/// Manufacturer options of the add part modal
pub const MANUFACTURERS_PATH: &str = "/manufacturers";

pub fn bike_path(bike_id: &str) -> String {
    format!("/bikes/{}", bike_id)
}

pub fn bike_installations_path(bike_id: &str) -> String {
    format!("/bikes/{}/installations", bike_id)
}

/// How much of the cache a revalidation drops
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevalidateScope {
    /// Only the exact path
    Page,
    /// The path and every path nested under it, `/` drops everything for the user
    Layout,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    user_id: String,
    path: String,
}

struct CacheEntry {
    value: Value,
    stored_at: Instant,
}

#[derive(Clone)]
pub struct PageCache {
    ttl: Duration,
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,
}

impl PageCache {
    /// Creates an empty cache whose entries live for `ttl`, a zero `ttl` disables caching
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Cached value for `path`, `None` when absent or expired
    pub fn get(&self, user_id: &str, path: &str) -> Result<Option<Value>, CacheError> {
        if self.ttl.is_zero() {
            return Ok(None);
        }

        let entries = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        let key = CacheKey {
            user_id: user_id.to_string(),
            path: path.to_string(),
        };

        Ok(entries
            .get(&key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone()))
    }

    pub fn insert(&self, user_id: &str, path: &str, value: Value) -> Result<(), CacheError> {
        if self.ttl.is_zero() {
            return Ok(());
        }

        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);

        entries.insert(
            CacheKey {
                user_id: user_id.to_string(),
                path: path.to_string(),
            },
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );

        Ok(())
    }

    /// Returns the cached value for `path` or runs `fetch` and caches its result.
    ///
    /// Cache failures are logged and the fetched value is returned regardless; only `fetch`
    /// errors are propagated.
    pub async fn get_or_fetch<T, F, Fut>(
        &self,
        user_id: &str,
        path: &str,
        fetch: F,
    ) -> Result<T, Error>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        match self.get(user_id, path) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(cached) => {
                    tracing::debug!(user_id, path, "Page cache hit");

                    return Ok(cached);
                }
                Err(err) => tracing::warn!(path, "Discarding undecodable cache entry: {}", err),
            },
            Ok(None) => tracing::debug!(user_id, path, "Page cache miss"),
            Err(err) => tracing::warn!(path, "Page cache unavailable: {}", err),
        }

        let fresh = fetch().await?;

        match serde_json::to_value(&fresh) {
            Ok(value) => {
                if let Err(err) = self.insert(user_id, path, value) {
                    tracing::warn!(path, "Failed to cache page data: {}", err);
                }
            }
            Err(err) => tracing::warn!(path, "Failed to encode page data for caching: {}", err),
        }

        Ok(fresh)
    }

    /// Drops cached data of `path` for `user_id`, returns how many entries were removed
    pub fn revalidate(
        &self,
        user_id: &str,
        path: &str,
        scope: RevalidateScope,
    ) -> Result<usize, CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        let before = entries.len();

        let prefix = format!("{}/", path.trim_end_matches('/'));
        entries.retain(|key, _| {
            if key.user_id != user_id {
                return true;
            }

            let affected = match scope {
                RevalidateScope::Page => key.path == path,
                RevalidateScope::Layout => key.path == path || key.path.starts_with(&prefix),
            };

            !affected
        });

        Ok(before - entries.len())
    }
}
