// File: crates/asset-loader/src/lib.rs
// Summary: Keyed asset cache with single-flight loading.
// Notes:
// - A key is fetched at most once while a fetch is in flight; every caller
//   awaiting that key shares the same future.
// - Successful results stay cached until invalidated. Failures are dropped
//   so the next request retries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use futures::future::{self, BoxFuture, FutureExt, Shared};

/// Where assets come from (bundled files, network, generated content...).
#[async_trait]
pub trait AssetSource: Send + Sync + 'static {
    type Asset: Send + Sync + 'static;

    async fn fetch(&self, key: &str) -> anyhow::Result<Self::Asset>;
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("failed to load asset '{key}': {message}")]
    Fetch { key: String, message: Arc<str> },
}

type SharedLoad<A> = Shared<BoxFuture<'static, Result<Arc<A>, LoadError>>>;

enum Slot<A> {
    Ready(Arc<A>),
    Pending(SharedLoad<A>),
}

pub struct AssetLoader<S: AssetSource> {
    source: Arc<S>,
    slots: Mutex<HashMap<String, Slot<S::Asset>>>,
}

impl<S: AssetSource> AssetLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source: Arc::new(source), slots: Mutex::new(HashMap::new()) }
    }

    pub fn source(&self) -> &S { &self.source }

    /// Load `key`, joining an in-flight fetch or returning the cached asset.
    pub async fn load(&self, key: &str) -> Result<Arc<S::Asset>, LoadError> {
        let pending = {
            let mut slots = self.lock();
            match slots.get(key) {
                Some(Slot::Ready(asset)) => return Ok(Arc::clone(asset)),
                Some(Slot::Pending(fut)) => fut.clone(),
                None => {
                    let fut = self.start(key);
                    slots.insert(key.to_string(), Slot::Pending(fut.clone()));
                    fut
                }
            }
        };

        let result = pending.clone().await;

        let mut slots = self.lock();
        // Only settle the slot if it still holds the fetch we awaited.
        if let Some(Slot::Pending(current)) = slots.get(key) {
            if current.ptr_eq(&pending) {
                match &result {
                    Ok(asset) => {
                        slots.insert(key.to_string(), Slot::Ready(Arc::clone(asset)));
                        tracing::debug!(key, "asset cached");
                    }
                    Err(err) => {
                        slots.remove(key);
                        tracing::warn!(key, %err, "asset load failed");
                    }
                }
            }
        }
        result
    }

    /// Load several keys concurrently; fails on the first error.
    pub async fn load_all(&self, keys: &[&str]) -> Result<Vec<Arc<S::Asset>>, LoadError> {
        future::try_join_all(keys.iter().map(|key| self.load(key))).await
    }

    pub fn is_cached(&self, key: &str) -> bool {
        matches!(self.lock().get(key), Some(Slot::Ready(_)))
    }

    pub fn is_loading(&self, key: &str) -> bool {
        matches!(self.lock().get(key), Some(Slot::Pending(_)))
    }

    /// Forget `key`. Callers already awaiting an in-flight fetch still receive it.
    pub fn invalidate(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    fn start(&self, key: &str) -> SharedLoad<S::Asset> {
        let source = Arc::clone(&self.source);
        let key = key.to_string();
        tracing::debug!(key = %key, "fetching asset");
        async move {
            source.fetch(&key).await.map(Arc::new).map_err(|err| LoadError::Fetch {
                message: format!("{err:#}").into(),
                key,
            })
        }
        .boxed()
        .shared()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Slot<S::Asset>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
