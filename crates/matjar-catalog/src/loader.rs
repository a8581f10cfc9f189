//! Session-scoped, memoizing access to the product catalog.
//!
//! State transitions:
//!
//! ```text
//! Empty ──load()──▶ Loading ──ok──▶ Ready
//!   ▲                  │
//!   └──────err─────────┘
//! ```
//!
//! Concurrent callers arriving while a fetch is in flight await the same
//! shared future, so they all observe one network request and one outcome.
//! A failure returns the loader to `Empty`; only success is remembered.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};
use matjar_core::Product;

use crate::client::CatalogClient;
use crate::error::CatalogUnavailable;

type LoadResult = Result<Arc<[Product]>, CatalogUnavailable>;
type SharedLoad = Shared<BoxFuture<'static, LoadResult>>;

enum LoadState {
    Empty,
    Loading { generation: u64, load: SharedLoad },
    Ready(Arc<[Product]>),
}

struct Inner {
    state: LoadState,
    /// Incremented for every fetch started; lets a finishing fetch detect
    /// that it was superseded by `invalidate()`.
    generation: u64,
}

/// Fetches the catalog on first use and hands out the cached list afterwards.
pub struct CatalogLoader {
    client: Arc<CatalogClient>,
    catalog_url: String,
    inner: Mutex<Inner>,
}

impl CatalogLoader {
    #[must_use]
    pub fn new(client: CatalogClient, catalog_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(client),
            catalog_url: catalog_url.into(),
            inner: Mutex::new(Inner {
                state: LoadState::Empty,
                generation: 0,
            }),
        }
    }

    #[must_use]
    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    /// Returns the catalog, fetching it if no successful fetch is cached.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] when the fetch fails. The failure is not
    /// cached; the next call fetches again.
    pub async fn load(&self) -> LoadResult {
        let (generation, load) = {
            let mut inner = self.lock();
            let in_flight = match &inner.state {
                LoadState::Ready(products) => {
                    tracing::debug!(count = products.len(), "catalog cache hit");
                    return Ok(Arc::clone(products));
                }
                LoadState::Loading { generation, load } => Some((*generation, load.clone())),
                LoadState::Empty => None,
            };

            if let Some(in_flight) = in_flight {
                tracing::debug!("joining in-flight catalog fetch");
                in_flight
            } else {
                inner.generation += 1;
                let generation = inner.generation;
                let load = self.start_fetch();
                inner.state = LoadState::Loading {
                    generation,
                    load: load.clone(),
                };
                (generation, load)
            }
        };

        let result = load.await;

        let mut inner = self.lock();
        let current =
            matches!(&inner.state, LoadState::Loading { generation: g, .. } if *g == generation);
        if current {
            inner.state = match &result {
                Ok(products) => LoadState::Ready(Arc::clone(products)),
                Err(e) => {
                    tracing::warn!(
                        url = %self.catalog_url,
                        error = %e,
                        "catalog fetch failed; will retry on next load"
                    );
                    LoadState::Empty
                }
            };
        }

        result
    }

    /// Returns the cached catalog without fetching.
    #[must_use]
    pub fn cached(&self) -> Option<Arc<[Product]>> {
        match &self.lock().state {
            LoadState::Ready(products) => Some(Arc::clone(products)),
            LoadState::Empty | LoadState::Loading { .. } => None,
        }
    }

    /// Drops the cached catalog so the next [`load`](Self::load) refetches.
    ///
    /// A fetch already in flight still completes for the callers awaiting it,
    /// but its result is not stored.
    pub fn invalidate(&self) {
        self.lock().state = LoadState::Empty;
        tracing::debug!("catalog cache invalidated");
    }

    fn start_fetch(&self) -> SharedLoad {
        let client = Arc::clone(&self.client);
        let catalog_url = self.catalog_url.clone();
        async move {
            client
                .fetch_catalog(&catalog_url)
                .await
                .map(Arc::<[Product]>::from)
                .map_err(CatalogUnavailable::from)
        }
        .boxed()
        .shared()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
