//! Application state for the web layer.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::CachedCatalogClient;
use crate::domain::{
    ActivityOption, ActivityQuery, StayOption, StayQuery, TransportOption, TransportQuery,
};
use crate::planner::{SearchCategory, SearchError, SearchProvider, TravelPlanner};

/// Search provider backed by the cached catalog client.
///
/// The provider trait is synchronous while the catalog client is async; each
/// call runs the future on the current runtime via `block_in_place`, which
/// requires the multi-thread runtime.
pub struct CatalogSearchProvider {
    catalog: Arc<CachedCatalogClient>,
}

impl CatalogSearchProvider {
    /// Create a provider over the given catalog client.
    pub fn new(catalog: Arc<CachedCatalogClient>) -> Self {
        Self { catalog }
    }

    fn block_on<T>(
        &self,
        category: SearchCategory,
        fut: impl Future<Output = Result<Arc<Vec<T>>, crate::catalog::CatalogError>>,
    ) -> Result<Vec<T>, SearchError>
    where
        T: Clone,
    {
        tokio::task::block_in_place(|| {
            let rt = tokio::runtime::Handle::current();
            rt.block_on(fut)
                .map(|options| options.as_ref().clone())
                .map_err(|e| SearchError::new(category, e.to_string()))
        })
    }
}

impl SearchProvider for CatalogSearchProvider {
    fn search_transports(
        &self,
        query: &TransportQuery,
    ) -> Result<Vec<TransportOption>, SearchError> {
        self.block_on(
            SearchCategory::Transport,
            self.catalog.search_transports(query),
        )
    }

    fn search_stays(&self, query: &StayQuery) -> Result<Vec<StayOption>, SearchError> {
        self.block_on(SearchCategory::Stay, self.catalog.search_stays(query))
    }

    fn search_activities(
        &self,
        query: &ActivityQuery,
    ) -> Result<Vec<ActivityOption>, SearchError> {
        self.block_on(
            SearchCategory::Activity,
            self.catalog.search_activities(query),
        )
    }
}

/// Shared application state.
///
/// The planner's cache and active strategy are shared mutable state, so all
/// planner operations are serialized behind one mutex: a planning pass is a
/// read-modify-write of the cache and must not interleave with another.
#[derive(Clone)]
pub struct AppState {
    /// The planner, serialized across requests.
    pub planner: Arc<Mutex<TravelPlanner<CatalogSearchProvider>>>,
}

impl AppState {
    /// Create a new app state owning the planner.
    pub fn new(planner: TravelPlanner<CatalogSearchProvider>) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
        }
    }
}
