use crate::models::{Destination, Guide};
use crate::services::{CacheError, CacheKey, CacheManager, SupabaseClient, SupabaseError};
use std::sync::Arc;

/// Destination collection handed to the query engine
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub destinations: Vec<Destination>,
    /// `false` when the store could not be reached; `destinations` is empty then
    pub available: bool,
}

/// Entries kept for guide lists, one per specialization
const GUIDE_CACHE_ENTRIES: u64 = 32;

/// Cached read access to the catalog tables
///
/// The catalog is fetched once per cache window and served from the cache
/// until the entry expires or is invalidated. Guide lists live in their own
/// in-process cache so request-driven keys cannot evict the catalog.
#[derive(Clone)]
pub struct Catalog {
    supabase: Arc<SupabaseClient>,
    cache: Arc<CacheManager>,
    guide_cache: Arc<CacheManager>,
}

impl Catalog {
    pub fn new(supabase: Arc<SupabaseClient>, cache: Arc<CacheManager>) -> Self {
        let guide_cache = Arc::new(CacheManager::in_memory(GUIDE_CACHE_ENTRIES, cache.ttl_secs()));

        Self {
            supabase,
            cache,
            guide_cache,
        }
    }

    pub fn supabase(&self) -> &SupabaseClient {
        &self.supabase
    }

    /// Current destination snapshot
    ///
    /// A failed fetch is logged and reported as an unavailable, empty catalog.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        let key = CacheKey::destinations();

        match self.cache.get::<Vec<Destination>>(&key).await {
            Ok(destinations) => {
                return CatalogSnapshot {
                    destinations,
                    available: true,
                }
            }
            Err(CacheError::CacheMiss(_)) => {}
            Err(e) => tracing::warn!("Failed to read destination cache: {}", e),
        }

        match self.supabase.list_destinations().await {
            Ok(destinations) => {
                if let Err(e) = self.cache.set(&key, &destinations).await {
                    tracing::warn!("Failed to cache destinations: {}", e);
                }
                tracing::info!("Loaded {} destinations from store", destinations.len());
                CatalogSnapshot {
                    destinations,
                    available: true,
                }
            }
            Err(e) => {
                tracing::error!("Failed to fetch destinations, serving empty catalog: {}", e);
                CatalogSnapshot::default()
            }
        }
    }

    /// Drop the cached snapshot so the next read goes to the store
    pub async fn refresh(&self) -> Result<(), CacheError> {
        self.cache.delete(&CacheKey::destinations()).await
    }

    /// Verified guides, cached for the same window as the destination snapshot
    pub async fn guides(&self, specialization: Option<&str>) -> Result<Vec<Guide>, SupabaseError> {
        let key = CacheKey::guides(specialization);

        if let Ok(guides) = self.guide_cache.get::<Vec<Guide>>(&key).await {
            return Ok(guides);
        }

        let guides = self.supabase.verified_guides(specialization).await?;
        if let Err(e) = self.guide_cache.set(&key, &guides).await {
            tracing::warn!("Failed to cache guides: {}", e);
        }

        Ok(guides)
    }
}
