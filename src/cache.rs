//! Process-wide cache of resolved entity metadata.
//!
//! Resolution is pure and deterministic, so caching is a cost optimization,
//! not a correctness requirement: a race that resolves the same type twice
//! simply discards the loser. At most one [`EntityInformation`] per type is
//! ever handed out. Failures are never cached; a fixed declaration resolves
//! on the next attempt.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::descriptor::GraphEntity;
use crate::error::MappingError;
use crate::information::EntityInformation;

/// A cache of resolved metadata keyed by domain type.
#[derive(Default)]
pub struct EntityInformationCache {
    entries: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl EntityInformationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached metadata for `T`, resolving it on first request.
    ///
    /// Concurrent first requests for the same type may both resolve; the
    /// first insert wins and every caller observes that one instance.
    pub fn get<T>(&self) -> Result<Arc<EntityInformation<T>>, MappingError>
    where
        T: GraphEntity + 'static,
    {
        let key = TypeId::of::<T>();

        if let Some(hit) = self.lookup::<T>(key) {
            return Ok(hit);
        }

        // Resolve outside the lock; resolution is pure, duplicate work is
        // tolerated and discarded below.
        let resolved = Arc::new(EntityInformation::<T>::new()?);

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let entry = entries
            .entry(key)
            .or_insert_with(|| resolved as Arc<dyn Any + Send + Sync>);
        let info = Arc::clone(entry);
        drop(entries);

        Ok(downcast::<T>(info))
    }

    fn lookup<T>(&self, key: TypeId) -> Option<Arc<EntityInformation<T>>>
    where
        T: GraphEntity + 'static,
    {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(&key).map(|entry| downcast::<T>(Arc::clone(entry)))
    }
}

// Entries are only ever inserted under the TypeId of their own T, so the
// downcast cannot fail for a well-typed key.
fn downcast<T>(entry: Arc<dyn Any + Send + Sync>) -> Arc<EntityInformation<T>>
where
    T: GraphEntity + 'static,
{
    entry
        .downcast::<EntityInformation<T>>()
        .unwrap_or_else(|_| unreachable!("cache entry stored under foreign TypeId"))
}

static GLOBAL: Lazy<EntityInformationCache> = Lazy::new(EntityInformationCache::new);

/// Resolved metadata for `T` from the process-wide cache.
///
/// The recommended entry point for repository and conversion layers: pays
/// the resolution cost once per type per process.
pub fn entity_information<T>() -> Result<Arc<EntityInformation<T>>, MappingError>
where
    T: GraphEntity + 'static,
{
    GLOBAL.get::<T>()
}
