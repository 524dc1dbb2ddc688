use crate::errors::{CatalogError, CatalogResult};
use crate::sources::SpeciesSource;
use schema::Species;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// The session's species list. Fetched on the first successful `load` and
/// served from memory afterwards; failed loads leave nothing behind, so the
/// next call retries.
pub struct SpeciesCatalog {
    source: Arc<dyn SpeciesSource>,
    limit: usize,
    cached: RwLock<Option<Arc<[Species]>>>,
}

impl SpeciesCatalog {
    pub fn new(source: Arc<dyn SpeciesSource>, limit: usize) -> Self {
        Self {
            source,
            limit,
            cached: RwLock::new(None),
        }
    }

    pub fn load(&self) -> CatalogResult<Arc<[Species]>> {
        if let Some(species) = self.cached() {
            debug!(count = species.len(), "species catalog served from cache");
            return Ok(species);
        }

        let fetched = self
            .source
            .fetch_species_list(self.limit)
            .map_err(CatalogError::Unavailable)?;
        let fetched: Arc<[Species]> = dedupe_by_name(fetched).into();

        let mut cached = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        // A concurrent loader may have finished first; keep its list.
        let species = cached.get_or_insert(fetched).clone();
        info!(count = species.len(), "species catalog loaded");
        Ok(species)
    }

    pub fn is_loaded(&self) -> bool {
        self.cached().is_some()
    }

    /// Looks a species up by exact name in the loaded catalog.
    pub fn find(&self, name: &str) -> CatalogResult<Option<Species>> {
        Ok(self
            .load()?
            .iter()
            .find(|species| species.name == name)
            .cloned())
    }

    fn cached(&self) -> Option<Arc<[Species]>> {
        self.cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn dedupe_by_name(species: Vec<Species>) -> Vec<Species> {
    let mut seen = HashSet::with_capacity(species.len());
    species
        .into_iter()
        .filter(|entry| {
            let first = seen.insert(entry.name.clone());
            if !first {
                warn!(name = %entry.name, "dropping duplicate catalog entry");
            }
            first
        })
        .collect()
}
