use crate::browse::BrowseState;
use crate::catalog::SpeciesCatalog;
use crate::config::BrowserConfig;
use crate::errors::{SourceError, SourceResult};
use crate::sources::{SpeciesSource, TypeMembershipSource};
use crate::type_index::TypeIndex;
use schema::{ResourceRef, Species};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// An in-memory catalog and type source whose availability can be toggled.
pub struct FakeSource {
    species: Vec<Species>,
    types: HashMap<String, Vec<String>>,
    catalog_available: AtomicBool,
    types_available: AtomicBool,
    list_calls: AtomicUsize,
    type_calls: AtomicUsize,
}

impl FakeSource {
    pub fn set_catalog_available(&self, available: bool) {
        self.catalog_available.store(available, Ordering::SeqCst);
    }

    pub fn set_types_available(&self, available: bool) {
        self.types_available.store(available, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn type_calls(&self) -> usize {
        self.type_calls.load(Ordering::SeqCst)
    }
}

impl SpeciesSource for FakeSource {
    fn fetch_species_list(&self, limit: usize) -> SourceResult<Vec<Species>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if !self.catalog_available.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable("catalog offline".into()));
        }
        Ok(self.species.iter().take(limit).cloned().collect())
    }
}

impl TypeMembershipSource for FakeSource {
    fn fetch_type_members(&self, type_name: &str) -> SourceResult<Vec<String>> {
        self.type_calls.fetch_add(1, Ordering::SeqCst);
        if !self.types_available.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable("types offline".into()));
        }
        Ok(self.types.get(type_name).cloned().unwrap_or_default())
    }
}

/// A builder for fake sources with common defaults.
///
/// # Example
/// ```
/// let source = FakeSourceBuilder::new(&["a", "b", "c"])
///     .with_type("fire", &["a", "c"])
///     .build();
/// ```
pub struct FakeSourceBuilder {
    species: Vec<Species>,
    types: HashMap<String, Vec<String>>,
    catalog_available: bool,
}

impl FakeSourceBuilder {
    pub fn new(names: &[&str]) -> Self {
        Self {
            species: species_list(names),
            types: HashMap::new(),
            catalog_available: true,
        }
    }

    /// Catalog of `count` species named `species-001`, `species-002`, ...
    pub fn numbered(count: usize) -> Self {
        let names: Vec<String> = (1..=count).map(|i| format!("species-{:03}", i)).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        Self::new(&names)
    }

    pub fn with_type(mut self, type_name: &str, members: &[&str]) -> Self {
        self.types.insert(
            type_name.to_string(),
            members.iter().map(|name| name.to_string()).collect(),
        );
        self
    }

    pub fn catalog_unavailable(mut self) -> Self {
        self.catalog_available = false;
        self
    }

    pub fn build(self) -> Arc<FakeSource> {
        Arc::new(FakeSource {
            species: self.species,
            types: self.types,
            catalog_available: AtomicBool::new(self.catalog_available),
            types_available: AtomicBool::new(true),
            list_calls: AtomicUsize::new(0),
            type_calls: AtomicUsize::new(0),
        })
    }
}

pub fn species_list(names: &[&str]) -> Vec<Species> {
    names
        .iter()
        .map(|name| {
            Species::new(
                *name,
                ResourceRef::new(format!("https://pokeapi.co/api/v2/pokemon/{}/", name)),
            )
        })
        .collect()
}

pub fn config_with_page_size(page_size: usize) -> BrowserConfig {
    BrowserConfig {
        page_size,
        ..BrowserConfig::default()
    }
}

/// Wires a fresh catalog, type index and browse state over `source`.
pub fn browse_state(source: &Arc<FakeSource>, page_size: usize) -> BrowseState {
    let catalog = Arc::new(SpeciesCatalog::new(source.clone(), 649));
    let type_index = Arc::new(TypeIndex::new(source.clone()));
    BrowseState::new(catalog, type_index, &config_with_page_size(page_size))
}

pub fn item_names(view: &crate::browse::PageView) -> Vec<&str> {
    view.result.items.iter().map(|s| s.name.as_str()).collect()
}
