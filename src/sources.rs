//! Collaborators the engine reads from.
//!
//! The traits are the seam between the synchronous core and whatever actually
//! fetches data. Implementations project their raw payloads through
//! [`crate::payload`] so that only validated, strongly-typed values cross into
//! the core.

use crate::detail::{AbilityRef, SpeciesCard, SpeciesDetail};
use crate::errors::{DetailResult, SourceError, SourceResult};
use crate::payload;
use schema::{ResourceRef, Species};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Snapshot of API responses shipped with the crate.
const BUNDLED_SNAPSHOT: &str = include_str!("../data/snapshot.json");

pub trait SpeciesSource: Send + Sync {
    /// The first `limit` species of the reference dataset, in dataset order.
    fn fetch_species_list(&self, limit: usize) -> SourceResult<Vec<Species>>;
}

pub trait TypeMembershipSource: Send + Sync {
    /// Names of the species holding `type_name`. Unknown types may be reported
    /// either as an empty list or as [`SourceError::NotFound`].
    fn fetch_type_members(&self, type_name: &str) -> SourceResult<Vec<String>>;
}

pub trait SpeciesDetailSource: Send + Sync {
    fn fetch_species_detail(&self, resource_ref: &ResourceRef) -> DetailResult<SpeciesDetail>;
}

pub trait AbilityNameSource: Send + Sync {
    /// The ability's name in `language`, or `None` when it has no translation.
    fn fetch_ability_name(
        &self,
        resource_ref: &ResourceRef,
        language: &str,
    ) -> SourceResult<Option<String>>;
}

/// Display names for a species' abilities. Falls back to the raw ability name
/// per ability, so one failed lookup does not blank the whole list.
pub fn translate_abilities(
    source: &dyn AbilityNameSource,
    abilities: &[AbilityRef],
    language: &str,
) -> Vec<String> {
    abilities
        .iter()
        .map(
            |ability| match source.fetch_ability_name(&ability.resource_ref, language) {
                Ok(Some(translated)) => translated,
                Ok(None) => ability.name.clone(),
                Err(error) => {
                    warn!(ability = %ability.name, %error, "ability name lookup failed");
                    ability.name.clone()
                }
            },
        )
        .collect()
}

/// Card previews for a page of species, in page order. An entry whose detail
/// cannot be loaded keeps a name-only card.
pub fn load_cards(source: &dyn SpeciesDetailSource, species: &[Species]) -> Vec<SpeciesCard> {
    species
        .iter()
        .map(
            |entry| match source.fetch_species_detail(&entry.resource_ref) {
                Ok(detail) => SpeciesCard::from_detail(&detail),
                Err(error) => {
                    warn!(species = %entry.name, %error, "card preview unavailable");
                    SpeciesCard::name_only(entry)
                }
            },
        )
        .collect()
}

/// Offline source answering from a JSON document that maps API paths
/// (`pokemon`, `type/fire`, `pokemon/4`, `ability/66`) to response bodies.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    base_url: String,
    responses: HashMap<String, Value>,
}

impl SnapshotSource {
    /// The snapshot compiled into the crate.
    pub fn bundled(base_url: &str) -> SourceResult<Self> {
        Self::from_json_str(BUNDLED_SNAPSHOT, base_url)
    }

    pub fn open(path: &Path, base_url: &str) -> SourceResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SourceError::Unavailable(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content, base_url)
    }

    pub fn from_json_str(content: &str, base_url: &str) -> SourceResult<Self> {
        let responses: HashMap<String, Value> = serde_json::from_str(content)
            .map_err(|e| SourceError::Malformed(format!("snapshot is not a path map: {}", e)))?;
        debug!(entries = responses.len(), "loaded response snapshot");
        Ok(Self {
            base_url: base_url.to_string(),
            responses,
        })
    }

    /// API path for a resource reference: the base URL prefix and any
    /// surrounding slashes are dropped.
    pub fn path_for(&self, resource_ref: &ResourceRef) -> String {
        let reference = resource_ref.as_str();
        reference
            .strip_prefix(self.base_url.as_str())
            .unwrap_or(reference)
            .trim_matches('/')
            .to_string()
    }

    fn response(&self, path: &str) -> SourceResult<&Value> {
        self.responses
            .get(path)
            .ok_or_else(|| SourceError::NotFound(path.to_string()))
    }
}

impl SpeciesSource for SnapshotSource {
    fn fetch_species_list(&self, limit: usize) -> SourceResult<Vec<Species>> {
        let mut species = payload::project_species_list(self.response("pokemon")?)?;
        species.truncate(limit);
        Ok(species)
    }
}

impl TypeMembershipSource for SnapshotSource {
    fn fetch_type_members(&self, type_name: &str) -> SourceResult<Vec<String>> {
        payload::project_type_members(self.response(&format!("type/{}", type_name))?)
    }
}

impl SpeciesDetailSource for SnapshotSource {
    fn fetch_species_detail(&self, resource_ref: &ResourceRef) -> DetailResult<SpeciesDetail> {
        let path = self.path_for(resource_ref);
        payload::project_species_detail(self.response(&path)?)
    }
}

impl AbilityNameSource for SnapshotSource {
    fn fetch_ability_name(
        &self,
        resource_ref: &ResourceRef,
        language: &str,
    ) -> SourceResult<Option<String>> {
        let path = self.path_for(resource_ref);
        Ok(payload::localized_name(self.response(&path)?, language))
    }
}
