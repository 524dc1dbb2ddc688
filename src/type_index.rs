use crate::errors::{SourceError, TypeIndexError, TypeIndexResult};
use crate::sources::TypeMembershipSource;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

pub type Members = Arc<HashSet<String>>;

/// Lazily built type -> species-name membership. Each type is fetched at most
/// once per successful lookup and never invalidated.
pub struct TypeIndex {
    source: Arc<dyn TypeMembershipSource>,
    members: RwLock<HashMap<String, Members>>,
}

impl TypeIndex {
    pub fn new(source: Arc<dyn TypeMembershipSource>) -> Self {
        Self {
            source,
            members: RwLock::new(HashMap::new()),
        }
    }

    /// Species names belonging to `type_name`. A type the source does not
    /// know resolves to the empty set; only an unavailable source is an error.
    pub fn members_of(&self, type_name: &str) -> TypeIndexResult<Members> {
        let normalized = type_name.to_ascii_lowercase();
        let type_name = normalized.as_str();
        if let Some(members) = self.cached(type_name) {
            debug!(type_name, count = members.len(), "type membership served from cache");
            return Ok(members);
        }

        let fetched: HashSet<String> = match self.source.fetch_type_members(type_name) {
            Ok(names) => names.into_iter().collect(),
            Err(SourceError::NotFound(_)) => {
                debug!(type_name, "unknown type resolves to no members");
                HashSet::new()
            }
            Err(reason) => {
                return Err(TypeIndexError::Unavailable {
                    type_name: type_name.to_string(),
                    reason,
                })
            }
        };

        let mut members = self.members.write().unwrap_or_else(PoisonError::into_inner);
        let entry = members
            .entry(type_name.to_string())
            .or_insert_with(|| Arc::new(fetched))
            .clone();
        debug!(type_name, count = entry.len(), "type membership cached");
        Ok(entry)
    }

    pub fn is_cached(&self, type_name: &str) -> bool {
        self.cached(&type_name.to_ascii_lowercase()).is_some()
    }

    pub fn cached_type_count(&self) -> usize {
        self.members
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn cached(&self, type_name: &str) -> Option<Members> {
        self.members
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(type_name)
            .cloned()
    }
}
