// In: src/lib.rs

//! Pokedex Browser Engine
//!
//! The query and progression engine behind a Pokedex catalog browser: type
//! filtering, case-insensitive search and pagination over a fixed species
//! catalog, and the "moves learned by level" view of a single species.

// --- MODULE DECLARATIONS ---
pub mod browse;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod errors;
pub mod interface;
pub mod pagination;
pub mod payload;
pub mod progression;
pub mod query;
pub mod session;
pub mod sources;
pub mod type_index;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    BaseStats, LearnMethod, MoveLearnRecord, PokemonType, ResourceRef, Species, StatName,
};

// --- From this crate's modules (`src/`) ---

// Core engine.
pub use catalog::SpeciesCatalog;
pub use pagination::{page_window, PageWindow};
pub use progression::{moves_known_by, MoveProgressionBuilder, ProgressionEntry};
pub use query::{QueryEngine, QueryRequest, QueryResult};
pub use type_index::TypeIndex;

// Presentation-facing state.
pub use browse::{BrowseState, PageView};
pub use detail::{AbilityRef, SpeciesCard, SpeciesDetail};
pub use session::TrainerSession;

// Collaborators and configuration.
pub use config::BrowserConfig;
pub use sources::{
    load_cards, translate_abilities, AbilityNameSource, SnapshotSource, SpeciesDetailSource,
    SpeciesSource, TypeMembershipSource,
};

// Crate-specific error and result types.
pub use errors::{
    BrowserError, BrowserResult, CatalogError, CatalogResult, ConfigError, ConfigResult,
    DetailError, DetailResult, RecordError, SessionError, SourceError, SourceResult,
    TypeIndexError, TypeIndexResult,
};
