// Pokedex Browser Schema - Shared type definitions
// This crate holds the catalog and move-record shapes shared by the query
// engine, the payload projection layer and the binaries.

// Re-export the main types
pub use pokemon_types::*;
pub use species_data::*;

pub mod pokemon_types;
pub mod species_data;
