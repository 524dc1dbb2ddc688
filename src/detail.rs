use crate::progression::{MoveProgressionBuilder, ProgressionEntry};
use schema::{BaseStats, MoveLearnRecord, PokemonType, ResourceRef, Species, StatName};
use serde::{Deserialize, Serialize};

/// Stats shown on the detail sheet, in display order.
pub const DISPLAYED_STATS: [StatName; 4] = [
    StatName::Hp,
    StatName::Attack,
    StatName::Defense,
    StatName::Speed,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRef {
    pub name: String,
    pub resource_ref: ResourceRef,
}

/// Projected species detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDetail {
    pub id: u32,
    pub name: String,
    pub image: Option<String>,
    /// Decimetres, as the API reports it.
    pub height: u32,
    /// Hectograms, as the API reports it.
    pub weight: u32,
    pub types: Vec<String>,
    pub abilities: Vec<AbilityRef>,
    pub stats: BaseStats,
    pub move_records: Vec<MoveLearnRecord>,
}

impl SpeciesDetail {
    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    /// National dex number, zero-padded to three digits: `#004`.
    pub fn dex_label(&self) -> String {
        format!("#{:03}", self.id)
    }

    /// Type names run through the Spanish label table.
    pub fn translated_types(&self) -> Vec<&str> {
        self.types
            .iter()
            .map(|type_name| PokemonType::translate_name(type_name))
            .collect()
    }

    pub fn progression(&self) -> Vec<ProgressionEntry> {
        MoveProgressionBuilder.build(&self.move_records)
    }
}

/// The preview shown for each entry of a catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCard {
    /// `None` when the detail payload could not be loaded.
    pub dex_label: Option<String>,
    pub name: String,
    pub types: Vec<String>,
    pub image: Option<String>,
}

impl SpeciesCard {
    pub fn from_detail(detail: &SpeciesDetail) -> Self {
        Self {
            dex_label: Some(detail.dex_label()),
            name: detail.name.clone(),
            types: detail.types.clone(),
            image: detail.image.clone(),
        }
    }

    /// Fallback card carrying only the catalog name.
    pub fn name_only(species: &Species) -> Self {
        Self {
            dex_label: None,
            name: species.name.clone(),
            types: Vec::new(),
            image: None,
        }
    }
}

/// Width of a stat bar, as a percentage of the track.
pub fn stat_bar_percent(value: u8) -> u8 {
    value.min(100)
}
