use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The type filters offered by the Pokedex screen.
///
/// The lowercase form (`Display`, `FromStr`, `AsRef<str>`) is the name the
/// membership source understands, e.g. `PokemonType::Fire` <-> `"fire"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dark,
    Dragon,
    Steel,
    Fairy,
}

impl PokemonType {
    /// Spanish display label, the pre-translated table the type picker shows.
    pub fn spanish_name(self) -> &'static str {
        match self {
            PokemonType::Normal => "Normal",
            PokemonType::Fire => "Fuego",
            PokemonType::Water => "Agua",
            PokemonType::Electric => "Eléctrico",
            PokemonType::Grass => "Planta",
            PokemonType::Ice => "Hielo",
            PokemonType::Fighting => "Lucha",
            PokemonType::Poison => "Veneno",
            PokemonType::Ground => "Tierra",
            PokemonType::Flying => "Volador",
            PokemonType::Psychic => "Psíquico",
            PokemonType::Bug => "Bicho",
            PokemonType::Rock => "Roca",
            PokemonType::Ghost => "Fantasma",
            PokemonType::Dark => "Siniestro",
            PokemonType::Dragon => "Dragón",
            PokemonType::Steel => "Acero",
            PokemonType::Fairy => "Hada",
        }
    }

    /// Translates an API type name, passing unknown names through untouched.
    pub fn translate_name(type_name: &str) -> &str {
        match type_name.parse::<PokemonType>() {
            Ok(pokemon_type) => pokemon_type.spanish_name(),
            Err(_) => type_name,
        }
    }
}
