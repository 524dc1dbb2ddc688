//! Text rendering shared by the CLI and the MCP server.
//!
//! Every function takes already-computed views and returns plain text; none
//! of them fetch or filter anything.

use crate::browse::PageView;
use crate::detail::{stat_bar_percent, SpeciesCard, SpeciesDetail, DISPLAYED_STATS};
use crate::progression::ProgressionEntry;
use schema::{PokemonType, StatName};
use strum::IntoEnumIterator;

const LABEL_WIDTH: usize = 10;
const STAT_BAR_WIDTH: usize = 20;

/// Returns formatted text listing the selectable type filters
pub fn available_types_display() -> String {
    let mut output = String::from("Available types:\n");
    for pokemon_type in PokemonType::iter() {
        output.push_str(&format!(
            "  {:<LABEL_WIDTH$} {}\n",
            pokemon_type.to_string(),
            pokemon_type.spanish_name()
        ));
    }
    output
}

/// Displays one page of the catalog, one card per species, with its
/// pagination bar
pub fn display_page(view: &PageView, cards: &[SpeciesCard]) -> String {
    let mut output = String::new();

    if let Some(error) = &view.error {
        output.push_str(&format!("Could not load the Pokedex: {}\n", error));
    }

    if cards.is_empty() {
        output.push_str("Nothing to show.\n");
    } else {
        for card in cards {
            output.push_str(&display_card(card));
        }
    }

    output.push('\n');
    output.push_str(&display_pagination(view));
    output
}

/// `  #004 charmander [fire]` plus the image on its own line.
pub fn display_card(card: &SpeciesCard) -> String {
    let mut output = format!(
        "  {} {}",
        card.dex_label.as_deref().unwrap_or("#???"),
        card.name
    );
    if !card.types.is_empty() {
        output.push_str(&format!(" [{}]", card.types.join(", ")));
    }
    output.push('\n');
    if let Some(image) = &card.image {
        output.push_str(&format!("       {}\n", image));
    }
    output
}

/// `page X of Y` followed by the button row, e.g. `‹prev› 1 [2] 3 ‹next›`.
/// Disabled buttons are wrapped in parentheses.
pub fn display_pagination(view: &PageView) -> String {
    let result = &view.result;
    let mut buttons = Vec::with_capacity(view.window.len() + 2);

    buttons.push(if result.has_previous() {
        "‹prev›".to_string()
    } else {
        "(prev)".to_string()
    });
    for page in view.window.pages() {
        buttons.push(if page == result.page {
            format!("[{}]", page)
        } else {
            page.to_string()
        });
    }
    buttons.push(if result.has_next() {
        "‹next›".to_string()
    } else {
        "(next)".to_string()
    });

    format!(
        "page {} of {}\n{}\n",
        result.page,
        result.total_pages,
        buttons.join(" ")
    )
}

/// Displays the detail sheet of a species
pub fn display_species_detail(detail: &SpeciesDetail, abilities: &[String]) -> String {
    let mut output = String::new();

    // --- 1. Name and dex number ---
    output.push_str(&format!("{} ({})\n", detail.name, detail.dex_label()));
    if let Some(image) = &detail.image {
        output.push_str(&format!("{}\n", image));
    }
    output.push_str("--------------------\n");

    // --- 2. Size ---
    output.push_str(&format!(
        "{:<LABEL_WIDTH$} : {:.1} m\n",
        "Height",
        detail.height_m()
    ));
    output.push_str(&format!(
        "{:<LABEL_WIDTH$} : {:.1} kg\n",
        "Weight",
        detail.weight_kg()
    ));
    output.push_str("--------------------\n");

    // --- 3. Types and abilities ---
    output.push_str(&format!("Type(s): {}\n", detail.translated_types().join(" / ")));
    output.push_str(&format!("Abilities: {}\n", abilities.join(", ")));
    output.push_str("--------------------\n");

    // --- 4. Base stats ---
    output.push_str("Base Stats:\n");
    for stat in DISPLAYED_STATS {
        let value = detail.stats.get(stat);
        let filled = stat_bar_percent(value) as usize * STAT_BAR_WIDTH / 100;
        output.push_str(&format!(
            "{:<LABEL_WIDTH$} : {:>3} {}{}\n",
            stat_label(stat),
            value,
            "#".repeat(filled),
            ".".repeat(STAT_BAR_WIDTH - filled)
        ));
    }
    output.push_str(&format!(
        "{:<LABEL_WIDTH$} : {:>3}\n",
        "Total",
        detail.stats.total()
    ));

    output
}

/// Displays the moves a species learns, grouped by level
pub fn display_progression(progression: &[ProgressionEntry]) -> String {
    if progression.is_empty() {
        return "Learns no moves by leveling up.\n".to_string();
    }

    let mut output = String::from("Moves by level:\n");
    for entry in progression {
        output.push_str(&format!(
            "  Level {:>3}: {}\n",
            entry.level,
            entry.moves.join(", ")
        ));
    }
    output
}

/// The Spanish sentence a speech synthesizer reads out on the detail screen.
pub fn spoken_description(detail: &SpeciesDetail, abilities: &[String]) -> String {
    format!(
        "{} es un Pokémon de tipo {}. Mide {:.1} metros y pesa {:.1} kilogramos. \
         Tiene habilidades como {}. Sus estadísticas base son: salud {}, ataque {}, defensa {}, y velocidad {}.",
        detail.name,
        detail.translated_types().join(", "),
        detail.height_m(),
        detail.weight_kg(),
        abilities.join(", "),
        detail.stats.hp,
        detail.stats.attack,
        detail.stats.defense,
        detail.stats.speed
    )
}

fn stat_label(stat: StatName) -> &'static str {
    match stat {
        StatName::Hp => "HP",
        StatName::Attack => "Attack",
        StatName::Defense => "Defense",
        StatName::SpecialAttack => "Sp. Atk",
        StatName::SpecialDefense => "Sp. Def",
        StatName::Speed => "Speed",
    }
}
