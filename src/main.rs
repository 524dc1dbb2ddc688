use clap::{Parser, Subcommand};
use pokedex_browser::interface::{
    available_types_display, display_page, display_progression, display_species_detail,
};
use pokedex_browser::{
    load_cards, translate_abilities, BrowseState, BrowserConfig, SnapshotSource, SpeciesCatalog,
    SpeciesDetailSource, TypeIndex,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Browse the Pokedex from the terminal
#[derive(Parser)]
#[command(name = "pokedex-browser")]
#[command(about = "Search, filter and page through the Pokedex", long_about = None)]
#[command(version)]
struct Cli {
    /// Response snapshot to read from instead of the bundled one
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// RON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show one page of the catalog
    Browse {
        /// Case-insensitive part of the species name
        #[arg(long, default_value = "")]
        search: String,

        /// Only species of this type, e.g. `fire`
        #[arg(long = "type")]
        type_filter: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show the detail sheet and level-up moves of a species
    Detail { name: String },

    /// List the type filters
    Types,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BrowserConfig::load(path)?,
        None => BrowserConfig::default(),
    };
    let source = Arc::new(match &cli.snapshot {
        Some(path) => SnapshotSource::open(path, &config.api_base_url)?,
        None => SnapshotSource::bundled(&config.api_base_url)?,
    });
    let catalog = Arc::new(SpeciesCatalog::new(source.clone(), config.catalog_limit));

    match cli.command {
        Command::Browse {
            search,
            type_filter,
            page,
        } => {
            let type_index = Arc::new(TypeIndex::new(source.clone()));
            let mut state = BrowseState::new(catalog, type_index, &config);
            state.set_search_text(&search);
            state.set_type_filter(type_filter.as_deref());
            state.go_to_page(page);

            let view = state.view();
            let cards = load_cards(source.as_ref(), &view.result.items);
            print!("{}", display_page(&view, &cards));
        }
        Command::Detail { name } => {
            let Some(species) = catalog.find(&name.trim().to_lowercase())? else {
                return Err(format!("'{}' is not in the Pokedex", name).into());
            };
            info!(species = %species.name, "loading species detail");

            let detail = source.fetch_species_detail(&species.resource_ref)?;
            let abilities = translate_abilities(source.as_ref(), &detail.abilities, &config.language);

            print!("{}", display_species_detail(&detail, &abilities));
            println!();
            print!("{}", display_progression(&detail.progression()));
        }
        Command::Types => print!("{}", available_types_display()),
    }

    Ok(())
}
