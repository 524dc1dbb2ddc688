//! Pokedex Browser MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp)
//! that exposes the Pokedex catalog browser for LLM interaction.

use std::borrow::Cow;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pokedex_browser::interface::{
    available_types_display, display_page, display_progression, display_species_detail,
    spoken_description,
};
use pokedex_browser::{
    load_cards, translate_abilities, BrowseState, BrowserConfig, SnapshotSource, SpeciesCatalog,
    SpeciesDetailSource, TrainerSession, TypeIndex,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing::{info, warn};

const NO_TRAINER: &str = "No trainer is registered yet. Use 'set_trainer_name' to enter the Pokedex.";

struct PokedexSession {
    trainer: TrainerSession,
    browse: BrowseState,
}

#[derive(Clone)]
pub struct PokedexBrowserService {
    tool_router: ToolRouter<PokedexBrowserService>,
    config: Arc<BrowserConfig>,
    source: Arc<SnapshotSource>,
    catalog: Arc<SpeciesCatalog>,
    session: Arc<Mutex<PokedexSession>>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetTrainerNameRequest {
    #[schemars(description = "Name the trainer is greeted with")]
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchPokedexRequest {
    #[schemars(description = "Case-insensitive part of the species name; omit to keep the current search")]
    pub search: Option<String>,
    #[schemars(description = "Type to filter by, e.g. 'fire'; an empty string clears the filter")]
    pub type_filter: Option<String>,
    #[schemars(description = "Page to show, starting at 1")]
    pub page: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupSpeciesRequest {
    #[schemars(description = "Name of the Pokemon species to look up")]
    pub name: String,
}

#[tool_router]
impl PokedexBrowserService {
    pub fn new(config: BrowserConfig, source: SnapshotSource) -> Self {
        let source = Arc::new(source);
        let catalog = Arc::new(SpeciesCatalog::new(source.clone(), config.catalog_limit));
        let type_index = Arc::new(TypeIndex::new(source.clone()));
        let browse = BrowseState::new(catalog.clone(), type_index, &config);

        Self {
            tool_router: Self::tool_router(),
            config: Arc::new(config),
            source,
            catalog,
            session: Arc::new(Mutex::new(PokedexSession {
                trainer: TrainerSession::new(),
                browse,
            })),
        }
    }

    fn session(&self) -> MutexGuard<'_, PokedexSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `action` on the browse state once a trainer is registered.
    fn with_browse(&self, action: impl FnOnce(&mut BrowseState)) -> String {
        let mut session = self.session();
        if !session.trainer.can_enter_pokedex() {
            return NO_TRAINER.to_string();
        }
        action(&mut session.browse);
        self.render_page(&mut session.browse)
    }

    fn render_page(&self, browse: &mut BrowseState) -> String {
        let view = browse.view();
        let cards = load_cards(self.source.as_ref(), &view.result.items);
        display_page(&view, &cards)
    }

    #[tool(description = "Register the trainer name and enter the Pokedex")]
    async fn set_trainer_name(
        &self,
        Parameters(request): Parameters<SetTrainerNameRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut session = self.session();
        match session.trainer.set_trainer_name(&request.name) {
            Ok(()) => {
                let mut text = session.trainer.greeting().unwrap_or_default();
                text.push_str("\n\n");
                text.push_str(&self.render_page(&mut session.browse));
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => Err(McpError {
                code: ErrorCode(-32602),
                message: Cow::from(format!("Error setting trainer name: {}", e)),
                data: None,
            }),
        }
    }

    #[tool(description = "List the types the Pokedex can be filtered by")]
    async fn list_types(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            available_types_display(),
        )]))
    }

    #[tool(description = "Search the Pokedex by name and type, and show a page of results")]
    async fn search_pokedex(
        &self,
        Parameters(request): Parameters<SearchPokedexRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.with_browse(|browse| {
            if let Some(search) = &request.search {
                browse.set_search_text(search);
            }
            if let Some(type_filter) = &request.type_filter {
                browse.set_type_filter(Some(type_filter));
            }
            if let Some(page) = request.page {
                browse.go_to_page(page);
            }
        });
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Show the next page of the current search")]
    async fn next_page(&self) -> Result<CallToolResult, McpError> {
        let text = self.with_browse(BrowseState::next_page);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Show the previous page of the current search")]
    async fn previous_page(&self) -> Result<CallToolResult, McpError> {
        let text = self.with_browse(BrowseState::previous_page);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Look up the detail sheet and level-up moves of a Pokemon species")]
    async fn lookup_species(
        &self,
        Parameters(request): Parameters<LookupSpeciesRequest>,
    ) -> Result<CallToolResult, McpError> {
        if !self.session().trainer.can_enter_pokedex() {
            return Ok(CallToolResult::success(vec![Content::text(NO_TRAINER)]));
        }

        let name = request.name.trim().to_lowercase();
        let text = match self.catalog.find(&name) {
            Ok(Some(species)) => match self.source.fetch_species_detail(&species.resource_ref) {
                Ok(detail) => {
                    let abilities = translate_abilities(
                        self.source.as_ref(),
                        &detail.abilities,
                        &self.config.language,
                    );
                    format!(
                        "{}\n{}\n{}\n",
                        display_species_detail(&detail, &abilities),
                        display_progression(&detail.progression()),
                        spoken_description(&detail, &abilities)
                    )
                }
                Err(e) => {
                    warn!(species = %name, error = %e, "species detail unavailable");
                    format!("Could not load '{}': {}", name, e)
                }
            },
            Ok(None) => format!("'{}' is not in the Pokedex.", name),
            Err(e) => format!("Could not load the Pokedex: {}", e),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for PokedexBrowserService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::var_os("POKEDEX_BROWSER_CONFIG") {
        Some(path) => BrowserConfig::load(Path::new(&path))?,
        None => BrowserConfig::default(),
    };
    let source = SnapshotSource::bundled(&config.api_base_url)?;

    info!("Pokedex Browser MCP Server starting");
    let service = PokedexBrowserService::new(config, source);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    info!("Server running, waiting for shutdown");
    let quit_reason = server.waiting().await?;

    info!(?quit_reason, "Pokedex Browser MCP Server exiting");
    Ok(())
}
