use crate::catalog::SpeciesCatalog;
use crate::config::BrowserConfig;
use crate::errors::BrowserError;
use crate::pagination::{clamp_page, PageWindow};
use crate::query::{QueryEngine, QueryRequest, QueryResult};
use crate::type_index::TypeIndex;
use std::sync::Arc;
use tracing::warn;

/// What the Pokedex screen renders: one page of results, the button window,
/// and the failure to report when the catalog or a type could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub result: QueryResult,
    pub window: PageWindow,
    pub error: Option<BrowserError>,
}

impl PageView {
    fn failed(error: BrowserError) -> Self {
        Self {
            result: QueryResult::empty(),
            window: PageWindow::EMPTY,
            error: Some(error),
        }
    }
}

/// View state of the catalog screen.
///
/// Changing the search text or the type filter always moves back to page 1.
pub struct BrowseState {
    catalog: Arc<SpeciesCatalog>,
    engine: QueryEngine,
    request: QueryRequest,
    max_visible_pages: usize,
    // Page count of the last rendered view, used to clamp navigation.
    last_total_pages: Option<usize>,
}

impl BrowseState {
    pub fn new(catalog: Arc<SpeciesCatalog>, type_index: Arc<TypeIndex>, config: &BrowserConfig) -> Self {
        Self {
            catalog,
            engine: QueryEngine::new(type_index),
            request: QueryRequest::new(config.page_size),
            max_visible_pages: config.max_visible_pages,
            last_total_pages: None,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.request.search_text
    }

    pub fn type_filter(&self) -> Option<&str> {
        self.request.active_type_filter()
    }

    pub fn page(&self) -> usize {
        self.request.page
    }

    pub fn set_search_text(&mut self, search_text: &str) {
        if self.request.search_text != search_text {
            self.request.search_text = search_text.to_string();
            self.reset_page();
        }
    }

    /// `None` or a blank name clears the filter. Names are matched ignoring
    /// case, so `"Fire"` selects the same type as `"fire"`.
    pub fn set_type_filter(&mut self, type_filter: Option<&str>) {
        let type_filter = type_filter
            .map(str::trim)
            .filter(|type_name| !type_name.is_empty())
            .map(str::to_ascii_lowercase);
        if self.request.type_filter != type_filter {
            self.request.type_filter = type_filter;
            self.reset_page();
        }
    }

    /// Jumps to `page`, clamped to the pages of the last rendered view.
    pub fn go_to_page(&mut self, page: usize) {
        self.request.page = match self.last_total_pages {
            Some(total_pages) => clamp_page(page, total_pages),
            None => page.max(1),
        };
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.request.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.request.page.saturating_sub(1));
    }

    /// Runs the current query. The stored page is replaced by the clamped
    /// page the result was sliced from.
    pub fn view(&mut self) -> PageView {
        let catalog = match self.catalog.load() {
            Ok(catalog) => catalog,
            Err(error) => {
                warn!(%error, "catalog unavailable, rendering empty page");
                self.settle(&QueryResult::empty());
                return PageView::failed(error.into());
            }
        };

        match self.engine.query(&catalog, &self.request) {
            Ok(result) => {
                self.settle(&result);
                PageView {
                    window: result.window(self.max_visible_pages),
                    result,
                    error: None,
                }
            }
            Err(error) => {
                warn!(%error, "type membership unavailable, rendering empty page");
                self.settle(&QueryResult::empty());
                PageView::failed(error.into())
            }
        }
    }

    fn settle(&mut self, result: &QueryResult) {
        self.request.page = result.page;
        self.last_total_pages = Some(result.total_pages);
    }

    fn reset_page(&mut self) {
        self.request.page = 1;
        self.last_total_pages = None;
    }
}
