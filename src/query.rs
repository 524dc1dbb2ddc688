use crate::errors::TypeIndexResult;
use crate::pagination::{clamp_page, page_window, total_pages, PageWindow};
use crate::type_index::TypeIndex;
use schema::Species;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Filter, search and page parameters for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub type_filter: Option<String>,
    pub search_text: String,
    pub page: usize,
    pub page_size: usize,
}

impl QueryRequest {
    pub fn new(page_size: usize) -> Self {
        Self {
            type_filter: None,
            search_text: String::new(),
            page: 1,
            page_size,
        }
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_filter = Some(type_name.into());
        self
    }

    pub fn with_search(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    pub fn on_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// The type filter to apply; blank means "all types".
    pub fn active_type_filter(&self) -> Option<&str> {
        self.type_filter
            .as_deref()
            .map(str::trim)
            .filter(|type_name| !type_name.is_empty())
    }
}

/// One page of visible species plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub items: Vec<Species>,
    /// Always within `[1, max(total_pages, 1)]`.
    pub page: usize,
    pub total_pages: usize,
}

impl QueryResult {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn window(&self, max_visible: usize) -> PageWindow {
        page_window(self.page, self.total_pages, max_visible)
    }
}

/// Composes type membership, substring search and pagination over a catalog.
pub struct QueryEngine {
    type_index: Arc<TypeIndex>,
}

impl QueryEngine {
    pub fn new(type_index: Arc<TypeIndex>) -> Self {
        Self { type_index }
    }

    pub fn type_index(&self) -> &TypeIndex {
        &self.type_index
    }

    pub fn query(&self, catalog: &[Species], request: &QueryRequest) -> TypeIndexResult<QueryResult> {
        let members = match request.active_type_filter() {
            Some(type_name) => Some(self.type_index.members_of(type_name)?),
            None => None,
        };

        let result = filter_and_paginate(
            catalog,
            members.as_deref(),
            &request.search_text,
            request.page,
            request.page_size,
        );
        debug!(
            type_filter = ?request.active_type_filter(),
            search = %request.search_text,
            page = result.page,
            total_pages = result.total_pages,
            shown = result.items.len(),
            "catalog query"
        );
        Ok(result)
    }
}

/// The pure part of a query: `members` (when present) narrows the catalog,
/// `search_text` must appear in the name ignoring case, and the requested
/// page is clamped before slicing. Catalog order is preserved throughout.
pub fn filter_and_paginate(
    catalog: &[Species],
    members: Option<&HashSet<String>>,
    search_text: &str,
    page: usize,
    page_size: usize,
) -> QueryResult {
    let needle = search_text.to_lowercase();
    let filtered: Vec<&Species> = catalog
        .iter()
        .filter(|species| members.map_or(true, |members| members.contains(&species.name)))
        .filter(|species| needle.is_empty() || species.name.to_lowercase().contains(&needle))
        .collect();

    let page_size = page_size.max(1);
    let total_pages = total_pages(filtered.len(), page_size);
    let page = clamp_page(page, total_pages);

    let items = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    QueryResult {
        items,
        page,
        total_pages,
    }
}
