//! List page composition.
//!
//! Bundles a column registry, URL defaults and a filter-key extractor for one
//! entity type, and wires them through the codec and the paging engine.

use crate::{
    codec::{decode, encode, ViewDefaults, ViewState},
    paging::{derive, PageSlice},
    sort::Columns,
    QueryParams,
};
use serde::Serialize;

type FilterKeys<T> = Box<dyn Fn(&T) -> Vec<String> + Send + Sync>;

/// Direction shown on the sorted column's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    Ascending,
    Descending,
}

/// A column header as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    pub name: String,
    pub sortable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortIndicator>,
}

/// Everything a list page needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView<'a, T> {
    /// Decoded view-state, with the sort index clamped to the registry
    pub state: ViewState,
    pub columns: Vec<ColumnHeader>,
    #[serde(flatten)]
    pub slice: PageSlice<'a, T>,
}

/// One entity type's list page.
pub struct TablePage<T> {
    columns: Columns<T>,
    defaults: ViewDefaults,
    filter_keys: FilterKeys<T>,
}

impl<T> std::fmt::Debug for TablePage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TablePage")
            .field("columns", &self.columns.len())
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl<T> TablePage<T> {
    /// Create a page from its columns, URL defaults and filter keys.
    pub fn new<F>(columns: Columns<T>, defaults: ViewDefaults, filter_keys: F) -> Self
    where
        F: Fn(&T) -> Vec<String> + Send + Sync + 'static,
    {
        Self {
            columns,
            defaults,
            filter_keys: Box::new(filter_keys),
        }
    }

    /// The column registry.
    pub fn columns(&self) -> &Columns<T> {
        &self.columns
    }

    /// The URL defaults.
    pub fn defaults(&self) -> &ViewDefaults {
        &self.defaults
    }

    /// Decode the view-state and drop a sort index without a comparator.
    pub fn state(&self, query: &QueryParams) -> ViewState {
        let state = decode(query, &self.defaults);
        let sort_by = self.columns.clamp_sort(state.sort_by);
        ViewState { sort_by, ..state }
    }

    /// Render the page for the given query parameters.
    pub fn view<'a>(&self, items: &'a [T], query: &QueryParams) -> TableView<'a, T> {
        let state = self.state(query);
        let sorter = self.columns.sorter(state.sort_by);
        let slice = derive(items, &state, &self.filter_keys, sorter);

        TableView {
            columns: self.headers(&state),
            state: ViewState {
                page: slice.page,
                ..state
            },
            slice,
        }
    }

    fn headers(&self, state: &ViewState) -> Vec<ColumnHeader> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| ColumnHeader {
                name: column.name.clone(),
                sortable: column.is_sortable(),
                sort: (state.sort_by == Some(index)).then_some(if state.sort_ascending {
                    SortIndicator::Ascending
                } else {
                    SortIndicator::Descending
                }),
            })
            .collect()
    }

    /// Query parameters after a click on a column header.
    ///
    /// Columns without a comparator leave the query unchanged.
    pub fn sort_change(&self, query: &QueryParams, index: usize) -> QueryParams {
        if self.columns.sorter(Some(index)).is_none() {
            return query.clone();
        }
        encode(&self.state(query).toggle_sort(index), query)
    }

    /// Query parameters for another page.
    pub fn page_change(&self, query: &QueryParams, page: u32) -> QueryParams {
        encode(&self.state(query).with_page(page), query)
    }

    /// Query parameters for another filter.
    pub fn filter_change(&self, query: &QueryParams, filter: Option<&str>) -> QueryParams {
        encode(&self.state(query).with_filter(filter), query)
    }

    /// Query parameters for another page size.
    pub fn items_per_page_change(&self, query: &QueryParams, items_per_page: u32) -> QueryParams {
        encode(&self.state(query).with_items_per_page(items_per_page), query)
    }
}
