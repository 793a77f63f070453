//! Table handler - renders one page of the skills table.

use std::collections::BTreeMap;

use crate::store::SkillStore;
use roster_engine::{encode, ColumnHeader, QueryParams, Skill, TablePage, TenantId, ViewState};
use serde::Serialize;

/// One rendered page of the skills table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTableResponse {
    /// Skills on the current page
    pub items: Vec<Skill>,
    /// Skills matching the filter, across all pages
    pub total_filtered_count: usize,
    pub total_pages: u32,
    /// The page actually shown, after clamping
    pub page: u32,
    pub state: ViewState,
    pub columns: Vec<ColumnHeader>,
    pub links: TableLinks,
}

/// Query strings for the page's controls.
///
/// Every link keeps the request's unrelated parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableLinks {
    #[serde(rename = "self")]
    pub current: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    /// Header click targets, by column name
    pub sort: BTreeMap<String, String>,
}

/// Render the skills table for a tenant and query string.
pub fn handle_table(
    store: &SkillStore,
    table: &TablePage<Skill>,
    tenant_id: TenantId,
    query: &QueryParams,
) -> SkillTableResponse {
    let skills = store.list(tenant_id);
    let view = table.view(&skills, query);
    let page = view.slice.page;

    let links = TableLinks {
        current: link(&encode(&view.state, query)),
        next: view
            .slice
            .has_next()
            .then(|| link(&table.page_change(query, page + 1))),
        previous: view
            .slice
            .has_previous()
            .then(|| link(&table.page_change(query, page - 1))),
        sort: view
            .columns
            .iter()
            .enumerate()
            .filter(|(_, header)| header.sortable)
            .map(|(index, header)| (header.name.clone(), link(&table.sort_change(query, index))))
            .collect(),
    };

    tracing::debug!(
        tenant_id,
        page,
        shown = view.slice.items.len(),
        total = view.slice.total_filtered_count,
        "Rendered skills table"
    );

    SkillTableResponse {
        items: view.slice.to_owned_items(),
        total_filtered_count: view.slice.total_filtered_count,
        total_pages: view.slice.total_pages,
        page,
        state: view.state,
        columns: view.columns,
        links,
    }
}

fn link(query: &QueryParams) -> String {
    format!("?{}", query.to_query_string())
}
