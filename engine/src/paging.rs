//! Client-side filtering, sorting and pagination.
//!
//! [`derive`] turns the full collection and a [`ViewState`] into the rows a
//! list page shows. It is pure: the same inputs always produce the same
//! slice, and the collection is never modified.

use crate::{sort::Comparator, ViewState};
use serde::Serialize;

/// The visible part of a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSlice<'a, T> {
    /// Rows on the current page
    pub items: Vec<&'a T>,
    /// Rows left after filtering
    pub total_filtered_count: usize,
    /// Page count, at least 1
    pub total_pages: u32,
    /// The page actually shown, clamped into `1..=total_pages`
    pub page: u32,
}

impl<T> PageSlice<'_, T> {
    /// Check if there is a page after this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Check if there is a page before this one.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Clone the visible rows out of the collection.
    pub fn to_owned_items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}

/// Number of pages needed for `count` rows; an empty list still has one page.
pub fn total_pages(count: usize, items_per_page: u32) -> u32 {
    let per_page = items_per_page.max(1) as usize;
    let pages = count.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamp a requested page into `1..=total_pages`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Case-insensitive substring match against any of the keys.
///
/// An empty filter matches everything.
pub fn matches_filter<S: AsRef<str>>(keys: &[S], filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    keys.iter()
        .any(|key| key.as_ref().to_lowercase().contains(&needle))
}

/// Derive the visible slice of a collection.
///
/// 1. Keep rows whose filter keys contain the filter text (case-insensitive).
/// 2. Sort with the given comparator, reversed when descending. Without a
///    comparator the source order is kept and the direction is ignored.
/// 3. Clamp the page and cut out `[(page - 1) * n, page * n)`.
pub fn derive<'a, T, F>(
    items: &'a [T],
    view: &ViewState,
    filter_keys: F,
    sorter: Option<&Comparator<T>>,
) -> PageSlice<'a, T>
where
    F: Fn(&T) -> Vec<String>,
{
    let mut rows: Vec<&T> = match view.filter.as_deref() {
        Some(filter) if !filter.is_empty() => items
            .iter()
            .filter(|item| matches_filter(&filter_keys(*item), filter))
            .collect(),
        _ => items.iter().collect(),
    };

    if let Some(sorter) = sorter {
        // Stable, so equal rows keep source order before any reversal.
        rows.sort_by(|a, b| sorter(*a, *b));
        if !view.sort_ascending {
            rows.reverse();
        }
    }

    let total_filtered_count = rows.len();
    let total_pages = total_pages(total_filtered_count, view.items_per_page);
    let page = clamp_page(view.page, total_pages);

    let per_page = view.items_per_page.max(1) as usize;
    let start = ((page - 1) as usize)
        .saturating_mul(per_page)
        .min(total_filtered_count);
    let end = start.saturating_add(per_page).min(total_filtered_count);

    PageSlice {
        items: rows[start..end].to_vec(),
        total_filtered_count,
        total_pages,
        page,
    }
}
