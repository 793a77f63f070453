//! URL-state codec.
//!
//! Maps the view-state of a list page (page, page size, filter, sort column
//! and direction) to query parameters and back, so that every list view is
//! bookmarkable and survives reloads and the back button.
//!
//! Decoding never fails: each field falls back to its default on its own when
//! the raw value is missing, malformed or out of range. Encoding only touches
//! the five fields it owns.

use crate::{error::Result, Error, QueryParams};
use serde::{Deserialize, Serialize};

/// Query parameter holding the 1-based page number.
pub const PAGE: &str = "page";
/// Query parameter holding the page size.
pub const ITEMS_PER_PAGE: &str = "itemsPerPage";
/// Query parameter holding the filter text.
pub const FILTER: &str = "filter";
/// Query parameter holding the sort column index, `-1` for none.
pub const SORT_BY: &str = "sortBy";
/// Query parameter holding the sort direction.
pub const ASC: &str = "asc";

/// All fields owned by the codec.
pub const FIELDS: [&str; 5] = [PAGE, ITEMS_PER_PAGE, FILTER, SORT_BY, ASC];

const NO_SORT: &str = "-1";

/// Snapshot of page, filter and sort applied to a list view.
///
/// Values are replaced, never patched: every `with_*` method returns a new
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// 1-based page number, at least 1
    pub page: u32,
    /// Page size, at least 1
    pub items_per_page: u32,
    /// Filter text
    pub filter: Option<String>,
    /// Sorted column index; `None` means natural order
    pub sort_by: Option<usize>,
    /// Sort direction
    pub sort_ascending: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            items_per_page: 10,
            filter: None,
            sort_by: None,
            sort_ascending: true,
        }
    }
}

impl ViewState {
    /// Same view, another page.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Same view with another page size, back on the first page.
    pub fn with_items_per_page(&self, items_per_page: u32) -> Self {
        Self {
            page: 1,
            items_per_page: items_per_page.max(1),
            ..self.clone()
        }
    }

    /// Same view with another filter, back on the first page.
    ///
    /// An empty filter clears it.
    pub fn with_filter(&self, filter: Option<&str>) -> Self {
        Self {
            page: 1,
            filter: filter.filter(|f| !f.is_empty()).map(str::to_string),
            ..self.clone()
        }
    }

    /// Same view sorted by a column in the given direction.
    pub fn with_sort(&self, sort_by: Option<usize>, sort_ascending: bool) -> Self {
        Self {
            sort_by,
            sort_ascending,
            ..self.clone()
        }
    }

    /// Reaction to a click on a column header.
    ///
    /// The active column flips direction; any other column becomes the
    /// active one, ascending.
    pub fn toggle_sort(&self, index: usize) -> Self {
        if self.sort_by == Some(index) {
            self.with_sort(Some(index), !self.sort_ascending)
        } else {
            self.with_sort(Some(index), true)
        }
    }

    /// Check if the filter is present and non-empty.
    pub fn has_filter(&self) -> bool {
        self.filter.as_deref().is_some_and(|f| !f.is_empty())
    }
}

/// Typed defaults used when a query parameter is missing or unusable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewDefaults {
    state: ViewState,
}

impl ViewDefaults {
    /// Build defaults from `field -> default string` pairs.
    ///
    /// Fields left out keep the built-in defaults (`page=1`,
    /// `itemsPerPage=10`, no filter, `sortBy=-1`, `asc=true`). A `None`
    /// value means "absent", which is only meaningful for `filter`.
    ///
    /// The filter default must be absent: an absent filter is encoded by
    /// dropping the parameter, so any other default would decode back in
    /// its place.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut state = ViewState::default();

        for (field, value) in pairs {
            let invalid = || Error::InvalidDefault {
                field: field.to_string(),
                value: value.unwrap_or_default().to_string(),
            };

            match field {
                PAGE => state.page = value.and_then(parse_positive).ok_or_else(invalid)?,
                ITEMS_PER_PAGE => {
                    state.items_per_page = value.and_then(parse_positive).ok_or_else(invalid)?
                }
                FILTER if value.is_some() => return Err(invalid()),
                FILTER => state.filter = None,
                SORT_BY => state.sort_by = value.and_then(parse_sort).ok_or_else(invalid)?,
                ASC => state.sort_ascending = value.and_then(parse_bool).ok_or_else(invalid)?,
                other => return Err(Error::UnknownField(other.to_string())),
            }
        }

        Ok(Self { state })
    }

    /// Use an existing view-state as the defaults. Its filter is dropped.
    pub fn from_state(state: ViewState) -> Self {
        Self {
            state: ViewState {
                page: state.page.max(1),
                items_per_page: state.items_per_page.max(1),
                filter: None,
                ..state
            },
        }
    }

    /// The view-state decoded from empty query parameters.
    pub fn state(&self) -> &ViewState {
        &self.state
    }
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|n| *n >= 1)
}

/// `-1` is the "no sort" sentinel; any other negative value is invalid.
fn parse_sort(raw: &str) -> Option<Option<usize>> {
    if raw == NO_SORT {
        return Some(None);
    }
    raw.parse::<usize>().ok().map(Some)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Decode the view-state from query parameters.
pub fn decode(query: &QueryParams, defaults: &ViewDefaults) -> ViewState {
    let fallback = &defaults.state;

    ViewState {
        page: query
            .get(PAGE)
            .and_then(parse_positive)
            .unwrap_or(fallback.page),
        items_per_page: query
            .get(ITEMS_PER_PAGE)
            .and_then(parse_positive)
            .unwrap_or(fallback.items_per_page),
        filter: query
            .get(FILTER)
            .map(str::to_string)
            .or_else(|| fallback.filter.clone()),
        sort_by: query
            .get(SORT_BY)
            .and_then(parse_sort)
            .unwrap_or(fallback.sort_by),
        sort_ascending: query
            .get(ASC)
            .and_then(parse_bool)
            .unwrap_or(fallback.sort_ascending),
    }
}

/// Encode a view-state on top of the previous query parameters.
///
/// Parameters outside the codec's fields are kept as they were. An absent
/// filter removes the `filter` parameter.
pub fn encode(state: &ViewState, previous: &QueryParams) -> QueryParams {
    let mut query = previous.clone();

    query.set(PAGE, state.page.to_string());
    query.set(ITEMS_PER_PAGE, state.items_per_page.to_string());
    match &state.filter {
        Some(filter) => query.set(FILTER, filter.as_str()),
        None => query.remove(FILTER),
    }
    query.set(
        SORT_BY,
        state
            .sort_by
            .map_or_else(|| NO_SORT.to_string(), |i| i.to_string()),
    );
    query.set(ASC, state.sort_ascending.to_string());

    query
}
