//! Sort ordering registry.
//!
//! A list page declares its columns in display order; each column carries
//! zero or one comparator. The view-state refers to the sorted column by
//! position, so resolving a sorter is a plain index lookup.

use std::cmp::Ordering;

/// A total order over list elements.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Case-sensitive lexicographic order on a string field.
pub fn string_sorter<T, F>(key: F) -> Comparator<T>
where
    T: 'static,
    F: Fn(&T) -> &str + Send + Sync + 'static,
{
    Box::new(move |a, b| key(a).cmp(key(b)))
}

/// Case-insensitive order on a string field.
///
/// Strings that differ only by case are ordered case-sensitively so the
/// order stays total.
pub fn string_sorter_ignore_case<T, F>(key: F) -> Comparator<T>
where
    T: 'static,
    F: Fn(&T) -> &str + Send + Sync + 'static,
{
    Box::new(move |a, b| {
        let (a, b) = (key(a), key(b));
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    })
}

/// Natural order of any `Ord` key.
pub fn key_sorter<T, K, F>(key: F) -> Comparator<T>
where
    T: 'static,
    K: Ord + 'static,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    Box::new(move |a, b| key(a).cmp(&key(b)))
}

/// A displayed column.
pub struct Column<T> {
    /// Header text
    pub name: String,
    /// Comparator used when the column is sorted
    pub sorter: Option<Comparator<T>>,
}

impl<T> Column<T> {
    /// A column that can be sorted.
    pub fn sortable(name: impl Into<String>, sorter: Comparator<T>) -> Self {
        Self {
            name: name.into(),
            sorter: Some(sorter),
        }
    }

    /// A column without a sort order.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sorter: None,
        }
    }

    /// Check if the column has a comparator.
    pub fn is_sortable(&self) -> bool {
        self.sorter.is_some()
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("sortable", &self.is_sortable())
            .finish()
    }
}

/// Columns in display order.
#[derive(Debug)]
pub struct Columns<T> {
    columns: Vec<Column<T>>,
}

impl<T> Default for Columns<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}

impl<T> Columns<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to add a column.
    pub fn with_column(mut self, column: Column<T>) -> Self {
        self.columns.push(column);
        self
    }

    /// Get a column by index.
    pub fn get(&self, index: usize) -> Option<&Column<T>> {
        self.columns.get(index)
    }

    /// Iterate over the columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns.iter()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if no column is declared.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Resolve the comparator for a sort index.
    ///
    /// `None`, an index past the last column and a column without a
    /// comparator all resolve to natural order.
    pub fn sorter(&self, sort_by: Option<usize>) -> Option<&Comparator<T>> {
        sort_by
            .and_then(|index| self.columns.get(index))
            .and_then(|column| column.sorter.as_ref())
    }

    /// Drop a sort index that does not resolve to a comparator.
    pub fn clamp_sort(&self, sort_by: Option<usize>) -> Option<usize> {
        sort_by.filter(|_| self.sorter(sort_by).is_some())
    }
}

impl<T> FromIterator<Column<T>> for Columns<T> {
    fn from_iter<I: IntoIterator<Item = Column<T>>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
