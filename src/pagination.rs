//! Client-side paging over an in-memory collection.
//!
//! [`paginate`] slices one page, [`merge_incremental`] appends a page while
//! skipping keys already present, and [`Paginator`] tracks how far a
//! "load more" list has progressed.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationData {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub pagination: PaginationData,
}

/// Returns page `page` (1-indexed) of `items`.
///
/// Pages outside `1..=total_pages` are empty. A page size of zero is
/// treated as one.
pub fn paginate<T: Clone>(items: &[T], page: usize, items_per_page: usize) -> PaginatedResult<T> {
    let items_per_page = items_per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(items_per_page);

    let data = if page == 0 {
        Vec::new()
    } else {
        let start = (page - 1).saturating_mul(items_per_page);
        let end = start.saturating_add(items_per_page).min(total_items);
        items.get(start..end).map(<[T]>::to_vec).unwrap_or_default()
    };

    PaginatedResult {
        data,
        pagination: PaginationData {
            current_page: page,
            total_pages,
            total_items,
            items_per_page,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        },
    }
}

/// Appends the items of `incoming` whose key is not yet in `current`.
///
/// Existing items keep their positions; new items keep their relative order.
pub fn merge_incremental<T, K, F>(current: &[T], incoming: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen: HashSet<K> = current.iter().map(&key).collect();
    let mut merged = current.to_vec();
    merged.extend(
        incoming
            .iter()
            .filter(|item| seen.insert(key(*item)))
            .cloned(),
    );
    merged
}

/// Progress of an incrementally loaded list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator<T> {
    items_per_page: usize,
    current_page: usize,
    loaded: Vec<T>,
}

impl<T: Clone> Paginator<T> {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            items_per_page: items_per_page.max(1),
            current_page: 0,
            loaded: Vec::new(),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items(&self) -> &[T] {
        &self.loaded
    }

    pub fn total_loaded(&self) -> usize {
        self.loaded.len()
    }

    /// Starts over with the first page of `source`.
    pub fn reset<K, F>(&mut self, source: &[T], key: F)
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        self.current_page = 0;
        self.loaded.clear();
        self.load_more(source, key);
    }

    /// Appends the next page of `source`. Returns whether anything was added.
    pub fn load_more<K, F>(&mut self, source: &[T], key: F) -> bool
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let next_page = self.current_page + 1;
        let page = paginate(source, next_page, self.items_per_page);
        if page.data.is_empty() {
            return false;
        }

        let before = self.loaded.len();
        self.loaded = merge_incremental(&self.loaded, &page.data, key);
        self.current_page = next_page;
        self.loaded.len() > before
    }

    pub fn has_more(&self, source: &[T]) -> bool {
        self.loaded.len() < source.len()
    }
}
