//! Stateless slicing of ordered collections into fixed-size pages.
//!
//! The caller owns the current page and passes it in on every call, either as
//! a bare number or wrapped in [`PageState`].

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::types::ItemsPerPage;

/// Pages shown on each side of the current page in label lists.
pub const DEFAULT_LABEL_DELTA: usize = 2;

/// Entry of a page-label list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    /// Stands for two or more elided pages.
    Ellipsis,
}

impl Serialize for PageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLabel::Page(page) => serializer.serialize_u64(*page as u64),
            PageLabel::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Number of pages needed for `total_items`; zero for an empty collection.
pub fn total_pages(total_items: usize, items_per_page: ItemsPerPage) -> usize {
    total_items.div_ceil(items_per_page.get())
}

/// One page of a borrowed collection.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<'a, T> {
    pub current_items: &'a [T],
    pub current_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    /// Disables the "jump to last page" affordance.
    pub is_last_page: bool,
}

/// Slices page `current_page` (1-based) out of `data`.
///
/// Requests outside `1..=total_pages` yield an empty slice; clamp with
/// [`go_to_page`] first.
pub fn paginate<T>(
    data: &[T],
    current_page: usize,
    items_per_page: ItemsPerPage,
) -> PageResult<'_, T> {
    let total_items = data.len();
    let total_pages = total_pages(total_items, items_per_page);

    let current_items: &[T] = if (1..=total_pages).contains(&current_page) {
        let per_page = items_per_page.get();
        let start = (current_page - 1) * per_page;
        let end = start.saturating_add(per_page).min(total_items);
        &data[start..end]
    } else {
        &[]
    };

    PageResult {
        current_items,
        current_page,
        total_items,
        total_pages,
        has_next_page: current_page < total_pages,
        has_previous_page: current_page > 1,
        is_last_page: current_page >= total_pages,
    }
}

/// Clamps `requested` into `1..=total_pages`. The floor stays 1 for an empty
/// collection.
pub fn go_to_page(requested: usize, total_items: usize, items_per_page: ItemsPerPage) -> usize {
    let last = total_pages(total_items, items_per_page).max(1);
    requested.clamp(1, last)
}

pub fn next_page(current_page: usize, total_items: usize, items_per_page: ItemsPerPage) -> usize {
    go_to_page(current_page.saturating_add(1), total_items, items_per_page)
}

pub fn previous_page(
    current_page: usize,
    total_items: usize,
    items_per_page: ItemsPerPage,
) -> usize {
    go_to_page(current_page.saturating_sub(1), total_items, items_per_page)
}

pub fn first_page(total_items: usize, items_per_page: ItemsPerPage) -> usize {
    go_to_page(1, total_items, items_per_page)
}

pub fn last_page(total_items: usize, items_per_page: ItemsPerPage) -> usize {
    go_to_page(
        total_pages(total_items, items_per_page),
        total_items,
        items_per_page,
    )
}

/// Builds the page numbers to display around `current_page`.
///
/// Always contains the first and last page and every page within `delta` of
/// the current one. A single skipped page is shown as itself, longer gaps
/// collapse into one [`PageLabel::Ellipsis`]. Empty when there is at most one
/// page.
pub fn build_page_labels(current_page: usize, total_pages: usize, delta: usize) -> Vec<PageLabel> {
    if total_pages <= 1 {
        return vec![];
    }

    let low = current_page.saturating_sub(delta).max(1);
    let high = current_page.saturating_add(delta).min(total_pages);

    let mut included = vec![1];
    included.extend((low..=high).filter(|&page| page != 1 && page != total_pages));
    included.push(total_pages);

    let mut labels = Vec::with_capacity(included.len() + 2);
    let mut previous: Option<usize> = None;

    for page in included {
        if let Some(prev) = previous {
            match page - prev {
                2 => labels.push(PageLabel::Page(prev + 1)),
                gap if gap > 2 => labels.push(PageLabel::Ellipsis),
                _ => {}
            }
        }
        labels.push(PageLabel::Page(page));
        previous = Some(page);
    }

    labels
}

/// Caller-owned pagination state threaded through the free functions.
///
/// Changing the page size does not re-clamp the current page; call
/// [`PageState::go_to_page`] afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: ItemsPerPage,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(ItemsPerPage::default())
    }
}

impl PageState {
    pub fn new(items_per_page: ItemsPerPage) -> Self {
        Self {
            current_page: 1,
            items_per_page,
        }
    }

    pub fn paginate<'a, T>(&self, data: &'a [T]) -> PageResult<'a, T> {
        paginate(data, self.current_page, self.items_per_page)
    }

    pub fn go_to_page(self, requested: usize, total_items: usize) -> Self {
        Self {
            current_page: go_to_page(requested, total_items, self.items_per_page),
            ..self
        }
    }

    pub fn next_page(self, total_items: usize) -> Self {
        Self {
            current_page: next_page(self.current_page, total_items, self.items_per_page),
            ..self
        }
    }

    pub fn previous_page(self, total_items: usize) -> Self {
        Self {
            current_page: previous_page(self.current_page, total_items, self.items_per_page),
            ..self
        }
    }

    pub fn first_page(self, total_items: usize) -> Self {
        Self {
            current_page: first_page(total_items, self.items_per_page),
            ..self
        }
    }

    pub fn last_page(self, total_items: usize) -> Self {
        Self {
            current_page: last_page(total_items, self.items_per_page),
            ..self
        }
    }

    pub fn with_items_per_page(self, items_per_page: ItemsPerPage) -> Self {
        Self {
            items_per_page,
            ..self
        }
    }
}

/// Owned page payload handed to renderers.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageLabel>,
    pub page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub is_last_page: bool,
}

impl<T: Clone> Paginated<T> {
    pub fn new(result: PageResult<'_, T>, delta: usize) -> Self {
        let pages = build_page_labels(result.current_page, result.total_pages, delta);

        Self {
            items: result.current_items.to_vec(),
            pages,
            page: result.current_page,
            total_items: result.total_items,
            total_pages: result.total_pages,
            has_next_page: result.has_next_page,
            has_previous_page: result.has_previous_page,
            is_last_page: result.is_last_page,
        }
    }
}
