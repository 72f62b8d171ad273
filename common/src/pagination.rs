//! Abstractions for page-numbered pagination.

/// Default number of page buttons shown around the current page.
pub const DEFAULT_WINDOW_SIZE: u32 = 5;

/// A single page of items along with its [`PageInfo`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Page<T> {
    /// Items on this [`Page`].
    pub items: Vec<T>,

    /// [`PageInfo`] of this [`Page`].
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new [`Page`] out of the provided `items` and [`PageInfo`].
    ///
    /// The [`PageInfo`] is [normalized](PageInfo::normalized).
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = T>, info: PageInfo) -> Self {
        Self {
            items: items.into_iter().collect(),
            info: info.normalized(),
        }
    }

    /// Returns the [`DisplayItem`]s to render for this [`Page`].
    #[must_use]
    pub fn window(&self, size: u32) -> Vec<DisplayItem> {
        window(self.info.current_page, self.info.total_pages, size)
    }
}

/// Information about a [`Page`] as reported by its source.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct PageInfo {
    /// Number of the current page, starting from `1`.
    pub current_page: u32,

    /// Total number of pages.
    pub total_pages: u32,

    /// Total number of items across all pages.
    pub total_count: u64,

    /// Maximum number of items on a single page.
    pub items_per_page: u32,
}

impl PageInfo {
    /// Returns this [`PageInfo`] with its invariants restored:
    /// - `current_page`, `total_pages` and `items_per_page` are at least `1`;
    /// - `current_page` never exceeds `total_pages`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let total_pages = self.total_pages.max(1);
        Self {
            current_page: self.current_page.clamp(1, total_pages),
            total_pages,
            total_count: self.total_count,
            items_per_page: self.items_per_page.max(1),
        }
    }

    /// Indicates whether there is a page before the current one.
    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Indicates whether there is a page after the current one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Element of a rendered pagination control.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DisplayItem {
    /// Button leading to the previous page.
    ///
    /// Disabled when `target` is [`None`].
    Prev {
        /// Page this button leads to, if any.
        target: Option<u32>,
    },

    /// Button leading to the page with the given number.
    Page(u32),

    /// Gap between non-adjacent page buttons.
    Ellipsis,

    /// Button leading to the next page.
    ///
    /// Disabled when `target` is [`None`].
    Next {
        /// Page this button leads to, if any.
        target: Option<u32>,
    },
}

impl DisplayItem {
    /// Returns the page this [`DisplayItem`] leads to, if it's clickable.
    #[must_use]
    pub const fn target(&self) -> Option<u32> {
        match *self {
            Self::Prev { target } | Self::Next { target } => target,
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }

    /// Indicates whether this [`DisplayItem`] can be clicked.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.target().is_some()
    }
}

/// Computes the pagination controls for the `current` page out of `total`
/// pages, showing at most `size` consecutive page buttons.
///
/// The window is centered on the `current` page and shifted to keep its full
/// width near the edges. The first and the last pages are always reachable,
/// with an [`DisplayItem::Ellipsis`] marking any gap.
///
/// Returns nothing when there is only one page, as no controls are needed.
#[must_use]
pub fn window(current: u32, total: u32, size: u32) -> Vec<DisplayItem> {
    if total <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let size = size.clamp(1, total);

    let mut start = current.saturating_sub(size / 2).max(1);
    let end = start.saturating_add(size - 1).min(total);
    if end - start + 1 < size {
        start = end.saturating_add(1).saturating_sub(size).max(1);
    }

    let mut items = Vec::with_capacity(size as usize + 6);
    items.push(DisplayItem::Prev {
        target: (current > 1).then(|| current - 1),
    });
    if start > 1 {
        items.push(DisplayItem::Page(1));
        if start > 2 {
            items.push(DisplayItem::Ellipsis);
        }
    }
    items.extend((start..=end).map(DisplayItem::Page));
    if end < total {
        if end < total - 1 {
            items.push(DisplayItem::Ellipsis);
        }
        items.push(DisplayItem::Page(total));
    }
    items.push(DisplayItem::Next {
        target: (current < total).then(|| current + 1),
    });
    items
}

/// Defines pagination types.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_pagination {
    ($node:ty) => {
        #[doc = "A [`Page`] of [`$node`]s."]
        pub type Page = $crate::pagination::Page<$node>;

        #[doc = "An information about a [`Page`]."]
        pub type PageInfo = $crate::pagination::PageInfo;
    };
}
