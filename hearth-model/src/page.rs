/// A caller-supplied pagination window: zero-based page index and a
/// positive page size. Defaults are a transport-layer concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Number of rows to skip before the window starts.
    pub const fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }
}

/// One page of results together with page metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageEnvelope<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub is_first: bool,
    pub is_last: bool,
}

impl<T> PageEnvelope<T> {
    /// Wraps one page of items with the derived page metadata.
    ///
    /// `total_pages` is `ceil(total / size)` and 0 for an empty result;
    /// a page at or past the final one reports `is_last`.
    pub fn wrap(items: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let size = request.size.max(1);
        let total_pages = total_elements.div_ceil(size as u64) as u32;
        let is_first = request.page == 0;
        let is_last = request.page as i64 >= total_pages as i64 - 1;
        Self {
            items,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
            is_first,
            is_last,
        }
    }
}
