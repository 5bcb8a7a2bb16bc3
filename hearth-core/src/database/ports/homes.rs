use async_trait::async_trait;
use hearth_model::{Home, HomeId, HomeWithDetails};

use crate::error::Result;
use crate::query::CatalogQuery;

/// One window of the filtered catalog plus the filter-wide row count.
///
/// `total` is independent of the pagination window so callers can compute
/// total pages without a second round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct HomePage {
    pub items: Vec<Home>,
    pub total: u64,
}

/// Read access to the home collection.
///
/// `list` must observe the plan exactly: literal substring filter on the
/// address, ascending order by the plan's sort key with the identifier
/// tie-break, then the page window. A filter matching nothing yields an
/// empty page with `total` 0, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HomesReadPort: Send + Sync {
    async fn list(&self, query: &CatalogQuery) -> Result<HomePage>;

    /// Looks up one home together with its optional extended-details row
    /// in a single eager join. A missing details row is a legal result
    /// here; detail-view callers decide whether that is a fault.
    async fn get_with_details(&self, id: HomeId) -> Result<Option<HomeWithDetails>>;
}
