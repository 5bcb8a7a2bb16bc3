//! Query normalization.
//!
//! Raw request parameters are loosely typed: the filter is free text and
//! the sort field arrives as an arbitrary string. Normalization maps both
//! onto a closed, deterministic retrieval plan before anything touches the
//! storage layer. The whole surface is total; there is no error path.

use hearth_model::PageRequest;

/// The closed set of fields the catalog can be ordered by.
///
/// Anything outside this enum never reaches the storage layer; an
/// unrecognized sort name silently falls back to [`SortKey::Id`] rather
/// than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    Cost,
    Bedrooms,
    Bathrooms,
}

impl SortKey {
    /// Maps a raw `sortBy` parameter onto the closed set.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("cost") => SortKey::Cost,
            Some("bedrooms") => SortKey::Bedrooms,
            Some("bathrooms") => SortKey::Bathrooms,
            _ => SortKey::Id,
        }
    }

    /// Full ORDER BY clause for this key.
    ///
    /// Every non-identifier key carries the `id ASC` tie-break so that
    /// repeated calls with identical inputs observe one stable order even
    /// when sort-field values collide.
    pub fn order_clause(&self) -> &'static str {
        match self {
            SortKey::Id => "id ASC",
            SortKey::Cost => "cost ASC, id ASC",
            SortKey::Bedrooms => "bedrooms ASC, id ASC",
            SortKey::Bathrooms => "bathrooms ASC, id ASC",
        }
    }
}

/// A normalized, deterministic retrieval plan for the home catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Literal, case-sensitive address substring; `None` matches all.
    pub filter: Option<String>,
    pub sort: SortKey,
    pub page: PageRequest,
}

impl CatalogQuery {
    /// Normalizes raw request parameters into a plan.
    ///
    /// An absent or empty filter means "match everything". Page defaults
    /// are a transport concern; the page request arrives here as-is.
    pub fn normalize(
        raw_filter: Option<&str>,
        raw_sort_by: Option<&str>,
        page: PageRequest,
    ) -> Self {
        let filter = raw_filter
            .filter(|value| !value.is_empty())
            .map(str::to_owned);
        Self {
            filter,
            sort: SortKey::parse(raw_sort_by),
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_sort_names_map_to_their_keys() {
        assert_eq!(SortKey::parse(Some("cost")), SortKey::Cost);
        assert_eq!(SortKey::parse(Some("bedrooms")), SortKey::Bedrooms);
        assert_eq!(SortKey::parse(Some("bathrooms")), SortKey::Bathrooms);
    }

    #[test]
    fn unknown_sort_names_fall_back_to_id() {
        assert_eq!(SortKey::parse(None), SortKey::Id);
        assert_eq!(SortKey::parse(Some("")), SortKey::Id);
        assert_eq!(SortKey::parse(Some("price")), SortKey::Id);
        assert_eq!(SortKey::parse(Some("Cost")), SortKey::Id);
        assert_eq!(SortKey::parse(Some("id; DROP TABLE homes")), SortKey::Id);
    }

    #[test]
    fn every_non_id_key_carries_the_id_tie_break() {
        for key in [SortKey::Cost, SortKey::Bedrooms, SortKey::Bathrooms] {
            assert!(key.order_clause().ends_with(", id ASC"));
        }
        assert_eq!(SortKey::Id.order_clause(), "id ASC");
    }

    #[test]
    fn absent_and_empty_filters_match_everything() {
        let page = PageRequest::new(0, 10);
        assert_eq!(CatalogQuery::normalize(None, None, page).filter, None);
        assert_eq!(CatalogQuery::normalize(Some(""), None, page).filter, None);
    }

    #[test]
    fn whitespace_is_a_legal_literal_filter() {
        let page = PageRequest::new(0, 10);
        let query = CatalogQuery::normalize(Some(" "), None, page);
        assert_eq!(query.filter.as_deref(), Some(" "));
    }

    #[test]
    fn normalization_is_total_over_hostile_input() {
        let page = PageRequest::new(3, 7);
        let query = CatalogQuery::normalize(Some("Main%_'"), Some("bogus"), page);
        assert_eq!(query.filter.as_deref(), Some("Main%_'"));
        assert_eq!(query.sort, SortKey::Id);
        assert_eq!(query.page, page);
    }
}
