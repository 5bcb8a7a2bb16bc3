//! Public catalog operations: browse (list) and detail resolution.

pub mod projection;

use std::sync::Arc;

use hearth_model::{HomeDetailView, HomeCard, HomeId, PageEnvelope, PageRequest};
use tracing::error;

use crate::database::ports::homes::HomesReadPort;
use crate::error::{ListingError, Result};
use crate::query::CatalogQuery;

/// Read-only service over the home collection.
///
/// Stateless; every call normalizes its own plan, so concurrent requests
/// need no coordination.
#[derive(Clone)]
pub struct CatalogService {
    homes: Arc<dyn HomesReadPort>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

impl CatalogService {
    pub fn new(homes: Arc<dyn HomesReadPort>) -> Self {
        Self { homes }
    }

    /// Retrieves one page of summary cards with optional filtering and
    /// sorting, wrapped in the pagination envelope.
    pub async fn browse(
        &self,
        raw_filter: Option<&str>,
        raw_sort_by: Option<&str>,
        page: PageRequest,
    ) -> Result<PageEnvelope<HomeCard>> {
        let query = CatalogQuery::normalize(raw_filter, raw_sort_by, page);
        let listed = self.homes.list(&query).await?;
        let cards = listed.items.iter().map(projection::to_card).collect();
        Ok(PageEnvelope::wrap(cards, page, listed.total))
    }

    /// Resolves the full detail view for one home.
    ///
    /// An unknown identifier is a client-visible not-found; a home that
    /// exists without its extended-details row is a data-integrity fault
    /// and is never papered over with an empty view.
    pub async fn detail(&self, id: HomeId) -> Result<HomeDetailView> {
        let Some(aggregate) = self.homes.get_with_details(id).await? else {
            return Err(ListingError::HomeNotFound(id));
        };
        let Some(details) = aggregate.details else {
            error!("home {id} resolved for detail view without a details record");
            return Err(ListingError::DetailsMissing(id));
        };
        Ok(projection::to_detail(&aggregate.home, &details))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use hearth_model::{Home, HomeDetails, HomeDetailsId, HomeWithDetails};
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    use super::*;
    use crate::database::ports::homes::{HomePage, MockHomesReadPort};
    use crate::query::SortKey;

    fn fixture_home(id: i64, address: &str, cost: i64) -> Home {
        let now = Utc::now();
        Home {
            id: HomeId::new(id),
            address: address.to_string(),
            cost: Decimal::from(cost),
            bedrooms: Decimal::from(3),
            bathrooms: Decimal::from(2),
            livable_area_size: "1,500 sqft".to_string(),
            lot_size: "0.2 acres".to_string(),
            overview: "overview".to_string(),
            home_type: "Single family".to_string(),
            year_built: Some(1990),
            main_img_url: "https://img.example/main.jpg".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn browse_normalizes_the_plan_before_hitting_storage() {
        let mut homes = MockHomesReadPort::new();
        let expected = CatalogQuery {
            filter: Some("Main".to_string()),
            sort: SortKey::Cost,
            page: PageRequest::new(0, 10),
        };
        homes
            .expect_list()
            .with(eq(expected))
            .once()
            .returning(|_| {
                Ok(HomePage {
                    items: vec![
                        fixture_home(2, "99 Main St", 300_000),
                        fixture_home(1, "12 Main St", 500_000),
                    ],
                    total: 2,
                })
            });

        let service = CatalogService::new(Arc::new(homes));
        let envelope = service
            .browse(Some("Main"), Some("cost"), PageRequest::new(0, 10))
            .await
            .unwrap();

        let ids: Vec<i64> = envelope.items.iter().map(|c| c.id.as_i64()).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(envelope.total_elements, 2);
        assert_eq!(envelope.total_pages, 1);
        assert!(envelope.is_first);
        assert!(envelope.is_last);
    }

    #[tokio::test]
    async fn browse_with_no_matches_is_an_empty_page_not_an_error() {
        let mut homes = MockHomesReadPort::new();
        homes.expect_list().once().returning(|_| {
            Ok(HomePage {
                items: Vec::new(),
                total: 0,
            })
        });

        let service = CatalogService::new(Arc::new(homes));
        let envelope = service
            .browse(Some("Nowhere"), None, PageRequest::new(0, 10))
            .await
            .unwrap();
        assert!(envelope.items.is_empty());
        assert_eq!(envelope.total_elements, 0);
        assert_eq!(envelope.total_pages, 0);
    }

    #[tokio::test]
    async fn detail_of_unknown_home_is_not_found() {
        let mut homes = MockHomesReadPort::new();
        homes
            .expect_get_with_details()
            .with(eq(HomeId::new(404)))
            .once()
            .returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(homes));
        let err = service.detail(HomeId::new(404)).await.unwrap_err();
        assert!(matches!(err, ListingError::HomeNotFound(id) if id.as_i64() == 404));
    }

    #[tokio::test]
    async fn detail_without_details_row_is_an_integrity_fault() {
        let mut homes = MockHomesReadPort::new();
        homes.expect_get_with_details().once().returning(|_| {
            Ok(Some(HomeWithDetails {
                home: fixture_home(3, "1 Oak Ave", 700_000),
                details: None,
            }))
        });

        let service = CatalogService::new(Arc::new(homes));
        let err = service.detail(HomeId::new(3)).await.unwrap_err();
        assert!(matches!(err, ListingError::DetailsMissing(id) if id.as_i64() == 3));
    }

    #[tokio::test]
    async fn detail_joins_home_and_details_fields() {
        let mut homes = MockHomesReadPort::new();
        homes.expect_get_with_details().once().returning(|_| {
            let home = fixture_home(1, "12 Main St", 500_000);
            let details = HomeDetails {
                id: HomeDetailsId::new(11),
                home_id: home.id,
                photo_gallery: vec!["https://img.example/a.jpg".to_string()],
                whats_special: vec!["Corner lot".to_string()],
                facts: serde_json::Map::new(),
            };
            Ok(Some(HomeWithDetails {
                home,
                details: Some(details),
            }))
        });

        let service = CatalogService::new(Arc::new(homes));
        let view = service.detail(HomeId::new(1)).await.unwrap();
        assert_eq!(view.id.as_i64(), 1);
        assert_eq!(view.livable_area_size, "1,500 sqft");
        assert_eq!(view.whats_special, vec!["Corner lot".to_string()]);
    }
}
