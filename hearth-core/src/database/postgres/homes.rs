use async_trait::async_trait;
use hearth_model::{Home, HomeDetails, HomeDetailsId, HomeId, HomeWithDetails};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::database::ports::homes::{HomePage, HomesReadPort};
use crate::error::{ListingError, Result};
use crate::query::CatalogQuery;

const HOME_COLUMNS: &str = "id, address, cost, bedrooms, bathrooms, \
     livable_area_size, lot_size, overview, home_type, year_built, \
     main_img_url, created_at, updated_at";

/// PostgreSQL-backed read access to the home collection.
#[derive(Clone, Debug)]
pub struct PostgresHomesRepository {
    pool: PgPool,
}

impl PostgresHomesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl HomesReadPort for PostgresHomesRepository {
    async fn list(&self, query: &CatalogQuery) -> Result<HomePage> {
        // The ORDER BY clause comes from the closed SortKey enum, never
        // from request input; the filter is always a bound parameter
        // matched with strpos so it stays a literal substring.
        let mut sql = format!("SELECT {HOME_COLUMNS} FROM homes");
        if query.filter.is_some() {
            sql.push_str(" WHERE strpos(address, $1) > 0");
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(query.sort.order_clause());
        sql.push_str(&format!(
            " LIMIT {} OFFSET {}",
            query.page.size,
            query.page.offset()
        ));

        let mut rows_query = sqlx::query(&sql);
        if let Some(filter) = &query.filter {
            rows_query = rows_query.bind(filter);
        }
        let rows = rows_query
            .fetch_all(self.pool())
            .await
            .map_err(|e| ListingError::Storage(format!("home listing query failed: {e}")))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(row_to_home(&row)?);
        }

        let mut count_sql = String::from("SELECT COUNT(*) FROM homes");
        if query.filter.is_some() {
            count_sql.push_str(" WHERE strpos(address, $1) > 0");
        }
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(filter) = &query.filter {
            count_query = count_query.bind(filter);
        }
        let total = count_query
            .fetch_one(self.pool())
            .await
            .map_err(|e| ListingError::Storage(format!("home count query failed: {e}")))?;

        Ok(HomePage {
            items,
            total: total as u64,
        })
    }

    async fn get_with_details(&self, id: HomeId) -> Result<Option<HomeWithDetails>> {
        let sql = "SELECT h.id, h.address, h.cost, h.bedrooms, h.bathrooms, \
                   h.livable_area_size, h.lot_size, h.overview, h.home_type, \
                   h.year_built, h.main_img_url, h.created_at, h.updated_at, \
                   d.id AS details_id, d.photo_gallery, d.whats_special, d.facts \
                   FROM homes h \
                   LEFT JOIN home_details d ON d.home_id = h.id \
                   WHERE h.id = $1";

        let row = sqlx::query(sql)
            .bind(id.as_i64())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| ListingError::Storage(format!("home lookup failed: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let home = row_to_home(&row)?;
        let details = match row.try_get::<Option<i64>, _>("details_id")? {
            Some(details_id) => {
                let facts_value: serde_json::Value = row.try_get("facts")?;
                Some(HomeDetails {
                    id: HomeDetailsId::new(details_id),
                    home_id: home.id,
                    photo_gallery: row.try_get("photo_gallery")?,
                    whats_special: row.try_get("whats_special")?,
                    facts: serde_json::from_value(facts_value)?,
                })
            }
            None => None,
        };

        Ok(Some(HomeWithDetails { home, details }))
    }
}

fn row_to_home(row: &PgRow) -> Result<Home> {
    Ok(Home {
        id: HomeId::new(row.try_get("id")?),
        address: row.try_get("address")?,
        cost: row.try_get("cost")?,
        bedrooms: row.try_get("bedrooms")?,
        bathrooms: row.try_get("bathrooms")?,
        livable_area_size: row.try_get("livable_area_size")?,
        lot_size: row.try_get("lot_size")?,
        overview: row.try_get("overview")?,
        home_type: row.try_get("home_type")?,
        year_built: row.try_get("year_built")?,
        main_img_url: row.try_get("main_img_url")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
