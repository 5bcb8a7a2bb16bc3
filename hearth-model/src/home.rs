use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::details::HomeDetails;
use crate::ids::HomeId;

/// A listed home as persisted in the catalog.
///
/// Records are created and maintained by the administrative side; the
/// public catalog only reads them. `livable_area_size` and `lot_size`
/// carry embedded units ("1,850 sqft", "0.3 acres") and are deliberately
/// not parsed into numerics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Home {
    pub id: HomeId,
    pub address: String,
    pub cost: Decimal,
    /// Non-negative; half bedrooms are legal ("3.5").
    pub bedrooms: Decimal,
    /// Non-negative; half bathrooms are legal ("2.5").
    pub bathrooms: Decimal,
    pub livable_area_size: String,
    pub lot_size: String,
    pub overview: String,
    pub home_type: String,
    pub year_built: Option<i32>,
    pub main_img_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A home together with its optional extended-details record, as produced
/// by the eager one-row join in the catalog engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomeWithDetails {
    pub home: Home,
    pub details: Option<HomeDetails>,
}
