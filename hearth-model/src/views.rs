use rust_decimal::Decimal;
use serde_json::Value;

use crate::ids::HomeId;

/// Summary projection of a home, used in catalog list responses.
///
/// Carries only fields read from the home record itself; the extended
/// details row is never consulted for cards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomeCard {
    pub id: HomeId,
    pub address: String,
    pub cost: Decimal,
    pub bedrooms: Decimal,
    pub bathrooms: Decimal,
    pub lot_size: String,
    pub livable_area_size: String,
    pub main_img_url: String,
    pub overview: String,
    pub year_built: Option<i32>,
}

/// Full projection of a home, used in single-listing responses.
///
/// Requires the extended-details record; a home without one cannot be
/// rendered as a detail page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomeDetailView {
    pub id: HomeId,
    pub address: String,
    pub cost: Decimal,
    pub bedrooms: Decimal,
    pub bathrooms: Decimal,
    pub lot_size: String,
    pub livable_area_size: String,
    pub main_img_url: String,
    pub overview: String,
    pub year_built: Option<i32>,
    pub photo_gallery: Vec<String>,
    pub whats_special: Vec<String>,
    pub facts: serde_json::Map<String, Value>,
}
