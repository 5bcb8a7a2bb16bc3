use serde_json::Value;

use crate::ids::{HomeDetailsId, HomeId};

/// Extended details for a single home.
///
/// One row per home at most; `home_id` always references a valid, unique
/// owner. `photo_gallery` order is display order and duplicates are
/// permitted. `facts` is a free-form name → value map (numbers, strings,
/// booleans) stored as jsonb.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomeDetails {
    pub id: HomeDetailsId,
    pub home_id: HomeId,
    pub photo_gallery: Vec<String>,
    pub whats_special: Vec<String>,
    pub facts: serde_json::Map<String, Value>,
}
