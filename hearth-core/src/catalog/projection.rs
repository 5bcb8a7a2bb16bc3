//! Pure projection mappers from persisted records to output views.

use hearth_model::{Home, HomeCard, HomeDetailView, HomeDetails};

/// Shapes a home into the summary card used by list responses.
pub fn to_card(home: &Home) -> HomeCard {
    HomeCard {
        id: home.id,
        address: home.address.clone(),
        cost: home.cost,
        bedrooms: home.bedrooms,
        bathrooms: home.bathrooms,
        lot_size: home.lot_size.clone(),
        livable_area_size: home.livable_area_size.clone(),
        main_img_url: home.main_img_url.clone(),
        overview: home.overview.clone(),
        year_built: home.year_built,
    }
}

/// Shapes a home plus its extended details into the full detail view.
///
/// Every field shared with the home record is read from the `home`
/// argument; the details row contributes only the gallery, highlights and
/// facts. The details row's own owner reference is deliberately ignored.
pub fn to_detail(home: &Home, details: &HomeDetails) -> HomeDetailView {
    HomeDetailView {
        id: home.id,
        address: home.address.clone(),
        cost: home.cost,
        bedrooms: home.bedrooms,
        bathrooms: home.bathrooms,
        lot_size: home.lot_size.clone(),
        livable_area_size: home.livable_area_size.clone(),
        main_img_url: home.main_img_url.clone(),
        overview: home.overview.clone(),
        year_built: home.year_built,
        photo_gallery: details.photo_gallery.clone(),
        whats_special: details.whats_special.clone(),
        facts: details.facts.clone(),
    }
}
