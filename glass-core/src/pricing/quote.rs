//! Price calculation for a cutting job.

use super::Glass;
use crate::config::round2;
use serde::{Deserialize, Serialize};

/// Price breakdown for one glass type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Glass display name.
    pub glass_name: String,
    /// Billable panel area (m²), at least the glass's minimum area.
    pub area_m2: f64,
    /// Price of the billable area.
    pub area_price: f64,
    /// Offcut area charged on top (m²).
    pub waste_area_m2: f64,
    /// Price of the offcut area.
    pub waste_price: f64,
    /// Area price plus waste price.
    pub total_price: f64,
}

/// Price `requested_area_m2` of `glass`.
///
/// The billable area is floored at the glass's minimum area. When
/// `include_waste` is set, `waste_percent` of the requested area is charged
/// as well.
pub fn quote(
    glass: &Glass,
    requested_area_m2: f64,
    waste_percent: f64,
    include_waste: bool,
) -> PriceQuote {
    let area = requested_area_m2.max(glass.min_area);
    let area_price = area * glass.price_per_m2;

    let waste_area = if include_waste && waste_percent.is_finite() {
        requested_area_m2 * waste_percent / 100.0
    } else {
        0.0
    };
    let waste_price = waste_area * glass.price_per_m2;

    PriceQuote {
        glass_name: glass.name.clone(),
        area_m2: round2(area),
        area_price: round2(area_price),
        waste_area_m2: round2(waste_area),
        waste_price: round2(waste_price),
        total_price: round2(area_price + waste_price),
    }
}
