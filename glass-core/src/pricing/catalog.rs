//! Glass types and prices.

use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};

/// Default cutting fee per glass type.
const DEFAULT_CUTTING_FEE: f64 = 5.0;

/// Default minimum billable area (m²).
const DEFAULT_MIN_AREA: f64 = 0.1;

/// A group of glass types (float, mirror, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassCategory {
    /// Category identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// A priced glass type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glass {
    /// Glass identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Owning category.
    pub category_id: u32,
    /// Price per square metre.
    pub price_per_m2: f64,
    /// Cutting fee.
    pub cutting_fee: f64,
    /// Minimum billable area (m²).
    pub min_area: f64,
}

impl Glass {
    fn standard(id: u32, name: &str, category_id: u32, price_per_m2: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            category_id,
            price_per_m2,
            cutting_fee: DEFAULT_CUTTING_FEE,
            min_area: DEFAULT_MIN_AREA,
        }
    }
}

/// Categories and glass types available for quoting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Categories, in display order.
    pub categories: Vec<GlassCategory>,
    /// Glass types, in display order.
    pub glasses: Vec<Glass>,
}

impl Catalog {
    /// The standard price list.
    pub fn builtin() -> Self {
        let categories = [
            (1, "FLOAT"),
            (2, "PLANIBEL"),
            (3, "STOPSOL"),
            (4, "DRÁTENÉ SKLO"),
            (5, "ORNAMENT ČÍRY"),
            (6, "ZRKADLÁ ČÍRE"),
        ]
        .into_iter()
        .map(|(id, name)| GlassCategory {
            id,
            name: name.to_string(),
        })
        .collect();

        let glasses = vec![
            Glass::standard(1, "4 mm Float", 1, 7.74),
            Glass::standard(2, "6 mm Float", 1, 12.50),
            Glass::standard(3, "8 mm Float", 1, 16.56),
            Glass::standard(4, "10 mm Float", 1, 25.52),
            Glass::standard(5, "4 mm Planibel bronz + šedý", 2, 15.20),
            Glass::standard(6, "6 mm Planibel bronz + šedý", 2, 23.20),
            Glass::standard(7, "6mm Stopsol bronzový", 3, 32.65),
            Glass::standard(8, "6 mm Drátené sklo", 4, 24.05),
            Glass::standard(9, "Konfeta", 5, 15.20),
            Glass::standard(10, "4mm", 6, 14.50),
        ];

        Self {
            categories,
            glasses,
        }
    }

    /// Load a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// All categories.
    pub fn categories(&self) -> &[GlassCategory] {
        &self.categories
    }

    /// Glass types in one category.
    pub fn glasses_in(&self, category_id: u32) -> impl Iterator<Item = &Glass> {
        self.glasses
            .iter()
            .filter(move |g| g.category_id == category_id)
    }

    /// Find a glass type by ID.
    pub fn find(&self, glass_id: u32) -> Result<&Glass> {
        self.glasses
            .iter()
            .find(|g| g.id == glass_id)
            .ok_or(QuoteError::GlassNotFound { glass_id })
    }
}
