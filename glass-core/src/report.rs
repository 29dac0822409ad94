//! Serializable quote report.

use crate::config::{round2, Unit};
use crate::error::Result;
use crate::model::{CuttingPlan, Panel, PlacedPanel, SheetLayout, StockSheet};
use crate::pricing::PriceQuote;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One stock sheet in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetReport {
    /// Placed panels.
    pub layout: Vec<PlacedPanel>,
    /// Waste of this sheet (percent).
    pub waste_percentage: f64,
    /// Panel area on this sheet (m²).
    pub used_area_m2: f64,
    /// Offcut area on this sheet (m²).
    pub waste_area_m2: f64,
}

impl SheetReport {
    fn new(stock: &StockSheet, unit: Unit, layout: &SheetLayout) -> Self {
        let factor = unit.to_m2_factor();
        Self {
            layout: layout.placements.clone(),
            waste_percentage: round2(layout.waste_percent),
            used_area_m2: round2(layout.used_area() * factor),
            waste_area_m2: round2(layout.waste_area(stock) * factor),
        }
    }
}

/// Everything a caller needs to present a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteReport {
    /// Stock sheet width.
    pub stock_width: f64,
    /// Stock sheet height.
    pub stock_height: f64,
    /// Unit of all lengths in the report.
    pub unit: Unit,
    /// Requested panels, in request order.
    pub panels: Vec<Panel>,
    /// Per-sheet layouts.
    pub sheets: Vec<SheetReport>,
    /// Panels that fit on no sheet.
    pub unplaced: Vec<Panel>,
    /// Total area of all requested panels (m²).
    pub total_area_m2: f64,
    /// Mean waste over the sheets (percent).
    pub average_waste_percent: f64,
    /// Price breakdown, when a glass type was chosen.
    pub price: Option<PriceQuote>,
}

impl QuoteReport {
    /// Build a report for `panels` laid out as `plan`.
    pub fn new(stock: &StockSheet, unit: Unit, panels: &[Panel], plan: &CuttingPlan) -> Self {
        Self {
            stock_width: stock.width,
            stock_height: stock.height,
            unit,
            panels: panels.to_vec(),
            sheets: plan
                .sheets
                .iter()
                .map(|layout| SheetReport::new(stock, unit, layout))
                .collect(),
            unplaced: plan.unplaced.clone(),
            total_area_m2: round2(requested_area_m2(panels, unit)),
            average_waste_percent: round2(plan.average_waste_percent()),
            price: None,
        }
    }

    /// Attach a price breakdown.
    pub fn with_price(mut self, price: PriceQuote) -> Self {
        self.price = Some(price);
        self
    }

    /// Number of sheets in the report.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as JSON to `path`.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

/// Total area of the requested panels, in square metres.
pub fn requested_area_m2(panels: &[Panel], unit: Unit) -> f64 {
    panels.iter().map(Panel::area).sum::<f64>() * unit.to_m2_factor()
}
