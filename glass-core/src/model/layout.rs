//! Optimizer results: one sheet's layout and the multi-sheet plan.

use super::{Panel, PlacedPanel, StockSheet};
use serde::{Deserialize, Serialize};

/// Placed panels for one stock sheet, in placement order, with their waste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Placed panels.
    pub placements: Vec<PlacedPanel>,
    /// Percentage of the sheet not covered by any panel.
    ///
    /// `+inf` when no layout was found for the requested panels.
    pub waste_percent: f64,
}

impl SheetLayout {
    /// Build a layout and compute its waste against `stock`.
    pub fn new(stock: &StockSheet, placements: Vec<PlacedPanel>) -> Self {
        let waste_percent = waste_percent(stock, &placements);
        Self {
            placements,
            waste_percent,
        }
    }

    /// Result for panels that could not be laid out on one sheet.
    pub fn unplaceable() -> Self {
        Self {
            placements: Vec::new(),
            waste_percent: f64::INFINITY,
        }
    }

    /// Result for an empty request.
    pub fn empty() -> Self {
        Self {
            placements: Vec::new(),
            waste_percent: 0.0,
        }
    }

    /// Whether a layout was found. False only for [`unplaceable`](Self::unplaceable).
    pub fn fits(&self) -> bool {
        self.waste_percent.is_finite()
    }

    /// Check if no panels are placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of placed panels.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Total area of the placed panels.
    pub fn used_area(&self) -> f64 {
        self.placements.iter().map(PlacedPanel::area).sum()
    }

    /// Sheet area not covered by panels.
    pub fn waste_area(&self, stock: &StockSheet) -> f64 {
        stock.area() - self.used_area()
    }
}

/// Waste of a set of placements, in percent of the stock area.
pub(crate) fn waste_percent(stock: &StockSheet, placements: &[PlacedPanel]) -> f64 {
    let used: f64 = placements.iter().map(PlacedPanel::area).sum();
    (stock.area() - used) / stock.area() * 100.0
}

/// Multi-sheet allocation result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CuttingPlan {
    /// One layout per stock sheet, in allocation order.
    pub sheets: Vec<SheetLayout>,
    /// Panels that fit on no sheet, even alone.
    pub unplaced: Vec<Panel>,
}

impl CuttingPlan {
    /// Number of stock sheets used.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Number of panels placed across all sheets.
    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(SheetLayout::len).sum()
    }

    /// Whether every requested panel was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Sum of per-sheet waste percentages.
    pub fn total_waste_percent(&self) -> f64 {
        self.sheets.iter().map(|s| s.waste_percent).sum()
    }

    /// Mean waste percentage across sheets, 0 when there are none.
    pub fn average_waste_percent(&self) -> f64 {
        if self.sheets.is_empty() {
            0.0
        } else {
            self.total_waste_percent() / self.sheets.len() as f64
        }
    }

    /// Total area of all placed panels.
    pub fn used_area(&self) -> f64 {
        self.sheets.iter().map(SheetLayout::used_area).sum()
    }
}
