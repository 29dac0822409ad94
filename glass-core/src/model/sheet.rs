//! Stock sheet and placed panel geometry.

use crate::config::EPS;
use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};

/// The raw glass sheet panels are cut from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockSheet {
    /// Sheet width.
    pub width: f64,
    /// Sheet height.
    pub height: f64,
}

impl StockSheet {
    /// Create a stock sheet, rejecting non-positive dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(QuoteError::InvalidStock { width, height });
        }
        Ok(Self { width, height })
    }

    /// Sheet area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check that a placed panel lies inside the sheet.
    pub fn contains(&self, placed: &PlacedPanel) -> bool {
        placed.x >= -EPS
            && placed.y >= -EPS
            && placed.x_max() <= self.width + EPS
            && placed.y_max() <= self.height + EPS
    }
}

/// A panel's effective bounding box at its position on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedPanel {
    /// X origin position on sheet.
    pub x: f64,
    /// Y origin position on sheet.
    pub y: f64,
    /// Placed width.
    pub width: f64,
    /// Placed height.
    pub height: f64,
    /// Whether the panel was turned relative to its requested dimensions.
    pub rotated: bool,
}

impl PlacedPanel {
    /// Get the right edge X coordinate.
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    /// Get the top edge Y coordinate.
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    /// Placed area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Strict axis-aligned intersection. Shared edges do not overlap.
    pub fn overlaps(&self, other: &PlacedPanel) -> bool {
        self.x < other.x_max()
            && self.x_max() > other.x
            && self.y < other.y_max()
            && self.y_max() > other.y
    }
}
