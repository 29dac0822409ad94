//! Panel definition representing one requested glass piece.

use super::StockSheet;
use crate::config::DEFAULT_THICKNESS;
use serde::{Deserialize, Serialize};

/// A requested rectangular glass piece.
///
/// `width` and `height` are the dimensions as ordered and never change.
/// Only the `rotated` flag is toggled, and only on working copies inside
/// the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Requested width.
    pub width: f64,
    /// Requested height.
    pub height: f64,
    /// Glass thickness (mm). Used for pricing, ignored by the optimizer.
    pub thickness: f64,
    /// Whether width and height are swapped for placement.
    pub rotated: bool,
}

impl Panel {
    /// Create a new unrotated panel with the default thickness.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            thickness: DEFAULT_THICKNESS,
            rotated: false,
        }
    }

    /// Create a new unrotated panel with an explicit thickness.
    pub fn with_thickness(width: f64, height: f64, thickness: f64) -> Self {
        Self {
            thickness,
            ..Self::new(width, height)
        }
    }

    /// Width and height as placed: `(height, width)` when rotated.
    #[inline]
    pub fn effective_dimensions(&self) -> (f64, f64) {
        if self.rotated {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Flip the rotation flag.
    pub fn rotate(&mut self) {
        self.rotated = !self.rotated;
    }

    /// Panel area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Length of the longer edge.
    pub fn max_edge(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Length of the shorter edge.
    pub fn min_edge(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Sum of both edge lengths (half the perimeter).
    pub fn perimeter(&self) -> f64 {
        self.width + self.height
    }

    /// Check that both dimensions are positive finite numbers.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Check if the panel fits on an empty stock sheet in either orientation.
    pub fn fits_within(&self, stock: &StockSheet) -> bool {
        (self.width <= stock.width && self.height <= stock.height)
            || (self.height <= stock.width && self.width <= stock.height)
    }

    /// Get display dimensions (width x height).
    pub fn dimensions_string(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}
