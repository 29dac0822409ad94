//! First-fit free-rectangle allocator.
//!
//! Panels are placed in the order given. Each placement consumes the first
//! free rectangle that can hold the panel and splits the leftover into a strip
//! beside the panel (as tall as the panel) and a strip past it (the full width
//! of the consumed rectangle). Free rectangles never overlap each other or any
//! placed panel, and never leave the sheet.

use super::Corner;
use crate::config::EPS;
use crate::model::{Panel, PlacedPanel, StockSheet};

/// Unused space, anchored at one corner with signed extents.
///
/// Extent signs follow the pass's [`Corner`]: a rectangle anchored at
/// `(x, y)` with `width = -40` covers `x - 40 ..= x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeRect {
    /// Anchor X.
    pub x: f64,
    /// Anchor Y.
    pub y: f64,
    /// Signed extent along X.
    pub width: f64,
    /// Signed extent along Y.
    pub height: f64,
}

impl FreeRect {
    /// The whole sheet, anchored at `corner`.
    pub fn full_sheet(stock: &StockSheet, corner: Corner) -> Self {
        let (x, y) = corner.origin(stock);
        Self {
            x,
            y,
            width: corner.x_sign() * stock.width,
            height: corner.y_sign() * stock.height,
        }
    }

    /// Check if a `width` x `height` panel fits.
    #[inline]
    pub fn fits(&self, width: f64, height: f64) -> bool {
        width <= self.width.abs() + EPS && height <= self.height.abs() + EPS
    }

    /// Lower-left origin of a panel placed against this rectangle's anchor.
    pub fn placement_origin(&self, corner: Corner, width: f64, height: f64) -> (f64, f64) {
        let x = if corner.x_sign() < 0.0 {
            self.x - width
        } else {
            self.x
        };
        let y = if corner.y_sign() < 0.0 {
            self.y - height
        } else {
            self.y
        };
        (x, y)
    }

    /// Split the space left after placing a `width` x `height` panel.
    ///
    /// Returns the strip beside the panel and the strip past it. Either is
    /// `None` when nothing (or less than `EPS`) is left in that direction.
    /// `gap` is consumed between the panel and each strip when room allows.
    pub fn split(
        &self,
        corner: Corner,
        width: f64,
        height: f64,
        gap: f64,
    ) -> (Option<FreeRect>, Option<FreeRect>) {
        let (sx, sy) = (corner.x_sign(), corner.y_sign());
        let used_width = (width + gap).min(self.width.abs());
        let used_height = (height + gap).min(self.height.abs());

        let rest_width = self.width.abs() - used_width;
        let beside = (rest_width > EPS).then(|| FreeRect {
            x: self.x + sx * used_width,
            y: self.y,
            width: sx * rest_width,
            height: sy * height,
        });

        let rest_height = self.height.abs() - used_height;
        let past = (rest_height > EPS).then(|| FreeRect {
            x: self.x,
            y: self.y + sy * used_height,
            width: self.width,
            height: sy * rest_height,
        });

        (beside, past)
    }
}

/// Place every panel, in order, packing from `corner`.
///
/// Returns `None` as soon as one panel fits no free rectangle; the batch is
/// never partially placed.
pub fn place_panels(
    stock: &StockSheet,
    panels: &[Panel],
    corner: Corner,
    min_gap: f64,
) -> Option<Vec<PlacedPanel>> {
    let mut free = vec![FreeRect::full_sheet(stock, corner)];
    let mut layout = Vec::with_capacity(panels.len());

    for panel in panels {
        let (width, height) = panel.effective_dimensions();
        let slot = free.iter().position(|rect| rect.fits(width, height))?;
        let rect = free.remove(slot);

        let (x, y) = rect.placement_origin(corner, width, height);
        layout.push(PlacedPanel {
            x,
            y,
            width,
            height,
            rotated: panel.rotated,
        });

        let (beside, past) = rect.split(corner, width, height, min_gap);
        free.extend(beside);
        free.extend(past);
    }

    Some(layout)
}
