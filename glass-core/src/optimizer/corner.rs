//! Starting corners for the free-space allocator.

use crate::model::StockSheet;
use serde::{Deserialize, Serialize};

/// Sheet corner the allocator packs from.
///
/// Free rectangles carry signed extents: a negative width grows to the left of
/// its anchor, a negative height grows downward. Each corner fixes those signs
/// for a whole placement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Corner {
    /// All corners, in search order.
    pub const ALL: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopLeft,
        Corner::TopRight,
    ];

    /// Direction free space extends along X from an anchor.
    #[inline]
    pub fn x_sign(self) -> f64 {
        match self {
            Corner::BottomLeft | Corner::TopLeft => 1.0,
            Corner::BottomRight | Corner::TopRight => -1.0,
        }
    }

    /// Direction free space extends along Y from an anchor.
    #[inline]
    pub fn y_sign(self) -> f64 {
        match self {
            Corner::BottomLeft | Corner::BottomRight => 1.0,
            Corner::TopLeft | Corner::TopRight => -1.0,
        }
    }

    /// Position of this corner on the stock sheet.
    pub fn origin(self, stock: &StockSheet) -> (f64, f64) {
        let x = if self.x_sign() > 0.0 { 0.0 } else { stock.width };
        let y = if self.y_sign() > 0.0 { 0.0 } else { stock.height };
        (x, y)
    }

    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
        }
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_origins() {
        let stock = StockSheet::new(321.0, 225.0).unwrap();
        assert_eq!(Corner::BottomLeft.origin(&stock), (0.0, 0.0));
        assert_eq!(Corner::BottomRight.origin(&stock), (321.0, 0.0));
        assert_eq!(Corner::TopLeft.origin(&stock), (0.0, 225.0));
        assert_eq!(Corner::TopRight.origin(&stock), (321.0, 225.0));
    }

    #[test]
    fn test_corner_signs() {
        assert_eq!((Corner::BottomLeft.x_sign(), Corner::BottomLeft.y_sign()), (1.0, 1.0));
        assert_eq!((Corner::BottomRight.x_sign(), Corner::BottomRight.y_sign()), (-1.0, 1.0));
        assert_eq!((Corner::TopLeft.x_sign(), Corner::TopLeft.y_sign()), (1.0, -1.0));
        assert_eq!((Corner::TopRight.x_sign(), Corner::TopRight.y_sign()), (-1.0, -1.0));
    }

    #[test]
    fn test_corner_display() {
        assert_eq!(Corner::TopRight.to_string(), "top-right");
    }
}
