//! Cutting-layout optimizer.
//!
//! [`CuttingOptimizer::optimize`] searches sort orders, rotation patterns and
//! starting corners for the least wasteful single-sheet layout.
//! [`CuttingOptimizer::optimize_multiple_sheets`] spreads a request over as
//! many sheets as it needs.

mod allocator;
mod corner;
mod multi_sheet;
mod search;
mod strategy;

pub use allocator::{place_panels, FreeRect};
pub use corner::Corner;
pub use strategy::SortStrategy;

use crate::config::OptimizerConfig;
use crate::error::Result;
use crate::model::StockSheet;

/// Layout optimizer for one stock sheet size.
///
/// Holds no state between calls; every call works on its own copies of the
/// panels.
#[derive(Debug, Clone)]
pub struct CuttingOptimizer {
    stock: StockSheet,
    config: OptimizerConfig,
}

impl CuttingOptimizer {
    /// Create an optimizer with the default configuration.
    pub fn new(stock: StockSheet) -> Self {
        tracing::debug!(
            "Cutting optimizer for {}x{} stock sheets",
            stock.width,
            stock.height
        );
        Self {
            stock,
            config: OptimizerConfig::default(),
        }
    }

    /// Create an optimizer with a custom configuration.
    pub fn with_config(stock: StockSheet, config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { stock, config })
    }
}
