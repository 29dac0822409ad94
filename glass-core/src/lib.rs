//! glass-core - Core library for glass cutting layouts and price quotes.
//!
//! This library lays out rectangular glass panels on stock sheets, reports
//! how much of each sheet is wasted, and prices the job.
//!
//! # Example
//!
//! ```
//! use glass_core::{parse_dimensions, CuttingOptimizer, Panel, StockSheet};
//!
//! let stock = StockSheet::new(321.0, 225.0).unwrap();
//! let panels: Vec<Panel> = parse_dimensions("100x50-200x30")
//!     .unwrap()
//!     .into_iter()
//!     .map(|(w, h)| Panel::new(w, h))
//!     .collect();
//!
//! let plan = CuttingOptimizer::new(stock).optimize_multiple_sheets(&panels);
//! assert_eq!(plan.sheet_count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod optimizer;
pub mod parser;
pub mod pricing;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use config::{OptimizerConfig, RotationPolicy, Unit};
pub use error::{QuoteError, Result};
pub use model::{CuttingPlan, Panel, PlacedPanel, SheetLayout, StockSheet};
pub use optimizer::{Corner, CuttingOptimizer, SortStrategy};
pub use parser::{parse_dimensions, parse_stock};
pub use pricing::{quote, Catalog, Glass, PriceQuote};
pub use report::QuoteReport;
pub use validation::{validate_plan, validate_request, ValidationResult};

/// Panels for a list of `(width, height)` pairs, all of one thickness.
pub fn panels_from_dimensions(dimensions: &[(f64, f64)], thickness: f64) -> Vec<Panel> {
    dimensions
        .iter()
        .map(|&(width, height)| Panel::with_thickness(width, height, thickness))
        .collect()
}

/// Quote a dimension string end to end.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Parse the dimension string into panels of `thickness`
/// 2. Validate the panels against the stock sheet
/// 3. Lay the panels out over as many sheets as needed
/// 4. Price the job when a glass type is given, charging for offcut waste
///    when `include_waste` is set
pub fn quote_dimensions(
    dimensions: &str,
    stock: StockSheet,
    unit: Unit,
    thickness: f64,
    config: OptimizerConfig,
    glass: Option<&Glass>,
    include_waste: bool,
) -> Result<QuoteReport> {
    let panels = panels_from_dimensions(&parse_dimensions(dimensions)?, thickness);
    tracing::info!("Parsed {} panel(s)", panels.len());

    validation::quick_validate(&stock, &panels)?;

    let optimizer = CuttingOptimizer::with_config(stock, config)?;
    let plan = optimizer.optimize_multiple_sheets(&panels);

    let check = validation::validate_plan(&stock, &plan);
    if !check.passed {
        return Err(QuoteError::ValidationFailed {
            message: check.errors.join("; "),
        });
    }

    let report = QuoteReport::new(&stock, unit, &panels, &plan);

    Ok(match glass {
        Some(glass) => {
            let area = report::requested_area_m2(&panels, unit);
            let waste = plan.average_waste_percent();
            report.with_price(quote(glass, area, waste, include_waste))
        }
        None => report,
    })
}
