//! Data model types for glass cutting layouts.

mod layout;
mod panel;
mod sheet;

pub use layout::{CuttingPlan, SheetLayout};
pub use panel::Panel;
pub use sheet::{PlacedPanel, StockSheet};
