//! Glass catalog and job pricing.

mod catalog;
mod quote;

pub use catalog::{Catalog, Glass, GlassCategory};
pub use quote::{quote, PriceQuote};
