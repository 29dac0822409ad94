//! Parsing of textual panel and stock dimensions.

mod dimensions;

pub use dimensions::{parse_dimension_pair, parse_dimensions, parse_stock};
