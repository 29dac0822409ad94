//! `WIDTHxHEIGHT` dimension strings.
//!
//! A request lists panels as `100x50-200x30-80.5x90.2`. Decimal commas are
//! accepted (`80,5x90`) and whitespace anywhere is ignored.

use crate::error::{QuoteError, Result};
use crate::model::StockSheet;

/// Separator between panels in a request.
const PANEL_SEPARATOR: char = '-';

/// Separator between width and height.
const DIMENSION_SEPARATOR: char = 'x';

/// Normalize decimal commas, case and whitespace.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c.to_ascii_lowercase() })
        .collect()
}

/// Parse one non-negative finite number.
fn parse_number(value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(QuoteError::InvalidNumber {
            value: value.to_string(),
        }),
    }
}

/// Parse a single `WIDTHxHEIGHT` pair.
pub fn parse_dimension_pair(part: &str) -> Result<(f64, f64)> {
    let normalized = normalize(part);
    let (width, height) = normalized
        .split_once(DIMENSION_SEPARATOR)
        .ok_or_else(|| QuoteError::InvalidDimension {
            part: part.to_string(),
        })?;

    if width.is_empty() || height.is_empty() {
        return Err(QuoteError::InvalidDimension {
            part: part.to_string(),
        });
    }

    Ok((parse_number(width)?, parse_number(height)?))
}

/// Parse a `-`-separated list of `WIDTHxHEIGHT` pairs.
///
/// Empty entries (`100x50--200x30`, trailing `-`) are skipped. Any other
/// malformed entry fails the whole list.
pub fn parse_dimensions(text: &str) -> Result<Vec<(f64, f64)>> {
    let normalized = normalize(text);
    let dimensions = normalized
        .split(PANEL_SEPARATOR)
        .filter(|part| !part.is_empty())
        .map(parse_dimension_pair)
        .collect::<Result<Vec<_>>>()?;

    if dimensions.is_empty() {
        return Err(QuoteError::NoDimensions {
            input: text.to_string(),
        });
    }

    Ok(dimensions)
}

/// Parse a stock sheet size such as `321x225`.
pub fn parse_stock(text: &str) -> Result<StockSheet> {
    let (width, height) = parse_dimension_pair(text)?;
    StockSheet::new(width, height)
}
