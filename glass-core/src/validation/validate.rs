//! Validation of quote requests and produced layouts.

use crate::error::{QuoteError, Result};
use crate::model::{CuttingPlan, Panel, PlacedPanel, SheetLayout, StockSheet};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate the panels requested for one stock sheet size.
pub fn validate_request(stock: &StockSheet, panels: &[Panel]) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if panels.is_empty() {
        result.add_warning("No panels requested");
    }

    for (idx, panel) in panels.iter().enumerate() {
        if !panel.is_valid() {
            result.add_error(format!(
                "Panel {}: Invalid dimensions ({}x{})",
                idx + 1,
                panel.width,
                panel.height
            ));
            continue;
        }

        if !panel.fits_within(stock) {
            result.add_error(format!(
                "Panel {}: {} does not fit the {}x{} stock sheet in either orientation",
                idx + 1,
                panel.dimensions_string(),
                stock.width,
                stock.height
            ));
        }

        if panel.thickness <= 0.0 {
            result.add_warning(format!("Panel {}: Missing or zero thickness", idx + 1));
        }
    }

    result
}

/// Validate a request, logging warnings and failing on any error.
pub fn quick_validate(stock: &StockSheet, panels: &[Panel]) -> Result<()> {
    let result = validate_request(stock, panels);

    for warning in &result.warnings {
        tracing::warn!("{}", warning);
    }

    if !result.passed {
        return Err(QuoteError::ValidationFailed {
            message: result.errors.join("; "),
        });
    }

    Ok(())
}

/// Check whether any two placed panels overlap. Stops at the first hit.
pub fn has_overlap(layout: &[PlacedPanel]) -> bool {
    layout
        .iter()
        .enumerate()
        .any(|(i, a)| layout[i + 1..].iter().any(|b| a.overlaps(b)))
}

/// All overlapping index pairs, for diagnostics.
pub fn overlapping_pairs(layout: &[PlacedPanel]) -> Vec<(usize, usize)> {
    let mut overlaps = Vec::new();

    for i in 0..layout.len() {
        for j in i + 1..layout.len() {
            if layout[i].overlaps(&layout[j]) {
                overlaps.push((i, j));
            }
        }
    }

    overlaps
}

/// Indices of placed panels that extend beyond the stock sheet.
pub fn out_of_bounds(stock: &StockSheet, layout: &[PlacedPanel]) -> Vec<usize> {
    layout
        .iter()
        .enumerate()
        .filter(|(_, placed)| !stock.contains(placed))
        .map(|(i, _)| i)
        .collect()
}

/// Validate a finished sheet layout against the no-overlap and containment rules.
pub fn validate_layout(stock: &StockSheet, layout: &SheetLayout) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !layout.fits() {
        result.add_warning("Layout is empty: panels do not fit on one sheet");
        return result;
    }

    for (i, j) in overlapping_pairs(&layout.placements) {
        result.add_error(format!("Panels {} and {} overlap", i + 1, j + 1));
    }

    for idx in out_of_bounds(stock, &layout.placements) {
        result.add_error(format!("Panel {}: Extends beyond sheet bounds", idx + 1));
    }

    if !crate::config::float_cmp::in_range(layout.waste_percent, 0.0, 100.0) {
        result.add_error(format!(
            "Waste {:.2}% is outside 0-100%",
            layout.waste_percent
        ));
    }

    result
}

/// Validate every sheet of a plan. Unplaced panels are warnings.
pub fn validate_plan(stock: &StockSheet, plan: &CuttingPlan) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (idx, layout) in plan.sheets.iter().enumerate() {
        let sheet = validate_layout(stock, layout);
        result.merge(ValidationResult {
            passed: sheet.passed,
            warnings: prefixed(idx, sheet.warnings),
            errors: prefixed(idx, sheet.errors),
        });
    }

    for panel in &plan.unplaced {
        result.add_warning(format!(
            "Panel {} could not be placed on any sheet",
            panel.dimensions_string()
        ));
    }

    result
}

fn prefixed(sheet_idx: usize, messages: Vec<String>) -> Vec<String> {
    messages
        .into_iter()
        .map(|m| format!("Sheet {}: {}", sheet_idx + 1, m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_stock() -> StockSheet {
        StockSheet::new(321.0, 225.0).unwrap()
    }

    fn placed(x: f64, y: f64, width: f64, height: f64) -> PlacedPanel {
        PlacedPanel {
            x,
            y,
            width,
            height,
            rotated: false,
        }
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_request tests ====================

    #[test]
    fn test_validate_request_valid() {
        let panels = vec![Panel::new(100.0, 50.0), Panel::new(200.0, 30.0)];
        let result = validate_request(&create_stock(), &panels);
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_request_empty_warning() {
        let result = validate_request(&create_stock(), &[]);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("No panels")));
    }

    #[test]
    fn test_validate_request_invalid_dimensions() {
        let panels = vec![Panel::new(-100.0, 50.0)];
        let result = validate_request(&create_stock(), &panels);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Invalid dimensions")));
    }

    #[test]
    fn test_validate_request_oversized_panel() {
        let panels = vec![Panel::new(100.0, 50.0), Panel::new(400.0, 300.0)];
        let result = validate_request(&create_stock(), &panels);
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Panel 2"));
    }

    #[test]
    fn test_validate_request_rotated_fit_is_accepted() {
        let panels = vec![Panel::new(220.0, 300.0)];
        let result = validate_request(&create_stock(), &panels);
        assert!(result.passed);
    }

    // ==================== quick_validate tests ====================

    #[test]
    fn test_quick_validate_success() {
        let panels = vec![Panel::new(100.0, 50.0)];
        assert!(quick_validate(&create_stock(), &panels).is_ok());
    }

    #[test]
    fn test_quick_validate_failure() {
        let panels = vec![Panel::new(0.0, 50.0), Panel::new(400.0, 300.0)];
        match quick_validate(&create_stock(), &panels) {
            Err(QuoteError::ValidationFailed { message }) => {
                assert!(message.contains("Panel 1"));
                assert!(message.contains("Panel 2"));
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    // ==================== overlap tests ====================

    #[test]
    fn test_has_overlap_none() {
        let layout = vec![placed(0.0, 0.0, 100.0, 100.0), placed(200.0, 0.0, 100.0, 100.0)];
        assert!(!has_overlap(&layout));
        assert!(overlapping_pairs(&layout).is_empty());
    }

    #[test]
    fn test_has_overlap_detected() {
        let layout = vec![
            placed(0.0, 0.0, 100.0, 100.0),
            placed(150.0, 0.0, 10.0, 10.0),
            placed(50.0, 50.0, 100.0, 100.0),
        ];
        assert!(has_overlap(&layout));
        assert_eq!(overlapping_pairs(&layout), vec![(0, 2)]);
    }

    #[test]
    fn test_adjacent_no_overlap() {
        let layout = vec![placed(0.0, 0.0, 100.0, 100.0), placed(100.0, 0.0, 100.0, 100.0)];
        assert!(!has_overlap(&layout));
    }

    #[test]
    fn test_overlap_ignores_rotation_flag() {
        let mut turned = placed(50.0, 50.0, 100.0, 100.0);
        turned.rotated = true;
        let layout = vec![placed(0.0, 0.0, 100.0, 100.0), turned];
        assert!(has_overlap(&layout));
    }

    #[test]
    fn test_has_overlap_trivial_layouts() {
        assert!(!has_overlap(&[]));
        assert!(!has_overlap(&[placed(0.0, 0.0, 1.0, 1.0)]));
    }

    #[test]
    fn test_validate_plan_names_the_sheet() {
        let stock = create_stock();
        let good = SheetLayout::new(&stock, vec![placed(0.0, 0.0, 100.0, 50.0)]);
        let bad = SheetLayout::new(
            &stock,
            vec![placed(0.0, 0.0, 100.0, 100.0), placed(50.0, 50.0, 100.0, 100.0)],
        );
        let plan = CuttingPlan {
            sheets: vec![good, bad],
            unplaced: vec![Panel::new(400.0, 300.0)],
        };

        let result = validate_plan(&stock, &plan);
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Sheet 2: Panels 1 and 2 overlap".to_string()]);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("400x300"));
    }

    #[test]
    fn test_validate_plan_complete() {
        let stock = create_stock();
        let plan = CuttingPlan {
            sheets: vec![SheetLayout::new(&stock, vec![placed(0.0, 0.0, 100.0, 50.0)])],
            unplaced: Vec::new(),
        };
        let result = validate_plan(&stock, &plan);
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    // ==================== layout tests ====================

    #[test]
    fn test_out_of_bounds() {
        let layout = vec![placed(0.0, 0.0, 100.0, 100.0), placed(300.0, 0.0, 100.0, 100.0)];
        assert_eq!(out_of_bounds(&create_stock(), &layout), vec![1]);
    }

    #[test]
    fn test_validate_layout_valid() {
        let stock = create_stock();
        let layout = SheetLayout::new(&stock, vec![placed(0.0, 0.0, 100.0, 50.0)]);
        let result = validate_layout(&stock, &layout);
        assert!(result.passed);
    }

    #[test]
    fn test_validate_layout_reports_problems() {
        let stock = create_stock();
        let layout = SheetLayout::new(
            &stock,
            vec![placed(0.0, 0.0, 100.0, 100.0), placed(50.0, 50.0, 300.0, 100.0)],
        );
        let result = validate_layout(&stock, &layout);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("overlap")));
        assert!(result.errors.iter().any(|e| e.contains("beyond sheet bounds")));
    }

    #[test]
    fn test_validate_layout_unplaceable_is_warning() {
        let result = validate_layout(&create_stock(), &SheetLayout::unplaceable());
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }
}
