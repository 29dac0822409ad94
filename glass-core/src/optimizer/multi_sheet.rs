//! Spreading panels over several stock sheets.

use super::CuttingOptimizer;
use crate::model::{CuttingPlan, Panel, SheetLayout};
use tracing::{info, warn};

/// Outcome of growing a placeable subset one panel at a time.
struct Probe {
    /// Panels that fit together on one sheet.
    placed: Vec<Panel>,
    /// Panels left for later sheets.
    deferred: Vec<Panel>,
    /// Layout found for `placed` by the last successful step.
    layout: SheetLayout,
}

impl CuttingOptimizer {
    /// Lay out all panels over as many stock sheets as needed.
    ///
    /// Each round first tries to fit everything that remains on one sheet.
    /// When that fails, panels are added one by one to a growing set that
    /// still fits; that set fills the next sheet and the rest carry over.
    /// Panels with invalid dimensions, and panels that fit on no sheet even
    /// alone, end up in [`CuttingPlan::unplaced`].
    pub fn optimize_multiple_sheets(&self, panels: &[Panel]) -> CuttingPlan {
        let mut plan = CuttingPlan::default();
        let (mut remaining, invalid): (Vec<Panel>, Vec<Panel>) =
            panels.iter().partition(|panel| panel.is_valid());

        for panel in &invalid {
            warn!(
                "Panel {} has invalid dimensions and is left unplaced",
                panel.dimensions_string()
            );
        }
        plan.unplaced = invalid;

        while !remaining.is_empty() {
            let sheet_number = plan.sheets.len() + 1;
            info!(
                "Optimizing sheet #{} with {} panel(s)",
                sheet_number,
                remaining.len()
            );

            let layout = self.optimize(&remaining);
            if layout.fits() {
                plan.sheets.push(layout);
                break;
            }

            let probe = self.probe(&remaining);
            if probe.placed.is_empty() {
                for panel in &remaining {
                    warn!(
                        "Panel {} does not fit on a {}x{} sheet",
                        panel.dimensions_string(),
                        self.stock.width,
                        self.stock.height
                    );
                }
                plan.unplaced.append(&mut remaining);
                break;
            }

            let mut layout = self.optimize(&probe.placed);
            if !layout.fits() {
                layout = probe.layout;
            }
            info!(
                "Sheet #{} holds {} panel(s), {} left",
                sheet_number,
                layout.len(),
                probe.deferred.len()
            );
            plan.sheets.push(layout);
            remaining = probe.deferred;
        }

        info!(
            "Cutting plan uses {} sheet(s), average waste {:.2}%",
            plan.sheet_count(),
            plan.average_waste_percent()
        );

        plan
    }

    /// Grow the largest prefix-greedy subset of `panels` that fits one sheet.
    fn probe(&self, panels: &[Panel]) -> Probe {
        let mut probe = Probe {
            placed: Vec::new(),
            deferred: Vec::new(),
            layout: SheetLayout::unplaceable(),
        };

        for panel in panels {
            let mut candidate = probe.placed.clone();
            candidate.push(*panel);

            let layout = self.optimize(&candidate);
            if layout.fits() {
                probe.placed = candidate;
                probe.layout = layout;
            } else {
                probe.deferred.push(*panel);
            }
        }

        probe
    }
}
