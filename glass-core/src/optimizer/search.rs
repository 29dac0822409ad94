//! Single-sheet placement search.

use super::{place_panels, Corner, CuttingOptimizer, SortStrategy};
use crate::model::{Panel, SheetLayout};
use crate::validation::{has_overlap, out_of_bounds};
use std::time::Instant;
use tracing::{debug, info, warn};

impl CuttingOptimizer {
    /// Find the least wasteful layout that places every panel on one sheet.
    ///
    /// Tries each sort strategy, then each starting corner, then each
    /// rotation pattern allowed by the configuration. Returns as soon as a
    /// layout beats `good_enough_waste`, or with the best layout so far once
    /// the time budget runs out.
    ///
    /// An empty request gives [`SheetLayout::empty`]. When no combination
    /// places every panel the result is [`SheetLayout::unplaceable`].
    pub fn optimize(&self, panels: &[Panel]) -> SheetLayout {
        if panels.is_empty() {
            return SheetLayout::empty();
        }

        if let Some(panel) = panels.iter().find(|p| !p.is_valid()) {
            warn!("Panel {} has invalid dimensions", panel.dimensions_string());
            return SheetLayout::unplaceable();
        }

        info!("Optimizing layout for {} panel(s)", panels.len());

        let started = Instant::now();
        let expired = || started.elapsed() > self.config.time_budget;

        let corners: &[Corner] = if panels.len() > self.config.all_corners_limit {
            &[Corner::BottomLeft]
        } else {
            &Corner::ALL
        };

        let mut best = SheetLayout::unplaceable();
        let mut attempts = 0usize;

        'search: for strategy in SortStrategy::ALL {
            if expired() {
                break;
            }

            for &corner in corners {
                for pattern in self.config.rotation.patterns(panels.len()) {
                    if expired() {
                        break 'search;
                    }
                    attempts += 1;

                    let mut working = panels.to_vec();
                    apply_rotation_pattern(&mut working, pattern);
                    strategy.sort(&mut working);

                    let Some(placements) =
                        place_panels(&self.stock, &working, corner, self.config.min_gap)
                    else {
                        continue;
                    };

                    if has_overlap(&placements)
                        || !out_of_bounds(&self.stock, &placements).is_empty()
                    {
                        debug!(
                            "Rejected invalid layout ({:?}, {}, pattern {:#b})",
                            strategy, corner, pattern
                        );
                        continue;
                    }

                    let candidate = SheetLayout::new(&self.stock, placements);
                    if candidate.waste_percent < best.waste_percent {
                        debug!(
                            "New best layout: {:.2}% waste ({:?}, {}, pattern {:#b})",
                            candidate.waste_percent, strategy, corner, pattern
                        );
                        best = candidate;

                        if best.waste_percent < self.config.good_enough_waste {
                            info!(
                                "Found layout with {:.2}% waste after {} attempt(s)",
                                best.waste_percent, attempts
                            );
                            return best;
                        }
                    }
                }
            }
        }

        if expired() {
            warn!(
                "Time budget of {:?} exhausted after {} attempt(s)",
                self.config.time_budget, attempts
            );
        }

        if best.fits() {
            info!(
                "Best layout has {:.2}% waste after {} attempt(s)",
                best.waste_percent, attempts
            );
        } else {
            debug!("No layout places all {} panel(s)", panels.len());
        }

        best
    }
}

/// Toggle the rotation of every panel whose bit is set in `pattern`.
fn apply_rotation_pattern(panels: &mut [Panel], pattern: u64) {
    if pattern == 0 {
        return;
    }
    for (i, panel) in panels.iter_mut().enumerate().take(u64::BITS as usize) {
        if pattern & (1 << i) != 0 {
            panel.rotate();
        }
    }
}
