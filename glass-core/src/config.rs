//! Configuration constants and settings for the optimizer.

use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Wall-clock budget for one single-sheet search.
pub const DEFAULT_TIME_BUDGET_SECS: u64 = 30;

/// Waste percentage below which the search stops early.
pub const DEFAULT_GOOD_ENOUGH_WASTE: f64 = 15.0;

/// Largest panel count that gets every rotation pattern.
pub const DEFAULT_EXHAUSTIVE_ROTATION_LIMIT: usize = 6;

/// Largest panel count that gets sampled rotation patterns.
pub const DEFAULT_SAMPLED_ROTATION_LIMIT: usize = 8;

/// Step between sampled rotation bitmasks.
pub const DEFAULT_ROTATION_STRIDE: usize = 4;

/// Largest panel count for which all four starting corners are tried.
pub const DEFAULT_ALL_CORNERS_LIMIT: usize = 6;

/// Minimum gap left beside and above each placed panel.
pub const DEFAULT_MIN_GAP: f64 = 0.0;

/// Standard stock sheet width (cm).
pub const DEFAULT_STOCK_WIDTH: f64 = 321.0;

/// Standard stock sheet height (cm).
pub const DEFAULT_STOCK_HEIGHT: f64 = 225.0;

/// Default glass thickness (mm), carried for pricing only.
pub const DEFAULT_THICKNESS: f64 = 4.0;

/// Rotation patterns wider than this cannot be expressed as a `u64` bitmask.
const MAX_ROTATION_BITS: usize = 63;

/// Length unit shared by the stock sheet and the panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Centimeters,
    Millimeters,
}

impl Unit {
    /// Parse a unit from its short name.
    pub fn from_str_name(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm" => Ok(Unit::Centimeters),
            "mm" => Ok(Unit::Millimeters),
            _ => Err(QuoteError::UnknownUnit {
                value: s.to_string(),
            }),
        }
    }

    /// Factor converting an area in this unit squared to square metres.
    pub fn to_m2_factor(&self) -> f64 {
        match self {
            Unit::Centimeters => 1.0 / 10_000.0,
            Unit::Millimeters => 1.0 / 1_000_000.0,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Centimeters => write!(f, "cm"),
            Unit::Millimeters => write!(f, "mm"),
        }
    }
}

/// How many rotation bitmasks the search explores for a given panel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPolicy {
    /// Up to this many panels, all `2^n` patterns are tried.
    pub exhaustive_limit: usize,
    /// Up to this many panels, every `sampled_stride`-th pattern is tried.
    pub sampled_limit: usize,
    /// Step between sampled patterns.
    pub sampled_stride: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            exhaustive_limit: DEFAULT_EXHAUSTIVE_ROTATION_LIMIT,
            sampled_limit: DEFAULT_SAMPLED_ROTATION_LIMIT,
            sampled_stride: DEFAULT_ROTATION_STRIDE,
        }
    }
}

impl RotationPolicy {
    /// Rotation bitmasks to try for `panel_count` panels.
    ///
    /// Bit `i` set means panel `i` is rotated before sorting. Pattern `0`
    /// (no rotations) is always first.
    pub fn patterns(&self, panel_count: usize) -> impl Iterator<Item = u64> {
        let (end, stride) = if panel_count > MAX_ROTATION_BITS || panel_count > self.sampled_limit
        {
            (1, 1)
        } else if panel_count > self.exhaustive_limit {
            (1u64 << panel_count, self.sampled_stride.max(1))
        } else {
            (1u64 << panel_count, 1)
        };
        (0..end).step_by(stride)
    }

    /// Number of patterns [`patterns`](Self::patterns) yields.
    pub fn pattern_count(&self, panel_count: usize) -> usize {
        self.patterns(panel_count).count()
    }
}

/// Optimizer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Wall-clock budget for one `optimize` call.
    pub time_budget: Duration,
    /// Stop searching as soon as a layout wastes less than this (percent).
    pub good_enough_waste: f64,
    /// Rotation pattern enumeration policy.
    pub rotation: RotationPolicy,
    /// Up to this many panels, all four starting corners are tried.
    pub all_corners_limit: usize,
    /// Gap left beside and above each panel.
    pub min_gap: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(DEFAULT_TIME_BUDGET_SECS),
            good_enough_waste: DEFAULT_GOOD_ENOUGH_WASTE,
            rotation: RotationPolicy::default(),
            all_corners_limit: DEFAULT_ALL_CORNERS_LIMIT,
            min_gap: DEFAULT_MIN_GAP,
        }
    }
}

impl OptimizerConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wall-clock budget.
    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }

    /// Set the early-termination waste threshold.
    pub fn with_good_enough_waste(mut self, waste_percent: f64) -> Self {
        self.good_enough_waste = waste_percent;
        self
    }

    /// Set the rotation pattern policy.
    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the panel count limit for trying all corners.
    pub fn with_all_corners_limit(mut self, limit: usize) -> Self {
        self.all_corners_limit = limit;
        self
    }

    /// Set the minimum gap between panels.
    pub fn with_min_gap(mut self, min_gap: f64) -> Self {
        self.min_gap = min_gap;
        self
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.rotation.sampled_stride == 0 {
            return Err(QuoteError::InvalidConfig {
                message: "rotation stride must be at least 1".to_string(),
            });
        }
        if self.rotation.exhaustive_limit > self.rotation.sampled_limit {
            return Err(QuoteError::InvalidConfig {
                message: format!(
                    "exhaustive rotation limit {} exceeds sampled limit {}",
                    self.rotation.exhaustive_limit, self.rotation.sampled_limit
                ),
            });
        }
        if !self.min_gap.is_finite() || self.min_gap < 0.0 {
            return Err(QuoteError::InvalidConfig {
                message: format!("minimum gap must be non-negative, got {}", self.min_gap),
            });
        }
        if !float_cmp::in_range(self.good_enough_waste, 0.0, 100.0) {
            return Err(QuoteError::InvalidConfig {
                message: format!(
                    "good-enough waste must be within 0-100%, got {}",
                    self.good_enough_waste
                ),
            });
        }
        Ok(())
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a is in range [min, max] with epsilon tolerance.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64) -> bool {
        a >= min - EPS && a <= max + EPS
    }
}

/// Round to two decimals, the precision used in quotes and reports.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
