//! Panel ordering strategies tried by the search.

use crate::model::Panel;
use serde::{Deserialize, Serialize};

/// Descending sort key applied before placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortStrategy {
    /// Longest edge first.
    LongestEdge,
    /// Largest area first.
    Area,
    /// Longest short edge first.
    ShortestEdge,
    /// Largest perimeter first.
    Perimeter,
}

impl SortStrategy {
    /// All strategies, in search order.
    pub const ALL: [SortStrategy; 4] = [
        SortStrategy::LongestEdge,
        SortStrategy::Area,
        SortStrategy::ShortestEdge,
        SortStrategy::Perimeter,
    ];

    /// Sort key for a panel. Independent of the rotation flag.
    pub fn key(self, panel: &Panel) -> f64 {
        match self {
            SortStrategy::LongestEdge => panel.max_edge(),
            SortStrategy::Area => panel.area(),
            SortStrategy::ShortestEdge => panel.min_edge(),
            SortStrategy::Perimeter => panel.perimeter(),
        }
    }

    /// Sort panels by descending key. Ties keep their input order.
    pub fn sort(self, panels: &mut [Panel]) {
        panels.sort_by(|a, b| self.key(b).total_cmp(&self.key(a)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dims(panels: &[Panel]) -> Vec<(f64, f64)> {
        panels.iter().map(|p| (p.width, p.height)).collect()
    }

    fn sample() -> Vec<Panel> {
        vec![
            Panel::new(10.0, 90.0),
            Panel::new(50.0, 50.0),
            Panel::new(40.0, 70.0),
        ]
    }

    #[test]
    fn test_sort_longest_edge() {
        let mut panels = sample();
        SortStrategy::LongestEdge.sort(&mut panels);
        assert_eq!(dims(&panels), vec![(10.0, 90.0), (40.0, 70.0), (50.0, 50.0)]);
    }

    #[test]
    fn test_sort_area() {
        let mut panels = sample();
        SortStrategy::Area.sort(&mut panels);
        assert_eq!(dims(&panels), vec![(40.0, 70.0), (50.0, 50.0), (10.0, 90.0)]);
    }

    #[test]
    fn test_sort_shortest_edge() {
        let mut panels = sample();
        SortStrategy::ShortestEdge.sort(&mut panels);
        assert_eq!(dims(&panels), vec![(50.0, 50.0), (40.0, 70.0), (10.0, 90.0)]);
    }

    #[test]
    fn test_sort_perimeter_is_stable() {
        // 10+90, 50+50 and 40+70: the first two tie at 100
        let mut panels = sample();
        SortStrategy::Perimeter.sort(&mut panels);
        assert_eq!(dims(&panels), vec![(40.0, 70.0), (10.0, 90.0), (50.0, 50.0)]);
    }

    #[test]
    fn test_key_ignores_rotation() {
        let mut panel = Panel::new(20.0, 60.0);
        let before: Vec<f64> = SortStrategy::ALL.iter().map(|s| s.key(&panel)).collect();
        panel.rotate();
        let after: Vec<f64> = SortStrategy::ALL.iter().map(|s| s.key(&panel)).collect();
        assert_eq!(before, after);
    }
}
