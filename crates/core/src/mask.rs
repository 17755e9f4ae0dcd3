//! The mask: cell indices the user has hidden.
//!
//! A mask is only meaningful for a fixed grid shape. When the geometry
//! changes (a new image, and with it a new row count), the mask is cleared —
//! indices are never remapped onto the new grid.

use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of masked (hidden) cell indices.
///
/// Backed by an ordered set so serialization and iteration are
/// deterministic. Serializes as a sorted index array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaskSet {
    indices: BTreeSet<usize>,
}

impl MaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `index` is masked.
    pub fn is_masked(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Flips the membership of `index`. Returns `true` if the cell is
    /// masked after the toggle.
    pub fn toggle(&mut self, index: usize) -> bool {
        if !self.indices.remove(&index) {
            self.indices.insert(index);
            true
        } else {
            false
        }
    }

    pub fn insert(&mut self, index: usize) {
        self.indices.insert(index);
    }

    pub fn remove(&mut self, index: usize) {
        self.indices.remove(&index);
    }

    /// Removes every index.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Masked indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Validates that every index falls inside a grid of `cells` cells.
    ///
    /// Returns `GridError::CellOutOfBounds` for the smallest offending
    /// index. Callers resolve a mismatch by clearing, never by remapping.
    pub fn validate_domain(&self, cells: usize) -> Result<(), GridError> {
        match self.indices.iter().find(|&&index| index >= cells) {
            Some(&index) => Err(GridError::CellOutOfBounds { index, cells }),
            None => Ok(()),
        }
    }
}

impl FromIterator<usize> for MaskSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership_and_reports_state() {
        let mut mask = MaskSet::new();
        assert!(mask.toggle(3), "first toggle should mask");
        assert!(mask.is_masked(3));
        assert!(!mask.toggle(3), "second toggle should unmask");
        assert!(!mask.is_masked(3));
    }

    #[test]
    fn toggling_one_cell_leaves_others_untouched() {
        let mut mask: MaskSet = [1, 5, 9].into_iter().collect();
        mask.toggle(5);
        assert!(mask.is_masked(1));
        assert!(!mask.is_masked(5));
        assert!(mask.is_masked(9));
    }

    #[test]
    fn clear_empties_the_set() {
        let mut mask: MaskSet = [0, 2, 4].into_iter().collect();
        assert_eq!(mask.len(), 3);
        mask.clear();
        assert!(mask.is_empty());
    }

    #[test]
    fn iter_yields_ascending_order() {
        let mask: MaskSet = [9, 1, 5].into_iter().collect();
        let collected: Vec<usize> = mask.iter().collect();
        assert_eq!(collected, vec![1, 5, 9]);
    }

    #[test]
    fn validate_domain_accepts_in_bounds_indices() {
        let mask: MaskSet = [0, 79].into_iter().collect();
        assert!(mask.validate_domain(80).is_ok());
    }

    #[test]
    fn validate_domain_reports_smallest_offender() {
        let mask: MaskSet = [3, 80, 200].into_iter().collect();
        let err = mask.validate_domain(80).unwrap_err();
        assert!(
            matches!(err, GridError::CellOutOfBounds { index: 80, cells: 80 }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn serde_round_trip_as_sorted_array() {
        let mask: MaskSet = [7, 2, 11].into_iter().collect();
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, "[2,7,11]");
        let restored: MaskSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, mask);
    }

    #[test]
    fn duplicate_indices_collapse() {
        let mask: MaskSet = [4, 4, 4].into_iter().collect();
        assert_eq!(mask.len(), 1);
    }
}
