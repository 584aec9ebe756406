//! Precomputed target tables for every layout.

use super::{Layout, Transform};
use crate::error::ConfigError;

/// The four layout target tables, index-aligned with the item set.
///
/// Built once by [`LayoutTargets::build`] and never mutated afterwards; the
/// engine hands out shared slices into it.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTargets {
    table: Vec<Transform>,
    sphere: Vec<Transform>,
    helix: Vec<Transform>,
    grid: Vec<Transform>,
}

impl LayoutTargets {
    /// Run every placement function once per item.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidTotal`] if `total` is zero.
    pub fn build(total: usize) -> Result<Self, ConfigError> {
        if total == 0 {
            return Err(ConfigError::InvalidTotal { total });
        }

        let mut targets = Self {
            table: Vec::with_capacity(total),
            sphere: Vec::with_capacity(total),
            helix: Vec::with_capacity(total),
            grid: Vec::with_capacity(total),
        };
        for index in 0..total {
            for layout in Layout::ALL {
                targets
                    .slot_mut(layout)
                    .push(layout.transform_for(index, total));
            }
        }

        log::debug!("built layout targets for {total} items");
        Ok(targets)
    }

    /// Target table of `layout`.
    #[must_use]
    pub fn get(&self, layout: Layout) -> &[Transform] {
        match layout {
            Layout::Table => &self.table,
            Layout::Sphere => &self.sphere,
            Layout::Helix => &self.helix,
            Layout::Grid => &self.grid,
        }
    }

    /// Number of items each table covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the tables are empty (never true for a built instance).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Confirm every table has exactly `items` entries.
    ///
    /// # Errors
    ///
    /// [`ConfigError::LengthMismatch`] naming the first misaligned table.
    pub fn check_aligned(&self, items: usize) -> Result<(), ConfigError> {
        for layout in Layout::ALL {
            let actual = self.get(layout).len();
            if actual != items {
                return Err(ConfigError::LengthMismatch {
                    what: layout.name(),
                    expected: items,
                    actual,
                });
            }
        }
        Ok(())
    }

    fn slot_mut(&mut self, layout: Layout) -> &mut Vec<Transform> {
        match layout {
            Layout::Table => &mut self.table,
            Layout::Sphere => &mut self.sphere,
            Layout::Helix => &mut self.helix,
            Layout::Grid => &mut self.grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn zero_total_is_rejected() {
        assert_eq!(
            LayoutTargets::build(0),
            Err(ConfigError::InvalidTotal { total: 0 })
        );
    }

    #[test]
    fn all_tables_share_length() {
        let targets = LayoutTargets::build(57).unwrap();
        assert_eq!(targets.len(), 57);
        for layout in Layout::ALL {
            assert_eq!(targets.get(layout).len(), 57);
        }
        assert!(targets.check_aligned(57).is_ok());
    }

    #[test]
    fn misaligned_item_count_is_reported() {
        let targets = LayoutTargets::build(5).unwrap();
        assert_eq!(
            targets.check_aligned(6),
            Err(ConfigError::LengthMismatch {
                what: "table",
                expected: 6,
                actual: 5,
            })
        );
    }

    #[test]
    fn tables_match_placement_functions() {
        let total = 23;
        let targets = LayoutTargets::build(total).unwrap();
        for layout in Layout::ALL {
            for (i, t) in targets.get(layout).iter().enumerate() {
                assert_eq!(*t, layout.transform_for(i, total));
            }
        }
    }

    #[test]
    fn three_item_table() {
        let targets = LayoutTargets::build(3).unwrap();
        let xs: Vec<Vec3> = targets
            .get(Layout::Table)
            .iter()
            .map(|t| t.position)
            .collect();
        assert_eq!(
            xs,
            vec![
                Vec3::new(-1330.0, 990.0, 0.0),
                Vec3::new(-1190.0, 990.0, 0.0),
                Vec3::new(-1050.0, 990.0, 0.0),
            ]
        );
    }
}
