//! Live per-item transforms.

use glam::Vec3;
use rand::Rng;

use crate::error::ConfigError;
use crate::layout::Transform;

/// Immutable handle for one item, created alongside the store.
///
/// Click surfaces hold a copy and hand it back by value, so the index an
/// event carries is the one bound at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemDescriptor {
    index: usize,
}

impl ItemDescriptor {
    /// Descriptor for item `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Stable item index, matching record order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

/// What every renderer reads: the current transform of each item.
///
/// Only the transition scheduler writes here once the session is running.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTransformStore {
    transforms: Vec<Transform>,
}

impl ItemTransformStore {
    /// Store seeded with the given starting transforms.
    #[must_use]
    pub fn new(transforms: Vec<Transform>) -> Self {
        Self { transforms }
    }

    /// `count` items at uniformly random positions inside the cube
    /// `[-extent, extent)^3`, unrotated.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidOption`] if the cube's width `2 * extent` is not
    /// a finite `f32`.
    pub fn scattered(
        count: usize,
        extent: f32,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        let extent = extent.abs();
        if !(2.0 * extent).is_finite() {
            return Err(ConfigError::InvalidOption {
                what: "scatter extent",
                value: extent.to_string(),
            });
        }
        let mut coord = || {
            if extent == 0.0 {
                0.0
            } else {
                rng.random_range(-extent..extent)
            }
        };
        let transforms = (0..count)
            .map(|_| Transform::at(Vec3::new(coord(), coord(), coord())))
            .collect();
        Ok(Self { transforms })
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Current transform of item `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Transform> {
        self.transforms.get(index)
    }

    /// All current transforms, index-aligned with records.
    #[must_use]
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// One descriptor per item, in index order.
    pub fn descriptors(&self) -> impl Iterator<Item = ItemDescriptor> {
        (0..self.transforms.len()).map(ItemDescriptor::new)
    }

    /// Descriptor for `index`, or `None` if out of range.
    #[must_use]
    pub fn descriptor(&self, index: usize) -> Option<ItemDescriptor> {
        (index < self.transforms.len()).then_some(ItemDescriptor::new(index))
    }

    pub(crate) fn set_position(&mut self, index: usize, position: Vec3) {
        if let Some(t) = self.transforms.get_mut(index) {
            t.position = position;
        }
    }

    pub(crate) fn set_orientation(&mut self, index: usize, orientation: Vec3) {
        if let Some(t) = self.transforms.get_mut(index) {
            t.orientation = orientation;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn scatter_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let store =
            ItemTransformStore::scattered(200, 2000.0, &mut rng).unwrap();
        assert_eq!(store.len(), 200);
        for t in store.transforms() {
            for c in t.position.to_array() {
                assert!((-2000.0..2000.0).contains(&c));
            }
            assert_eq!(t.orientation, Vec3::ZERO);
        }
    }

    #[test]
    fn zero_extent_collapses_to_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let store = ItemTransformStore::scattered(3, 0.0, &mut rng).unwrap();
        assert!(store.transforms().iter().all(|t| *t == Transform::IDENTITY));
    }

    #[test]
    fn non_finite_extent_is_rejected() {
        let mut rng = StdRng::seed_from_u64(2);
        for extent in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, f32::MAX] {
            let err =
                ItemTransformStore::scattered(3, extent, &mut rng).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidOption { .. }),
                "{extent}: {err}"
            );
        }
    }

    #[test]
    fn descriptors_bind_their_index() {
        let store = ItemTransformStore::new(vec![Transform::IDENTITY; 4]);
        let indices: Vec<usize> =
            store.descriptors().map(ItemDescriptor::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(store.descriptor(3), Some(ItemDescriptor::new(3)));
        assert_eq!(store.descriptor(4), None);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut store = ItemTransformStore::new(vec![Transform::IDENTITY; 2]);
        store.set_position(5, Vec3::ONE);
        store.set_orientation(5, Vec3::ONE);
        assert!(store.transforms().iter().all(|t| *t == Transform::IDENTITY));
    }
}
