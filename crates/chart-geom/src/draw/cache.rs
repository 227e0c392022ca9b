//! Resample cache for surface implementations.

use std::collections::HashMap;
use std::hash::Hash;

use crate::geom::Size;

/// Bit-exact hashable key for a target size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct SizeKey(u64, u64);

impl From<Size> for SizeKey {
    #[inline]
    fn from(size: Size) -> Self {
        SizeKey(size.width.to_bits(), size.height.to_bits())
    }
}

/// Explicit mapping from (image identity, target size) to a resampled
/// variant, for [`Surface`](crate::draw::Surface) implementations that want
/// to skip repeated resampling.
///
/// Plain owned data: no implicit eviction, no interior mutability. Callers
/// evict via [`remove`](ResizeCache::remove) / [`clear`](ResizeCache::clear)
/// and bring their own locking if the surface is shared.
#[derive(Clone, Debug)]
pub struct ResizeCache<K, V> {
    entries: HashMap<(K, SizeKey), V>,
}

impl<K: Eq + Hash, V> ResizeCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, image: &K, size: Size) -> Option<&V>
    where
        K: Clone,
    {
        self.entries.get(&(image.clone(), SizeKey::from(size)))
    }

    pub fn insert(&mut self, image: K, size: Size, resized: V) -> Option<V> {
        self.entries.insert((image, SizeKey::from(size)), resized)
    }

    /// Drop the variant cached for one (image, size) pair.
    pub fn remove(&mut self, image: &K, size: Size) -> Option<V>
    where
        K: Clone,
    {
        self.entries.remove(&(image.clone(), SizeKey::from(size)))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for ResizeCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
