//! Key/value projections over a `HashMap`
//!
//! Keys (and values) are snapshotted when the cursor is built, so the source
//! map is not consulted for ordering afterwards.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::{from_vec, Cursor, KnownSize, VecCursor};
use crate::optional::{Empty, Optional, Present};

/// Cursor over a snapshot of the map's keys.
pub fn map_keys<K, V, S>(map: &HashMap<K, V, S>) -> VecCursor<K>
where
    K: Clone,
{
    from_vec(map.keys().cloned().collect())
}

/// Cursor over a snapshot of the map's values.
pub fn map_values<K, V, S>(map: &HashMap<K, V, S>) -> VecCursor<V>
where
    V: Clone,
{
    from_vec(map.values().cloned().collect())
}

/// Key/value pair yielded by [`MapCursor`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapEntry<K, V> {
    pub key: K,
    pub value: V,
}

/// Cursor pairing a key snapshot with lookups into the borrowed map
pub struct MapCursor<'a, K, V, S> {
    data: &'a HashMap<K, V, S>,
    keys: VecCursor<K>,
}

pub fn from_map<K, V, S>(map: &HashMap<K, V, S>) -> MapCursor<'_, K, V, S>
where
    K: Clone,
{
    MapCursor { data: map, keys: map_keys(map) }
}

impl<'a, K, V, S> Cursor for MapCursor<'a, K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    type Item = MapEntry<K, V>;

    fn next(&mut self) -> Optional<Self::Item> {
        while let Present(key) = self.keys.next() {
            if let Some(value) = self.data.get(&key) {
                return Present(MapEntry { key, value: value.clone() });
            }
        }
        Empty
    }

    fn known_size(&self) -> Optional<&dyn KnownSize> {
        self.keys.known_size()
    }
}
