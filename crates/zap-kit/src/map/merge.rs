//! Multi-map union with later-wins override.

use std::collections::HashMap;
use std::hash::Hash;

/// Merge a sequence of maps into one.
///
/// Returns `None` when the input sequence itself is empty. A single map
/// passes through unchanged. Otherwise the first map seeds the result and
/// each subsequent map's entries are inserted in order, overwriting on
/// key collision, so later maps win.
///
/// The maps are consumed; callers that want to keep the originals clone
/// before merging.
pub fn merge_maps<K, V, I>(maps: I) -> Option<HashMap<K, V>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = HashMap<K, V>>,
{
    let mut maps = maps.into_iter();
    let mut merged = maps.next()?;
    for map in maps {
        merged.extend(map);
    }
    Some(merged)
}
