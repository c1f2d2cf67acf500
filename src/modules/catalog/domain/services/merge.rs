use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::modules::catalog::domain::entities::media_item::MediaItem;
use crate::modules::catalog::domain::entities::metadata::ItemMetadata;

/// Consolidates heterogeneous result arrays into one unique set per
/// content category.
///
/// Dedup policy is last-write-wins in concatenation order: when the same
/// id appears in several input arrays, the occurrence from the latest
/// array replaces the earlier one while the id keeps its first-seen
/// position. This mirrors how the browse endpoints are combined upstream
/// and is deliberately preserved, not corrected.
pub struct ContentMerger;

impl ContentMerger {
    pub fn merge_by_id(arrays: Vec<Vec<MediaItem>>) -> Vec<MediaItem> {
        Self::merge_keyed(arrays, MediaItem::id)
    }

    pub fn merge_keyed<T, K, F>(arrays: Vec<Vec<T>>, key: F) -> Vec<T>
    where
        K: Eq + Hash + Clone,
        F: Fn(&T) -> K,
    {
        let total: usize = arrays.iter().map(Vec::len).sum();
        let mut order: Vec<K> = Vec::new();
        let mut by_key: HashMap<K, T> = HashMap::with_capacity(total);

        for item in arrays.into_iter().flatten() {
            let k = key(&item);
            if by_key.insert(k.clone(), item).is_none() {
                order.push(k);
            }
        }

        debug!("Merged {} items into {} unique entries", total, order.len());

        order.into_iter().filter_map(|k| by_key.remove(&k)).collect()
    }

    /// Build the flattened metadata projection for a merged set.
    pub fn attach_metadata(items: &[MediaItem], image_base: &str) -> Vec<ItemMetadata> {
        items
            .iter()
            .map(|item| ItemMetadata::project(item, image_base))
            .collect()
    }
}
