use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use tracing::{debug, warn};

use crate::error::HelperError;

/// Map helpers for keys that own a collection.
pub trait MapExt<K, V> {
    /// Collection stored at `key`, created through `mapping` when missing.
    ///
    /// `mapping` is required even when the key exists and is only called for
    /// a missing key. A mapping that yields `None` leaves the map unchanged.
    fn map_collection_to_key<F>(
        &mut self,
        key: K,
        mapping: Option<F>,
    ) -> Result<&mut V, HelperError>
    where
        F: FnOnce() -> Option<V>;
}

fn require_mapping<F>(mapping: Option<F>) -> Result<F, HelperError> {
    mapping.ok_or_else(|| {
        warn!("rejecting map lookup without a mapping function");
        HelperError::missing("mapping")
    })
}

impl<K, V, S> MapExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn map_collection_to_key<F>(
        &mut self,
        key: K,
        mapping: Option<F>,
    ) -> Result<&mut V, HelperError>
    where
        F: FnOnce() -> Option<V>,
    {
        use std::collections::hash_map::Entry;

        let mapping = require_mapping(mapping)?;
        match self.entry(key) {
            Entry::Occupied(slot) => Ok(slot.into_mut()),
            Entry::Vacant(slot) => {
                let collection = mapping().ok_or(HelperError::EmptyMapping)?;
                debug!("created collection for missing key");
                Ok(slot.insert(collection))
            }
        }
    }
}

impl<K, V> MapExt<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn map_collection_to_key<F>(
        &mut self,
        key: K,
        mapping: Option<F>,
    ) -> Result<&mut V, HelperError>
    where
        F: FnOnce() -> Option<V>,
    {
        use std::collections::btree_map::Entry;

        let mapping = require_mapping(mapping)?;
        match self.entry(key) {
            Entry::Occupied(slot) => Ok(slot.into_mut()),
            Entry::Vacant(slot) => {
                let collection = mapping().ok_or(HelperError::EmptyMapping)?;
                debug!("created collection for missing key");
                Ok(slot.insert(collection))
            }
        }
    }
}
