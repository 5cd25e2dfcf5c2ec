use cosmwasm_std::{Order, Storage};
use cosmwasm_storage::{PrefixedStorage, ReadonlyPrefixedStorage};

use crate::core::types::document_selector::DocumentSelector;
use crate::util::aliases::AssetResult;
use crate::util::constants::WORLD_STATE_NAMESPACE;
use crate::util::traits::ResultExtensions;

use super::world_state::{StateQueryIterator, WorldState, WorldStateReader};

/// A [WorldState](super::world_state::WorldState) backed by the contract's own storage.  All
/// documents live under the [WORLD_STATE_NAMESPACE](crate::util::constants::WORLD_STATE_NAMESPACE)
/// prefix, keyed by their id.
pub struct StorageWorldState<'a> {
    storage: PrefixedStorage<'a>,
}
impl<'a> StorageWorldState<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        Self {
            storage: PrefixedStorage::new(storage, WORLD_STATE_NAMESPACE),
        }
    }
}
impl<'a> WorldStateReader for StorageWorldState<'a> {
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        self.storage.get(key.as_bytes()).to_ok()
    }

    fn get_query_result(&self, selector: &DocumentSelector) -> AssetResult<StateQueryIterator<'_>> {
        query_documents(&self.storage, selector).to_ok()
    }
}
impl<'a> WorldState for StorageWorldState<'a> {
    fn put_state(&mut self, key: &str, value: &[u8]) -> AssetResult<()> {
        self.storage.set(key.as_bytes(), value);
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> AssetResult<()> {
        self.storage.remove(key.as_bytes());
        Ok(())
    }
}

/// A read-only view of the same namespace used by [StorageWorldState](self::StorageWorldState),
/// for use in query routes where only immutable storage is available.
pub struct ReadonlyStorageWorldState<'a> {
    storage: ReadonlyPrefixedStorage<'a>,
}
impl<'a> ReadonlyStorageWorldState<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self {
            storage: ReadonlyPrefixedStorage::new(storage, WORLD_STATE_NAMESPACE),
        }
    }
}
impl<'a> WorldStateReader for ReadonlyStorageWorldState<'a> {
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        self.storage.get(key.as_bytes()).to_ok()
    }

    fn get_query_result(&self, selector: &DocumentSelector) -> AssetResult<StateQueryIterator<'_>> {
        query_documents(&self.storage, selector).to_ok()
    }
}

/// Walks the namespace in ascending key order, keeping each value that satisfies the selector.
fn query_documents<'a>(
    storage: &'a dyn Storage,
    selector: &DocumentSelector,
) -> StateQueryIterator<'a> {
    let selector = selector.to_owned();
    Box::new(
        storage
            .range(None, None, Order::Ascending)
            .filter(move |(_, value)| selector.matches(value))
            .map(|(_, value)| Ok(value)),
    )
}
