use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::core::error::ContractError;
use crate::core::types::asset::encode_asset;
use crate::core::types::asset_readable::AssetReadable;
use crate::core::types::document_selector::DocumentSelector;
use crate::service::world_state::{StateQueryIterator, WorldState, WorldStateReader};
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

/// An in-memory world state that can be told to fail any of its operations, and that keeps
/// count of the query cursors it hands out.
#[derive(Default)]
pub struct MockWorldState {
    documents: BTreeMap<String, Vec<u8>>,
    cursors: Rc<CursorCounts>,
    pub fail_get: bool,
    pub fail_put: bool,
    pub fail_delete: bool,
    pub fail_query: bool,
    /// Produces an error as the first query result.
    pub fail_query_iteration: bool,
    /// Produces every matching document twice.
    pub duplicate_query_results: bool,
    pub put_count: usize,
}
impl MockWorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_asset(&mut self, asset: &AssetReadable) {
        let asset = asset
            .to_asset()
            .expect("the mock asset should contain valid enum names");
        self.insert_raw(
            &asset.id,
            &encode_asset(&asset).expect("the mock asset should encode"),
        );
    }

    pub fn insert_raw(&mut self, key: &str, value: &[u8]) {
        self.documents.insert(key.to_string(), value.to_vec());
    }

    /// The amount of cursors handed out that have not yet been dropped.
    pub fn open_cursors(&self) -> usize {
        self.cursors.open.get()
    }

    /// The total amount of cursors ever handed out.
    pub fn opened_cursors(&self) -> usize {
        self.cursors.opened.get()
    }
}
impl WorldStateReader for MockWorldState {
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        if self.fail_get {
            return ContractError::persistence("mock get failure").to_err();
        }
        self.documents.get(key).cloned().to_ok()
    }

    fn get_query_result(&self, selector: &DocumentSelector) -> AssetResult<StateQueryIterator<'_>> {
        if self.fail_query {
            return ContractError::persistence("mock query failure").to_err();
        }
        let mut results: Vec<AssetResult<Vec<u8>>> = vec![];
        if self.fail_query_iteration {
            results.push(ContractError::persistence("mock iteration failure").to_err());
        }
        for document in self.documents.values().filter(|d| selector.matches(d)) {
            results.push(Ok(document.clone()));
            if self.duplicate_query_results {
                results.push(Ok(document.clone()));
            }
        }
        let cursor: StateQueryIterator<'_> =
            Box::new(TrackedCursor::open(results, self.cursors.clone()));
        cursor.to_ok()
    }
}
impl WorldState for MockWorldState {
    fn put_state(&mut self, key: &str, value: &[u8]) -> AssetResult<()> {
        if self.fail_put {
            return ContractError::persistence("mock put failure").to_err();
        }
        self.put_count += 1;
        self.insert_raw(key, value);
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> AssetResult<()> {
        if self.fail_delete {
            return ContractError::persistence("mock delete failure").to_err();
        }
        self.documents.remove(key);
        Ok(())
    }
}

#[derive(Default)]
struct CursorCounts {
    open: Cell<usize>,
    opened: Cell<usize>,
}

struct TrackedCursor {
    results: std::vec::IntoIter<AssetResult<Vec<u8>>>,
    counts: Rc<CursorCounts>,
}
impl TrackedCursor {
    fn open(results: Vec<AssetResult<Vec<u8>>>, counts: Rc<CursorCounts>) -> Self {
        counts.open.set(counts.open.get() + 1);
        counts.opened.set(counts.opened.get() + 1);
        Self {
            results: results.into_iter(),
            counts,
        }
    }
}
impl Iterator for TrackedCursor {
    type Item = AssetResult<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.results.next()
    }
}
impl Drop for TrackedCursor {
    fn drop(&mut self) {
        self.counts.open.set(self.counts.open.get() - 1);
    }
}
