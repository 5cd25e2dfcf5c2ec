use crate::core::types::document_selector::DocumentSelector;
use crate::util::aliases::AssetResult;

/// The documents produced by a world state query.  Each item is the raw bytes of one matching
/// document.  The underlying cursor is released when the iterator is dropped, so callers that
/// bail out early with `?` never leave a cursor open.
pub type StateQueryIterator<'a> = Box<dyn Iterator<Item = AssetResult<Vec<u8>>> + 'a>;

/// Read access to the key-value and document-queryable world state that holds asset records.
pub trait WorldStateReader {
    /// Fetches the raw value stored at a key.  Absence is not an error and produces `None`.
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>>;

    /// Runs a document query, producing every stored document that satisfies the selector.
    fn get_query_result(&self, selector: &DocumentSelector) -> AssetResult<StateQueryIterator<'_>>;
}

/// Full read and write access to the world state.
pub trait WorldState: WorldStateReader {
    /// Writes a value to a key, fully replacing any existing value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> AssetResult<()>;

    /// Removes the value stored at a key.
    fn delete_state(&mut self, key: &str) -> AssetResult<()>;
}
