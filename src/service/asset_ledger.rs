use crate::{core::types::asset_readable::AssetReadable, util::aliases::AssetResult};

/// The read-only operations the ledger exposes over its world state.
pub trait AssetLedgerReader {
    fn asset_exists<S: AsRef<str>>(&self, id: S) -> AssetResult<bool>;

    fn read_asset<S: AsRef<str>>(&self, id: S) -> AssetResult<AssetReadable>;

    fn get_all_assets(&self) -> AssetResult<Vec<AssetReadable>>;
}

/// Every ledger operation, including those that mutate the world state.
pub trait AssetLedger: AssetLedgerReader {
    fn init_ledger(&mut self) -> AssetResult<Vec<AssetReadable>>;

    fn create_asset<S1: AsRef<str>, S2: Into<String>>(
        &mut self,
        id: S1,
        asset_type: &str,
        currency: &str,
        value: u64,
        owner: S2,
    ) -> AssetResult<AssetReadable>;

    fn update_asset<S1: AsRef<str>, S2: Into<String>>(
        &mut self,
        id: S1,
        asset_type: &str,
        currency: &str,
        value: u64,
        owner: S2,
    ) -> AssetResult<AssetReadable>;

    fn delete_asset<S: AsRef<str>>(&mut self, id: S) -> AssetResult<AssetReadable>;

    fn transfer_asset<S1: AsRef<str>, S2: Into<String>>(
        &mut self,
        id: S1,
        new_owner: S2,
    ) -> AssetResult<AssetReadable>;
}
