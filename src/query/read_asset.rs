use cosmwasm_std::{to_binary, Binary};

use crate::service::asset_ledger::AssetLedgerReader;
use crate::service::asset_ledger_service::AssetLedgerService;
use crate::service::storage_world_state::ReadonlyStorageWorldState;
use crate::util::aliases::{AssetResult, DepsC};
use crate::util::traits::ResultExtensions;

/// A query that fetches a single asset by its id and returns it in its
/// [readable](crate::core::types::asset_readable::AssetReadable) form.  A missing id produces an
/// [AssetNotFound](crate::core::error::ContractError::AssetNotFound) error.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `id` The unique identifier of the asset to fetch.
pub fn read_asset<S: AsRef<str>>(deps: &DepsC, id: S) -> AssetResult<Binary> {
    let asset =
        AssetLedgerService::new(ReadonlyStorageWorldState::new(deps.storage)).read_asset(id)?;
    to_binary(&asset)?.to_ok()
}
