use cosmwasm_std::{to_binary, Binary};

use crate::service::asset_ledger::AssetLedgerReader;
use crate::service::asset_ledger_service::AssetLedgerService;
use crate::service::storage_world_state::ReadonlyStorageWorldState;
use crate::util::aliases::{AssetResult, DepsC};
use crate::util::traits::ResultExtensions;

/// A query that lists every bank asset currently held in the world state, in ascending id order.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
pub fn get_all_assets(deps: &DepsC) -> AssetResult<Binary> {
    let assets =
        AssetLedgerService::new(ReadonlyStorageWorldState::new(deps.storage)).get_all_assets()?;
    to_binary(&assets)?.to_ok()
}
