use cosmwasm_std::{to_binary, Binary};

use crate::service::asset_ledger::AssetLedgerReader;
use crate::service::asset_ledger_service::AssetLedgerService;
use crate::service::storage_world_state::ReadonlyStorageWorldState;
use crate::util::aliases::{AssetResult, DepsC};
use crate::util::traits::ResultExtensions;

/// A query that responds with a boolean indicating whether any value is stored under the given id.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `id` The unique identifier to check for.
pub fn asset_exists<S: AsRef<str>>(deps: &DepsC, id: S) -> AssetResult<Binary> {
    let exists =
        AssetLedgerService::new(ReadonlyStorageWorldState::new(deps.storage)).asset_exists(id)?;
    to_binary(&exists)?.to_ok()
}
