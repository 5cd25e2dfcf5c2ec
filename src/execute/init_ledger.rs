use crate::core::state::mark_ledger_initialized;
use crate::service::asset_ledger::AssetLedger;
use crate::service::asset_ledger_service::AssetLedgerService;
use crate::service::storage_world_state::StorageWorldState;
use crate::util::aliases::{DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{to_binary, MessageInfo, Response};

/// Route implementation for [ExecuteMsg::InitLedger](crate::core::msg::ExecuteMsg::InitLedger).
/// Writes every seed asset to the world state, overwriting any record that shares a seed id.
/// Running it again is harmless and always leaves the same seed records in place.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
pub fn init_ledger(deps: DepsMutC, info: MessageInfo) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let seeded_assets =
        AssetLedgerService::new(StorageWorldState::new(deps.storage)).init_ledger()?;
    mark_ledger_initialized(deps.storage)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::InitLedger).set_seeded_count(seeded_assets.len()),
        )
        .set_data(to_binary(&seeded_assets)?)
        .to_ok()
}
