use crate::core::msg::InitMsg;
use crate::core::state::{mark_ledger_initialized, save_state, State};
use crate::migrate::version_info::migrate_version_info;
use crate::service::asset_ledger::AssetLedger;
use crate::service::asset_ledger_service::AssetLedgerService;
use crate::service::storage_world_state::StorageWorldState;
use crate::util::aliases::{DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{to_binary, Env, MessageInfo, Response};

/// The main functionality executed when the smart contract is first instantiated.  This creates
/// the internal contract [State](crate::core::state::State) value and, when requested, writes the
/// seed assets to the world state.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `_env` An environment object provided by the cosmwasm framework.  Describes the contract's
/// details, as well as blockchain information at the time of the transaction.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` A custom instantiation message defined by this contract for creating the initial
/// configuration used by the contract.
pub fn init_contract(
    deps: DepsMutC,
    _env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    save_state(deps.storage, &State::new(&msg))?;
    // Set the version info to the default contract values on instantiation
    migrate_version_info(deps.storage)?;
    let mut response = Response::new();
    let mut attributes = EventAttributes::new(EventType::InstantiateContract);
    if msg.init_ledger {
        let seeded_assets =
            AssetLedgerService::new(StorageWorldState::new(deps.storage)).init_ledger()?;
        mark_ledger_initialized(deps.storage)?;
        attributes = attributes.set_seeded_count(seeded_assets.len());
        response = response.set_data(to_binary(&seeded_assets)?);
    }
    response.add_attributes(attributes).to_ok()
}
