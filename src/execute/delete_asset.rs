use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::service::asset_ledger::AssetLedger;
use crate::service::asset_ledger_service::AssetLedgerService;
use crate::service::storage_world_state::StorageWorldState;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{to_binary, MessageInfo, Response};

/// A transformation of [ExecuteMsg::DeleteAsset](crate::core::msg::ExecuteMsg::DeleteAsset)
/// for ease of use in the underlying [delete_asset](self::delete_asset) function.
#[derive(Clone, PartialEq, Debug)]
pub struct DeleteAssetV1 {
    pub id: String,
}
impl DeleteAssetV1 {
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<DeleteAssetV1> {
        match msg {
            ExecuteMsg::DeleteAsset { id } => DeleteAssetV1 { id }.to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::DeleteAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::DeleteAsset](crate::core::msg::ExecuteMsg::DeleteAsset).
/// Removes the asset from the world state and returns the record as it stood before removal.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the delete asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn delete_asset(deps: DepsMutC, info: MessageInfo, msg: DeleteAssetV1) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let asset = AssetLedgerService::new(StorageWorldState::new(deps.storage)).delete_asset(&msg.id)?;
    Response::new()
        .add_attributes(EventAttributes::for_asset_event(
            EventType::DeleteAsset,
            &asset,
        ))
        .set_data(to_binary(&asset)?)
        .to_ok()
}
