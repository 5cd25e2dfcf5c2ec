use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::service::asset_ledger_service::AssetLedgerService;
use crate::service::storage_world_state::StorageWorldState;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{to_binary, MessageInfo, Response};

/// A transformation of [ExecuteMsg::TransferAsset](crate::core::msg::ExecuteMsg::TransferAsset)
/// for ease of use in the underlying [transfer_asset](self::transfer_asset) function.
#[derive(Clone, PartialEq, Debug)]
pub struct TransferAssetV1 {
    pub id: String,
    pub new_owner: String,
}
impl TransferAssetV1 {
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<TransferAssetV1> {
        match msg {
            ExecuteMsg::TransferAsset { id, new_owner } => {
                TransferAssetV1 { id, new_owner }.to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::TransferAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::TransferAsset](crate::core::msg::ExecuteMsg::TransferAsset).
/// Changes only the owner of an existing asset.  The emitted event includes the owner that held
/// the asset before the transfer.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the transfer asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn transfer_asset(
    deps: DepsMutC,
    info: MessageInfo,
    msg: TransferAssetV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let (previous, asset) = AssetLedgerService::new(StorageWorldState::new(deps.storage))
        .transfer_asset_from_previous(&msg.id, msg.new_owner)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(EventType::TransferAsset, &asset)
                .set_previous_owner(previous.owner),
        )
        .set_data(to_binary(&asset)?)
        .to_ok()
}
