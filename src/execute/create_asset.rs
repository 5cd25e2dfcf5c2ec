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

/// A transformation of [ExecuteMsg::CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset)
/// for ease of use in the underlying [create_asset](self::create_asset) function.
#[derive(Clone, PartialEq, Debug)]
pub struct CreateAssetV1 {
    pub id: String,
    pub asset_type: String,
    pub currency: String,
    pub value: u64,
    pub owner: String,
}
impl CreateAssetV1 {
    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset)
    /// variant, then an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType)
    /// error will be returned.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<CreateAssetV1> {
        match msg {
            ExecuteMsg::CreateAsset {
                id,
                asset_type,
                currency,
                value,
                owner,
            } => CreateAssetV1 {
                id,
                asset_type,
                currency,
                value,
                owner,
            }
            .to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::CreateAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset).
/// Issues a new asset to the world state.  If an asset with the same id already exists, the
/// route fails with [AssetAlreadyExists](crate::core::error::ContractError::AssetAlreadyExists),
/// which carries the existing record.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the create asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn create_asset(deps: DepsMutC, info: MessageInfo, msg: CreateAssetV1) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let asset = AssetLedgerService::new(StorageWorldState::new(deps.storage)).create_asset(
        &msg.id,
        &msg.asset_type,
        &msg.currency,
        msg.value,
        msg.owner,
    )?;
    Response::new()
        .add_attributes(EventAttributes::for_asset_event(
            EventType::CreateAsset,
            &asset,
        ))
        .set_data(to_binary(&asset)?)
        .to_ok()
}
