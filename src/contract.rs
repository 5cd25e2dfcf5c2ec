use crate::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use crate::execute::create_asset::{create_asset, CreateAssetV1};
use crate::execute::delete_asset::{delete_asset, DeleteAssetV1};
use crate::execute::init_ledger::init_ledger;
use crate::execute::transfer_asset::{transfer_asset, TransferAssetV1};
use crate::execute::update_asset::{update_asset, UpdateAssetV1};
use crate::instantiate::init_contract::init_contract;
use crate::migrate::migrate_contract::migrate_contract;
use crate::query::asset_exists::asset_exists;
use crate::query::get_all_assets::get_all_assets;
use crate::query::query_state::query_state;
use crate::query::query_version::query_version;
use crate::query::read_asset::read_asset;
use crate::util::aliases::{AssetResult, DepsC, DepsMutC, EntryPointResponse};
use crate::validation::validate_execute_msg::validate_execute_msg;
use crate::validation::validate_init_msg::validate_init_msg;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Env, MessageInfo};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    // Ensure the init message is properly formatted before doing anything
    validate_init_msg(&msg)?;
    // Execute the core instantiation code
    init_contract(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: DepsC, _env: Env, msg: QueryMsg) -> AssetResult<Binary> {
    match msg {
        QueryMsg::ReadAsset { id } => read_asset(&deps, id),
        QueryMsg::AssetExists { id } => asset_exists(&deps, id),
        QueryMsg::GetAllAssets {} => get_all_assets(&deps),
        QueryMsg::QueryState {} => query_state(&deps),
        QueryMsg::QueryVersion {} => query_version(&deps),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(deps: DepsMutC, _env: Env, info: MessageInfo, msg: ExecuteMsg) -> EntryPointResponse {
    // Ensure the execute message is properly formatted before doing anything
    validate_execute_msg(&msg)?;
    match msg {
        ExecuteMsg::InitLedger {} => init_ledger(deps, info),
        ExecuteMsg::CreateAsset { .. } => {
            create_asset(deps, info, CreateAssetV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::UpdateAsset { .. } => {
            update_asset(deps, info, UpdateAssetV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::DeleteAsset { .. } => {
            delete_asset(deps, info, DeleteAssetV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::TransferAsset { .. } => {
            transfer_asset(deps, info, TransferAssetV1::from_execute_msg(msg)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMutC, _env: Env, msg: MigrateMsg) -> EntryPointResponse {
    match msg {
        MigrateMsg::ContractUpgrade {} => migrate_contract(deps),
    }
}
