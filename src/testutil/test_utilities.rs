use cosmwasm_std::{
    from_binary,
    testing::{mock_env, mock_info, MockApi, MockStorage},
    Coin, Env, MessageInfo, OwnedDeps, Response,
};
use provwasm_mocks::ProvenanceMockQuerier;
use provwasm_std::{ProvenanceMsg, ProvenanceQuery};

use crate::{
    contract::{execute, instantiate},
    core::{
        msg::{ExecuteMsg, InitMsg},
        types::asset_readable::AssetReadable,
    },
    util::aliases::{DepsMutC, EntryPointResponse},
};

use super::test_constants::{
    DEFAULT_ASSET_ID, DEFAULT_ASSET_TYPE, DEFAULT_ASSET_VALUE, DEFAULT_CURRENCY,
    DEFAULT_LEDGER_NAME, DEFAULT_OWNER, DEFAULT_SENDER_ADDRESS,
};

pub type MockOwnedDeps = OwnedDeps<MockStorage, MockApi, ProvenanceMockQuerier, ProvenanceQuery>;

pub fn get_default_asset_readable() -> AssetReadable {
    AssetReadable {
        id: DEFAULT_ASSET_ID.to_string(),
        asset_type: DEFAULT_ASSET_TYPE.to_string(),
        currency: DEFAULT_CURRENCY.to_string(),
        value: DEFAULT_ASSET_VALUE,
        owner: DEFAULT_OWNER.to_string(),
    }
}

pub fn get_default_create_asset_msg() -> ExecuteMsg {
    ExecuteMsg::CreateAsset {
        id: DEFAULT_ASSET_ID.to_string(),
        asset_type: DEFAULT_ASSET_TYPE.to_string(),
        currency: DEFAULT_CURRENCY.to_string(),
        value: DEFAULT_ASSET_VALUE,
        owner: DEFAULT_OWNER.to_string(),
    }
}

pub struct InstArgs {
    pub env: Env,
    pub info: MessageInfo,
    pub ledger_name: String,
    pub init_ledger: bool,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            env: mock_env(),
            info: empty_mock_info(DEFAULT_SENDER_ADDRESS),
            ledger_name: DEFAULT_LEDGER_NAME.into(),
            // Seeding is opt-in so that tests start from an empty world state unless they ask
            // for the seed assets
            init_ledger: false,
        }
    }
}

pub fn test_instantiate(deps: DepsMutC, args: InstArgs) -> EntryPointResponse {
    instantiate(
        deps,
        args.env,
        args.info,
        InitMsg {
            ledger_name: args.ledger_name,
            init_ledger: args.init_ledger,
        },
    )
}

pub fn test_instantiate_success(deps: DepsMutC, args: InstArgs) -> Response<ProvenanceMsg> {
    test_instantiate(deps, args).expect("expected instantiation to succeed")
}

/// Runs the default create asset message through the execute entrypoint and returns the
/// readable record placed in the response data.
pub fn test_create_default_asset(deps: DepsMutC) -> AssetReadable {
    let response = execute(
        deps,
        mock_env(),
        empty_mock_info(DEFAULT_SENDER_ADDRESS),
        get_default_create_asset_msg(),
    )
    .expect("expected the default asset to be created");
    asset_from_response(&response)
}

pub fn asset_from_response<T>(response: &Response<T>) -> AssetReadable {
    from_binary(
        response
            .data
            .as_ref()
            .expect("expected the response to include data"),
    )
    .expect("expected the response data to deserialize as an asset")
}

pub fn empty_mock_info<S: Into<String>>(sender: S) -> MessageInfo {
    mock_info(&sender.into(), &[])
}

pub fn mock_info_with_funds<S: Into<String>>(sender: S, funds: &[Coin]) -> MessageInfo {
    mock_info(&sender.into(), funds)
}

pub fn single_attribute_for_key<'a, T>(response: &'a Response<T>, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}
